use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Logic value carried by a wire
///
/// May be 0, 1 or x (never driven).
/// Operators follow three-valued logic: an unset input only propagates when
/// the other inputs do not decide the result.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub enum Value {
    /// Never driven
    #[default]
    Unset,
    /// Logic 0
    Zero,
    /// Logic 1
    One,
}

impl Value {
    /// Returns true if the value has been driven
    pub fn is_set(&self) -> bool {
        *self != Value::Unset
    }

    /// Obtain the boolean value, if driven
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Value::Unset => None,
            Value::Zero => Some(false),
            Value::One => Some(true),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        if b {
            Value::One
        } else {
            Value::Zero
        }
    }
}

impl Not for Value {
    type Output = Value;
    fn not(self) -> Value {
        match self {
            Value::Unset => Value::Unset,
            Value::Zero => Value::One,
            Value::One => Value::Zero,
        }
    }
}

impl BitAnd for Value {
    type Output = Value;
    fn bitand(self, rhs: Value) -> Value {
        use Value::*;
        match (self, rhs) {
            (Zero, _) | (_, Zero) => Zero,
            (One, One) => One,
            _ => Unset,
        }
    }
}

impl BitOr for Value {
    type Output = Value;
    fn bitor(self, rhs: Value) -> Value {
        use Value::*;
        match (self, rhs) {
            (One, _) | (_, One) => One,
            (Zero, Zero) => Zero,
            _ => Unset,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unset => write!(f, "x"),
            Value::Zero => write!(f, "0"),
            Value::One => write!(f, "1"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
