//! Arithmetic on 8-bit values, computed by simulating gate-level circuits
//!
//! Every operation builds a fresh circuit, drives its inputs and reads back its outputs.
//!
//! ```
//! use gatesim::arith::{add_carry, subtract};
//! let r = add_carry("11111111", "00000001").unwrap();
//! assert!(r.carry);
//! assert_eq!(r.sum.to_string(), "00000000");
//!
//! let r = subtract("10010101", "11000110").unwrap();
//! assert_eq!(r.sum.to_string(), "11001111");
//! ```

use std::fmt;

use tracing::debug;

use crate::bits::{to_bit_string, Byte, BYTE_WIDTH};
use crate::circuit::generators::{adder, buffer};
use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::{Circuit, WireId};

/// Result of an addition: the carry out of the last stage and the sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AddResult {
    /// Carry out of the most significant stage
    pub carry: bool,
    /// Sum, modulo 256
    pub sum: Byte,
}

impl AddResult {
    /// Carry followed by the sum bits, most significant first
    pub fn to_bits(&self) -> [bool; BYTE_WIDTH + 1] {
        let mut ret = [false; BYTE_WIDTH + 1];
        ret[0] = self.carry;
        ret[1..].copy_from_slice(&self.sum.bits());
        ret
    }
}

impl fmt::Display for AddResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_bit_string(self.to_bits()))
    }
}

/// Arithmetic unit: runs each operation on a circuit built with its settings
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu {
    config: SimConfig,
}

impl Alu {
    /// Create an arithmetic unit with the given settings
    pub fn new(config: SimConfig) -> Alu {
        Alu { config }
    }

    /// Settings used for the circuits
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Ripple-carry addition, without carry in
    pub fn add_carry(&self, a: Byte, b: Byte) -> Result<AddResult> {
        debug!(%a, %b, "add");
        let mut c = Circuit::with_config(self.config);
        let rc = adder::ripple_carry(&mut c, "add", BYTE_WIDTH);
        c.set(rc.carry_in(), false)?;
        for (f, (x, y)) in rc.stages.iter().zip(a.lsb_first().zip(b.lsb_first())) {
            c.set(f.a, x)?;
            c.set(f.b, y)?;
        }
        let ret = AddResult {
            carry: read(&c, rc.carry_out())?,
            sum: read_byte(&c, rc.stages.iter().map(|f| f.s))?,
        };
        debug!(result = %ret, evaluations = c.nb_evaluations(), "add done");
        Ok(ret)
    }

    /// Add one
    pub fn increment(&self, a: Byte) -> Result<AddResult> {
        self.add_carry(a, Byte::from(1))
    }

    /// Invert every bit
    pub fn complement_one(&self, a: Byte) -> Result<Byte> {
        debug!(%a, "complement");
        let mut c = Circuit::with_config(self.config);
        let bank = buffer::inverter_bank(&mut c, "complement", BYTE_WIDTH);
        for (inv, x) in bank.iter().zip(a.lsb_first()) {
            c.set(inv.a, x)?;
        }
        read_byte(&c, bank.iter().map(|inv| inv.b))
    }

    /// Two's complement negation: invert then add one
    ///
    /// The carry is set only for zero, whose negation overflows.
    pub fn negate(&self, a: Byte) -> Result<AddResult> {
        let inverted = self.complement_one(a)?;
        self.increment(inverted)
    }

    /// Route every bit through two inverters in series
    pub fn pass_through(&self, a: Byte) -> Result<Byte> {
        debug!(%a, "pass through");
        let mut c = Circuit::with_config(self.config);
        let bank = buffer::double_inverter_bank(&mut c, "pass", BYTE_WIDTH);
        for (d, x) in bank.iter().zip(a.lsb_first()) {
            c.set(d.input(), x)?;
        }
        read_byte(&c, bank.iter().map(|d| d.output()))
    }

    /// Subtraction, as the addition of the negation
    ///
    /// The carry is set when `b` is not zero and no borrow occurs.
    pub fn subtract(&self, a: Byte, b: Byte) -> Result<AddResult> {
        let neg = self.negate(b)?;
        self.add_carry(a, neg.sum)
    }
}

/// Read a settled output; an undriven wire is an error rather than a 0
fn read(c: &Circuit, w: WireId) -> Result<bool> {
    c.value(w).to_bool().ok_or_else(|| Error::Undriven {
        wire: c.wire_path(w),
    })
}

/// Read settled outputs, least significant bit first
fn read_byte(c: &Circuit, wires: impl Iterator<Item = WireId>) -> Result<Byte> {
    let bits = wires.map(|w| read(c, w)).collect::<Result<Vec<bool>>>()?;
    Ok(Byte::from_lsb_first(bits))
}

/// Add two 8-bit strings
pub fn add_carry(a: &str, b: &str) -> Result<AddResult> {
    Alu::default().add_carry(a.parse()?, b.parse()?)
}

/// Add one to an 8-bit string
pub fn increment(a: &str) -> Result<AddResult> {
    Alu::default().increment(a.parse()?)
}

/// Invert every bit of an 8-bit string
pub fn complement_one(a: &str) -> Result<Byte> {
    Alu::default().complement_one(a.parse()?)
}

/// Two's complement negation of an 8-bit string
pub fn negate(a: &str) -> Result<AddResult> {
    Alu::default().negate(a.parse()?)
}

/// Copy an 8-bit string through double inverters
pub fn pass_through(a: &str) -> Result<Byte> {
    Alu::default().pass_through(a.parse()?)
}

/// Subtract two 8-bit strings
pub fn subtract(a: &str, b: &str) -> Result<AddResult> {
    Alu::default().subtract(a.parse()?, b.parse()?)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_add_carry() {
        let r = add_carry("00000001", "00000001").unwrap();
        assert!(!r.carry);
        assert_eq!(r.sum.to_string(), "00000010");

        let r = add_carry("11111111", "00000001").unwrap();
        assert!(r.carry);
        assert_eq!(r.sum.to_string(), "00000000");
        assert_eq!(r.to_string(), "100000000");
        assert_eq!(r.to_bits().len(), 9);
    }

    #[test]
    fn test_increment() {
        let alu = Alu::default();
        for x in 0..=255u8 {
            let r = alu.increment(Byte::from(x)).unwrap();
            assert_eq!(u8::from(r.sum), x.wrapping_add(1));
            assert_eq!(r.carry, x == 255);
        }
    }

    #[test]
    fn test_complement_involution() {
        let alu = Alu::default();
        for x in 0..=255u8 {
            let once = alu.complement_one(Byte::from(x)).unwrap();
            assert_eq!(u8::from(once), !x);
            let twice = alu.complement_one(once).unwrap();
            assert_eq!(u8::from(twice), x);
        }
    }

    #[test]
    fn test_negate() {
        let alu = Alu::default();
        for x in 0..=255u8 {
            let once = alu.negate(Byte::from(x)).unwrap();
            assert_eq!(u8::from(once.sum), x.wrapping_neg());
            assert_eq!(once.carry, x == 0);
            let twice = alu.negate(once.sum).unwrap();
            assert_eq!(u8::from(twice.sum), x);
        }
        assert_eq!(negate("11000110").unwrap().to_string(), "000111010");
    }

    #[test]
    fn test_pass_through() {
        let alu = Alu::default();
        for x in 0..=255u8 {
            assert_eq!(alu.pass_through(Byte::from(x)).unwrap(), Byte::from(x));
        }
        assert_eq!(pass_through("11000110").unwrap().to_string(), "11000110");
    }

    #[test]
    fn test_subtract() {
        let samples = [
            (0u8, 0u8),
            (0, 1),
            (1, 0),
            (255, 255),
            (0, 255),
            (255, 0),
            (3, 5),
            (128, 1),
            (0x95, 0xc6),
        ];
        let alu = Alu::default();
        for (a, b) in samples {
            let r = alu.subtract(Byte::from(a), Byte::from(b)).unwrap();
            assert_eq!(u8::from(r.sum), a.wrapping_sub(b));
            let back = alu.add_carry(r.sum, Byte::from(b)).unwrap();
            assert_eq!(u8::from(back.sum), a);
        }
        assert_eq!(
            subtract("10010101", "11000110").unwrap().to_string(),
            "011001111"
        );
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            add_carry("0000001", "00000001"),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(
            subtract("00000001", "0000000x"),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(complement_one(""), Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn test_read_undriven() {
        let mut c = Circuit::new();
        let rc = adder::ripple_carry(&mut c, "add", BYTE_WIDTH);
        assert_eq!(
            read(&c, rc.carry_out()),
            Err(Error::Undriven {
                wire: "add/F7.Cout".to_owned()
            })
        );
        assert!(read_byte(&c, rc.stages.iter().map(|f| f.s)).is_err());

        // Settled once every input is driven
        c.set(rc.carry_in(), false).unwrap();
        for f in &rc.stages {
            c.set(f.a, true).unwrap();
            c.set(f.b, false).unwrap();
        }
        assert_eq!(read(&c, rc.carry_out()), Ok(false));
        assert_eq!(
            read_byte(&c, rc.stages.iter().map(|f| f.s)),
            Ok(Byte::from(255))
        );
    }

    #[test]
    fn test_monitor() {
        // Monitoring only adds logging, never changes results
        let alu = Alu::new(SimConfig::default().with_monitor(true));
        let r = alu.add_carry(Byte::from(100), Byte::from(27)).unwrap();
        assert_eq!(u8::from(r.sum), 127);
    }

    proptest! {
        #[test]
        fn add_matches_u8(a in any::<u8>(), b in any::<u8>()) {
            let r = Alu::default().add_carry(Byte::from(a), Byte::from(b)).unwrap();
            let (sum, carry) = a.overflowing_add(b);
            prop_assert_eq!(u8::from(r.sum), sum);
            prop_assert_eq!(r.carry, carry);
        }

        #[test]
        fn subtract_inverts_add(a in any::<u8>(), b in any::<u8>()) {
            let alu = Alu::default();
            let r = alu.subtract(Byte::from(a), Byte::from(b)).unwrap();
            let back = alu.add_carry(r.sum, Byte::from(b)).unwrap();
            prop_assert_eq!(u8::from(back.sum), a);
            prop_assert_eq!(r.carry, b != 0 && a >= b);
        }
    }
}
