use std::fmt;

use crate::circuit::value::Value;
use crate::circuit::wire::WireId;

/// Handle to a component in a [`Circuit`](crate::Circuit)
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ComponentId(u32);

impl ComponentId {
    pub(crate) fn from_ind(i: usize) -> ComponentId {
        ComponentId(i as u32)
    }

    /// Obtain the index of the component in the circuit
    pub fn ind(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Basic types of 2-input gates
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BinaryType {
    /// 2-input And gate
    And,
    /// 2-input Or gate
    Or,
}

/// Kinds of components
///
/// Primitive kinds compute their outputs directly from their inputs.
/// Composite kinds have no logic of their own: their boundary wires are
/// connected to the children they own, which do the work.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ComponentKind {
    /// Inverter. Input A, output B
    Not,
    /// 2-input gate. Inputs A and B, output C
    Binary(BinaryType),
    /// Xor gate built from inverters, And and Or gates. Inputs A and B, output C
    Xor,
    /// One bit adder. Inputs A and B, outputs S and C
    HalfAdder,
    /// One bit adder with carry. Inputs A, B and Cin, outputs S and Cout
    FullAdder,
    /// Container without logic, used to group the stages of a larger circuit
    Group,
}

impl ComponentKind {
    /// Returns whether the kind is computed directly rather than through children
    pub fn is_primitive(&self) -> bool {
        matches!(self, ComponentKind::Not | ComponentKind::Binary(_))
    }

    /// Number of inputs and outputs of a primitive kind
    pub fn arity(&self) -> Option<(usize, usize)> {
        match self {
            ComponentKind::Not => Some((1, 1)),
            ComponentKind::Binary(_) => Some((2, 1)),
            _ => None,
        }
    }

    /// Compute the output values from the input values
    ///
    /// Composite kinds have no direct evaluation and return no value.
    pub(crate) fn evaluate(&self, inputs: &[Value]) -> Option<Value> {
        match self {
            ComponentKind::Not => Some(!inputs[0]),
            ComponentKind::Binary(BinaryType::And) => Some(inputs[0] & inputs[1]),
            ComponentKind::Binary(BinaryType::Or) => Some(inputs[0] | inputs[1]),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Not => write!(f, "Not"),
            ComponentKind::Binary(BinaryType::And) => write!(f, "And"),
            ComponentKind::Binary(BinaryType::Or) => write!(f, "Or"),
            ComponentKind::Xor => write!(f, "Xor"),
            ComponentKind::HalfAdder => write!(f, "HalfAdder"),
            ComponentKind::FullAdder => write!(f, "FullAdder"),
            ComponentKind::Group => write!(f, "Group"),
        }
    }
}

/// A component: named inputs and outputs, and the children it owns
#[derive(Debug, Clone)]
pub struct Component {
    pub(crate) name: String,
    pub(crate) kind: ComponentKind,
    pub(crate) parent: Option<ComponentId>,
    pub(crate) inputs: Vec<WireId>,
    pub(crate) outputs: Vec<WireId>,
    pub(crate) children: Vec<ComponentId>,
}

impl Component {
    /// Name of the component within its parent
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of the component
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Component owning this one, if any
    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    /// Input wires, in declaration order
    pub fn inputs(&self) -> &[WireId] {
        &self.inputs
    }

    /// Output wires, in declaration order
    pub fn outputs(&self) -> &[WireId] {
        &self.outputs
    }

    /// Components owned by this one
    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }
}
