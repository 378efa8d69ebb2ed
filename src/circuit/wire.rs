use std::fmt;

use crate::circuit::component::ComponentId;
use crate::circuit::value::Value;

/// Handle to a wire in a [`Circuit`](crate::Circuit)
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct WireId(u32);

impl WireId {
    pub(crate) fn from_ind(i: usize) -> WireId {
        WireId(i as u32)
    }

    /// Obtain the index of the wire in the circuit
    pub fn ind(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl fmt::Debug for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A wire, carrying a value to the wires it drives
///
/// The owner and the name are fixed when the wire is created.
/// The fan-out only grows, during circuit assembly.
#[derive(Debug, Clone)]
pub struct Wire {
    pub(crate) value: Value,
    pub(crate) owner: ComponentId,
    pub(crate) name: &'static str,
    pub(crate) triggers: bool,
    pub(crate) observe: bool,
    pub(crate) fanout: Vec<WireId>,
}

impl Wire {
    pub(crate) fn new(owner: ComponentId, name: &'static str, triggers: bool) -> Wire {
        Wire {
            value: Value::Unset,
            owner,
            name,
            triggers,
            observe: false,
            fanout: Vec::new(),
        }
    }

    /// Current value
    pub fn value(&self) -> Value {
        self.value
    }

    /// Component owning the wire
    pub fn owner(&self) -> ComponentId {
        self.owner
    }

    /// Name of the wire within its owner
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a change on the wire runs the owner's evaluation
    pub fn triggers_evaluation(&self) -> bool {
        self.triggers
    }

    /// Whether changes on the wire are reported to the observer
    pub fn is_observed(&self) -> bool {
        self.observe
    }

    /// Wires driven by this one, in propagation order
    pub fn fanout(&self) -> &[WireId] {
        &self.fanout
    }
}
