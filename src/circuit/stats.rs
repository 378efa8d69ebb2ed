//! Compute circuit statistics
//!
//! ```
//! # use gatesim::Circuit;
//! use gatesim::circuit::stats::stats;
//! let mut circuit = Circuit::new();
//! circuit.add_xor("X1", None);
//! let stats = stats(&circuit);
//!
//! // A Xor is made of 5 primitive gates
//! assert_eq!(stats.nb_primitives(), 5);
//!
//! // Show the statistics
//! println!("{}", stats);
//! ```

use std::fmt;

use crate::circuit::component::{BinaryType, ComponentKind};
use crate::Circuit;

/// Number of components and wires in a circuit
#[derive(Clone, Debug, Default)]
pub struct CircuitStats {
    /// Number of wires
    pub nb_wires: usize,
    /// Number of fan-out connections between wires
    pub nb_connections: usize,
    /// Largest fan-out of a single wire
    pub max_fanout: usize,
    /// Number of wires reported to the observer
    pub nb_observed: usize,
    /// Number of Not
    pub nb_not: usize,
    /// Number of And2
    pub nb_and: usize,
    /// Number of Or2
    pub nb_or: usize,
    /// Number of Xor
    pub nb_xor: usize,
    /// Number of half adders
    pub nb_half_adder: usize,
    /// Number of full adders
    pub nb_full_adder: usize,
    /// Number of plain containers
    pub nb_group: usize,
}

impl CircuitStats {
    /// Number of gates evaluated directly
    pub fn nb_primitives(&self) -> usize {
        self.nb_not + self.nb_and + self.nb_or
    }

    /// Total number of components, including composites
    pub fn nb_components(&self) -> usize {
        self.nb_primitives()
            + self.nb_xor
            + self.nb_half_adder
            + self.nb_full_adder
            + self.nb_group
    }
}

impl fmt::Display for CircuitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stats:")?;
        writeln!(f, "  Components: {}", self.nb_components())?;
        writeln!(f, "  Primitives: {}", self.nb_primitives())?;
        if self.nb_not != 0 {
            writeln!(f, "      Not: {}", self.nb_not)?;
        }
        if self.nb_and != 0 {
            writeln!(f, "      And: {}", self.nb_and)?;
        }
        if self.nb_or != 0 {
            writeln!(f, "      Or: {}", self.nb_or)?;
        }
        if self.nb_xor != 0 {
            writeln!(f, "  Xor: {}", self.nb_xor)?;
        }
        if self.nb_half_adder != 0 {
            writeln!(f, "  HalfAdder: {}", self.nb_half_adder)?;
        }
        if self.nb_full_adder != 0 {
            writeln!(f, "  FullAdder: {}", self.nb_full_adder)?;
        }
        if self.nb_group != 0 {
            writeln!(f, "  Group: {}", self.nb_group)?;
        }
        writeln!(f, "  Wires: {}", self.nb_wires)?;
        writeln!(f, "      connections: {}", self.nb_connections)?;
        writeln!(f, "      max fanout: {}", self.max_fanout)?;
        if self.nb_observed != 0 {
            writeln!(f, "      observed: {}", self.nb_observed)?;
        }
        fmt::Result::Ok(())
    }
}

/// Compute the statistics of the circuit
pub fn stats(c: &Circuit) -> CircuitStats {
    use ComponentKind::*;
    let mut ret = CircuitStats {
        nb_wires: c.nb_wires(),
        ..CircuitStats::default()
    };
    for w in c.wire_ids() {
        let wire = c.wire(w);
        ret.nb_connections += wire.fanout().len();
        ret.max_fanout = ret.max_fanout.max(wire.fanout().len());
        if wire.is_observed() {
            ret.nb_observed += 1;
        }
    }
    for i in c.component_ids() {
        match c.component(i).kind() {
            Not => ret.nb_not += 1,
            Binary(BinaryType::And) => ret.nb_and += 1,
            Binary(BinaryType::Or) => ret.nb_or += 1,
            Xor => ret.nb_xor += 1,
            HalfAdder => ret.nb_half_adder += 1,
            FullAdder => ret.nb_full_adder += 1,
            Group => ret.nb_group += 1,
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::stats;
    use crate::Circuit;

    #[test]
    fn test_half_adder() {
        let mut c = Circuit::new();
        c.add_half_adder("H1", None);
        let st = stats(&c);
        assert_eq!(st.nb_components(), 8);
        assert_eq!(st.nb_primitives(), 6);
        assert_eq!(st.nb_half_adder, 1);
        assert_eq!(st.nb_xor, 1);
        assert_eq!(st.nb_wires, c.nb_wires());
        assert_eq!(st.nb_components(), c.nb_components());
        // A and B of the half adder, then A and B of the Xor
        assert_eq!(st.max_fanout, 2);
        assert_eq!(st.nb_observed, 0);
    }

    #[test]
    fn test_display() {
        let mut c = Circuit::new();
        c.add_not("I1", None);
        let s = stats(&c).to_string();
        assert!(s.contains("Components: 1"));
        assert!(s.contains("Not: 1"));
        assert!(!s.contains("Xor"));
    }
}
