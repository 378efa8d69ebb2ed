//! Circuit generators for multi-bit operations
//!
//! Stages are ordered from the least significant bit.

/// Adder generators
pub mod adder {
    use tracing::debug;

    use crate::circuit::component::{ComponentId, ComponentKind};
    use crate::circuit::gates::FullAdder;
    use crate::Circuit;

    /// A ripple-carry adder: a chain of full adders
    #[derive(Debug, Clone)]
    pub struct RippleCarry {
        /// Container of the stages
        pub id: ComponentId,
        /// Full adders, least significant first
        pub stages: Vec<FullAdder>,
    }

    impl RippleCarry {
        /// Number of bits
        pub fn width(&self) -> usize {
            self.stages.len()
        }

        /// Carry into the least significant stage
        ///
        /// Panics if the adder has no stage.
        pub fn carry_in(&self) -> crate::WireId {
            self.stages[0].cin
        }

        /// Carry out of the most significant stage
        ///
        /// Panics if the adder has no stage.
        pub fn carry_out(&self) -> crate::WireId {
            self.stages[self.stages.len() - 1].cout
        }
    }

    /// A simple and slow ripple-carry adder
    ///
    /// Stage `i` is named `F{i}`; its carry out drives the carry in of stage `i + 1`.
    pub fn ripple_carry(c: &mut Circuit, name: &str, width: usize) -> RippleCarry {
        let id = c.add_component(name, ComponentKind::Group, None);
        let mut stages: Vec<FullAdder> = Vec::with_capacity(width);
        for i in 0..width {
            let f = c.add_full_adder(&format!("F{i}"), Some(id));
            if let Some(prev) = stages.last() {
                c.connect(prev.cout, f.cin);
            }
            stages.push(f);
        }
        debug!(
            adder = name,
            width,
            components = c.nb_components(),
            wires = c.nb_wires(),
            "built ripple-carry adder"
        );
        RippleCarry { id, stages }
    }
}

/// Bitwise inverter generators
pub mod buffer {
    use crate::circuit::component::{ComponentId, ComponentKind};
    use crate::circuit::gates::Inverter;
    use crate::{Circuit, WireId};

    /// Independent inverters, one per bit
    pub fn inverter_bank(c: &mut Circuit, name: &str, width: usize) -> Vec<Inverter> {
        let id = c.add_component(name, ComponentKind::Group, None);
        (0..width)
            .map(|i| c.add_not(&format!("F{i}"), Some(id)))
            .collect()
    }

    /// Two inverters in series for one bit
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DoubleInverter {
        /// Container of the two inverters
        pub id: ComponentId,
        /// First inverter
        pub first: Inverter,
        /// Second inverter, driven by the first
        pub second: Inverter,
    }

    impl DoubleInverter {
        /// Input of the chain
        pub fn input(&self) -> WireId {
            self.first.a
        }

        /// Output of the chain, equal to the input
        pub fn output(&self) -> WireId {
            self.second.b
        }
    }

    /// Chains of two inverters, one per bit
    pub fn double_inverter_bank(c: &mut Circuit, name: &str, width: usize) -> Vec<DoubleInverter> {
        let bank = c.add_component(name, ComponentKind::Group, None);
        (0..width)
            .map(|i| {
                let id = c.add_component(&format!("F{i}"), ComponentKind::Group, Some(bank));
                let first = c.add_not("I1", Some(id));
                let second = c.add_not("I2", Some(id));
                c.connect(first.b, second.a);
                DoubleInverter { id, first, second }
            })
            .collect()
    }
}
