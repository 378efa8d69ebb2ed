//! Gate library: primitive gates and the composites built from them
//!
//! Each builder adds the component, its wires and, for composites, its
//! children to the circuit, and returns a handle on the boundary wires.
//!
//! ```
//! # use gatesim::{Circuit, Value};
//! let mut circuit = Circuit::new();
//! let ha = circuit.add_half_adder("H1", None);
//! circuit.set(ha.a, true).unwrap();
//! circuit.set(ha.b, true).unwrap();
//! assert_eq!(circuit.value(ha.s), Value::Zero);
//! assert_eq!(circuit.value(ha.c), Value::One);
//! ```

use crate::circuit::component::{BinaryType, ComponentId, ComponentKind};
use crate::circuit::wire::WireId;
use crate::Circuit;

/// Inverter: input A, output B
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inverter {
    /// Component handle
    pub id: ComponentId,
    /// Input
    pub a: WireId,
    /// Output, !A
    pub b: WireId,
}

/// Two-input gate: inputs A and B, output C
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate2 {
    /// Component handle
    pub id: ComponentId,
    /// First input
    pub a: WireId,
    /// Second input
    pub b: WireId,
    /// Output
    pub c: WireId,
}

/// One bit adder: inputs A and B, outputs S (sum) and C (carry)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfAdder {
    /// Component handle
    pub id: ComponentId,
    /// First input
    pub a: WireId,
    /// Second input
    pub b: WireId,
    /// Sum, A ^ B
    pub s: WireId,
    /// Carry, A & B
    pub c: WireId,
}

/// One bit adder with carry in: inputs A, B and Cin, outputs S and Cout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullAdder {
    /// Component handle
    pub id: ComponentId,
    /// First input
    pub a: WireId,
    /// Second input
    pub b: WireId,
    /// Carry in
    pub cin: WireId,
    /// Sum
    pub s: WireId,
    /// Carry out
    pub cout: WireId,
}

impl Circuit {
    /// Create an inverter
    pub fn add_not(&mut self, name: &str, parent: Option<ComponentId>) -> Inverter {
        let id = self.add_component(name, ComponentKind::Not, parent);
        let a = self.add_input(id, "A");
        let b = self.add_output(id, "B");
        Inverter { id, a, b }
    }

    /// Create a two-input gate of the given type
    pub fn add_gate2(&mut self, name: &str, tp: BinaryType, parent: Option<ComponentId>) -> Gate2 {
        self.add_two_input_shape(name, ComponentKind::Binary(tp), parent)
    }

    /// Create an And2 gate
    pub fn add_and(&mut self, name: &str, parent: Option<ComponentId>) -> Gate2 {
        self.add_gate2(name, BinaryType::And, parent)
    }

    /// Create an Or2 gate
    pub fn add_or(&mut self, name: &str, parent: Option<ComponentId>) -> Gate2 {
        self.add_gate2(name, BinaryType::Or, parent)
    }

    fn add_two_input_shape(
        &mut self,
        name: &str,
        kind: ComponentKind,
        parent: Option<ComponentId>,
    ) -> Gate2 {
        let id = self.add_component(name, kind, parent);
        let a = self.add_input(id, "A");
        let b = self.add_input(id, "B");
        let c = self.add_output(id, "C");
        Gate2 { id, a, b, c }
    }

    /// Create a Xor2 gate, as (A & !B) | (!A & B)
    pub fn add_xor(&mut self, name: &str, parent: Option<ComponentId>) -> Gate2 {
        let x = self.add_two_input_shape(name, ComponentKind::Xor, parent);
        let a1 = self.add_and("A1", Some(x.id));
        let a2 = self.add_and("A2", Some(x.id));
        let i1 = self.add_not("I1", Some(x.id));
        let i2 = self.add_not("I2", Some(x.id));
        let o1 = self.add_or("O1", Some(x.id));
        self.connect_all(x.a, &[a1.a, i2.a]);
        self.connect_all(x.b, &[i1.a, a2.a]);
        self.connect(i1.b, a1.b);
        self.connect(i2.b, a2.b);
        self.connect(a1.c, o1.a);
        self.connect(a2.c, o1.b);
        self.connect(o1.c, x.c);
        x
    }

    /// Create a half adder from a Xor and an And
    pub fn add_half_adder(&mut self, name: &str, parent: Option<ComponentId>) -> HalfAdder {
        let id = self.add_component(name, ComponentKind::HalfAdder, parent);
        let a = self.add_input(id, "A");
        let b = self.add_input(id, "B");
        let s = self.add_output(id, "S");
        let c = self.add_output(id, "C");
        let x1 = self.add_xor("X1", Some(id));
        let a1 = self.add_and("A1", Some(id));
        self.connect_all(a, &[x1.a, a1.a]);
        self.connect_all(b, &[x1.b, a1.b]);
        self.connect(x1.c, s);
        self.connect(a1.c, c);
        HalfAdder { id, a, b, s, c }
    }

    /// Create a full adder from two half adders and an Or
    ///
    /// The boundary wires are observed if the circuit is configured to monitor.
    pub fn add_full_adder(&mut self, name: &str, parent: Option<ComponentId>) -> FullAdder {
        let id = self.add_component(name, ComponentKind::FullAdder, parent);
        let a = self.add_input(id, "A");
        let b = self.add_input(id, "B");
        let cin = self.add_input(id, "Cin");
        let s = self.add_output(id, "S");
        let cout = self.add_output(id, "Cout");
        let h1 = self.add_half_adder("H1", Some(id));
        let h2 = self.add_half_adder("H2", Some(id));
        let o1 = self.add_or("O1", Some(id));
        self.connect(a, h1.a);
        self.connect(b, h1.b);
        self.connect(cin, h2.a);
        self.connect(h1.s, h2.b);
        self.connect(h1.c, o1.b);
        self.connect(h2.c, o1.a);
        self.connect(h2.s, s);
        self.connect(o1.c, cout);
        if self.config().monitor {
            for w in [a, b, cin, s, cout] {
                self.observe(w);
            }
        }
        FullAdder {
            id,
            a,
            b,
            cin,
            s,
            cout,
        }
    }
}
