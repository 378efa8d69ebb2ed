use std::fmt;

use itertools::Itertools;
use tracing::{info, trace, warn};

use crate::circuit::component::{Component, ComponentId, ComponentKind};
use crate::circuit::value::Value;
use crate::circuit::wire::{Wire, WireId};
use crate::config::SimConfig;
use crate::error::{Error, Result};

/// A change on an observed wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Name of the component owning the wire, such as `F3`
    pub owner: String,
    /// Hierarchical name of the owner, such as `add/F3`
    pub component: String,
    /// Name of the wire
    pub wire: &'static str,
    /// New value
    pub value: Value,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} set to {}", self.owner, self.wire, self.value)
    }
}

/// Representation of a circuit as an arena of components and wires
///
/// Components and wires are referenced by index handles. Wires are created
/// together with their owner and connected during assembly; afterwards, only
/// their values change.
///
/// Setting a wire propagates synchronously: the owner is evaluated if the wire
/// triggers evaluation, then the value is copied to every wire in its fan-out,
/// depth-first. Setting a wire to its current value does nothing.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    config: SimConfig,
    wires: Vec<Wire>,
    components: Vec<Component>,
    observations: Vec<Observation>,
    nb_evaluations: usize,
}

impl Circuit {
    /// Create a new circuit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new circuit with the given settings
    pub fn with_config(config: SimConfig) -> Self {
        Circuit {
            config,
            ..Self::default()
        }
    }

    /// Settings of the circuit
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Return the number of wires in the circuit
    pub fn nb_wires(&self) -> usize {
        self.wires.len()
    }

    /// Return the number of components in the circuit
    pub fn nb_components(&self) -> usize {
        self.components.len()
    }

    /// Return the number of evaluations run so far
    pub fn nb_evaluations(&self) -> usize {
        self.nb_evaluations
    }

    /// Get the wire with the given handle
    pub fn wire(&self, w: WireId) -> &Wire {
        &self.wires[w.ind()]
    }

    /// Get the component with the given handle
    pub fn component(&self, c: ComponentId) -> &Component {
        &self.components[c.ind()]
    }

    /// Current value of a wire
    pub fn value(&self, w: WireId) -> Value {
        self.wire(w).value
    }

    /// Iterate over all component handles
    pub fn component_ids(&self) -> impl Iterator<Item = ComponentId> {
        (0..self.nb_components()).map(ComponentId::from_ind)
    }

    /// Iterate over all wire handles
    pub fn wire_ids(&self) -> impl Iterator<Item = WireId> {
        (0..self.nb_wires()).map(WireId::from_ind)
    }

    /// Add a new component, owned by the parent if given
    pub fn add_component(
        &mut self,
        name: &str,
        kind: ComponentKind,
        parent: Option<ComponentId>,
    ) -> ComponentId {
        let id = ComponentId::from_ind(self.components.len());
        self.components.push(Component {
            name: name.to_owned(),
            kind,
            parent,
            inputs: Vec::new(),
            outputs: Vec::new(),
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.components[p.ind()].children.push(id);
        }
        id
    }

    /// Add an input wire to a component; changes on it run the component's evaluation
    pub fn add_input(&mut self, owner: ComponentId, name: &'static str) -> WireId {
        let w = self.add_wire(owner, name, true);
        self.components[owner.ind()].inputs.push(w);
        w
    }

    /// Add an output wire to a component
    pub fn add_output(&mut self, owner: ComponentId, name: &'static str) -> WireId {
        let w = self.add_wire(owner, name, false);
        self.components[owner.ind()].outputs.push(w);
        w
    }

    fn add_wire(&mut self, owner: ComponentId, name: &'static str, triggers: bool) -> WireId {
        let w = WireId::from_ind(self.wires.len());
        self.wires.push(Wire::new(owner, name, triggers));
        w
    }

    /// Drive `to` from `from`; previous connections are kept
    pub fn connect(&mut self, from: WireId, to: WireId) {
        self.wires[from.ind()].fanout.push(to);
    }

    /// Drive several wires from `from`, in order
    pub fn connect_all(&mut self, from: WireId, to: &[WireId]) {
        self.wires[from.ind()].fanout.extend_from_slice(to);
    }

    /// Report the changes of a wire as observations
    pub fn observe(&mut self, w: WireId) {
        self.wires[w.ind()].observe = true;
    }

    /// Observations collected so far
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Take the observations collected so far
    pub fn drain_observations(&mut self) -> Vec<Observation> {
        std::mem::take(&mut self.observations)
    }

    /// Hierarchical name of a component, such as `F3/H1/X1`
    pub fn path(&self, c: ComponentId) -> String {
        let comp = self.component(c);
        match comp.parent {
            Some(p) => format!("{}/{}", self.path(p), comp.name),
            None => comp.name.clone(),
        }
    }

    /// Hierarchical name of a wire, such as `F3/H1.S`
    pub fn wire_path(&self, w: WireId) -> String {
        let wire = self.wire(w);
        format!("{}.{}", self.path(wire.owner), wire.name)
    }

    /// Set the value of a wire and propagate the change
    pub fn set(&mut self, w: WireId, value: impl Into<Value>) -> Result<()> {
        self.set_at(w, value.into(), 0)
    }

    /// Run the evaluation of a component
    pub fn evaluate(&mut self, c: ComponentId) -> Result<()> {
        self.evaluate_at(c, 0)
    }

    fn set_at(&mut self, w: WireId, value: Value, depth: usize) -> Result<()> {
        if self.wires[w.ind()].value == value {
            return Ok(());
        }
        if depth > self.config.max_depth {
            let wire = self.wire_path(w);
            warn!(%wire, depth, "propagation depth exceeded");
            return Err(Error::CircuitCycle { wire });
        }
        self.wires[w.ind()].value = value;
        trace!(wire = %w, %value, depth, "set");

        let (owner, triggers, observe) = {
            let wire = &self.wires[w.ind()];
            (wire.owner, wire.triggers, wire.observe)
        };
        if triggers {
            self.evaluate_at(owner, depth + 1)?;
        }
        if observe {
            let obs = Observation {
                owner: self.components[owner.ind()].name.clone(),
                component: self.path(owner),
                wire: self.wires[w.ind()].name,
                value,
            };
            info!(target: "gatesim::observe", component = %obs.component, "{obs}");
            self.observations.push(obs);
        }
        // The fan-out is fixed once the circuit is assembled
        for i in 0..self.wires[w.ind()].fanout.len() {
            let t = self.wires[w.ind()].fanout[i];
            self.set_at(t, value, depth + 1)?;
        }
        Ok(())
    }

    fn evaluate_at(&mut self, c: ComponentId, depth: usize) -> Result<()> {
        self.nb_evaluations += 1;
        let comp = &self.components[c.ind()];
        let Some((nb_inputs, nb_outputs)) = comp.kind.arity() else {
            return Ok(());
        };
        if comp.inputs.len() != nb_inputs || comp.outputs.len() != nb_outputs {
            return Err(Error::MalformedComponent {
                component: self.path(c),
                reason: format!(
                    "{} expects {} inputs and {} outputs, got {} and {}",
                    comp.kind,
                    nb_inputs,
                    nb_outputs,
                    comp.inputs.len(),
                    comp.outputs.len()
                ),
            });
        }
        let mut inputs = [Value::Unset; 2];
        for (v, w) in inputs.iter_mut().zip(comp.inputs.iter()) {
            *v = self.wires[w.ind()].value;
        }
        let result = comp.kind.evaluate(&inputs[..nb_inputs]);
        let output = comp.outputs[0];
        if let Some(v) = result {
            self.set_at(output, v, depth + 1)?;
        }
        Ok(())
    }

    /// Check that propagation always terminates
    ///
    /// Edges go from each wire to its fan-out, and from each triggering input
    /// of a primitive gate to the gate's outputs. The graph must be acyclic.
    pub fn check_acyclic(&self) -> Result<()> {
        let mut succ: Vec<Vec<WireId>> = self.wires.iter().map(|w| w.fanout.clone()).collect();
        for comp in &self.components {
            if !comp.kind.is_primitive() {
                continue;
            }
            for i in &comp.inputs {
                if self.wires[i.ind()].triggers {
                    succ[i.ind()].extend_from_slice(&comp.outputs);
                }
            }
        }

        // Count the incoming edges of each wire
        let mut count_deps = vec![0u32; self.nb_wires()];
        for s in &succ {
            for t in s {
                count_deps[t.ind()] += 1;
            }
        }

        // Start with wires that are not driven, and remove them one by one
        let mut to_visit: Vec<usize> = (0..self.nb_wires())
            .filter(|w| count_deps[*w] == 0)
            .collect();
        let mut nb_visited = 0;
        while let Some(w) = to_visit.pop() {
            nb_visited += 1;
            for t in &succ[w] {
                count_deps[t.ind()] -= 1;
                if count_deps[t.ind()] == 0 {
                    to_visit.push(t.ind());
                }
            }
        }

        if nb_visited == self.nb_wires() {
            Ok(())
        } else {
            let on_loop = count_deps.iter().position(|d| *d != 0).unwrap_or(0);
            Err(Error::CircuitCycle {
                wire: self.wire_path(WireId::from_ind(on_loop)),
            })
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit with {} components, {} wires:",
            self.nb_components(),
            self.nb_wires()
        )?;
        for c in self.component_ids() {
            writeln!(f, "\t{} = {}", self.path(c), self.component(c).kind)?;
        }
        for w in self.wire_ids() {
            let wire = self.wire(w);
            write!(f, "\t{} = {}", self.wire_path(w), wire.value)?;
            if !wire.fanout.is_empty() {
                let targets = wire.fanout.iter().map(|t| self.wire_path(*t)).join(", ");
                write!(f, " -> {targets}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::circuit::component::{BinaryType, ComponentKind};
    use crate::circuit::value::Value;
    use crate::config::SimConfig;
    use crate::error::Error;
    use crate::Circuit;

    #[test]
    fn test_basic() {
        let mut c = Circuit::new();
        let inv = c.add_component("I1", ComponentKind::Not, None);
        let a = c.add_input(inv, "A");
        let b = c.add_output(inv, "B");

        assert_eq!(c.nb_components(), 1);
        assert_eq!(c.nb_wires(), 2);
        assert_eq!(c.value(a), Value::Unset);
        assert_eq!(c.value(b), Value::Unset);
        assert!(c.wire(a).triggers_evaluation());
        assert!(!c.wire(b).triggers_evaluation());
        assert_eq!(c.wire(b).owner(), inv);

        c.set(a, false).unwrap();
        assert_eq!(c.value(b), Value::One);
        c.set(a, true).unwrap();
        assert_eq!(c.value(b), Value::Zero);
        assert_eq!(c.nb_evaluations(), 2);
        c.check_acyclic().unwrap();
    }

    #[test]
    fn test_idempotent_set() {
        let mut c = Circuit::new();
        let g = c.add_component("A1", ComponentKind::Binary(BinaryType::And), None);
        let a = c.add_input(g, "A");
        let b = c.add_input(g, "B");
        let o = c.add_output(g, "C");
        c.observe(a);
        c.observe(o);

        c.set(a, true).unwrap();
        c.set(b, true).unwrap();
        assert_eq!(c.value(o), Value::One);
        let nb_evals = c.nb_evaluations();
        let nb_obs = c.observations().len();
        for w in [a, b, o] {
            let v = c.value(w);
            c.set(w, v).unwrap();
        }
        assert_eq!(c.nb_evaluations(), nb_evals);
        assert_eq!(c.observations().len(), nb_obs);
    }

    #[test]
    fn test_idempotent_set_full_adder() {
        let mut c = Circuit::with_config(SimConfig::default().with_monitor(true));
        let f = c.add_full_adder("F0", None);
        c.set(f.a, true).unwrap();
        c.set(f.b, true).unwrap();
        c.set(f.cin, true).unwrap();
        let nb_evals = c.nb_evaluations();
        let nb_obs = c.observations().len();
        let wires: Vec<_> = c.wire_ids().collect();
        for w in wires {
            let v = c.value(w);
            c.set(w, v).unwrap();
            assert_eq!(c.nb_evaluations(), nb_evals, "{}", c.wire_path(w));
            assert_eq!(c.observations().len(), nb_obs, "{}", c.wire_path(w));
        }
    }

    #[test]
    fn test_malformed_primitive() {
        // And gate without its second input
        let mut c = Circuit::new();
        let g = c.add_component("A1", ComponentKind::Binary(BinaryType::And), None);
        let a = c.add_input(g, "A");
        let o = c.add_output(g, "C");
        assert!(matches!(
            c.set(a, true),
            Err(Error::MalformedComponent { component, .. }) if component == "A1"
        ));
        assert_eq!(c.value(o), Value::Unset);

        // Inverter without output
        let mut c = Circuit::new();
        let n = c.add_component("N1", ComponentKind::Not, None);
        let a = c.add_input(n, "A");
        assert!(matches!(
            c.set(a, true),
            Err(Error::MalformedComponent { .. })
        ));

        // Or gate with three inputs
        let mut c = Circuit::new();
        let g = c.add_component("O1", ComponentKind::Binary(BinaryType::Or), None);
        let a = c.add_input(g, "A");
        c.add_input(g, "B");
        c.add_input(g, "D");
        c.add_output(g, "C");
        assert!(matches!(
            c.set(a, true),
            Err(Error::MalformedComponent { .. })
        ));
        assert!(c.evaluate(g).is_err());
    }

    #[test]
    fn test_fanout_order() {
        let mut c = Circuit::new();
        let top = c.add_component("top", ComponentKind::Group, None);
        let src = c.add_input(top, "src");
        let x = c.add_output(top, "x");
        let y = c.add_output(top, "y");
        c.observe(x);
        c.observe(y);
        c.connect(src, y);
        c.connect_all(src, &[x]);
        assert_eq!(c.wire(src).fanout(), &[y, x]);

        c.set(src, true).unwrap();
        let obs = c.drain_observations();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].wire, "y");
        assert_eq!(obs[1].wire, "x");
        assert_eq!(obs[0].component, "top");
        assert_eq!(obs[0].value, Value::One);
        assert_eq!(obs[0].owner, "top");
        assert_eq!(obs[0].to_string(), "top.y set to 1");
        assert!(c.observations().is_empty());
    }

    #[test]
    fn test_path() {
        let mut c = Circuit::new();
        let f = c.add_component("F3", ComponentKind::FullAdder, None);
        let h = c.add_component("H1", ComponentKind::HalfAdder, Some(f));
        let x = c.add_component("X1", ComponentKind::Xor, Some(h));
        let s = c.add_output(h, "S");
        assert_eq!(c.path(x), "F3/H1/X1");
        assert_eq!(c.wire_path(s), "F3/H1.S");
        assert_eq!(c.component(f).children(), &[h]);
        assert_eq!(c.component(x).parent(), Some(h));
    }

    #[test]
    fn test_cycle() {
        // An inverter driving its own input never settles
        let mut c = Circuit::with_config(SimConfig::default().with_max_depth(64));
        let inv = c.add_component("I1", ComponentKind::Not, None);
        let a = c.add_input(inv, "A");
        let b = c.add_output(inv, "B");
        c.connect(b, a);

        assert!(matches!(c.check_acyclic(), Err(Error::CircuitCycle { .. })));
        let res = c.set(a, true);
        assert!(matches!(res, Err(Error::CircuitCycle { .. })));
    }

    #[test]
    fn test_display() {
        let mut c = Circuit::new();
        let inv = c.add_component("I1", ComponentKind::Not, None);
        let a = c.add_input(inv, "A");
        let _ = c.add_output(inv, "B");
        c.set(a, true).unwrap();
        let s = c.to_string();
        assert!(s.starts_with("Circuit with 1 components, 2 wires:"));
        assert!(s.contains("I1 = Not"));
        assert!(s.contains("I1.B = 0"));
    }
}
