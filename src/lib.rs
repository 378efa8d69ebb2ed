//! Zero-delay simulation of combinational logic circuits
//!
//! This crate models circuits as components connected by wires. Setting a wire
//! propagates the change synchronously through the whole circuit: by the time
//! the call returns, every output depending on the wire has settled. There is
//! no notion of time or delay, and no sequential logic.
//!
//! # Usage
//!
//! The arithmetic operations work on 8-bit strings, most significant bit first,
//! and are computed by simulating ripple-carry adders and inverter banks.
//!
//! ```bash
//! # Show available commands
//! gatesim help
//! # Subtract two numbers; the carry bit is printed first
//! gatesim sub 10010101 11000110
//! # Show the structure of a full adder
//! gatesim show full-adder
//! # Compare the circuits with native arithmetic on random operands
//! gatesim check --count 1000
//! ```
//!
//! # Datastructures
//!
//! `Circuit` is an arena of components and wires, addressed by index handles.
//! Each wire has a single owner, a tri-state value and the list of wires it drives.
//! Inputs of a component trigger its evaluation when they change.
//!
//! Only inverters and 2-input And/Or gates compute anything. Xor, half adders and
//! full adders are composites: they own smaller components and forward their
//! boundary wires to them, so that they can be nested like any other component.
//!
//! For example, here is a full adder circuit:
//! ```
//! # use gatesim::{Circuit, Value};
//! let mut circuit = Circuit::new();
//! let fa = circuit.add_full_adder("F0", None);
//! circuit.set(fa.cin, true).unwrap();
//! circuit.set(fa.a, true).unwrap();
//! circuit.set(fa.b, false).unwrap();
//! assert_eq!(circuit.value(fa.s), Value::Zero);
//! assert_eq!(circuit.value(fa.cout), Value::One);
//! ```
//!
//! The wire graph must be acyclic. A loop is reported as an error, either by
//! [`Circuit::check_acyclic`] or when propagation exceeds the configured depth.

#![warn(missing_docs)]

pub mod arith;
pub mod bits;
pub mod circuit;
pub mod config;
pub mod error;

pub use arith::{AddResult, Alu};
pub use bits::Byte;
pub use circuit::{stats, Circuit, ComponentId, ComponentKind, Observation, Value, WireId};
pub use config::SimConfig;
pub use error::{Error, Result};
