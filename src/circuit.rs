//! Representation and simulation of logic circuits

#[allow(clippy::module_inception)]
mod circuit;
mod component;
pub mod gates;
pub mod generators;
pub mod stats;
mod value;
mod wire;

pub use circuit::{Circuit, Observation};
pub use component::{BinaryType, Component, ComponentId, ComponentKind};
pub use value::Value;
pub use wire::{Wire, WireId};
