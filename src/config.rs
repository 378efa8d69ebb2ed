//! Simulation settings

/// Default bound on the propagation depth
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Settings shared by all circuits built for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Maximum nesting of wire updates before propagation is considered to loop
    pub max_depth: usize,
    /// Report every change on the boundary wires of full adders
    pub monitor: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            monitor: false,
        }
    }
}

impl SimConfig {
    /// Set the propagation depth bound
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable monitoring of full adders
    pub fn with_monitor(mut self, monitor: bool) -> Self {
        self.monitor = monitor;
        self
    }
}
