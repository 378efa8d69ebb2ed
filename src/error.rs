//! Error types for circuit construction and simulation

use thiserror::Error;

/// Result type alias for simulation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit string is malformed
    #[error("invalid input {input:?}: {reason}")]
    InvalidInput {
        /// The offending input
        input: String,
        /// What is wrong with it
        reason: String,
    },

    /// Propagation does not terminate: the wire graph contains a cycle
    #[error("combinational loop detected at wire {wire}")]
    CircuitCycle {
        /// Hierarchical name of the wire where the loop was detected
        wire: String,
    },

    /// A primitive gate does not have the wires its kind requires
    #[error("malformed component {component}: {reason}")]
    MalformedComponent {
        /// Hierarchical name of the component
        component: String,
        /// What is wrong with it
        reason: String,
    },

    /// An output was read before anything drove it
    #[error("wire {wire} is not driven")]
    Undriven {
        /// Hierarchical name of the wire
        wire: String,
    },
}

impl Error {
    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Error {
        Error::InvalidInput {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
