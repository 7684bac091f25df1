// src/error.rs
//! Error types shared by circuit construction, simulation and result analysis.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors raised by circuit construction, simulation and result analysis.
///
/// All variants are fail-fast invalid-argument errors, raised before any
/// state mutation: a failed call never leaves a partially applied gate or a
/// half-built result behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulatorError {
    /// Circuit or engine requested with zero qubits
    #[error("number of qubits must be positive")]
    ZeroQubits,

    /// Engine requested beyond the dense-statevector memory ceiling
    #[error("cannot simulate more than {max} qubits (memory constraint), requested {requested}")]
    TooManyQubits { requested: usize, max: usize },

    /// Gate addressed to a qubit the circuit does not have
    #[error("qubit index {qubit} out of range [0, {num_qubits})")]
    QubitIndexOutOfRange { qubit: usize, num_qubits: usize },

    /// Controlled gate with coinciding control and target
    #[error("control and target qubits must be different, both are {0}")]
    ControlEqualsTarget(usize),

    /// Measurement requested with no shots
    #[error("number of shots must be positive")]
    ZeroShots,

    /// Circuit fed to an engine with a different qubit count
    #[error("circuit has {circuit} qubits, but simulator has {simulator}")]
    CircuitSizeMismatch { circuit: usize, simulator: usize },

    /// Expectation value requested for an observable other than Z
    #[error("unsupported observable '{0}': only \"Z\" is available")]
    UnsupportedObservable(String),

    /// Result counts that do not add up to the declared shot total
    #[error("sum of counts ({total}) does not match shots ({shots})")]
    CountsShotsMismatch { total: usize, shots: usize },

    /// Result outcome key of the wrong length
    #[error("bitstring '{bitstring}' length does not match qubit count {num_qubits}")]
    BitstringLengthMismatch { bitstring: String, num_qubits: usize },
}
