//! Dense statevector quantum circuit simulation
//!
//! This crate simulates small quantum circuits by evolving a dense vector of
//! 2^N complex amplitudes through a sequence of unitary gates, then sampling
//! measurement outcomes from the final probability distribution. Circuits are
//! built with a chainable builder and executed against a fresh
//! [`simulators::StatevectorSimulator`] per run.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use spinor::prelude::*;
//!
//! # fn main() -> spinor::error::Result<()> {
//! // Bell state: H on qubit 0, then CNOT from qubit 0 to qubit 1.
//! let mut circuit = QuantumCircuit::new(2)?;
//! circuit.h(0)?.cx(0, 1)?.measure_all();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = circuit.run(1000, &mut rng)?;
//!
//! // Only the correlated outcomes ever appear.
//! assert_eq!(result.get_counts("00") + result.get_counts("11"), 1000);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod quantum;
pub mod simulators;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Result, SimulatorError};
    pub use crate::quantum::{Gate, GateOp, QuantumCircuit, ResultData, RunResult};
    pub use crate::simulators::StatevectorSimulator;
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
