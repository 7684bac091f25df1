//! Quantum circuit simulators
//!
//! This module provides the dense statevector engine used to execute
//! circuit programs on classical hardware.

pub mod statevector;

pub use statevector::{StatevectorSimulator, MAX_QUBITS};
