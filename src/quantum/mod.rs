// src/quantum/mod.rs
//! Circuit-level abstractions: gate matrices, circuit programs and
//! measurement results.

pub mod circuit;
pub mod gate;
pub mod result;

pub use circuit::{GateOp, QuantumCircuit};
pub use gate::Gate;
pub use result::{ResultData, RunResult};
