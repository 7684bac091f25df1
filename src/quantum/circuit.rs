//! Circuit programs and the chainable builder surface.

use std::fmt;

use ndarray::Array1;
use num_complex::Complex64;
use rand::Rng;

use crate::error::{Result, SimulatorError};
use crate::quantum::gate::Gate;
use crate::quantum::result::RunResult;
use crate::simulators::StatevectorSimulator;

/// A single operation in a circuit program.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateOp {
    /// A single-qubit gate applied to one target qubit
    SingleQubit { gate: Gate, target: usize },
    /// Controlled-X between two distinct qubits
    ControlledX { control: usize, target: usize },
    /// Marker: sample all qubits at the end of the program
    MeasureAll,
}

/// An ordered, validated sequence of gate operations over a fixed number
/// of qubits.
///
/// Every append call validates its qubit indices against the circuit's
/// qubit count and returns the builder again, so programs can be written
/// as a chain:
///
/// ```
/// # use spinor::quantum::QuantumCircuit;
/// # fn main() -> spinor::error::Result<()> {
/// let mut circuit = QuantumCircuit::new(3)?;
/// circuit.h(0)?.cx(0, 1)?.cx(1, 2)?.measure_all();
/// assert_eq!(circuit.gate_count(), 4);
/// # Ok(())
/// # }
/// ```
///
/// Measurement is deferred sampling at the end of the declared sequence,
/// not a mid-circuit collapse: operations appended after a
/// [`measure_all`](QuantumCircuit::measure_all) marker are accepted and
/// recorded, but do not evolve the statevector when the circuit runs.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantumCircuit {
    num_qubits: usize,
    ops: Vec<GateOp>,
}

impl QuantumCircuit {
    /// Create an empty circuit over `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(SimulatorError::ZeroQubits);
        }
        Ok(QuantumCircuit {
            num_qubits,
            ops: Vec::new(),
        })
    }

    fn validate_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(SimulatorError::QubitIndexOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn push_single(&mut self, gate: Gate, target: usize) -> Result<&mut Self> {
        self.validate_qubit(target)?;
        self.ops.push(GateOp::SingleQubit { gate, target });
        Ok(self)
    }

    /// Apply a Hadamard gate to `qubit`.
    pub fn h(&mut self, qubit: usize) -> Result<&mut Self> {
        self.push_single(Gate::H, qubit)
    }

    /// Apply a Pauli-X (NOT) gate to `qubit`.
    pub fn x(&mut self, qubit: usize) -> Result<&mut Self> {
        self.push_single(Gate::X, qubit)
    }

    /// Apply a Pauli-Y gate to `qubit`.
    pub fn y(&mut self, qubit: usize) -> Result<&mut Self> {
        self.push_single(Gate::Y, qubit)
    }

    /// Apply a Pauli-Z gate to `qubit`.
    pub fn z(&mut self, qubit: usize) -> Result<&mut Self> {
        self.push_single(Gate::Z, qubit)
    }

    /// Apply a phase (S) gate to `qubit`.
    pub fn s(&mut self, qubit: usize) -> Result<&mut Self> {
        self.push_single(Gate::S, qubit)
    }

    /// Apply a π/8 (T) gate to `qubit`.
    pub fn t(&mut self, qubit: usize) -> Result<&mut Self> {
        self.push_single(Gate::T, qubit)
    }

    /// Apply an X rotation by `theta` to `qubit`.
    pub fn rx(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.push_single(Gate::Rx(theta), qubit)
    }

    /// Apply a Y rotation by `theta` to `qubit`.
    pub fn ry(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.push_single(Gate::Ry(theta), qubit)
    }

    /// Apply a Z rotation by `theta` to `qubit`.
    pub fn rz(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.push_single(Gate::Rz(theta), qubit)
    }

    /// Apply a CNOT gate with the given control and target qubits.
    pub fn cx(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.validate_qubit(control)?;
        self.validate_qubit(target)?;
        if control == target {
            return Err(SimulatorError::ControlEqualsTarget(control));
        }
        self.ops.push(GateOp::ControlledX { control, target });
        Ok(self)
    }

    /// Mark the end of unitary evolution: measure all qubits when run.
    pub fn measure_all(&mut self) -> &mut Self {
        self.ops.push(GateOp::MeasureAll);
        self
    }

    /// The number of qubits this circuit is declared over.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The recorded operation sequence.
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Get the number of operations in the circuit
    pub fn gate_count(&self) -> usize {
        self.ops.len()
    }

    /// Simulate the circuit and sample `shots` measurement outcomes.
    ///
    /// Each call instantiates a fresh simulator, so repeated runs are
    /// independent; reproducibility comes entirely from the injected
    /// randomness source.
    pub fn run<R: Rng>(&self, shots: usize, rng: &mut R) -> Result<RunResult> {
        let mut simulator = StatevectorSimulator::new(self.num_qubits)?;
        simulator.run_circuit(self)?;
        simulator.measure_all(shots, rng)
    }

    /// Evolve the circuit and return the final statevector without sampling.
    pub fn statevector(&self) -> Result<Array1<Complex64>> {
        let mut simulator = StatevectorSimulator::new(self.num_qubits)?;
        simulator.run_circuit(self)?;
        Ok(simulator.statevector())
    }
}

impl fmt::Display for QuantumCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuantumCircuit({} qubits, {} ops)",
            self.num_qubits,
            self.ops.len()
        )
    }
}
