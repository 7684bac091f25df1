//! Dense statevector simulation engine
//!
//! The engine owns a buffer of 2^N complex amplitudes, with qubit 0 as the
//! most significant bit of every basis index, and evolves it in place one
//! gate at a time. Gates are applied as in-place two-amplitude updates over
//! the target qubit's bit position rather than by building the full
//! 2^N × 2^N operator; the result is identical to dense Kronecker expansion
//! within floating tolerance.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use ndarray::Array1;
use num_complex::Complex64;
use rand::Rng;
use rayon::prelude::*;

use crate::error::{Result, SimulatorError};
use crate::quantum::circuit::{GateOp, QuantumCircuit};
use crate::quantum::gate::Gate;
use crate::quantum::result::RunResult;

/// Largest supported qubit count. 2^25 complex double-precision amplitudes
/// is already ~512 MiB; one more qubit doubles it.
pub const MAX_QUBITS: usize = 25;

/// Buffers smaller than this are updated on a single thread; the kernels
/// are memory-bound and fan-out costs more than it saves below this size.
const PARALLEL_THRESHOLD: usize = 1 << 16;

/// A dense statevector simulator.
///
/// Created fresh per simulation run; the amplitude buffer starts in the
/// all-zero basis state |0...0⟩ and stays normalized (Σ|amplitude|² = 1)
/// under every unitary operation. Measurement never mutates the buffer.
#[derive(Clone, Debug)]
pub struct StatevectorSimulator {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StatevectorSimulator {
    /// Create a simulator for `num_qubits` qubits in the |0...0⟩ state.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(SimulatorError::ZeroQubits);
        }
        if num_qubits > MAX_QUBITS {
            return Err(SimulatorError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(StatevectorSimulator {
            num_qubits,
            amplitudes,
        })
    }

    /// Reset the simulator to the |0...0⟩ state.
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Get the number of qubits in the simulator
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Returns the dimension of the state space (2^n for n qubits)
    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
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

    /// Apply a single-qubit gate to `target`, mutating the state in place.
    ///
    /// Basis indices pair up along the target qubit's bit position: indices
    /// that agree on every other bit differ by `stride`, and each such pair
    /// is updated by the gate's 2×2 matrix independently of all others.
    /// Large buffers are partitioned into `2 * stride` blocks across
    /// threads; the blocks never alias, so no synchronization is needed
    /// within one gate application.
    pub fn apply_gate(&mut self, gate: &Gate, target: usize) -> Result<()> {
        self.validate_qubit(target)?;

        let m = gate.matrix();
        let (m00, m01) = (m[[0, 0]], m[[0, 1]]);
        let (m10, m11) = (m[[1, 0]], m[[1, 1]]);

        let stride = 1usize << (self.num_qubits - 1 - target);
        let span = stride * 2;

        let kernel = move |block: &mut [Complex64]| {
            let (zeros, ones) = block.split_at_mut(stride);
            for (a0, a1) in zeros.iter_mut().zip(ones.iter_mut()) {
                let x0 = *a0;
                let x1 = *a1;
                *a0 = m00 * x0 + m01 * x1;
                *a1 = m10 * x0 + m11 * x1;
            }
        };

        if self.amplitudes.len() >= PARALLEL_THRESHOLD {
            self.amplitudes.par_chunks_mut(span).for_each(kernel);
        } else {
            self.amplitudes.chunks_mut(span).for_each(kernel);
        }

        Ok(())
    }

    /// Apply a controlled-X gate, mutating the state in place.
    ///
    /// For every basis index whose control bit is 1, swaps the amplitude
    /// with the index obtained by flipping the target bit. A pure
    /// permutation, so normalization is untouched.
    pub fn apply_cx(&mut self, control: usize, target: usize) -> Result<()> {
        self.validate_qubit(control)?;
        self.validate_qubit(target)?;
        if control == target {
            return Err(SimulatorError::ControlEqualsTarget(control));
        }

        let control_mask = 1usize << (self.num_qubits - 1 - control);
        let stride = 1usize << (self.num_qubits - 1 - target);
        let span = stride * 2;

        let kernel = move |(index, block): (usize, &mut [Complex64])| {
            let base = index * span;
            let (zeros, ones) = block.split_at_mut(stride);
            for offset in 0..stride {
                if (base + offset) & control_mask != 0 {
                    std::mem::swap(&mut zeros[offset], &mut ones[offset]);
                }
            }
        };

        if self.amplitudes.len() >= PARALLEL_THRESHOLD {
            self.amplitudes
                .par_chunks_mut(span)
                .enumerate()
                .for_each(kernel);
        } else {
            self.amplitudes.chunks_mut(span).enumerate().for_each(kernel);
        }

        Ok(())
    }

    /// Apply a circuit's operations to the state in declared order.
    ///
    /// Evolution stops at the first measure-all marker: measurement is
    /// deferred sampling at the end of the program, so operations recorded
    /// after the marker are inert.
    pub fn run_circuit(&mut self, circuit: &QuantumCircuit) -> Result<()> {
        if circuit.num_qubits() != self.num_qubits {
            return Err(SimulatorError::CircuitSizeMismatch {
                circuit: circuit.num_qubits(),
                simulator: self.num_qubits,
            });
        }

        for op in circuit.ops() {
            match *op {
                GateOp::SingleQubit { gate, target } => self.apply_gate(&gate, target)?,
                GateOp::ControlledX { control, target } => self.apply_cx(control, target)?,
                GateOp::MeasureAll => break,
            }
        }

        Ok(())
    }

    /// Sample `shots` measurement outcomes over all qubits.
    ///
    /// Probabilities are |amplitude|², renormalized so the distribution
    /// sums to exactly 1 before sampling despite floating-point drift.
    /// The state itself is left untouched. The randomness source is
    /// injected so outcomes are reproducible under a fixed seed.
    pub fn measure_all<R: Rng>(&self, shots: usize, rng: &mut R) -> Result<RunResult> {
        if shots == 0 {
            return Err(SimulatorError::ZeroShots);
        }

        let total: f64 = self.amplitudes.iter().map(|a| a.norm_sqr()).sum();
        let mut cumulative = Vec::with_capacity(self.dimension());
        let mut running = 0.0;
        for amplitude in &self.amplitudes {
            running += amplitude.norm_sqr() / total;
            cumulative.push(running);
        }
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }

        let mut counts: HashMap<usize, usize> = HashMap::new();
        let mut order: Vec<usize> = Vec::new();
        for _ in 0..shots {
            let draw = rng.gen::<f64>();
            let outcome = cumulative
                .partition_point(|&edge| edge <= draw)
                .min(self.dimension() - 1);
            match counts.entry(outcome) {
                Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
                Entry::Vacant(vacant) => {
                    vacant.insert(1);
                    order.push(outcome);
                }
            }
        }

        let pairs = order
            .iter()
            .map(|&index| (self.bitstring(index), counts[&index]));
        RunResult::new(pairs, shots, self.num_qubits)
    }

    /// Get an independent copy of the current statevector.
    pub fn statevector(&self) -> Array1<Complex64> {
        Array1::from(self.amplitudes.clone())
    }

    /// Get an independent copy of the per-basis-state probabilities.
    pub fn probabilities(&self) -> Array1<f64> {
        Array1::from_iter(self.amplitudes.iter().map(|a| a.norm_sqr()))
    }

    /// Render a basis index as a bitstring with qubit 0 as the MSB.
    fn bitstring(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.num_qubits)
    }
}

impl fmt::Display for StatevectorSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}-qubit state:", self.num_qubits)?;

        let threshold = 1e-10;
        let mut has_entries = false;

        for (index, amplitude) in self.amplitudes.iter().enumerate() {
            let probability = amplitude.norm_sqr();
            if probability > threshold {
                has_entries = true;
                writeln!(
                    f,
                    "  ({:.6}{:+.6}i) |{}⟩ [{:.1}%]",
                    amplitude.re,
                    amplitude.im,
                    self.bitstring(index),
                    probability * 100.0
                )?;
            }
        }

        if !has_entries {
            writeln!(f, "  (zero state)")?;
        }

        Ok(())
    }
}
