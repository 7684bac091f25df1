// src/quantum/gate.rs
//! Quantum gate matrices
//!
//! Single-qubit gates are fixed 2×2 unitaries (plus the parametrized
//! rotations), two-qubit gates are fixed 4×4 unitaries in the basis ordering
//! |00⟩, |01⟩, |10⟩, |11⟩. Everything here is a pure function of its
//! arguments; validation against a circuit's qubit count happens at the
//! circuit and simulator layers.

use ndarray::{array, Array2};
use num_complex::Complex64;

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const IM: Complex64 = Complex64::new(0.0, 1.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = 0.7071067811865475;
}

/// A single-qubit gate.
///
/// Rotation angles are unrestricted reals; entries follow the usual
/// closed forms in cos(θ/2), sin(θ/2) and e^{±iθ/2}.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gate {
    /// Identity gate
    I,

    /// Pauli-X gate (NOT gate)
    X,

    /// Pauli-Y gate
    Y,

    /// Pauli-Z gate
    Z,

    /// Hadamard gate
    H,

    /// Phase gate (S gate)
    S,

    /// π/8 gate (T gate)
    T,

    /// Rotation around the X axis
    Rx(f64),

    /// Rotation around the Y axis
    Ry(f64),

    /// Rotation around the Z axis
    Rz(f64),
}

impl Gate {
    /// The 2×2 matrix representation of this gate.
    pub fn matrix(&self) -> Array2<Complex64> {
        use constants::*;
        match self {
            Gate::I => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
                ]
            },
            Gate::X => {
                array![
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
                ]
            },
            Gate::Y => {
                array![
                    [Complex64::new(0.0, 0.0), -IM],
                    [IM, Complex64::new(0.0, 0.0)]
                ]
            },
            Gate::Z => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
                ]
            },
            Gate::H => {
                let factor = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![
                    [factor, factor],
                    [factor, -factor]
                ]
            },
            Gate::S => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), IM]
                ]
            },
            Gate::T => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)]
                ]
            },
            Gate::Rx(theta) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                array![
                    [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
                    [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)]
                ]
            },
            Gate::Ry(theta) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                array![
                    [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
                    [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)]
                ]
            },
            Gate::Rz(theta) => {
                let phase_pos = Complex64::new(0.0, theta / 2.0).exp();
                let phase_neg = Complex64::new(0.0, -theta / 2.0).exp();
                array![
                    [phase_neg, Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), phase_pos]
                ]
            },
        }
    }

    /// Returns a display name for this gate
    pub fn name(&self) -> String {
        match self {
            Gate::I => "I".to_string(),
            Gate::X => "X".to_string(),
            Gate::Y => "Y".to_string(),
            Gate::Z => "Z".to_string(),
            Gate::H => "H".to_string(),
            Gate::S => "S".to_string(),
            Gate::T => "T".to_string(),
            Gate::Rx(theta) => format!("Rx({:.2})", theta),
            Gate::Ry(theta) => format!("Ry({:.2})", theta),
            Gate::Rz(theta) => format!("Rz({:.2})", theta),
        }
    }
}

/// CNOT gate: flips the target qubit where the control qubit is 1.
///
/// Reference matrix only; the simulator applies CX as an amplitude
/// permutation rather than by dense multiplication.
pub fn controlled_x() -> Array2<Complex64> {
    array![
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
    ]
}

/// Controlled-Z gate: flips the phase of |11⟩.
pub fn controlled_z() -> Array2<Complex64> {
    array![
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
    ]
}

/// SWAP gate: exchanges the states of two qubits.
pub fn swap() -> Array2<Complex64> {
    array![
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
    ]
}
