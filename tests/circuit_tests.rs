use rand::rngs::StdRng;
use rand::SeedableRng;

use spinor::error::SimulatorError;
use spinor::quantum::gate::Gate;
use spinor::quantum::{GateOp, QuantumCircuit};

#[test]
fn test_circuit_creation() {
    let circuit = QuantumCircuit::new(2).unwrap();
    assert_eq!(circuit.num_qubits(), 2);
    assert_eq!(circuit.gate_count(), 0);
}

#[test]
fn test_circuit_with_zero_qubits_fails() {
    let err = QuantumCircuit::new(0).unwrap_err();
    assert!(matches!(err, SimulatorError::ZeroQubits));
}

#[test]
fn test_gates_are_recorded_in_order() {
    let mut circuit = QuantumCircuit::new(2).unwrap();
    circuit.h(0).unwrap();
    circuit.x(1).unwrap();
    circuit.cx(0, 1).unwrap();
    circuit.measure_all();

    assert_eq!(
        circuit.ops(),
        &[
            GateOp::SingleQubit {
                gate: Gate::H,
                target: 0
            },
            GateOp::SingleQubit {
                gate: Gate::X,
                target: 1
            },
            GateOp::ControlledX {
                control: 0,
                target: 1
            },
            GateOp::MeasureAll,
        ]
    );
}

#[test]
fn test_builder_chaining() {
    let mut circuit = QuantumCircuit::new(3).unwrap();
    circuit
        .h(0)
        .unwrap()
        .s(1)
        .unwrap()
        .t(2)
        .unwrap()
        .rx(0, 0.3)
        .unwrap()
        .ry(1, -0.4)
        .unwrap()
        .rz(2, 1.5)
        .unwrap()
        .cx(0, 2)
        .unwrap()
        .measure_all();

    assert_eq!(circuit.gate_count(), 8);
}

#[test]
fn test_out_of_range_qubit_fails_without_mutation() {
    let mut circuit = QuantumCircuit::new(2).unwrap();
    let err = circuit.h(2).unwrap_err();
    assert!(matches!(
        err,
        SimulatorError::QubitIndexOutOfRange {
            qubit: 2,
            num_qubits: 2
        }
    ));
    assert_eq!(circuit.gate_count(), 0);

    let err = circuit.cx(0, 5).unwrap_err();
    assert!(matches!(err, SimulatorError::QubitIndexOutOfRange { .. }));
    assert_eq!(circuit.gate_count(), 0);
}

#[test]
fn test_cx_with_equal_control_and_target_fails() {
    let mut circuit = QuantumCircuit::new(2).unwrap();
    let err = circuit.cx(1, 1).unwrap_err();
    assert!(matches!(err, SimulatorError::ControlEqualsTarget(1)));
    assert_eq!(circuit.gate_count(), 0);
}

#[test]
fn test_ops_after_measure_all_are_recorded_but_inert() {
    let mut with_trailing = QuantumCircuit::new(1).unwrap();
    with_trailing.h(0).unwrap();
    with_trailing.measure_all();
    with_trailing.x(0).unwrap();

    let mut without_trailing = QuantumCircuit::new(1).unwrap();
    without_trailing.h(0).unwrap();
    without_trailing.measure_all();

    // The trailing X is part of the program text...
    assert_eq!(with_trailing.gate_count(), 3);

    // ...but does not influence the evolved state or the sampled counts.
    assert_eq!(
        with_trailing.statevector().unwrap(),
        without_trailing.statevector().unwrap()
    );

    let mut rng_a = StdRng::seed_from_u64(11);
    let mut rng_b = StdRng::seed_from_u64(11);
    let result_a = with_trailing.run(500, &mut rng_a).unwrap();
    let result_b = without_trailing.run(500, &mut rng_b).unwrap();
    assert_eq!(result_a.counts(), result_b.counts());
}

#[test]
fn test_run_without_measure_marker_samples_final_state() {
    // Measurement defaults to the end of the sequence when no marker exists.
    let mut circuit = QuantumCircuit::new(2).unwrap();
    circuit.x(0).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let result = circuit.run(100, &mut rng).unwrap();
    assert_eq!(result.get_counts("10"), 100);
}

#[test]
fn test_circuit_display() {
    let mut circuit = QuantumCircuit::new(2).unwrap();
    circuit.h(0).unwrap();
    assert_eq!(circuit.to_string(), "QuantumCircuit(2 qubits, 1 ops)");
}
