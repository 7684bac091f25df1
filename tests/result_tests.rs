use rand::rngs::StdRng;
use rand::SeedableRng;

use spinor::error::SimulatorError;
use spinor::quantum::{QuantumCircuit, RunResult};

/// Helper function for comparing f64 with tolerance
fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

fn pairs(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
    entries
        .iter()
        .map(|&(outcome, count)| (outcome.to_string(), count))
        .collect()
}

#[test]
fn test_result_construction_and_accessors() {
    let result = RunResult::new(pairs(&[("00", 60), ("11", 40)]), 100, 2).unwrap();

    assert_eq!(result.shots(), 100);
    assert_eq!(result.num_qubits(), 2);
    assert_eq!(result.get_counts("00"), 60);
    assert_eq!(result.get_counts("11"), 40);
    assert_eq!(result.get_counts("01"), 0);
}

#[test]
fn test_counts_must_sum_to_shots() {
    let err = RunResult::new(pairs(&[("00", 60), ("11", 30)]), 100, 2).unwrap_err();
    assert!(matches!(
        err,
        SimulatorError::CountsShotsMismatch {
            total: 90,
            shots: 100
        }
    ));
}

#[test]
fn test_bitstring_length_must_match_qubit_count() {
    let err = RunResult::new(pairs(&[("000", 100)]), 100, 2).unwrap_err();
    assert!(matches!(
        err,
        SimulatorError::BitstringLengthMismatch { num_qubits: 2, .. }
    ));
}

#[test]
fn test_zero_shots_rejected() {
    let err = RunResult::new(Vec::new(), 0, 2).unwrap_err();
    assert!(matches!(err, SimulatorError::ZeroShots));
}

#[test]
fn test_probabilities() {
    let result = RunResult::new(pairs(&[("0", 250), ("1", 750)]), 1000, 1).unwrap();
    let probabilities = result.probabilities();

    assert!(approx_eq(probabilities["0"], 0.25, 1e-12));
    assert!(approx_eq(probabilities["1"], 0.75, 1e-12));
}

#[test]
fn test_most_common_descending_order() {
    let result = RunResult::new(
        pairs(&[("01", 200), ("00", 500), ("11", 300)]),
        1000,
        2,
    )
    .unwrap();

    assert_eq!(
        result.most_common(3),
        vec![
            ("00".to_string(), 500),
            ("11".to_string(), 300),
            ("01".to_string(), 200)
        ]
    );
}

#[test]
fn test_most_common_truncates_to_n() {
    let result = RunResult::new(
        pairs(&[("00", 400), ("01", 300), ("10", 200), ("11", 100)]),
        1000,
        2,
    )
    .unwrap();

    let top = result.most_common(2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0, "00");
    assert_eq!(top[1].0, "01");
}

#[test]
fn test_most_common_ties_keep_first_seen_order() {
    let result = RunResult::new(
        pairs(&[("01", 250), ("10", 250), ("00", 300), ("11", 200)]),
        1000,
        2,
    )
    .unwrap();

    assert_eq!(
        result.most_common(4),
        vec![
            ("00".to_string(), 300),
            ("01".to_string(), 250),
            ("10".to_string(), 250),
            ("11".to_string(), 200)
        ]
    );
}

#[test]
fn test_expectation_value_all_zero_outcome() {
    let mut circuit = QuantumCircuit::new(2).unwrap();
    circuit.measure_all();

    let mut rng = StdRng::seed_from_u64(1);
    let result = circuit.run(100, &mut rng).unwrap();
    assert!(approx_eq(result.expectation_value("Z").unwrap(), 1.0, 1e-12));
}

#[test]
fn test_expectation_value_even_split() {
    // "111" has odd parity, so a 50/50 split with "000" cancels exactly.
    let result = RunResult::new(pairs(&[("000", 500), ("111", 500)]), 1000, 3).unwrap();
    assert!(approx_eq(result.expectation_value("Z").unwrap(), 0.0, 1e-12));
}

#[test]
fn test_expectation_value_mixed_parities() {
    // +1 * 0.7 - 1 * 0.3 = 0.4
    let result = RunResult::new(pairs(&[("00", 700), ("01", 300)]), 1000, 2).unwrap();
    assert!(approx_eq(result.expectation_value("Z").unwrap(), 0.4, 1e-12));
}

#[test]
fn test_expectation_value_unsupported_observable() {
    let result = RunResult::new(pairs(&[("0", 100)]), 100, 1).unwrap();
    let err = result.expectation_value("X").unwrap_err();
    assert_eq!(err, SimulatorError::UnsupportedObservable("X".to_string()));
}

#[test]
fn test_to_data_serializes_expected_shape() {
    let result = RunResult::new(pairs(&[("00", 60), ("11", 40)]), 100, 2).unwrap();
    let value = serde_json::to_value(result.to_data()).unwrap();

    assert_eq!(value["shots"], 100);
    assert_eq!(value["num_qubits"], 2);
    assert_eq!(value["counts"]["00"], 60);
    assert_eq!(value["counts"]["11"], 40);
    assert!(approx_eq(value["probabilities"]["11"].as_f64().unwrap(), 0.4, 1e-12));
}

#[test]
fn test_display_renders_histogram() {
    let result = RunResult::new(pairs(&[("00", 75), ("11", 25)]), 100, 2).unwrap();
    let rendered = result.to_string();

    assert!(rendered.contains("100 shots over 2 qubits"));
    assert!(rendered.contains("|00⟩"));
    assert!(rendered.contains("75"));
    assert!(rendered.contains("75.0%"));
}

#[test]
fn test_duplicate_outcomes_accumulate() {
    let result = RunResult::new(
        pairs(&[("0", 30), ("1", 40), ("0", 30)]),
        100,
        1,
    )
    .unwrap();

    assert_eq!(result.get_counts("0"), 60);
    assert_eq!(result.most_common(2)[0].0, "0");
}
