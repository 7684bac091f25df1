//! Measurement counts and the statistics derived from them.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, SimulatorError};

/// Aggregated outcomes of a completed sampling pass.
///
/// Holds a mapping from fixed-length bitstrings (qubit 0 is the leftmost,
/// most significant bit) to the number of shots that produced them.
/// Constructed once and immutable thereafter; the sum of all counts always
/// equals the shot total.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    counts: HashMap<String, usize>,
    /// Outcomes in the order they were first observed. This is the
    /// tie-break order for [`most_common`](RunResult::most_common).
    order: Vec<String>,
    shots: usize,
    num_qubits: usize,
}

/// Plain keyed view of a [`RunResult`] for logging, display or transport.
#[derive(Clone, Debug, Serialize)]
pub struct ResultData {
    pub counts: HashMap<String, usize>,
    pub shots: usize,
    pub num_qubits: usize,
    pub probabilities: HashMap<String, f64>,
}

impl RunResult {
    /// Build a result from `(bitstring, count)` pairs in first-observed
    /// order.
    ///
    /// Fails if `shots` is zero, if any bitstring's length differs from
    /// `num_qubits`, or if the counts do not sum to `shots`. Duplicate
    /// bitstrings are accumulated and keep their first position in the
    /// ordering.
    pub fn new(
        counts: impl IntoIterator<Item = (String, usize)>,
        shots: usize,
        num_qubits: usize,
    ) -> Result<Self> {
        if shots == 0 {
            return Err(SimulatorError::ZeroShots);
        }

        let mut map = HashMap::new();
        let mut order = Vec::new();
        let mut total = 0usize;

        for (bitstring, count) in counts {
            if bitstring.len() != num_qubits {
                return Err(SimulatorError::BitstringLengthMismatch {
                    bitstring,
                    num_qubits,
                });
            }
            total += count;
            match map.entry(bitstring) {
                Entry::Occupied(mut occupied) => *occupied.get_mut() += count,
                Entry::Vacant(vacant) => {
                    order.push(vacant.key().clone());
                    vacant.insert(count);
                }
            }
        }

        if total != shots {
            return Err(SimulatorError::CountsShotsMismatch { total, shots });
        }

        Ok(RunResult {
            counts: map,
            order,
            shots,
            num_qubits,
        })
    }

    /// The counts mapping.
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Total number of shots sampled.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Number of qubits each outcome bitstring describes.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Count for a specific outcome, 0 if it was never observed.
    pub fn get_counts(&self, outcome: &str) -> usize {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Observed probability of each outcome, count / shots.
    pub fn probabilities(&self) -> HashMap<String, f64> {
        self.counts
            .iter()
            .map(|(outcome, &count)| (outcome.clone(), count as f64 / self.shots as f64))
            .collect()
    }

    /// The `n` most frequent outcomes, descending by count.
    ///
    /// Equal counts keep the order in which the outcomes were first
    /// observed, so the returned order is stable across calls.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .order
            .iter()
            .map(|outcome| (outcome.clone(), self.counts[outcome]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// Expectation value of the given observable over the sampled
    /// distribution.
    ///
    /// Only `"Z"` is supported: each outcome contributes +1 when its
    /// number of 1 bits is even and -1 when odd, weighted by its observed
    /// probability.
    pub fn expectation_value(&self, observable: &str) -> Result<f64> {
        if observable != "Z" {
            return Err(SimulatorError::UnsupportedObservable(
                observable.to_string(),
            ));
        }

        let shots = self.shots as f64;
        let mut expectation = 0.0;
        for (outcome, &count) in &self.counts {
            let parity = outcome.chars().filter(|&bit| bit == '1').count() % 2;
            let sign = if parity == 0 { 1.0 } else { -1.0 };
            expectation += sign * (count as f64 / shots);
        }

        Ok(expectation)
    }

    /// Convert to the plain `{counts, shots, num_qubits, probabilities}`
    /// shape for external consumption.
    pub fn to_data(&self) -> ResultData {
        ResultData {
            counts: self.counts.clone(),
            shots: self.shots,
            num_qubits: self.num_qubits,
            probabilities: self.probabilities(),
        }
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} shots over {} qubits:", self.shots, self.num_qubits)?;
        for (outcome, count) in self.most_common(10) {
            let probability = count as f64 / self.shots as f64;
            let bar = "#".repeat((probability * 40.0).round() as usize);
            writeln!(
                f,
                "  |{}⟩ {:>6} ({:>5.1}%) {}",
                outcome,
                count,
                probability * 100.0,
                bar
            )?;
        }
        if self.counts.len() > 10 {
            writeln!(f, "  ... and {} more outcomes", self.counts.len() - 10)?;
        }
        Ok(())
    }
}
