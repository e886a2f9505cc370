//! Continuous set-match scoring.

use crate::clamp;
use alloc::collections::BTreeSet;
use alloc::string::String;
use dataduel_core::Incident;
use hashbrown::HashSet;

/// Weight of the precision term.
const PRECISION_WEIGHT: f64 = 0.6;
/// Weight of the recall term.
const RECALL_WEIGHT: f64 = 0.3;
/// Weight of the efficiency term.
const EFFICIENCY_WEIGHT: f64 = 0.1;
/// Efficiency lost per complexity point beyond the first.
const EFFICIENCY_STEP: f64 = 0.06;
/// Efficiency never drops below this floor.
const EFFICIENCY_FLOOR: f64 = 0.4;

/// The graded outcome of a set-match submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreResult {
    /// Weighted blend of the other three terms, in [0, 1].
    pub score: f64,
    /// Fraction of returned rows that belong to the answer.
    pub precision: f64,
    /// Fraction of the answer the returned rows cover.
    pub recall: f64,
    /// Reward for a low-complexity query, in [0.4, 1].
    pub efficiency: f64,
}

/// Grades returned rows against the expected id set.
///
/// `complexity` is the plan complexity from the parser; simpler correct
/// queries earn a higher efficiency term. The `max(1, ...)` denominators
/// turn the empty/empty case into zero precision and recall instead of a
/// division by zero.
pub fn score_set_match(
    expected: &BTreeSet<String>,
    rows: &[Incident],
    complexity: u8,
) -> ScoreResult {
    let predicted: HashSet<&str> = rows.iter().map(Incident::id).collect();

    let true_positives = predicted
        .iter()
        .filter(|&&id| expected.contains(id))
        .count();
    let false_positives = predicted.len() - true_positives;
    let false_negatives = expected.len() - true_positives;

    let precision = true_positives as f64 / (true_positives + false_positives).max(1) as f64;
    let recall = true_positives as f64 / (true_positives + false_negatives).max(1) as f64;
    let efficiency = clamp(
        1.0 - (complexity.saturating_sub(1)) as f64 * EFFICIENCY_STEP,
        EFFICIENCY_FLOOR,
        1.0,
    );
    let score = clamp(
        precision * PRECISION_WEIGHT + recall * RECALL_WEIGHT + efficiency * EFFICIENCY_WEIGHT,
        0.0,
        1.0,
    );

    ScoreResult {
        score,
        precision,
        recall,
        efficiency,
    }
}
