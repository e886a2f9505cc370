//! Strict pass/fail verdicts for daily-challenge variants.

use alloc::collections::BTreeSet;
use alloc::string::String;
use dataduel_core::{ExpectedAnswer, Incident};

/// A boolean verdict; exact-match challenges give no partial credit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// True when the submission matches the answer exactly.
    pub correct: bool,
}

/// Grades a submission against the expected answer exactly.
///
/// For id-set answers the returned rows must cover the answer and nothing
/// else, order-independent: any missing or extra row fails. For count
/// answers the result-set cardinality is compared.
pub fn score_exact_match(expected: &ExpectedAnswer, rows: &[Incident]) -> Verdict {
    match expected {
        ExpectedAnswer::Ids(ids) => {
            let predicted: BTreeSet<&str> = rows.iter().map(Incident::id).collect();
            let expected_refs: BTreeSet<&str> = ids.iter().map(String::as_str).collect();
            Verdict {
                correct: predicted == expected_refs,
            }
        }
        ExpectedAnswer::Count(n) => score_count_exact(*n, rows.len() as u64),
    }
}

/// Grades a scalar answer (the result of a `COUNT(*)` query) exactly.
pub fn score_count_exact(expected: u64, value: u64) -> Verdict {
    Verdict {
        correct: expected == value,
    }
}
