//! Expected-answer representation for a challenge.
//!
//! The expected answer is derived from the dataset and the challenge rule
//! alone; it is never influenced by what the player submits.

use alloc::collections::BTreeSet;
use alloc::string::String;

/// Which shape of answer a challenge grades against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerMode {
    /// The set of matching incident ids.
    Ids,
    /// The number of matching incidents.
    Count,
}

/// The hidden correct answer of a challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpectedAnswer {
    /// Matching incident ids (set-match and exact-set challenges).
    Ids(BTreeSet<String>),
    /// Matching incident count (count challenges).
    Count(u64),
}

impl ExpectedAnswer {
    /// Creates an id-set answer from an id iterator.
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExpectedAnswer::Ids(ids.into_iter().map(Into::into).collect())
    }

    /// Creates a count answer.
    pub fn count(n: u64) -> Self {
        ExpectedAnswer::Count(n)
    }

    /// Returns the id set if this is an Ids answer, None otherwise.
    pub fn as_ids(&self) -> Option<&BTreeSet<String>> {
        match self {
            ExpectedAnswer::Ids(ids) => Some(ids),
            _ => None,
        }
    }

    /// Returns the count if this is a Count answer, None otherwise.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            ExpectedAnswer::Count(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the answer mode this value carries.
    pub fn mode(&self) -> AnswerMode {
        match self {
            ExpectedAnswer::Ids(_) => AnswerMode::Ids,
            ExpectedAnswer::Count(_) => AnswerMode::Count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_answer() {
        let answer = ExpectedAnswer::ids(["INC-1002", "INC-1000"]);
        let ids = answer.as_ids().unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("INC-1000"));
        assert_eq!(answer.mode(), AnswerMode::Ids);
        assert_eq!(answer.as_count(), None);
    }

    #[test]
    fn test_count_answer() {
        let answer = ExpectedAnswer::count(14);
        assert_eq!(answer.as_count(), Some(14));
        assert_eq!(answer.mode(), AnswerMode::Count);
        assert_eq!(answer.as_ids(), None);
    }

    #[test]
    fn test_ids_equality_is_order_independent() {
        let a = ExpectedAnswer::ids(["INC-1001", "INC-1002"]);
        let b = ExpectedAnswer::ids(["INC-1002", "INC-1001"]);
        assert_eq!(a, b);
    }
}
