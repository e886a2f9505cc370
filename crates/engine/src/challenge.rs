//! Challenge definitions.
//!
//! A challenge bundles everything a round grades against: the hidden rule,
//! the grading mode, the canonical solution query and the attempt budget.
//! The rule lives here as introspectable query predicates, not in the
//! generator, so challenge variants can change it freely.

use alloc::string::String;
use alloc::vec::Vec;
use dataduel_core::{AnswerMode, ExpectedAnswer, Field, Incident};
use dataduel_gen::derive_seed;
use dataduel_query::{CompareOp, Predicate};

/// How a round grades submissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeMode {
    /// Continuous precision/recall/efficiency blend over the id set.
    SetMatch,
    /// Strict pass/fail against the exact id set.
    ExactIds,
    /// Strict pass/fail against the matching count.
    ExactCount,
}

impl ChallengeMode {
    /// The answer shape this mode grades against.
    pub fn answer_mode(&self) -> AnswerMode {
        match self {
            ChallengeMode::SetMatch | ChallengeMode::ExactIds => AnswerMode::Ids,
            ChallengeMode::ExactCount => AnswerMode::Count,
        }
    }
}

/// The canonical solution of a round, revealed once the round is over.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    query: String,
    answer: ExpectedAnswer,
}

impl Solution {
    /// Creates a solution artifact.
    pub(crate) fn new(query: impl Into<String>, answer: ExpectedAnswer) -> Self {
        Self {
            query: query.into(),
            answer,
        }
    }

    /// Returns the canonical solution query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the expected answer the solution query produces.
    pub fn answer(&self) -> &ExpectedAnswer {
        &self.answer
    }
}

/// The solution query of the standard daily rule.
const DAILY_SOLUTION_QUERY: &str = "SELECT id FROM incidents \
    WHERE severity IN ('critical', 'high') AND service IN ('payments', 'auth') \
    AND error_rate >= 0.08 AND duration_min >= 30";

/// The count-variant solution query of the standard daily rule.
const DAILY_COUNT_SOLUTION_QUERY: &str = "SELECT COUNT(*) AS answer FROM incidents \
    WHERE severity IN ('critical', 'high') AND service IN ('payments', 'auth') \
    AND error_rate >= 0.08 AND duration_min >= 30";

/// Attempt budget of the standard daily challenges.
const DAILY_ATTEMPTS: u32 = 5;

/// Attempt budget of the count variant.
const COUNT_ATTEMPTS: u32 = 1;

/// A challenge: the rule, grading mode, solution artifact and budget for
/// one round.
#[derive(Clone, Debug)]
pub struct Challenge {
    key: String,
    mode: ChallengeMode,
    rule: Vec<Predicate>,
    solution_query: String,
    attempts_allowed: u32,
}

impl Challenge {
    /// Creates a challenge from its parts.
    pub fn new(
        key: impl Into<String>,
        mode: ChallengeMode,
        rule: Vec<Predicate>,
        solution_query: impl Into<String>,
        attempts_allowed: u32,
    ) -> Self {
        Self {
            key: key.into(),
            mode,
            rule,
            solution_query: solution_query.into(),
            attempts_allowed,
        }
    }

    /// The standard daily challenge: set-match scoring, 5 attempts.
    pub fn daily(key: &str) -> Self {
        Self::new(
            key,
            ChallengeMode::SetMatch,
            daily_rule(),
            DAILY_SOLUTION_QUERY,
            DAILY_ATTEMPTS,
        )
    }

    /// The daily pass/fail variant: exact id-set verdict, 5 attempts.
    pub fn daily_exact(key: &str) -> Self {
        Self::new(
            key,
            ChallengeMode::ExactIds,
            daily_rule(),
            DAILY_SOLUTION_QUERY,
            DAILY_ATTEMPTS,
        )
    }

    /// The daily count variant: exact count verdict, single attempt.
    pub fn daily_count(key: &str) -> Self {
        Self::new(
            key,
            ChallengeMode::ExactCount,
            daily_rule(),
            DAILY_COUNT_SOLUTION_QUERY,
            COUNT_ATTEMPTS,
        )
    }

    /// Returns the challenge key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the dataset seed derived from the key.
    pub fn seed(&self) -> u32 {
        derive_seed(&self.key)
    }

    /// Returns the grading mode.
    pub fn mode(&self) -> ChallengeMode {
        self.mode
    }

    /// Returns the rule predicates.
    pub fn rule(&self) -> &[Predicate] {
        &self.rule
    }

    /// Evaluates the rule against an incident.
    pub fn rule_matches(&self, incident: &Incident) -> bool {
        self.rule.iter().all(|p| p.eval(incident))
    }

    /// Returns the canonical solution query text.
    pub fn solution_query(&self) -> &str {
        &self.solution_query
    }

    /// Returns the attempt budget.
    pub fn attempts_allowed(&self) -> u32 {
        self.attempts_allowed
    }
}

/// The standard daily rule: a severe incident on a money-path service
/// with a high error rate and a long duration.
fn daily_rule() -> Vec<Predicate> {
    alloc::vec![
        Predicate::in_set(Field::Severity, ["critical", "high"]),
        Predicate::in_set(Field::Service, ["payments", "auth"]),
        Predicate::compare(Field::ErrorRate, CompareOp::Ge, 0.08),
        Predicate::compare(Field::DurationMin, CompareOp::Ge, 30.0),
    ]
}
