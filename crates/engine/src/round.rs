//! Caller-owned round state.
//!
//! A round owns the dataset, the expected answer and the attempt counter
//! for one challenge. The struct replaces the global store of earlier
//! prototypes: the caller creates it, passes it around, and drops it when
//! a new round begins. Nothing here persists between calls.

use crate::challenge::{Challenge, ChallengeMode, Solution};
use alloc::string::String;
use alloc::vec::Vec;
use dataduel_core::{Error, ExpectedAnswer, Incident, Result};
use dataduel_gen::{derive_expected, generate_dataset};
use dataduel_query::{execute, parse_query};
use dataduel_score::{score_count_exact, score_exact_match, score_set_match};
use dataduel_score::{ScoreResult, Verdict};

/// The graded outcome of one submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Continuous set-match score.
    Scored(ScoreResult),
    /// Strict pass/fail verdict.
    Judged(Verdict),
}

/// What the caller gets back from one submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    /// Ids of the rows the player's query returned, in result order.
    pub row_ids: Vec<String>,
    /// Complexity of the parsed plan.
    pub complexity: u8,
    /// The graded outcome.
    pub outcome: Outcome,
    /// Attempts left after this one.
    pub attempts_remaining: u32,
    /// True once the solution may be shown (round solved or budget spent).
    pub revealed: bool,
}

/// One round of play: dataset, expected answer, attempts and history.
#[derive(Clone, Debug)]
pub struct RoundState {
    dataset: Vec<Incident>,
    expected: ExpectedAnswer,
    mode: ChallengeMode,
    solution: Solution,
    attempts_allowed: u32,
    attempts_used: u32,
    solved: bool,
    history: Vec<Outcome>,
}

impl RoundState {
    /// Starts a round: generates the dataset from the challenge key and
    /// derives the expected answer from the challenge rule.
    pub fn new(challenge: &Challenge) -> Self {
        let dataset = generate_dataset(challenge.seed());
        let expected = derive_expected(
            &dataset,
            |incident| challenge.rule_matches(incident),
            challenge.mode().answer_mode(),
        );
        let solution = Solution::new(challenge.solution_query(), expected.clone());

        Self {
            dataset,
            expected,
            mode: challenge.mode(),
            solution,
            attempts_allowed: challenge.attempts_allowed(),
            attempts_used: 0,
            solved: false,
            history: Vec::new(),
        }
    }

    /// Parses, executes and grades one submission, consuming an attempt.
    ///
    /// Fails only when the round is already over: solved rounds return
    /// `Error::RoundClosed`, spent budgets `Error::AttemptsExhausted`.
    pub fn submit(&mut self, text: &str) -> Result<Submission> {
        if self.solved {
            return Err(Error::round_closed());
        }
        if self.attempts_used >= self.attempts_allowed {
            return Err(Error::attempts_exhausted(self.attempts_allowed));
        }

        let plan = parse_query(text);
        let rows = execute(&self.dataset, &plan);

        let outcome = match &self.expected {
            ExpectedAnswer::Ids(ids) => match self.mode {
                ChallengeMode::SetMatch => {
                    Outcome::Scored(score_set_match(ids, &rows, plan.complexity()))
                }
                _ => Outcome::Judged(score_exact_match(&self.expected, &rows)),
            },
            ExpectedAnswer::Count(n) => {
                // A count challenge grades the COUNT(*) scalar; a row-set
                // submission returns no scalar and cannot pass.
                let verdict = if plan.is_count {
                    score_count_exact(*n, rows.len() as u64)
                } else {
                    Verdict { correct: false }
                };
                Outcome::Judged(verdict)
            }
        };

        self.attempts_used += 1;
        if let Outcome::Judged(verdict) = outcome {
            if verdict.correct {
                self.solved = true;
            }
        }
        self.history.push(outcome);

        Ok(Submission {
            row_ids: rows.iter().map(|row| row.id().into()).collect(),
            complexity: plan.complexity(),
            outcome,
            attempts_remaining: self.attempts_allowed - self.attempts_used,
            revealed: self.is_over(),
        })
    }

    /// Returns the dataset being played.
    pub fn dataset(&self) -> &[Incident] {
        &self.dataset
    }

    /// Returns the hidden expected answer.
    pub fn expected(&self) -> &ExpectedAnswer {
        &self.expected
    }

    /// Returns the attempts left.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_allowed - self.attempts_used
    }

    /// Returns true when no more submissions are accepted.
    pub fn is_over(&self) -> bool {
        self.solved || self.attempts_used >= self.attempts_allowed
    }

    /// Returns the solution, but only once the round is over.
    pub fn solution(&self) -> Option<&Solution> {
        if self.is_over() {
            Some(&self.solution)
        } else {
            None
        }
    }

    /// Returns every graded outcome so far, oldest first.
    pub fn history(&self) -> &[Outcome] {
        &self.history
    }
}
