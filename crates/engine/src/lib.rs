//! Dataduel Engine - Round and challenge facade.
//!
//! This crate wires the generators, parser, executor and scorers into the
//! round flow the game drives:
//!
//! - `Challenge`: the hidden rule, grading mode, canonical solution
//!   artifact and attempt budget a round grades against
//! - `RoundState`: a caller-owned round holding dataset, expected answer,
//!   attempt counter and score history; the engine keeps no global state
//!
//! # Example
//!
//! ```rust
//! use dataduel_engine::{Challenge, Outcome, RoundState};
//!
//! let challenge = Challenge::daily("2025-06-01");
//! let mut round = RoundState::new(&challenge);
//!
//! let submission = round
//!     .submit("SELECT * FROM incidents WHERE severity IN ('critical','high')")
//!     .unwrap();
//!
//! if let Outcome::Scored(result) = submission.outcome {
//!     assert!((0.0..=1.0).contains(&result.score));
//! }
//! assert_eq!(submission.attempts_remaining, 4);
//! ```

#![no_std]

extern crate alloc;

pub mod challenge;
pub mod round;

pub use challenge::{Challenge, ChallengeMode, Solution};
pub use round::{Outcome, RoundState, Submission};
