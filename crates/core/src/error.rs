//! Error types for round operations.
//!
//! The scoring/parsing/generation paths are total and never fail; errors
//! only arise at the round boundary (submitting to a finished round).

use core::fmt;

/// Result type alias for Dataduel operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for round operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The round's attempt budget has been spent.
    AttemptsExhausted {
        allowed: u32,
    },
    /// The round is already over (solved or revealed).
    RoundClosed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AttemptsExhausted { allowed } => {
                write!(f, "Attempt budget exhausted: {} attempts allowed", allowed)
            }
            Error::RoundClosed => {
                write!(f, "Round is closed")
            }
        }
    }
}

impl Error {
    /// Creates an attempts-exhausted error.
    pub fn attempts_exhausted(allowed: u32) -> Self {
        Error::AttemptsExhausted { allowed }
    }

    /// Creates a round-closed error.
    pub fn round_closed() -> Self {
        Error::RoundClosed
    }
}
