//! Limit executor.

use alloc::vec::Vec;
use dataduel_core::Incident;

/// Limit executor - truncates to the first `limit` rows.
///
/// A limit of 0 is a real limit and yields an empty result.
pub struct LimitExecutor {
    limit: usize,
}

impl LimitExecutor {
    /// Creates a new limit executor.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Executes the limit on the input rows.
    pub fn execute(&self, mut input: Vec<Incident>) -> Vec<Incident> {
        input.truncate(self.limit);
        input
    }
}
