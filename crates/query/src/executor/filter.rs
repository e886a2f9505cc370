//! Filter executor.

use crate::ast::Predicate;
use alloc::vec::Vec;
use dataduel_core::Incident;

/// Filter executor - keeps rows satisfying every predicate.
///
/// An empty predicate list keeps everything (logical AND over nothing).
pub struct FilterExecutor {
    predicates: Vec<Predicate>,
}

impl FilterExecutor {
    /// Creates a new filter executor.
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    /// Executes the filter on the input rows.
    pub fn execute(&self, input: Vec<Incident>) -> Vec<Incident> {
        input
            .into_iter()
            .filter(|incident| self.predicates.iter().all(|p| p.eval(incident)))
            .collect()
    }
}
