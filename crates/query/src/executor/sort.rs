//! Sort executor.

use crate::ast::{OrderSpec, SortOrder};
use alloc::vec::Vec;
use core::cmp::Ordering;
use dataduel_core::Incident;

/// Sort executor - stable-sorts rows by one column.
///
/// Text columns compare lexicographically, numeric columns numerically;
/// ties keep their input order, which is what makes results deterministic.
pub struct SortExecutor {
    spec: OrderSpec,
}

impl SortExecutor {
    /// Creates a new sort executor.
    pub fn new(spec: OrderSpec) -> Self {
        Self { spec }
    }

    /// Executes the sort on the input rows.
    pub fn execute(&self, mut input: Vec<Incident>) -> Vec<Incident> {
        input.sort_by(|a, b| self.compare(a, b));
        input
    }

    fn compare(&self, a: &Incident, b: &Incident) -> Ordering {
        let cmp = a.get(self.spec.field).cmp(&b.get(self.spec.field));
        match self.spec.direction {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    }
}
