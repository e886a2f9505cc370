//! Query plan definition.

use crate::ast::predicate::Predicate;
use alloc::vec::Vec;
use dataduel_core::Field;

/// Sort direction. The dialect defaults to descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Ordering requested by an ORDER BY clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderSpec {
    /// Column to sort by.
    pub field: Field,
    /// Sort direction.
    pub direction: SortOrder,
}

impl OrderSpec {
    /// Creates an order spec.
    pub fn new(field: Field, direction: SortOrder) -> Self {
        Self { field, direction }
    }
}

/// The structured result of parsing a query.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryPlan {
    /// Conjunctive filter conditions. Empty means all rows pass.
    pub predicates: Vec<Predicate>,
    /// Optional ordering.
    pub order: Option<OrderSpec>,
    /// Optional row cap. `Some(0)` yields an empty result, not "no limit".
    pub limit: Option<usize>,
    /// True when the SELECT list is the `COUNT(*)` shape, so the caller can
    /// grade the scalar instead of the row set. Never affects selection.
    pub is_count: bool,
}

impl QueryPlan {
    /// Creates a plan.
    pub fn new(
        predicates: Vec<Predicate>,
        order: Option<OrderSpec>,
        limit: Option<usize>,
        is_count: bool,
    ) -> Self {
        Self {
            predicates,
            order,
            limit,
            is_count,
        }
    }

    /// The plan of the empty query: no filters, no order, no limit.
    pub fn empty() -> Self {
        Self::new(Vec::new(), None, None, false)
    }

    /// Returns the plan complexity in [1, 10].
    ///
    /// One point per conjunct (degraded conjuncts included: a typo still
    /// costs efficiency), plus one each for ORDER BY and LIMIT.
    pub fn complexity(&self) -> u8 {
        let raw = self.predicates.len()
            + usize::from(self.order.is_some())
            + usize::from(self.limit.is_some());
        raw.clamp(1, 10) as u8
    }

    /// Number of conjuncts that degraded to the no-op predicate.
    pub fn vacuous_predicates(&self) -> usize {
        self.predicates.iter().filter(|p| p.is_vacuous()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CompareOp;
    use alloc::vec;

    #[test]
    fn test_empty_plan_complexity_floor() {
        assert_eq!(QueryPlan::empty().complexity(), 1);
    }

    #[test]
    fn test_complexity_counts_clauses() {
        let plan = QueryPlan::new(
            vec![
                Predicate::in_set(Field::Severity, ["critical"]),
                Predicate::compare(Field::ErrorRate, CompareOp::Ge, 0.08),
            ],
            Some(OrderSpec::new(Field::DurationMin, SortOrder::Desc)),
            Some(10),
            false,
        );
        assert_eq!(plan.complexity(), 4);
    }

    #[test]
    fn test_complexity_ceiling() {
        let predicates = vec![Predicate::Always; 12];
        let plan = QueryPlan::new(predicates, None, Some(1), false);
        assert_eq!(plan.complexity(), 10);
    }

    #[test]
    fn test_vacuous_predicate_count() {
        let plan = QueryPlan::new(
            vec![
                Predicate::Always,
                Predicate::compare(Field::DurationMin, CompareOp::Ge, 30.0),
                Predicate::Always,
            ],
            None,
            None,
            false,
        );
        assert_eq!(plan.vacuous_predicates(), 2);
    }
}
