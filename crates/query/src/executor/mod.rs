//! Query executor module.

mod filter;
mod limit;
mod sort;

pub use filter::FilterExecutor;
pub use limit::LimitExecutor;
pub use sort::SortExecutor;

use crate::ast::QueryPlan;
use alloc::vec::Vec;
use dataduel_core::Incident;

/// Runs a plan against a dataset: filter, then stable sort, then limit.
///
/// Total for any plan the parser emits and any dataset, including empty
/// ones. Rows are returned as owned copies in result order.
pub fn execute(dataset: &[Incident], plan: &QueryPlan) -> Vec<Incident> {
    let mut rows = FilterExecutor::new(plan.predicates.clone()).execute(dataset.to_vec());
    if let Some(spec) = plan.order {
        rows = SortExecutor::new(spec).execute(rows);
    }
    if let Some(limit) = plan.limit {
        rows = LimitExecutor::new(limit).execute(rows);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CompareOp, OrderSpec, Predicate, SortOrder};
    use alloc::vec;
    use alloc::vec::Vec;
    use dataduel_core::{Field, Service, Severity};

    fn dataset() -> Vec<Incident> {
        vec![
            Incident::new("INC-1000", Service::Payments, Severity::High, 60, 0.15, 900),
            Incident::new("INC-1001", Service::Auth, Severity::Low, 10, 0.02, 120),
            Incident::new("INC-1002", Service::Search, Severity::Critical, 80, 0.19, 3100),
            Incident::new("INC-1003", Service::Auth, Severity::High, 60, 0.09, 450),
        ]
    }

    #[test]
    fn test_empty_plan_returns_all_rows_in_order() {
        let rows = execute(&dataset(), &QueryPlan::empty());
        let ids: Vec<&str> = rows.iter().map(Incident::id).collect();
        assert_eq!(ids, vec!["INC-1000", "INC-1001", "INC-1002", "INC-1003"]);
    }

    #[test]
    fn test_filter_sort_limit_pipeline() {
        let plan = QueryPlan::new(
            vec![Predicate::compare(Field::DurationMin, CompareOp::Ge, 30.0)],
            Some(OrderSpec::new(Field::ErrorRate, SortOrder::Desc)),
            Some(2),
            false,
        );
        let rows = execute(&dataset(), &plan);
        let ids: Vec<&str> = rows.iter().map(Incident::id).collect();
        assert_eq!(ids, vec!["INC-1002", "INC-1000"]);
    }

    #[test]
    fn test_sort_ties_keep_dataset_order() {
        let plan = QueryPlan::new(
            Vec::new(),
            Some(OrderSpec::new(Field::DurationMin, SortOrder::Desc)),
            None,
            false,
        );
        let rows = execute(&dataset(), &plan);
        let ids: Vec<&str> = rows.iter().map(Incident::id).collect();
        // INC-1000 and INC-1003 tie on duration 60 and keep their order.
        assert_eq!(ids, vec!["INC-1002", "INC-1000", "INC-1003", "INC-1001"]);
    }

    #[test]
    fn test_limit_zero_yields_empty() {
        let plan = QueryPlan::new(Vec::new(), None, Some(0), false);
        assert!(execute(&dataset(), &plan).is_empty());
    }

    #[test]
    fn test_empty_dataset_is_fine() {
        let plan = QueryPlan::new(
            vec![Predicate::in_set(Field::Service, ["auth"])],
            Some(OrderSpec::new(Field::Id, SortOrder::Asc)),
            Some(5),
            false,
        );
        assert!(execute(&[], &plan).is_empty());
    }

    #[test]
    fn test_execute_is_referentially_transparent() {
        let plan = QueryPlan::new(
            vec![Predicate::in_set(Field::Severity, ["high", "critical"])],
            Some(OrderSpec::new(Field::AffectedUsers, SortOrder::Desc)),
            None,
            false,
        );
        let data = dataset();
        assert_eq!(execute(&data, &plan), execute(&data, &plan));
    }
}
