//! Predicate definitions for query filtering.
//!
//! Predicates are tagged variants rather than closures so the rest of the
//! engine can introspect them: complexity scoring counts them, tests match
//! on their shape, and a degraded conjunct is visibly `Always` instead of
//! an opaque function.

use alloc::string::String;
use alloc::vec::Vec;
use dataduel_core::{Field, Incident, Value};

/// Comparison operators for numeric predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// Resolves an operator token.
    pub fn parse(token: &str) -> Option<CompareOp> {
        match token {
            "=" => Some(CompareOp::Eq),
            "<" => Some(CompareOp::Lt),
            "<=" => Some(CompareOp::Le),
            ">" => Some(CompareOp::Gt),
            ">=" => Some(CompareOp::Ge),
            _ => None,
        }
    }

    /// Returns the dialect spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    /// Applies the operator to a left and right operand.
    pub fn apply(&self, left: f64, right: f64) -> bool {
        match self {
            CompareOp::Eq => left == right,
            CompareOp::Lt => left < right,
            CompareOp::Le => left <= right,
            CompareOp::Gt => left > right,
            CompareOp::Ge => left >= right,
        }
    }
}

/// A single filter condition over one column.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// Set membership over an enumerated text column: `service IN ('auth')`.
    InSet { field: Field, values: Vec<String> },
    /// Numeric comparison: `error_rate >= 0.08`.
    Compare {
        field: Field,
        op: CompareOp,
        value: f64,
    },
    /// The always-true predicate an unrecognized conjunct degrades to.
    Always,
}

impl Predicate {
    /// Creates a set-membership predicate.
    pub fn in_set<I, S>(field: Field, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::InSet {
            field,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a comparison predicate.
    pub fn compare(field: Field, op: CompareOp, value: f64) -> Self {
        Predicate::Compare { field, op, value }
    }

    /// Evaluates the predicate against an incident.
    ///
    /// Total for any predicate the parser emits; a hand-built predicate
    /// over a mismatched column type evaluates to false rather than
    /// panicking.
    pub fn eval(&self, incident: &Incident) -> bool {
        match self {
            Predicate::InSet { field, values } => match incident.get(*field) {
                Value::Text(text) => values.iter().any(|v| v == &text),
                _ => false,
            },
            Predicate::Compare { field, op, value } => match incident.get(*field).as_f64() {
                Some(left) => op.apply(left, *value),
                None => false,
            },
            Predicate::Always => true,
        }
    }

    /// Returns true for the degraded no-op predicate.
    #[inline]
    pub fn is_vacuous(&self) -> bool {
        matches!(self, Predicate::Always)
    }
}
