//! Lenient parser for the player-facing query dialect.
//!
//! The supported grammar (keywords case-insensitive):
//!
//! ```text
//! SELECT <column-list|*|COUNT(*) AS answer>
//! FROM <table-name>
//! [WHERE <predicate> (AND <predicate>)*]
//! [ORDER BY <column> [ASC|DESC]]
//! [LIMIT <integer>]
//! ```
//!
//! Parsing is keyword-boundary based rather than a full SQL grammar: the
//! text is split once on `WHERE`, once on `ORDER BY`, the `LIMIT <int>`
//! tail is pattern-matched, and the WHERE clause is split on `AND`
//! (conjunction only). Each conjunct is classified by shape, `IN (...)`
//! over an enumerated column, or `<column> <op> <number>` over a numeric
//! column, and a conjunct matching neither shape degrades to the
//! always-true predicate instead of failing. `parse_query` is total: the
//! player always gets a result set, possibly a wrong one, while a query is
//! still half-typed.

use crate::ast::{CompareOp, OrderSpec, Predicate, QueryPlan, SortOrder};
use alloc::string::String;
use alloc::vec::Vec;
use dataduel_core::Field;

/// Parses dialect text into a query plan. Never fails.
pub fn parse_query(text: &str) -> QueryPlan {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return QueryPlan::empty();
    }

    let is_count = detect_count(&normalized);

    let (rest, limit) = split_limit(&normalized);
    let (rest, order) = split_order(rest);
    let predicates = match rest.split_once(" where ") {
        Some((_, where_clause)) => parse_conjuncts(where_clause),
        None => Vec::new(),
    };

    QueryPlan::new(predicates, order, limit, is_count)
}

/// Lower-cases the text and collapses whitespace runs to single spaces so
/// the keyword splits see one canonical spacing.
fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    tokens.join(" ")
}

/// Detects the `COUNT(*)` select shape. The SELECT list never affects row
/// selection; this only routes count-style grading.
fn detect_count(normalized: &str) -> bool {
    let select_part = match normalized.split_once(" from ") {
        Some((head, _)) => head,
        None => match normalized.split_once(" where ") {
            Some((head, _)) => head,
            None => normalized,
        },
    };
    let compact: String = select_part.split_whitespace().collect();
    compact.contains("count(*)")
}

/// Extracts a trailing `LIMIT <uint>`. A token that is not a non-negative
/// integer fails the pattern and leaves the text untouched, so the clause
/// reads as absent.
fn split_limit(text: &str) -> (&str, Option<usize>) {
    if let Some((head, tail)) = text.rsplit_once(" limit ") {
        if let Some(token) = tail.split_whitespace().next() {
            if let Ok(limit) = token.parse::<usize>() {
                return (head, Some(limit));
            }
        }
    }
    (text, None)
}

/// Splits off the ORDER BY clause: one column, optional direction token,
/// default descending. An unknown column yields no ordering.
fn split_order(text: &str) -> (&str, Option<OrderSpec>) {
    match text.split_once(" order by ") {
        Some((head, clause)) => (head, parse_order(clause)),
        None => (text, None),
    }
}

fn parse_order(clause: &str) -> Option<OrderSpec> {
    let mut tokens = clause.split_whitespace();
    let field = Field::parse(tokens.next()?)?;
    let direction = match tokens.next() {
        Some("asc") => SortOrder::Asc,
        _ => SortOrder::Desc,
    };
    Some(OrderSpec::new(field, direction))
}

/// Splits the WHERE clause on `AND` and classifies each conjunct.
fn parse_conjuncts(clause: &str) -> Vec<Predicate> {
    clause
        .split(" and ")
        .map(|conjunct| parse_conjunct(conjunct.trim()))
        .collect()
}

/// Exactly one predicate per conjunct; unmatched shapes degrade to the
/// always-true predicate.
fn parse_conjunct(text: &str) -> Predicate {
    parse_in_list(text)
        .or_else(|| parse_comparison(text))
        .unwrap_or(Predicate::Always)
}

/// `<column> IN (<quoted-literal>, ...)` over an enumerated column.
///
/// A missing closing parenthesis is tolerated (the player may still be
/// typing); quotes around literals are optional.
fn parse_in_list(text: &str) -> Option<Predicate> {
    let (head, tail) = text.split_once('(')?;
    let mut head_tokens = head.split_whitespace();
    let field = Field::parse(head_tokens.next()?)?;
    if head_tokens.next() != Some("in") || head_tokens.next().is_some() {
        return None;
    }
    if !field.is_enumerated() {
        return None;
    }

    let inner = match tail.find(')') {
        Some(pos) => &tail[..pos],
        None => tail,
    };
    let values: Vec<String> = inner
        .split(',')
        .map(unquote)
        .filter(|v| !v.is_empty())
        .collect();
    Some(Predicate::in_set(field, values))
}

fn unquote(literal: &str) -> String {
    literal
        .trim()
        .trim_matches('\'')
        .trim_matches('"')
        .trim()
        .into()
}

/// `<column> <op> <number>` over a numeric column.
///
/// The column is the token immediately left of the operator and the value
/// is the token immediately right of it, so stray trailing text (an
/// unmatched LIMIT fragment, say) does not discard an otherwise valid
/// comparison.
fn parse_comparison(text: &str) -> Option<Predicate> {
    let (lhs, op, rhs) = split_operator(text)?;
    let field = Field::parse(lhs.split_whitespace().next_back()?)?;
    if !field.is_numeric() {
        return None;
    }
    let value: f64 = rhs.split_whitespace().next()?.parse().ok()?;
    Some(Predicate::compare(field, op, value))
}

/// Finds the first comparison operator, trying the two-character spellings
/// before their one-character prefixes.
fn split_operator(text: &str) -> Option<(&str, CompareOp, &str)> {
    for token in ["<=", ">=", "=", "<", ">"] {
        if let Some(pos) = text.find(token) {
            let op = CompareOp::parse(token)?;
            return Some((&text[..pos], op, &text[pos + token.len()..]));
        }
    }
    None
}
