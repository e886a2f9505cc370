//! Dataduel Core - Core domain types for the Dataduel scoring engine.
//!
//! This crate provides the foundational types shared by every other crate:
//!
//! - `Incident`: a single row of the synthetic incident table
//! - `Severity` / `Service` / `Field`: the enumerated column domains
//! - `Value`: a comparison-oriented scalar used for filtering and sorting
//! - `ExpectedAnswer`: the hidden correct answer of a challenge
//! - `Error`: error types for round operations
//!
//! # Example
//!
//! ```rust
//! use dataduel_core::{Field, Incident, Service, Severity, Value};
//!
//! let incident = Incident::new("INC-1000", Service::Payments, Severity::High, 42, 0.114, 910);
//!
//! assert_eq!(incident.id(), "INC-1000");
//! assert_eq!(incident.get(Field::Severity), Value::Text("high".into()));
//! assert_eq!(incident.get(Field::DurationMin), Value::Int(42));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod expected;
mod incident;
mod types;
mod value;

pub use error::{Error, Result};
pub use expected::{AnswerMode, ExpectedAnswer};
pub use incident::Incident;
pub use types::{Field, Service, Severity};
pub use value::Value;
