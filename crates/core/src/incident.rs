//! Incident record for the synthetic dataset.
//!
//! This module defines the `Incident` struct, one row of the incident table.

use crate::types::{Field, Service, Severity};
use crate::value::Value;
use alloc::string::String;

/// A single incident row.
///
/// Incidents are created once by the dataset generator and never mutated;
/// there are no setters.
#[derive(Clone, Debug, PartialEq)]
pub struct Incident {
    /// Opaque identifier, unique within a dataset.
    id: String,
    /// Service the incident is attributed to.
    service: Service,
    /// Incident severity.
    severity: Severity,
    /// Duration in minutes.
    duration_min: u32,
    /// Error rate in [0, 1].
    error_rate: f64,
    /// Number of affected users.
    affected_users: u32,
}

impl Incident {
    /// Creates a new incident.
    pub fn new(
        id: impl Into<String>,
        service: Service,
        severity: Severity,
        duration_min: u32,
        error_rate: f64,
        affected_users: u32,
    ) -> Self {
        Self {
            id: id.into(),
            service,
            severity,
            duration_min,
            error_rate,
            affected_users,
        }
    }

    /// Returns the incident id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the service.
    #[inline]
    pub fn service(&self) -> Service {
        self.service
    }

    /// Returns the severity.
    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.duration_min
    }

    /// Returns the error rate.
    #[inline]
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Returns the number of affected users.
    #[inline]
    pub fn affected_users(&self) -> u32 {
        self.affected_users
    }

    /// Reads the value of a column.
    ///
    /// Text columns (`id`, `service`, `severity`) come back as `Value::Text`
    /// so that ordering over them is lexicographic.
    pub fn get(&self, field: Field) -> Value {
        match field {
            Field::Id => Value::Text(self.id.clone()),
            Field::Service => Value::Text(self.service.as_str().into()),
            Field::Severity => Value::Text(self.severity.as_str().into()),
            Field::DurationMin => Value::Int(self.duration_min as i64),
            Field::ErrorRate => Value::Float(self.error_rate),
            Field::AffectedUsers => Value::Int(self.affected_users as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Incident {
        Incident::new("INC-1007", Service::Auth, Severity::Critical, 55, 0.134, 2210)
    }

    #[test]
    fn test_incident_accessors() {
        let incident = sample();
        assert_eq!(incident.id(), "INC-1007");
        assert_eq!(incident.service(), Service::Auth);
        assert_eq!(incident.severity(), Severity::Critical);
        assert_eq!(incident.duration_min(), 55);
        assert_eq!(incident.error_rate(), 0.134);
        assert_eq!(incident.affected_users(), 2210);
    }

    #[test]
    fn test_incident_get_text_fields() {
        let incident = sample();
        assert_eq!(incident.get(Field::Id), Value::Text("INC-1007".into()));
        assert_eq!(incident.get(Field::Service), Value::Text("auth".into()));
        assert_eq!(incident.get(Field::Severity), Value::Text("critical".into()));
    }

    #[test]
    fn test_incident_get_numeric_fields() {
        let incident = sample();
        assert_eq!(incident.get(Field::DurationMin), Value::Int(55));
        assert_eq!(incident.get(Field::ErrorRate), Value::Float(0.134));
        assert_eq!(incident.get(Field::AffectedUsers), Value::Int(2210));
    }

    #[test]
    fn test_incident_equality() {
        assert_eq!(sample(), sample());
        let other = Incident::new("INC-1008", Service::Auth, Severity::Critical, 55, 0.134, 2210);
        assert_ne!(sample(), other);
    }
}
