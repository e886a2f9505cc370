//! Column domain definitions for the incident table.
//!
//! This module defines the enumerated column domains (`Severity`, `Service`)
//! and the `Field` enum naming the six incident columns.

/// Incident severity, ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, in ascending order. Used for uniform draws.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Returns the lower-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Resolves a lower-case name to a severity.
    pub fn parse(name: &str) -> Option<Severity> {
        Severity::ALL.iter().copied().find(|s| s.as_str() == name)
    }
}

/// Services that incidents are attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    Payments,
    Auth,
    Search,
    Catalog,
    Notifications,
}

impl Service {
    /// All services. Used for uniform draws.
    pub const ALL: [Service; 5] = [
        Service::Payments,
        Service::Auth,
        Service::Search,
        Service::Catalog,
        Service::Notifications,
    ];

    /// Returns the lower-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Payments => "payments",
            Service::Auth => "auth",
            Service::Search => "search",
            Service::Catalog => "catalog",
            Service::Notifications => "notifications",
        }
    }

    /// Resolves a lower-case name to a service.
    pub fn parse(name: &str) -> Option<Service> {
        Service::ALL.iter().copied().find(|s| s.as_str() == name)
    }
}

/// The six columns of the incident table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Service,
    Severity,
    DurationMin,
    ErrorRate,
    AffectedUsers,
}

impl Field {
    /// Returns the canonical lower-case column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Service => "service",
            Field::Severity => "severity",
            Field::DurationMin => "duration_min",
            Field::ErrorRate => "error_rate",
            Field::AffectedUsers => "affected_users",
        }
    }

    /// Resolves a lower-case column name to a field.
    ///
    /// Both the snake_case and the compact spellings of the multi-word
    /// columns resolve, matching the leniency of the query dialect.
    pub fn parse(name: &str) -> Option<Field> {
        match name {
            "id" => Some(Field::Id),
            "service" => Some(Field::Service),
            "severity" => Some(Field::Severity),
            "duration_min" | "durationmin" => Some(Field::DurationMin),
            "error_rate" | "errorrate" => Some(Field::ErrorRate),
            "affected_users" | "affectedusers" => Some(Field::AffectedUsers),
            _ => None,
        }
    }

    /// Returns true if the column holds a numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Field::DurationMin | Field::ErrorRate | Field::AffectedUsers
        )
    }

    /// Returns true if the column holds an enumerated text value.
    ///
    /// Only these columns participate in `IN (...)` predicates.
    pub fn is_enumerated(&self) -> bool {
        matches!(self, Field::Service | Field::Severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_severity_round_trip() {
        for severity in Severity::ALL {
            assert_eq!(Severity::parse(severity.as_str()), Some(severity));
        }
        assert_eq!(Severity::parse("fatal"), None);
    }

    #[test]
    fn test_service_round_trip() {
        for service in Service::ALL {
            assert_eq!(Service::parse(service.as_str()), Some(service));
        }
        assert_eq!(Service::parse("billing"), None);
    }

    #[test]
    fn test_field_round_trip() {
        for field in [
            Field::Id,
            Field::Service,
            Field::Severity,
            Field::DurationMin,
            Field::ErrorRate,
            Field::AffectedUsers,
        ] {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_field_parse_lenient() {
        assert_eq!(Field::parse("error_rate"), Some(Field::ErrorRate));
        assert_eq!(Field::parse("errorrate"), Some(Field::ErrorRate));
        assert_eq!(Field::parse("duration_min"), Some(Field::DurationMin));
        assert_eq!(Field::parse("affected_users"), Some(Field::AffectedUsers));
        assert_eq!(Field::parse("downtime"), None);
    }

    #[test]
    fn test_field_classification() {
        assert!(Field::ErrorRate.is_numeric());
        assert!(Field::DurationMin.is_numeric());
        assert!(Field::AffectedUsers.is_numeric());
        assert!(!Field::Service.is_numeric());

        assert!(Field::Service.is_enumerated());
        assert!(Field::Severity.is_enumerated());
        assert!(!Field::Id.is_enumerated());
    }
}
