//! Error types for the payroll roster.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the roster can surface to its caller.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::PersonId;

/// The main error type for the payroll roster.
///
/// # Example
///
/// ```
/// use payroll_roster::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but carried an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A student's GPA was outside the 0.0 to 4.0 scale.
    #[error("Invalid GPA {gpa} for person {id}: expected a value between 0.0 and 4.0")]
    InvalidGpa {
        /// The person carrying the GPA.
        id: PersonId,
        /// The rejected GPA.
        gpa: Decimal,
    },

    /// An employee's salary was below zero.
    #[error("Negative salary {salary} for person {id}")]
    NegativeSalary {
        /// The person carrying the salary.
        id: PersonId,
        /// The rejected salary.
        salary: Decimal,
    },

    /// Writing report lines to the output stream failed.
    #[error("Failed to write report: {0}")]
    ReportWrite(#[from] std::io::Error),
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = RosterError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = RosterError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = RosterError::InvalidConfig {
            field: "student_stipend".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'student_stipend': must not be negative"
        );
    }

    #[test]
    fn test_invalid_gpa_displays_id_and_value() {
        let error = RosterError::InvalidGpa {
            id: PersonId::new(7),
            gpa: Decimal::new(45, 1),
        };
        assert_eq!(
            error.to_string(),
            "Invalid GPA 4.5 for person 7: expected a value between 0.0 and 4.0"
        );
    }

    #[test]
    fn test_negative_salary_displays_id_and_value() {
        let error = RosterError::NegativeSalary {
            id: PersonId::new(3),
            salary: Decimal::new(-100, 0),
        };
        assert_eq!(error.to_string(), "Negative salary -100 for person 3");
    }

    #[test]
    fn test_io_error_converts_into_report_write() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: RosterError = io.into();
        assert!(matches!(error, RosterError::ReportWrite(_)));
        assert_eq!(error.to_string(), "Failed to write report: pipe closed");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RosterError>();
    }
}
