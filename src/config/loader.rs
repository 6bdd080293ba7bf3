//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading
//! [`PaymentRules`] from YAML.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{RosterError, RosterResult};

use super::types::PaymentRules;

/// Loads and validates payment rules.
///
/// # Example
///
/// ```
/// use payroll_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_yaml_str("gpa_threshold: \"3.00\"\n", "inline")?;
/// assert_eq!(loader.rules().gpa_threshold.to_string(), "3.00");
/// # Ok::<(), payroll_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: PaymentRules,
}

impl ConfigLoader {
    /// Loads payment rules from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - The stipend or threshold is negative
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses payment rules from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> RosterResult<Self> {
        let rules: PaymentRules =
            serde_yaml::from_str(content).map_err(|e| RosterError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::check_non_negative("student_stipend", rules.student_stipend)?;
        Self::check_non_negative("gpa_threshold", rules.gpa_threshold)?;
        if rules.currency.trim().is_empty() {
            return Err(RosterError::InvalidConfig {
                field: "currency".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        debug!(
            origin,
            stipend = %rules.student_stipend,
            threshold = %rules.gpa_threshold,
            "Loaded payment rules"
        );
        Ok(Self { rules })
    }

    fn check_non_negative(field: &str, value: Decimal) -> RosterResult<()> {
        if value < Decimal::ZERO {
            return Err(RosterError::InvalidConfig {
                field: field.to_string(),
                message: format!("must not be negative, got {value}"),
            });
        }
        Ok(())
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &PaymentRules {
        &self.rules
    }

    /// Consumes the loader and returns the rules.
    pub fn into_rules(self) -> PaymentRules {
        self.rules
    }
}
