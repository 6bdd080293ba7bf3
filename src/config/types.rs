//! Configuration types for payment calculation.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Returns the stipend paid to a student whose GPA clears the threshold.
///
/// The stipend is 36660.00.
pub fn student_stipend() -> Decimal {
    Decimal::new(3_666_000, 2)
}

/// Returns the GPA a student must strictly exceed to earn the stipend.
///
/// The threshold is 2.67, so a GPA of exactly 2.67 earns nothing.
pub fn student_gpa_threshold() -> Decimal {
    Decimal::new(267, 2)
}

/// Currency word appended to report lines.
pub const DEFAULT_CURRENCY: &str = "tenge";

/// Which label prefixes each report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// The variant name: "Employee" or "Student".
    #[default]
    Variant,
    /// The position label: an employee's role title, or "Student".
    Position,
}

/// Rules used to compute payment amounts and label report lines.
///
/// Fields missing from a configuration file fall back to their defaults.
///
/// # Example
///
/// ```
/// use payroll_roster::config::{PaymentRules, student_stipend};
///
/// let rules = PaymentRules::default();
/// assert_eq!(rules.student_stipend, student_stipend());
/// assert_eq!(rules.currency, "tenge");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentRules {
    /// Stipend paid to qualifying students.
    pub student_stipend: Decimal,
    /// A student's GPA must be strictly greater than this to qualify.
    pub gpa_threshold: Decimal,
    /// Currency word printed after each amount.
    pub currency: String,
    /// Which label prefixes each report line.
    pub label_style: LabelStyle,
}

impl Default for PaymentRules {
    fn default() -> Self {
        Self {
            student_stipend: student_stipend(),
            gpa_threshold: student_gpa_threshold(),
            currency: DEFAULT_CURRENCY.to_string(),
            label_style: LabelStyle::Variant,
        }
    }
}
