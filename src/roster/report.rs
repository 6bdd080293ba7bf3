//! Report line rendering.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::PersonId;

/// One line of the payment report.
///
/// # Example
///
/// ```
/// use payroll_roster::models::PersonId;
/// use payroll_roster::roster::ReportLine;
/// use rust_decimal::Decimal;
///
/// let line = ReportLine {
///     position: "Student".to_string(),
///     id: PersonId::new(3),
///     name: "Paul".to_string(),
///     surname: "McCartney".to_string(),
///     amount: Decimal::new(3_666_000, 2),
///     currency: "tenge".to_string(),
/// };
/// assert_eq!(line.to_string(), "Student: 3. Paul McCartney earns 36660.0 tenge");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    /// The label prefixing the line, a variant name or a role title.
    pub position: String,
    /// The person's id.
    pub id: PersonId,
    /// First name, empty when unset.
    pub name: String,
    /// Surname, empty when unset.
    pub surname: String,
    /// The payment amount.
    pub amount: Decimal,
    /// Currency word printed after the amount.
    pub currency: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}. {} {} earns {} {}",
            self.position,
            self.id,
            self.name,
            self.surname,
            format_amount(self.amount),
            self.currency
        )
    }
}

/// Formats an amount with trailing zeros stripped and at least one decimal place.
///
/// # Examples
///
/// ```
/// use payroll_roster::roster::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::ZERO), "0.0");
/// assert_eq!(format_amount(Decimal::new(2_704_578, 2)), "27045.78");
/// assert_eq!(format_amount(Decimal::new(5_000_000, 2)), "50000.0");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}
