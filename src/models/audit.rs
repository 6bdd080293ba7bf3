//! Audit records explaining how a payment amount was reached.

use serde::{Deserialize, Serialize};

/// A single step in a payment audit, recording which rule fired and why.
///
/// # Example
///
/// ```
/// use payroll_roster::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "employee_salary".to_string(),
///     rule_name: "Employee Salary".to_string(),
///     person_id: 4,
///     input: serde_json::json!({"salary": "50000.00"}),
///     output: serde_json::json!({"amount": "50000.00"}),
///     reasoning: "Employee is paid their salary of 50000.00".to_string(),
/// };
/// assert_eq!(step.rule_id, "employee_salary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The raw id of the person the rule was applied to.
    pub person_id: u32,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
