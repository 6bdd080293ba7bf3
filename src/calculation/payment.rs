//! Payment amount calculation.
//!
//! This module computes what each roster member earns. Employees earn their
//! salary; students earn the stipend only when their GPA is strictly above
//! the threshold; unassigned persons earn nothing.

use rust_decimal::Decimal;

use crate::config::PaymentRules;
use crate::models::{AuditStep, Person, Role};

/// The result of a payment calculation, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct PaymentResult {
    /// The amount this person is paid.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the payment amount for a person under the given rules.
///
/// # Examples
///
/// ```
/// use payroll_roster::calculation::payment_amount;
/// use payroll_roster::config::PaymentRules;
/// use payroll_roster::models::Person;
/// use rust_decimal::Decimal;
///
/// let rules = PaymentRules::default();
/// let paul = Person::student("Paul", "McCartney", Decimal::new(30, 1));
/// let ringo = Person::student("Ringo", "Starr", Decimal::new(25, 1));
///
/// assert_eq!(payment_amount(&paul, &rules), Decimal::new(3_666_000, 2));
/// assert_eq!(payment_amount(&ringo, &rules), Decimal::ZERO);
/// ```
pub fn payment_amount(person: &Person, rules: &PaymentRules) -> Decimal {
    match person.role() {
        Role::Employee(employee) => employee.salary,
        Role::Student(student) if student.gpa > rules.gpa_threshold => rules.student_stipend,
        Role::Student(_) => Decimal::ZERO,
        Role::Unassigned => Decimal::ZERO,
    }
}

/// Computes the payment amount for a person and records why.
///
/// # Arguments
///
/// * `person` - The roster member to pay
/// * `rules` - Stipend and threshold to apply to students
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_payment(
    person: &Person,
    rules: &PaymentRules,
    step_number: u32,
) -> PaymentResult {
    let amount = payment_amount(person, rules);
    let person_id = person.id().value();

    let audit_step = match person.role() {
        Role::Employee(employee) => AuditStep {
            step_number,
            rule_id: "employee_salary".to_string(),
            rule_name: "Employee Salary".to_string(),
            person_id,
            input: serde_json::json!({
                "position": employee.position,
                "salary": employee.salary.to_string()
            }),
            output: serde_json::json!({
                "amount": amount.to_string()
            }),
            reasoning: format!("{} is paid their salary of {}", employee.position, amount),
        },
        Role::Student(student) => {
            let granted = student.gpa > rules.gpa_threshold;
            let reasoning = if granted {
                format!(
                    "GPA {} > {}, stipend of {} granted",
                    student.gpa, rules.gpa_threshold, rules.student_stipend
                )
            } else {
                format!(
                    "GPA {} does not exceed {}, no stipend",
                    student.gpa, rules.gpa_threshold
                )
            };
            AuditStep {
                step_number,
                rule_id: "student_stipend".to_string(),
                rule_name: "Student Stipend".to_string(),
                person_id,
                input: serde_json::json!({
                    "gpa": student.gpa.to_string(),
                    "threshold": rules.gpa_threshold.to_string()
                }),
                output: serde_json::json!({
                    "amount": amount.to_string(),
                    "stipend_granted": granted
                }),
                reasoning,
            }
        }
        Role::Unassigned => AuditStep {
            step_number,
            rule_id: "unassigned".to_string(),
            rule_name: "No Role".to_string(),
            person_id,
            input: serde_json::json!({}),
            output: serde_json::json!({
                "amount": amount.to_string()
            }),
            reasoning: "Person has no role and is not paid".to_string(),
        },
    };

    PaymentResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{student_gpa_threshold, student_stipend};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_employee_paid_salary_exactly() {
        let person = Person::employee("John", "Lennon", "Manager", dec("27045.78"));
        assert_eq!(payment_amount(&person, &PaymentRules::default()), dec("27045.78"));
    }

    #[test]
    fn test_employee_with_zero_salary_paid_zero() {
        let person = Person::employee("Pete", "Best", "Drummer", Decimal::ZERO);
        assert_eq!(payment_amount(&person, &PaymentRules::default()), Decimal::ZERO);
    }

    #[test]
    fn test_student_above_threshold_gets_stipend() {
        let person = Person::student("Paul", "McCartney", dec("3.0"));
        assert_eq!(payment_amount(&person, &PaymentRules::default()), dec("36660.00"));
    }

    #[test]
    fn test_student_below_threshold_gets_nothing() {
        let person = Person::student("Ringo", "Starr", dec("2.5"));
        assert_eq!(payment_amount(&person, &PaymentRules::default()), Decimal::ZERO);
    }

    #[test]
    fn test_student_at_threshold_gets_nothing() {
        let person = Person::student("Stuart", "Sutcliffe", dec("2.67"));
        assert_eq!(payment_amount(&person, &PaymentRules::default()), Decimal::ZERO);
    }

    #[test]
    fn test_student_just_above_threshold_gets_stipend() {
        let person = Person::student("Stuart", "Sutcliffe", dec("2.671"));
        assert_eq!(payment_amount(&person, &PaymentRules::default()), dec("36660.00"));
    }

    #[test]
    fn test_unassigned_paid_zero() {
        let person = Person::unassigned("Brian", "Epstein");
        assert_eq!(payment_amount(&person, &PaymentRules::default()), Decimal::ZERO);
    }

    #[test]
    fn test_custom_rules_change_student_outcome() {
        let rules = PaymentRules {
            student_stipend: dec("1000"),
            gpa_threshold: dec("3.5"),
            ..PaymentRules::default()
        };
        let person = Person::student("Paul", "McCartney", dec("3.0"));
        assert_eq!(payment_amount(&person, &rules), Decimal::ZERO);

        let honours = Person::student("George", "Martin", dec("3.9"));
        assert_eq!(payment_amount(&honours, &rules), dec("1000"));
    }

    #[test]
    fn test_audit_step_for_granted_stipend() {
        let person = Person::student("Paul", "McCartney", dec("3.0"));
        let result = calculate_payment(&person, &PaymentRules::default(), 3);

        assert_eq!(result.amount, dec("36660.00"));
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "student_stipend");
        assert_eq!(result.audit_step.person_id, person.id().value());
        assert_eq!(result.audit_step.input["gpa"].as_str().unwrap(), "3.0");
        assert!(result.audit_step.output["stipend_granted"].as_bool().unwrap());
        assert!(result.audit_step.reasoning.contains("3.0 > 2.67"));
    }

    #[test]
    fn test_audit_step_for_denied_stipend() {
        let person = Person::student("Ringo", "Starr", dec("2.5"));
        let result = calculate_payment(&person, &PaymentRules::default(), 1);

        assert_eq!(result.amount, Decimal::ZERO);
        assert!(!result.audit_step.output["stipend_granted"].as_bool().unwrap());
        assert!(result.audit_step.reasoning.contains("no stipend"));
    }

    #[test]
    fn test_audit_step_for_employee() {
        let person = Person::employee("George", "Harrison", "Developer", dec("50000.00"));
        let result = calculate_payment(&person, &PaymentRules::default(), 2);

        assert_eq!(result.audit_step.rule_id, "employee_salary");
        assert_eq!(result.audit_step.input["position"], "Developer");
        assert_eq!(result.audit_step.output["amount"], "50000.00");
    }

    #[test]
    fn test_audit_step_for_unassigned() {
        let person = Person::unassigned("Brian", "Epstein");
        let result = calculate_payment(&person, &PaymentRules::default(), 1);

        assert_eq!(result.audit_step.rule_id, "unassigned");
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_set_gpa_moves_student_across_threshold() {
        let rules = PaymentRules::default();
        let mut person = Person::student("Ringo", "Starr", dec("2.5"));
        assert_eq!(payment_amount(&person, &rules), Decimal::ZERO);

        assert!(person.set_gpa(dec("3.2")));
        assert_eq!(payment_amount(&person, &rules), dec("36660.00"));
    }

    #[test]
    fn test_set_salary_changes_employee_payment() {
        let rules = PaymentRules::default();
        let mut person = Person::employee("John", "Lennon", "Manager", dec("27045.78"));

        assert!(person.set_salary(dec("31000.10")));
        assert_eq!(payment_amount(&person, &rules), dec("31000.10"));
    }

    #[test]
    fn test_setter_on_wrong_variant_leaves_payment_unchanged() {
        let rules = PaymentRules::default();
        let mut student = Person::student("Paul", "McCartney", dec("3.0"));
        let mut employee = Person::employee("George", "Harrison", "Developer", dec("50000.00"));

        assert!(!student.set_salary(dec("99999")));
        assert!(!employee.set_gpa(dec("1.0")));
        assert_eq!(payment_amount(&student, &rules), dec("36660.00"));
        assert_eq!(payment_amount(&employee, &rules), dec("50000.00"));
    }

    proptest! {
        #[test]
        fn prop_student_paid_stipend_only_above_threshold(hundredths in 0i64..=400) {
            let gpa = Decimal::new(hundredths, 2);
            let person = Person::student("S", "S", gpa);
            let amount = payment_amount(&person, &PaymentRules::default());

            if gpa > student_gpa_threshold() {
                prop_assert_eq!(amount, student_stipend());
            } else {
                prop_assert_eq!(amount, Decimal::ZERO);
            }
        }

        #[test]
        fn prop_employee_paid_salary_exactly(cents in 0i64..1_000_000_000) {
            let salary = Decimal::new(cents, 2);
            let person = Person::employee("E", "E", "Staff", salary);

            prop_assert_eq!(payment_amount(&person, &PaymentRules::default()), salary);
        }
    }
}
