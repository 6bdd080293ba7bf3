//! Core data models for the payroll roster.
//!
//! This module contains the person record with its role variants and the
//! audit records produced by payment calculation.

mod audit;
mod person;

pub use audit::AuditStep;
pub use person::{EMPLOYEE_PREFIX, EmployeeRole, Person, PersonId, Role, STUDENT_LABEL, StudentRole};
