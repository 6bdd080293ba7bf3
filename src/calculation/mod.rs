//! Calculation logic for the payroll roster.
//!
//! This module contains the payment rules for each role and the comparator
//! used to order a roster by payment amount.

mod ordering;
mod payment;

pub use ordering::compare_by_payment;
pub use payment::{PaymentResult, calculate_payment, payment_amount};
