//! Comparators for ordering roster members.

use std::cmp::Ordering;

use crate::config::PaymentRules;
use crate::models::Person;

use super::payment_amount;

/// Returns a comparator ordering persons by ascending payment amount.
///
/// Only the amount is compared, so equal amounts compare as `Equal` and a
/// stable sort keeps their original relative order.
///
/// # Examples
///
/// ```
/// use payroll_roster::calculation::compare_by_payment;
/// use payroll_roster::config::PaymentRules;
/// use payroll_roster::models::Person;
/// use rust_decimal::Decimal;
///
/// let rules = PaymentRules::default();
/// let mut people = vec![
///     Person::employee("George", "Harrison", "Developer", Decimal::new(50_000, 0)),
///     Person::student("Ringo", "Starr", Decimal::new(25, 1)),
/// ];
/// people.sort_by(compare_by_payment(&rules));
/// assert_eq!(people[0].name(), Some("Ringo"));
/// ```
pub fn compare_by_payment(rules: &PaymentRules) -> impl Fn(&Person, &Person) -> Ordering + '_ {
    move |a, b| payment_amount(a, rules).cmp(&payment_amount(b, rules))
}
