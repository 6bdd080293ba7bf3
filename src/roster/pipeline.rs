//! The roster pipeline: collect persons, order them, report on them.

use std::cmp::Ordering;
use std::io::{self, Write};

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::{calculate_payment, compare_by_payment, payment_amount};
use crate::config::{LabelStyle, PaymentRules};
use crate::error::RosterResult;
use crate::models::{AuditStep, Person};

use super::report::ReportLine;

/// Whether the roster is still in insertion order or has been sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterState {
    /// Entries are in the order they were added.
    Unsorted,
    /// Entries were ordered by the most recent sort.
    Sorted,
}

/// An ordered, mutable collection of persons.
///
/// # Example
///
/// ```
/// use payroll_roster::models::Person;
/// use payroll_roster::roster::Roster;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// roster.add_person(Person::employee("George", "Harrison", "Developer", Decimal::new(50_000, 0)));
/// roster.add_person(Person::student("Ringo", "Starr", Decimal::new(25, 1)));
/// roster.sort_by_payment();
///
/// let lines = roster.report_lines();
/// assert_eq!(lines[0].name, "Ringo");
/// ```
#[derive(Debug, Clone)]
pub struct Roster {
    people: Vec<Person>,
    rules: PaymentRules,
    state: RosterState,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Creates an empty roster using the default payment rules.
    pub fn new() -> Self {
        Self::with_rules(PaymentRules::default())
    }

    /// Creates an empty roster using the given payment rules.
    pub fn with_rules(rules: PaymentRules) -> Self {
        Self {
            people: Vec::new(),
            rules,
            state: RosterState::Unsorted,
        }
    }

    /// Appends a person.
    pub fn add_person(&mut self, person: Person) {
        debug!(id = %person.id(), "Adding person to roster");
        self.people.push(person);
        self.state = RosterState::Unsorted;
    }

    /// Validates a person, then appends it.
    ///
    /// The roster is left untouched when validation fails.
    pub fn add_validated(&mut self, person: Person) -> RosterResult<()> {
        person.validate()?;
        self.add_person(person);
        Ok(())
    }

    /// Sorts by ascending payment amount. Equal amounts keep their relative order.
    pub fn sort_by_payment(&mut self) {
        let rules = &self.rules;
        self.people.sort_by(compare_by_payment(rules));
        self.state = RosterState::Sorted;
        debug!(count = self.people.len(), "Sorted roster by payment amount");
    }

    /// Stable sort with a caller-supplied comparator.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Person, &Person) -> Ordering,
    {
        self.people.sort_by(compare);
        self.state = RosterState::Sorted;
    }

    /// Returns the persons in their current order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the number of persons.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns true if the roster has no persons.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Returns the current state.
    pub fn state(&self) -> RosterState {
        self.state
    }

    /// Returns the payment rules in use.
    pub fn rules(&self) -> &PaymentRules {
        &self.rules
    }

    /// Returns the payment amount of a person under this roster's rules.
    pub fn payment_of(&self, person: &Person) -> Decimal {
        payment_amount(person, &self.rules)
    }

    /// Builds one report line per person, in current order.
    pub fn report_lines(&self) -> Vec<ReportLine> {
        self.people
            .iter()
            .map(|person| ReportLine {
                position: self.label_for(person).to_string(),
                id: person.id(),
                name: person.name().unwrap_or_default().to_string(),
                surname: person.surname().unwrap_or_default().to_string(),
                amount: payment_amount(person, &self.rules),
                currency: self.rules.currency.clone(),
            })
            .collect()
    }

    fn label_for<'a>(&self, person: &'a Person) -> &'a str {
        match self.rules.label_style {
            LabelStyle::Variant => person.variant_label(),
            LabelStyle::Position => person.position_label(),
        }
    }

    /// Returns one audit step per person explaining their payment.
    pub fn payment_audit(&self) -> Vec<AuditStep> {
        self.people
            .iter()
            .zip(1u32..)
            .map(|(person, step)| calculate_payment(person, &self.rules, step).audit_step)
            .collect()
    }

    /// Writes the report to `out`, one line per person.
    pub fn write_report<W: Write>(&self, mut out: W) -> RosterResult<()> {
        let lines = self.report_lines();
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        info!(lines = lines.len(), state = ?self.state, "Wrote payment report");
        Ok(())
    }

    /// Writes the report to standard output.
    pub fn print_report(&self) -> RosterResult<()> {
        let stdout = io::stdout();
        self.write_report(stdout.lock())
    }
}

impl Extend<Person> for Roster {
    fn extend<I: IntoIterator<Item = Person>>(&mut self, iter: I) {
        for person in iter {
            self.add_person(person);
        }
    }
}
