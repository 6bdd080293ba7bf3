//! Roster pipeline for the payroll report.
//!
//! A [`Roster`] collects persons in insertion order, sorts them by payment
//! amount and renders one [`ReportLine`] per person.

mod pipeline;
mod report;

pub use pipeline::{Roster, RosterState};
pub use report::{ReportLine, format_amount};
