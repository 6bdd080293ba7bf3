//! Payment roster for employees and students.
//!
//! This crate models a roster of persons, each an employee or a student,
//! computes what each is paid, sorts the roster by that amount and renders
//! a plain-text report.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod telemetry;
