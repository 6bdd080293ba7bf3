//! Configuration loading for the payroll roster.
//!
//! Payment rules default to the stipend, GPA threshold, currency and line
//! label the report has always used. They can also be read from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_roster::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payment_rules.yaml").unwrap();
//! println!("Stipend: {}", loader.rules().student_stipend);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_CURRENCY, LabelStyle, PaymentRules, student_gpa_threshold, student_stipend,
};
