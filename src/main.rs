use std::process::ExitCode;

use rust_decimal::Decimal;
use tracing::error;

use payroll_roster::models::Person;
use payroll_roster::roster::Roster;
use payroll_roster::telemetry;

fn build_roster() -> Roster {
    let mut roster = Roster::new();
    roster.add_person(Person::employee(
        "John",
        "Lennon",
        "Manager",
        Decimal::new(2_704_578, 2),
    ));
    roster.add_person(Person::student("Ringo", "Starr", Decimal::new(25, 1)));
    roster.add_person(Person::student("Paul", "McCartney", Decimal::new(30, 1)));
    roster.add_person(Person::employee(
        "George",
        "Harrison",
        "Developer",
        Decimal::new(5_000_000, 2),
    ));
    roster
}

fn main() -> ExitCode {
    telemetry::init_logging();

    let mut roster = build_roster();
    roster.sort_by_payment();

    match roster.print_report() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed to print report");
            ExitCode::FAILURE
        }
    }
}
