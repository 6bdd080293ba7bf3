//! Person record, identity assignment and the role variants.
//!
//! Every roster member is a [`Person`] carrying shared identity fields and
//! exactly one [`Role`]. Ids are drawn from a process-wide counter the
//! moment a person is constructed, whatever the role.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{RosterError, RosterResult};

/// Position label reported by students, and by unassigned persons.
pub const STUDENT_LABEL: &str = "Student";

/// Prefix the legacy rendering puts in front of employee records.
pub const EMPLOYEE_PREFIX: &str = "Employee";

// Starts at 1, only ever incremented. Never wraps.
static NEXT_ID: AtomicU32 = AtomicU32::new(1);

fn max_gpa() -> Decimal {
    Decimal::new(4, 0)
}

fn advance(current: u32) -> Option<u32> {
    current.checked_add(1)
}

/// Draws the next id.
///
/// # Panics
///
/// Panics once `u32::MAX` ids have been handed out. Reusing an id would break
/// uniqueness, and the process cannot recover from that.
fn next_id() -> PersonId {
    match NEXT_ID.fetch_update(Ordering::Relaxed, Ordering::Relaxed, advance) {
        Ok(raw) => {
            let id = PersonId(raw);
            debug!(id = %id, "Assigned person id");
            id
        }
        Err(raw) => {
            error!(last = raw, "Person id space exhausted");
            panic!("person id space exhausted after {raw}");
        }
    }
}

/// Unique identifier of a person within one process run.
///
/// # Example
///
/// ```
/// use payroll_roster::models::PersonId;
///
/// assert_eq!(PersonId::new(4).to_string(), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonId(u32);

impl PersonId {
    /// Wraps a raw id value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee payload: a free-text position and a salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRole {
    /// The role title, e.g. "Manager" or "Developer".
    pub position: String,
    /// The salary paid to this employee.
    pub salary: Decimal,
}

/// Student payload: a grade point average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRole {
    /// Grade point average, nominally on a 0.0 to 4.0 scale.
    pub gpa: Decimal,
}

/// The variant a person belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Role {
    /// A salaried employee.
    Employee(EmployeeRole),
    /// A student who may earn a stipend.
    Student(StudentRole),
    /// A bare person with no specialization. Earns nothing.
    Unassigned,
}

/// A roster member.
///
/// # Example
///
/// ```
/// use payroll_roster::models::Person;
/// use rust_decimal::Decimal;
///
/// let first = Person::student("Ringo", "Starr", Decimal::new(25, 1));
/// let second = Person::employee("John", "Lennon", "Manager", Decimal::new(2704578, 2));
/// assert!(second.id() > first.id());
/// assert_eq!(second.position_label(), "Manager");
/// assert_eq!(first.position_label(), "Student");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    id: PersonId,
    name: Option<String>,
    surname: Option<String>,
    role: Role,
}

impl Person {
    /// Creates an unnamed person with the given role and a fresh id.
    pub fn new(role: Role) -> Self {
        Self {
            id: next_id(),
            name: None,
            surname: None,
            role,
        }
    }

    /// Creates an employee.
    pub fn employee(
        name: impl Into<String>,
        surname: impl Into<String>,
        position: impl Into<String>,
        salary: Decimal,
    ) -> Self {
        Self::new(Role::Employee(EmployeeRole {
            position: position.into(),
            salary,
        }))
        .with_names(name, surname)
    }

    /// Creates a student.
    pub fn student(name: impl Into<String>, surname: impl Into<String>, gpa: Decimal) -> Self {
        Self::new(Role::Student(StudentRole { gpa })).with_names(name, surname)
    }

    /// Creates a person with no specialization.
    pub fn unassigned(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self::new(Role::Unassigned).with_names(name, surname)
    }

    fn with_names(mut self, name: impl Into<String>, surname: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.surname = Some(surname.into());
        self
    }

    /// Returns the id assigned at construction.
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Returns the first name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the first name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns the surname, if set.
    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    /// Sets the surname.
    pub fn set_surname(&mut self, surname: impl Into<String>) {
        self.surname = Some(surname.into());
    }

    /// Returns the role.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Returns the role for in-place edits of salary, position or GPA.
    pub fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }

    /// Returns the salary if this person is an employee.
    pub fn salary(&self) -> Option<Decimal> {
        match &self.role {
            Role::Employee(employee) => Some(employee.salary),
            Role::Student(_) | Role::Unassigned => None,
        }
    }

    /// Returns the GPA if this person is a student.
    pub fn gpa(&self) -> Option<Decimal> {
        match &self.role {
            Role::Student(student) => Some(student.gpa),
            Role::Employee(_) | Role::Unassigned => None,
        }
    }

    /// Sets the salary. Returns false, changing nothing, unless this person
    /// is an employee.
    pub fn set_salary(&mut self, salary: Decimal) -> bool {
        match &mut self.role {
            Role::Employee(employee) => {
                employee.salary = salary;
                true
            }
            Role::Student(_) | Role::Unassigned => false,
        }
    }

    /// Sets the GPA. Returns false, changing nothing, unless this person is
    /// a student.
    pub fn set_gpa(&mut self, gpa: Decimal) -> bool {
        match &mut self.role {
            Role::Student(student) => {
                student.gpa = gpa;
                true
            }
            Role::Employee(_) | Role::Unassigned => false,
        }
    }

    /// Returns the position label used as the report line prefix.
    ///
    /// An unassigned person reports "Student" as well. This mirrors the
    /// legacy output and is kept as its own match arm so it can be changed
    /// without touching the other variants.
    pub fn position_label(&self) -> &str {
        match &self.role {
            Role::Employee(employee) => &employee.position,
            Role::Student(_) => STUDENT_LABEL,
            Role::Unassigned => STUDENT_LABEL,
        }
    }

    /// Returns the variant name: "Employee", or "Student" for students and
    /// unassigned persons alike.
    pub fn variant_label(&self) -> &'static str {
        match &self.role {
            Role::Employee(_) => EMPLOYEE_PREFIX,
            Role::Student(_) | Role::Unassigned => STUDENT_LABEL,
        }
    }

    /// Checks salary sign and GPA range.
    ///
    /// Construction never validates; callers that take external data opt in here.
    pub fn validate(&self) -> RosterResult<()> {
        match &self.role {
            Role::Employee(employee) if employee.salary < Decimal::ZERO => {
                warn!(id = %self.id, salary = %employee.salary, "Rejected negative salary");
                Err(RosterError::NegativeSalary {
                    id: self.id,
                    salary: employee.salary,
                })
            }
            Role::Student(student) if student.gpa < Decimal::ZERO || student.gpa > max_gpa() => {
                warn!(id = %self.id, gpa = %student.gpa, "Rejected out-of-range GPA");
                Err(RosterError::InvalidGpa {
                    id: self.id,
                    gpa: student.gpa,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Legacy rendering: `<prefix>: <label>: <id>. <name> <surname>`.
///
/// Employees are prefixed with "Employee" and students with "Student", so a
/// student line repeats the word. Unassigned persons carry no prefix.
/// Absent names render as empty text.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.role {
            Role::Employee(_) => write!(f, "{EMPLOYEE_PREFIX}: ")?,
            Role::Student(_) => write!(f, "{STUDENT_LABEL}: ")?,
            Role::Unassigned => {}
        }
        write!(
            f,
            "{}: {}. {} {}",
            self.position_label(),
            self.id,
            self.name().unwrap_or_default(),
            self.surname().unwrap_or_default()
        )
    }
}
