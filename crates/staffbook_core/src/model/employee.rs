//! Employee domain model.
//!
//! # Responsibility
//! - Define the employee record and its category enumeration.
//! - Enforce age/category rules and salary/address normalization at
//!   construction.
//!
//! # Invariants
//! - `birth_date`, `category` and `email` never change after construction.
//! - `salary` is always inside `[SALARY_MIN, SALARY_MAX]`.
//! - `address` is never empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lower bound of the valid salary range, also the fallback salary.
pub const SALARY_MIN: i64 = 250_000;
/// Upper bound of the valid salary range.
pub const SALARY_MAX: i64 = 500_000;
/// City substituted when the address field is left blank.
pub const DEFAULT_CITY: &str = "San José";

const ADULT_AGE: i32 = 18;

/// Role classification for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Administrator,
    Operator,
    Laborer,
}

impl Category {
    /// Parses the console-facing label. Anything outside the whitelist is
    /// rejected by returning `None`.
    pub fn parse_label(value: &str) -> Option<Self> {
        match value {
            "Administrator" => Some(Self::Administrator),
            "Operator" => Some(Self::Operator),
            "Laborer" => Some(Self::Laborer),
            _ => None,
        }
    }

    /// Console-facing label, the same spelling `parse_label` accepts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Operator => "Operator",
            Self::Laborer => "Laborer",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failure raised while constructing an [`Employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// Age derived from the birth year is below 18.
    Underage { birth_year: i32, current_year: i32 },
    /// The birth date does not start with a parseable four-digit year.
    InvalidBirthDate(String),
    /// The category label is not one of the three known roles.
    UnknownCategory(String),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underage {
                birth_year,
                current_year,
            } => write!(
                f,
                "employee must be at least {ADULT_AGE} years old (born {birth_year}, current year {current_year})"
            ),
            Self::InvalidBirthDate(value) => {
                write!(f, "birth date `{value}` must start with a four-digit year")
            }
            Self::UnknownCategory(value) => write!(
                f,
                "unknown category `{value}`; expected Administrator|Operator|Laborer"
            ),
        }
    }
}

impl Error for EmployeeValidationError {}

/// Raw registration input as collected from the console, before any rule has
/// been applied. `category` stays a label string until validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// Identifying carnet number. Uniqueness is deliberately not enforced.
    pub carnet: i64,
    pub name: String,
    /// Expected shape `YYYY-MM-DD`; only the year participates in the age
    /// rule.
    pub birth_date: String,
    /// Console label, validated against [`Category::parse_label`].
    pub category: String,
    pub salary: i64,
    /// May be blank; a blank address becomes [`DEFAULT_CITY`].
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Validated employee record.
///
/// Only `name`, `address`, `phone` and `salary` are mutable after
/// construction, and only through [`Employee::apply_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub carnet: i64,
    pub name: String,
    pub birth_date: String,
    pub category: Category,
    pub salary: i64,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Fields an employee update is allowed to touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Applied only when inside `[SALARY_MIN, SALARY_MAX]`; otherwise the
    /// stored salary is silently retained.
    pub salary: i64,
}

impl Employee {
    /// Builds a validated employee from raw registration input.
    ///
    /// # Contract
    /// - Rejects a birth year that makes the employee younger than 18 in
    ///   `current_year`. Month and day are ignored on purpose: someone whose
    ///   18th birthday falls later this year still passes.
    /// - Rejects category labels outside the whitelist.
    /// - An out-of-range salary is replaced with `SALARY_MIN`, not rejected.
    /// - A blank address is replaced with `DEFAULT_CITY`.
    ///
    /// Email uniqueness is a registry concern checked at persistence time,
    /// not here.
    pub fn from_request(
        request: &NewEmployee,
        current_year: i32,
    ) -> Result<Self, EmployeeValidationError> {
        let birth_year = parse_birth_year(&request.birth_date)?;
        if current_year - birth_year < ADULT_AGE {
            return Err(EmployeeValidationError::Underage {
                birth_year,
                current_year,
            });
        }

        let category = Category::parse_label(&request.category)
            .ok_or_else(|| EmployeeValidationError::UnknownCategory(request.category.clone()))?;

        let address = if request.address.is_empty() {
            DEFAULT_CITY.to_string()
        } else {
            request.address.clone()
        };

        Ok(Self {
            carnet: request.carnet,
            name: request.name.clone(),
            birth_date: request.birth_date.clone(),
            category,
            salary: normalize_salary(request.salary),
            address,
            phone: request.phone.clone(),
            email: request.email.clone(),
        })
    }

    /// Overwrites the mutable fields.
    ///
    /// Name, address and phone are replaced unconditionally. The salary is
    /// replaced only when the new value is in range; an out-of-range value
    /// keeps the old salary without signalling anything.
    pub fn apply_update(&mut self, update: &EmployeeUpdate) {
        self.name = update.name.clone();
        self.address = update.address.clone();
        self.phone = update.phone.clone();
        if salary_in_range(update.salary) {
            self.salary = update.salary;
        }
    }

    /// Identifying carnet number.
    pub fn carnet(&self) -> i64 {
        self.carnet
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Employee {
    /// Renders the record as labeled lines in fixed field order.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Carnet number: {}", self.carnet)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Birth date: {}", self.birth_date)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Salary: {}", self.salary)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Phone: {}", self.phone)?;
        write!(f, "Email: {}", self.email)
    }
}

fn parse_birth_year(birth_date: &str) -> Result<i32, EmployeeValidationError> {
    birth_date
        .get(..4)
        .and_then(|year| year.parse::<i32>().ok())
        .ok_or_else(|| EmployeeValidationError::InvalidBirthDate(birth_date.to_string()))
}

fn salary_in_range(salary: i64) -> bool {
    (SALARY_MIN..=SALARY_MAX).contains(&salary)
}

fn normalize_salary(salary: i64) -> i64 {
    if salary_in_range(salary) {
        salary
    } else {
        SALARY_MIN
    }
}
