//! Project domain model.
//!
//! # Invariants
//! - `code` never changes after construction.
//! - Name uniqueness is a registry concern checked at registration time;
//!   later renames are deliberately unchecked.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Project record. Dates are kept as the literal console input; no format
/// or ordering rule applies to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identifying project code. Uniqueness is deliberately not enforced.
    pub code: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

/// Fields a project update touches. All of them are overwritten
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

impl Project {
    pub fn new(
        code: i64,
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Overwrites name and both dates. No validation and no registry
    /// re-check: only registration consults the name registry.
    pub fn apply_update(&mut self, update: &ProjectUpdate) {
        self.name = update.name.clone();
        self.start_date = update.start_date.clone();
        self.end_date = update.end_date.clone();
    }

    /// Identifying project code.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Project name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Project {
    /// Renders the record as labeled lines in fixed field order.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Project code: {}", self.code)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Start date: {}", self.start_date)?;
        write!(f, "End date: {}", self.end_date)
    }
}
