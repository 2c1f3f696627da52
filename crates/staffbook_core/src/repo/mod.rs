//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for employee and project records.
//! - Isolate SQL details from service/business orchestration.
//!
//! # Invariants
//! - Registration writes consult the uniqueness registries before inserting
//!   and extend them on success.
//! - Repository APIs return semantic errors (`NotFound`, duplicates) in
//!   addition to DB transport errors.

use crate::db::DbError;
use crate::model::employee::EmployeeValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod employee_repo;
pub mod project_repo;

/// Store-assigned identity of a persisted record. Carnet numbers and
/// project codes are user-supplied and not unique, so they cannot key
/// lookups.
pub type RecordId = i64;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by the employee and project stores.
#[derive(Debug)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    /// The email was already taken by an earlier registration.
    DuplicateEmail(String),
    /// The project name was already taken by an earlier registration.
    DuplicateProjectName(String),
    Db(DbError),
    NotFound(RecordId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateEmail(email) => write!(f, "email `{email}` is already registered"),
            Self::DuplicateProjectName(name) => {
                write!(f, "project name `{name}` is already registered")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateEmail(_)
            | Self::DuplicateProjectName(_)
            | Self::NotFound(_)
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
