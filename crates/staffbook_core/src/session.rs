//! Session context owning all in-memory state.
//!
//! # Responsibility
//! - Own the store connection (records plus uniqueness registries) for one
//!   program run.
//! - Hand out use-case services bound to that store.
//!
//! # Invariants
//! - Registries start empty at session open and are discarded when the
//!   session is dropped; no state hides in statics.

use crate::db::{open_db_in_memory, DbResult};
use crate::repo::employee_repo::SqliteEmployeeRepository;
use crate::repo::project_repo::SqliteProjectRepository;
use crate::service::employee_service::EmployeeService;
use crate::service::project_service::ProjectService;
use rusqlite::Connection;

/// One program run's worth of state: record collections and the
/// email/project-name registries, all gone when this value drops.
pub struct Session {
    conn: Connection,
}

impl Session {
    /// Opens a fresh, empty session.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Employee use-cases bound to this session's store.
    pub fn employees(&self) -> EmployeeService<SqliteEmployeeRepository<'_>> {
        EmployeeService::new(SqliteEmployeeRepository::new(&self.conn))
    }

    /// Project use-cases bound to this session's store.
    pub fn projects(&self) -> ProjectService<SqliteProjectRepository<'_>> {
        ProjectService::new(SqliteProjectRepository::new(&self.conn))
    }
}
