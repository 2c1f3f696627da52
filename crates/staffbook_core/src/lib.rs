//! Core domain logic for Staffbook.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use logging::{default_log_level, init_logging};
pub use model::employee::{
    Category, Employee, EmployeeUpdate, EmployeeValidationError, NewEmployee, DEFAULT_CITY,
    SALARY_MAX, SALARY_MIN,
};
pub use model::project::{Project, ProjectUpdate};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::{RecordId, RepoError, RepoResult};
pub use service::employee_service::EmployeeService;
pub use service::project_service::ProjectService;
pub use session::Session;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
