//! Employee use-case service.
//!
//! # Responsibility
//! - Turn raw registration input into validated records and persist them.
//! - Supply the current year for the age rule.
//!
//! # Invariants
//! - Service APIs never bypass model validation or registry checks.

use crate::model::employee::{Employee, EmployeeUpdate, NewEmployee};
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::{RecordId, RepoResult};
use chrono::{Datelike, Local};
use log::info;

/// Use-case service wrapper for employee operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and registers a new employee.
    ///
    /// # Contract
    /// - Applies every construction rule of [`Employee::from_request`]
    ///   against the current wall-clock year.
    /// - Claims the email in the uniqueness registry.
    /// - Returns the store-assigned record id.
    pub fn register(&self, request: &NewEmployee) -> RepoResult<RecordId> {
        let employee = Employee::from_request(request, current_year())?;
        let id = self.repo.register_employee(&employee)?;
        info!(
            "event=employee_registered module=service status=ok record_id={id} carnet={}",
            employee.carnet
        );
        Ok(id)
    }

    /// Updates the mutable fields of an existing employee.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update(&self, id: RecordId, update: &EmployeeUpdate) -> RepoResult<()> {
        self.repo.update_employee(id, update)?;
        info!("event=employee_updated module=service status=ok record_id={id}");
        Ok(())
    }

    /// Gets one employee by record id.
    pub fn get(&self, id: RecordId) -> RepoResult<Option<Employee>> {
        self.repo.get_employee(id)
    }

    /// Lists all employees in registration order.
    pub fn list(&self) -> RepoResult<Vec<Employee>> {
        self.repo.list_employees()
    }
}

fn current_year() -> i32 {
    Local::now().year()
}
