//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist validated employee records and enforce email uniqueness
//!   against the `registered_emails` registry.
//!
//! # Invariants
//! - `registered_emails` grows monotonically; registration is the only
//!   writer and nothing ever removes a row.
//! - Updates touch only the mutable columns (name, address, phone, salary).

use crate::model::employee::{Category, Employee, EmployeeUpdate};
use crate::repo::{RecordId, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    carnet,
    name,
    birth_date,
    category,
    salary,
    address,
    phone,
    email
FROM employees";

/// Repository interface for employee records.
pub trait EmployeeRepository {
    /// Persists a validated employee, claiming its email in the registry.
    fn register_employee(&self, employee: &Employee) -> RepoResult<RecordId>;
    /// Applies the mutable-field update rules to one record.
    fn update_employee(&self, id: RecordId, update: &EmployeeUpdate) -> RepoResult<()>;
    /// Gets one employee by record id.
    fn get_employee(&self, id: RecordId) -> RepoResult<Option<Employee>>;
    /// Lists all employees in registration order.
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn email_is_registered(&self, email: &str) -> RepoResult<bool> {
        let taken: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM registered_emails WHERE email = ?1);",
            [email],
            |row| row.get(0),
        )?;
        Ok(taken != 0)
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn register_employee(&self, employee: &Employee) -> RepoResult<RecordId> {
        if self.email_is_registered(&employee.email)? {
            return Err(RepoError::DuplicateEmail(employee.email.clone()));
        }

        self.conn.execute(
            "INSERT INTO registered_emails (email) VALUES (?1);",
            [employee.email.as_str()],
        )?;

        self.conn.execute(
            "INSERT INTO employees (
                carnet,
                name,
                birth_date,
                category,
                salary,
                address,
                phone,
                email
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                employee.carnet,
                employee.name.as_str(),
                employee.birth_date.as_str(),
                category_to_db(employee.category),
                employee.salary,
                employee.address.as_str(),
                employee.phone.as_str(),
                employee.email.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_employee(&self, id: RecordId, update: &EmployeeUpdate) -> RepoResult<()> {
        // Read-modify-write so the salary retention rule stays in the model.
        let mut employee = self.get_employee(id)?.ok_or(RepoError::NotFound(id))?;
        employee.apply_update(update);

        let changed = self.conn.execute(
            "UPDATE employees
             SET
                name = ?1,
                address = ?2,
                phone = ?3,
                salary = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?5;",
            params![
                employee.name.as_str(),
                employee.address.as_str(),
                employee.phone.as_str(),
                employee.salary,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_employee(&self, id: RecordId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let category_text: String = row.get("category")?;
    let category = parse_category(&category_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid category `{category_text}` in employees.category"
        ))
    })?;

    Ok(Employee {
        carnet: row.get("carnet")?,
        name: row.get("name")?,
        birth_date: row.get("birth_date")?,
        category,
        salary: row.get("salary")?,
        address: row.get("address")?,
        phone: row.get("phone")?,
        email: row.get("email")?,
    })
}

fn category_to_db(category: Category) -> &'static str {
    match category {
        Category::Administrator => "administrator",
        Category::Operator => "operator",
        Category::Laborer => "laborer",
    }
}

fn parse_category(value: &str) -> Option<Category> {
    match value {
        "administrator" => Some(Category::Administrator),
        "operator" => Some(Category::Operator),
        "laborer" => Some(Category::Laborer),
        _ => None,
    }
}
