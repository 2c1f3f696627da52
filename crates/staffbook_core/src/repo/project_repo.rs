//! Project repository contract and SQLite implementation.
//!
//! # Invariants
//! - `registered_project_names` grows monotonically; only registration
//!   writes it. Renames neither consult nor extend it, so a name once taken
//!   stays taken even after the project that introduced it moves on.

use crate::model::project::{Project, ProjectUpdate};
use crate::repo::{RecordId, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    code,
    name,
    start_date,
    end_date
FROM projects";

/// Repository interface for project records.
pub trait ProjectRepository {
    /// Persists a project, claiming its name in the registry.
    fn register_project(&self, project: &Project) -> RepoResult<RecordId>;
    /// Overwrites name and dates of one record, without validation.
    fn update_project(&self, id: RecordId, update: &ProjectUpdate) -> RepoResult<()>;
    /// Gets one project by record id.
    fn get_project(&self, id: RecordId) -> RepoResult<Option<Project>>;
    /// Lists all projects in registration order.
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn name_is_registered(&self, name: &str) -> RepoResult<bool> {
        let taken: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM registered_project_names WHERE name = ?1);",
            [name],
            |row| row.get(0),
        )?;
        Ok(taken != 0)
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn register_project(&self, project: &Project) -> RepoResult<RecordId> {
        if self.name_is_registered(&project.name)? {
            return Err(RepoError::DuplicateProjectName(project.name.clone()));
        }

        self.conn.execute(
            "INSERT INTO registered_project_names (name) VALUES (?1);",
            [project.name.as_str()],
        )?;

        self.conn.execute(
            "INSERT INTO projects (code, name, start_date, end_date)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                project.code,
                project.name.as_str(),
                project.start_date.as_str(),
                project.end_date.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_project(&self, id: RecordId, update: &ProjectUpdate) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE projects
             SET
                name = ?1,
                start_date = ?2,
                end_date = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?4;",
            params![
                update.name.as_str(),
                update.start_date.as_str(),
                update.end_date.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_project(&self, id: RecordId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }

        Ok(None)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    Ok(Project {
        code: row.get("code")?,
        name: row.get("name")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
    })
}
