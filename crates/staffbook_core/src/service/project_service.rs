//! Project use-case service.

use crate::model::project::{Project, ProjectUpdate};
use crate::repo::project_repo::ProjectRepository;
use crate::repo::{RecordId, RepoResult};
use log::info;

/// Use-case service wrapper for project operations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new project, claiming its name in the registry.
    pub fn register(&self, project: &Project) -> RepoResult<RecordId> {
        let id = self.repo.register_project(project)?;
        info!(
            "event=project_registered module=service status=ok record_id={id} code={}",
            project.code
        );
        Ok(id)
    }

    /// Overwrites name and dates of an existing project.
    pub fn update(&self, id: RecordId, update: &ProjectUpdate) -> RepoResult<()> {
        self.repo.update_project(id, update)?;
        info!("event=project_updated module=service status=ok record_id={id}");
        Ok(())
    }

    /// Gets one project by record id.
    pub fn get(&self, id: RecordId) -> RepoResult<Option<Project>> {
        self.repo.get_project(id)
    }

    /// Lists all projects in registration order.
    pub fn list(&self) -> RepoResult<Vec<Project>> {
        self.repo.list_projects()
    }
}
