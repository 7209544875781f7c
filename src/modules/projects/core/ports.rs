use async_trait::async_trait;
use thiserror::Error;

use crate::modules::projects::core::model::{Priority, Project, ProjectDraft, Status};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("project with id {0} not found")]
    NotFound(i64),
}

/// The registry owns the project table and the identifier counter. All
/// mutations observe a single total order; readers never see a record
/// mid-mutation.
#[async_trait]
pub trait ProjectRegistry: Send + Sync {
    /// Assigns the next identifier and the creation timestamp, stores the
    /// record and returns it.
    async fn create(&self, draft: ProjectDraft) -> Project;

    /// Projects in creation order, both filters conjunctive when present,
    /// then a `skip`/`limit` window over the matches.
    async fn list(
        &self,
        status: Option<Status>,
        prioridade: Option<Priority>,
        skip: usize,
        limit: usize,
    ) -> Vec<Project>;

    async fn get(&self, id: i64) -> Result<Project, RegistryError>;

    /// Overwrites every caller-supplied field, keeping `id` and `criado_em`.
    async fn replace(&self, id: i64, draft: ProjectDraft) -> Result<Project, RegistryError>;

    async fn delete(&self, id: i64) -> Result<(), RegistryError>;
}
