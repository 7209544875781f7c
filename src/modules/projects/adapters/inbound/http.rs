use serde::Deserialize;

use crate::modules::projects::core::model::{Priority, ProjectDraft, Status};
use crate::shell::error::ApiError;

/// Transport shape shared by create and replace. Both operations take the
/// full record; fields absent here are never merged from stored state.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectBody {
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub prioridade: Priority,
    pub status: Status,
}

impl ProjectBody {
    pub fn into_draft(self) -> Result<ProjectDraft, ApiError> {
        ProjectDraft::new(self.titulo, self.descricao, self.prioridade, self.status)
            .map_err(|err| ApiError::validation("titulo", err.to_string()))
    }
}

/// Path identifiers below 1 are a validation error, not a missing record.
pub fn validate_project_id(project_id: i64) -> Result<i64, ApiError> {
    if project_id < 1 {
        return Err(ApiError::validation(
            "project_id",
            format!("project_id must be >= 1, got {project_id}"),
        ));
    }
    Ok(project_id)
}
