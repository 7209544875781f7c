use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::modules::projects::adapters::inbound::http::{ProjectBody, validate_project_id};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProjectBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(project_id) =
        path.map_err(|rejection| ApiError::validation("project_id", rejection.body_text()))?;
    let project_id = validate_project_id(project_id)?;
    let Json(body) = body.map_err(|rejection| ApiError::validation("body", rejection.body_text()))?;
    let draft = body.into_draft()?;
    let project = state.registry.replace(project_id, draft).await?;
    Ok(Json(project))
}
