use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::modules::projects::adapters::inbound::http::validate_project_id;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(project_id) =
        path.map_err(|rejection| ApiError::validation("project_id", rejection.body_text()))?;
    let project_id = validate_project_id(project_id)?;
    state.registry.delete(project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
