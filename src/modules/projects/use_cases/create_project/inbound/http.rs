use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::modules::projects::adapters::inbound::http::ProjectBody;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ProjectBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::validation("body", rejection.body_text()))?;
    let draft = body.into_draft()?;
    let project = state.registry.create(draft).await;
    Ok((StatusCode::CREATED, Json(project)))
}
