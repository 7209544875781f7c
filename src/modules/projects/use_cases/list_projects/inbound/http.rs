use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::modules::projects::core::model::{Priority, Status};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct ListProjectsParams {
    pub status: Option<Status>,
    pub prioridade: Option<Priority>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListProjectsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::validation("query", rejection.body_text()))?;

    let skip = params.skip.unwrap_or(0);
    if skip < 0 {
        return Err(ApiError::validation(
            "skip",
            format!("skip must be >= 0, got {skip}"),
        ));
    }
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if limit <= 0 {
        return Err(ApiError::validation(
            "limit",
            format!("limit must be > 0, got {limit}"),
        ));
    }

    let projects = state
        .registry
        .list(params.status, params.prioridade, skip as usize, limit as usize)
        .await;
    Ok(Json(projects))
}
