use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::projects::use_cases::create_project::inbound::http as create_http;
use crate::modules::projects::use_cases::delete_project::inbound::http as delete_http;
use crate::modules::projects::use_cases::get_project::inbound::http as get_http;
use crate::modules::projects::use_cases::list_projects::inbound::http as list_http;
use crate::modules::projects::use_cases::replace_project::inbound::http as replace_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/projects/create", post(create_http::handle))
        .route("/projects", get(list_http::handle))
        .route(
            "/projects/{project_id}",
            get(get_http::handle)
                .put(replace_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
}
