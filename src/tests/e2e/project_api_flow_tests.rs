// End to end flow over the HTTP surface with the in memory registry.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::projects::adapters::outbound::registry_in_memory::InMemoryProjectRegistry;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn make_app() -> Router {
    router(AppState {
        registry: Arc::new(InMemoryProjectRegistry::new()),
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: &str) -> Request<Body> {
    Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn it_should_run_the_full_project_lifecycle() {
    let app = make_app();

    // Two creates with increasing identifiers.
    let (status, project_a) = send(
        &app,
        post_json(
            "/projects/create",
            r#"{"titulo":"A","prioridade":1,"status":"Planejado"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(project_a["id"], 1);

    let (status, project_b) = send(
        &app,
        post_json(
            "/projects/create",
            r#"{"titulo":"B","prioridade":3,"status":"Em Andamento"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(project_b["id"], 2);

    // Status filter returns only B.
    let (status, listed) = send(&app, get("/projects?status=Em%20Andamento")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["titulo"], "B");

    // Replace keeps id and criado_em, overwrites the rest.
    let (status, replaced) = send(
        &app,
        put_json(
            "/projects/1",
            r#"{"titulo":"A2","prioridade":2,"status":"Concluído"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["id"], 1);
    assert_eq!(replaced["criado_em"], project_a["criado_em"]);
    assert_eq!(replaced["titulo"], "A2");
    assert_eq!(replaced["prioridade"], 2);
    assert_eq!(replaced["status"], "Concluído");

    // Delete B, then it is gone.
    let (status, body) = send(&app, delete("/projects/2")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, not_found) = send(&app, get("/projects/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(not_found["detail"], "project with id 2 not found");
}

#[tokio::test]
async fn it_should_page_through_an_unfiltered_listing() {
    let app = make_app();

    for titulo in ["um", "dois", "três"] {
        let body = format!(r#"{{"titulo":"{titulo}","prioridade":2,"status":"Planejado"}}"#);
        let (status, _) = send(&app, post_json("/projects/create", &body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, all) = send(&app, get("/projects?skip=0&limit=3")).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["titulo"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["um", "dois", "três"]);

    let (status, past_the_end) = send(&app, get("/projects?skip=3&limit=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(past_the_end, serde_json::json!([]));
}
