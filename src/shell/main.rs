use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use project_registry::config::Config;
use project_registry::modules::projects::adapters::outbound::registry_in_memory::InMemoryProjectRegistry;
use project_registry::shell::http::router;
use project_registry::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // In-memory registry; state lives and dies with the process.
    let registry = Arc::new(InMemoryProjectRegistry::new());
    let state = AppState { registry };

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("project registry listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
