//! Binary entrypoint for the campus visualizer HTTP server.
//!
//! Configuration comes from environment variables; see
//! [`ServerConfig`](campus_server::config::ServerConfig). Log filtering
//! follows `RUST_LOG` (default: "info").

use campus_server::config::ServerConfig;
use campus_server::router::build_router;
use campus_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Failed to read server configuration");
    let campus = config
        .load_campus()
        .expect("Failed to load campus dataset");
    tracing::info!(
        locations = campus.len(),
        dataset = ?config.dataset,
        "campus loaded"
    );

    let app = build_router(AppState::new(campus));

    let addr = config.addr();
    tracing::info!("campus server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
