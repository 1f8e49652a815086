mod routes;
mod singleton;
mod state;

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use dayplan_core::config::GlobalConfig;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dayplan_server=info,dayplan_core=info,tower_http=info".into()
            }),
        )
        .init();

    // Ensure only one instance writes to the store
    let _lock = singleton::acquire_lock()?;

    let config = GlobalConfig::load()?;
    let state = AppState::new(&config)?;

    // Permissive CORS: the SPA frontend runs on its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(health))
        .merge(routes::events::router())
        .merge(routes::goals::router())
        .merge(routes::tasks::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("dayplan-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "dayplan API is running"
}
