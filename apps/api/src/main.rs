mod catalog;
mod chat;
mod config;
mod dashboard;
mod errors;
mod models;
mod query;
mod routes;
mod session;
mod simulation;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, SessionBackend};
use crate::routes::build_router;
use crate::state::{build_session_storage, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Krystal API v{}", env!("CARGO_PKG_VERSION"));

    // Session storage
    match &config.session_backend {
        SessionBackend::Memory => info!("Session storage: in-memory"),
        SessionBackend::File(path) => info!("Session storage: {}", path.display()),
    }
    let storage = build_session_storage(&config.session_backend);

    // Build app state and rehydrate any persisted session
    let state = AppState::new(&config, storage);
    match state.session.restore_session().await {
        Some(session) => info!(
            "Resumed session for {} ({})",
            session.email,
            session.role.as_str()
        ),
        None => info!("No persisted session; starting anonymous"),
    }
    info!(
        "Catalog seeded: {} users, {} jobs, {} projects, {} talent",
        state.catalog.users.len(),
        state.catalog.jobs.len(),
        state.catalog.projects.len(),
        state.catalog.talent.len()
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
