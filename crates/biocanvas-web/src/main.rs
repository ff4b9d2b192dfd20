//! BioCanvas API server.
//!
//! Run with: cargo run -p biocanvas-web
//! Normally launched by the `biocanvas` supervisor binary, which polls
//! /health until this process is ready.

use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = biocanvas_common::Config::load()?;

    let state = biocanvas_web::state::AppState::from_config(&config)?;
    let app = biocanvas_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.api.host, config.api.port).parse()?;
    info!("BioCanvas API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
