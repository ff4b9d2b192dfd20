//! BioCanvas launcher.
//!
//! Starts the API server as a supervised child process, waits for ctrl-c,
//! then tears it down gracefully.

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use biocanvas_supervisor::{ApiCommand, Supervisor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = biocanvas_common::Config::load()?;

    let command = ApiCommand::sibling_api_binary()?;
    let mut supervisor = Supervisor::new(&config.api, &config.supervisor, command)?;

    if let Err(e) = supervisor.start().await {
        error!("Startup failed: {}", e);
        return Err(e.into());
    }

    info!(
        "BioCanvas is up on http://{}:{} — press ctrl-c to stop",
        config.api.host, config.api.port
    );
    tokio::signal::ctrl_c().await?;

    info!("Shutting down");
    supervisor.stop().await;
    Ok(())
}
