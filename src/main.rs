//! Smart Content API Server
//!
//! HTTP service exposing Gemini-backed content endpoints

use anyhow::{Context, Result};
use clap::Parser;
use smart_content_api::utils::logging::init_logging;
use smart_content_api::{create_router, version_info, Settings};
use tracing::{info, warn};

/// Command line overrides for the listen address
#[derive(Debug, Parser)]
#[command(name = "smart-content-api", version, about)]
struct Cli {
    /// Bind host (overrides SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides SERVER_PORT)
    #[arg(long, short = 'p')]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load settings from environment and .env
    let mut settings = Settings::from_env().context("Failed to load server settings")?;
    settings.apply_overrides(cli.host, cli.port);
    settings.validate().context("Invalid server settings")?;

    init_logging(&settings.logging);
    info!("{}", version_info());

    if !settings.gemini.is_configured() {
        warn!("GEMINI_API_KEY is not set; content endpoints will fail until it is configured");
    }

    let addr = settings.bind_address();
    let app = create_router(settings).context("Failed to build router")?;

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Smart Content API server started!");
    info!("📝 Health check: http://{}/health", addr);
    info!("✍️  Content endpoints: http://{}/api/...", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}
