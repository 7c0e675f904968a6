//! BondhuBot Gateway Server
//!
//! Run with: cargo run --bin bondhu-gateway
//!
//! # Configuration
//!
//! Loaded from `--config`, or the first of
//! `~/.config/bondhu/config.toml`, `/etc/bondhu/config.toml`,
//! `./config.toml`. Environment variables override file values:
//! - `BONDHU_HOST`, `BONDHU_PORT`: Bind address (default: 0.0.0.0:8787)
//! - `BONDHU_PROVIDER_URL`: OpenAI-compatible API base URL
//! - `BONDHU_MODEL`: Chat-completion model (default: gpt-4)
//! - `BONDHU_LOG_LEVEL`, `BONDHU_LOG_FORMAT`: Logging
//! - `OPENAI_API_KEY`: Provider credential, read on every request
//! - `RUST_LOG`: Log filter (overrides the configured level)

use bondhu::config::Config;
use bondhu::gateway::{serve, AppState};
use bondhu::provider::{CompletionSettings, CredentialSource, EnvCredential, OpenAiProvider};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "bondhu-gateway")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Model gateway for the BondhuBot web client")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Initialize tracing
    bondhu::logging::init(&config.logging);

    tracing::info!("Starting BondhuBot gateway v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Provider: {} (model {})",
        config.provider.base_url,
        config.provider.model
    );

    let provider = Arc::new(OpenAiProvider::new(&config.provider)?);
    let credentials = Arc::new(EnvCredential::new(&config.provider.api_key_env));

    if !credentials.is_configured() {
        tracing::warn!(
            "{} is not set; chat requests will fail until it is provided",
            credentials.var()
        );
    }

    let state = AppState::with_settings(
        provider,
        credentials,
        CompletionSettings::from(&config.provider),
    );

    // Run server
    serve(state, &config.server).await?;

    tracing::info!("BondhuBot gateway stopped");
    Ok(())
}
