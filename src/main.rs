//! Delamere marketplace server.
//!
//! Loads configuration, initialises logging and serves the HTTP API until
//! a shutdown signal arrives.

use tracing_subscriber::{EnvFilter, fmt};

use delamere_core::config::AppConfig;
use delamere_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Starting Delamere v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = delamere_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file, overlay and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("DELAMERE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("DELAMERE_ENV").ok();

    AppConfig::load(&config_path, env.as_deref())
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
