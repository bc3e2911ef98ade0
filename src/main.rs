use std::env;

use bid_earnings::api::{AppState, create_router};
use bid_earnings::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/bid";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config_dir = env::var("BID_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("BID_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load payroll configuration");
            std::process::exit(1);
        }
    };
    info!(
        organization = %config.metadata().organization,
        version = %config.metadata().version,
        "Loaded payroll configuration"
    );

    let router = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    info!(bind_addr = %bind_addr, "Earnings API listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}
