//! HR admin engine server.
//!
//! Serves the payroll breakdown and gate decision endpoints with the route
//! gate in front of every request.

use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hr_admin_engine::api::{create_router, AppState};
use hr_admin_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/hr";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hr_admin_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::var("HR_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("HR_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    tracing::info!(config_dir = %config_dir, "Loading configuration");
    let config = ConfigLoader::load(&config_dir).inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
    })?;
    tracing::info!(
        payroll_version = %config.payroll().version,
        protected_prefixes = config.gate().protected_prefixes.len(),
        exclusions = config.gate().exclusions.len(),
        "Configuration loaded"
    );

    let state = AppState::new(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
