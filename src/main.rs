//! Binary entry point for the validation service.

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fincheck::api::{create_router, AppState};
use fincheck::config::ServiceConfig;
use fincheck::error::{ServiceError, ServiceResult};
use fincheck::validation::SystemClock;

/// Default location of the service configuration file.
const DEFAULT_CONFIG_PATH: &str = "./config/fincheck.yaml";

#[tokio::main]
async fn main() -> ServiceResult<()> {
    init_tracing();

    let config_path =
        std::env::var("FINCHECK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match ServiceConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "Falling back to default configuration");
            ServiceConfig::default()
        }
    };

    let state = AppState::new(SystemClock);
    let router = create_router(state);

    let addr = config.bind_address();
    info!(%addr, "Starting validation service");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|err| ServiceError::Server {
            message: err.to_string(),
        })?;
    axum::serve(listener, router)
        .await
        .map_err(|err| ServiceError::Server {
            message: err.to_string(),
        })?;

    Ok(())
}

/// Initializes tracing/logging for the process, configurable via RUST_LOG.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
