//! Service configuration loading.
//!
//! Configuration is read from a YAML file and only covers how the service is
//! hosted; the validation rule-sets themselves are not configurable.
//!
//! # Example
//!
//! ```no_run
//! use fincheck::config::ServiceConfig;
//!
//! let config = ServiceConfig::load("./config/fincheck.yaml").unwrap();
//! println!("Binding to {}", config.bind_address());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface the server binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServiceConfig {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ConfigNotFound`] if the file cannot be read
    /// and [`ServiceError::ConfigParse`] if it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|err| ServiceError::ConfigParse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Returns the `host:port` address the server should bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
