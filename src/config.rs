//! TOML service configuration.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::solver::{MAX_EXHAUSTIVE_WIDTH, SolverLimits};

/// Top-level service configuration parsed from TOML.
///
/// Every section is optional and falls back to its defaults. Load with
/// [`ServiceConfig::from_toml_file`] or start from `ServiceConfig::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Log filter and output format.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Subset solver strategy thresholds.
    #[serde(default)]
    pub solver: SolverLimits,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `"0.0.0.0:8888"`.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8888".to_string(),
        }
    }
}

/// Log filter and output format.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// `"pretty"` or `"json"`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// A configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"server.bind"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ServiceConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.server.bind.parse::<SocketAddr>().is_err() {
            errors.push(ConfigError {
                field: "server.bind".into(),
                message: format!("must be a socket address, got \"{}\"", self.server.bind),
            });
        }

        let format = &self.logging.format;
        if format != "pretty" && format != "json" {
            errors.push(ConfigError {
                field: "logging.format".into(),
                message: format!("must be \"pretty\" or \"json\", got \"{format}\""),
            });
        }

        if self.solver.exhaustive_max_len > MAX_EXHAUSTIVE_WIDTH {
            errors.push(ConfigError {
                field: "solver.exhaustive_max_len".into(),
                message: format!("must be <= {MAX_EXHAUSTIVE_WIDTH}"),
            });
        }

        if self.solver.max_table_cells == 0 {
            errors.push(ConfigError {
                field: "solver.max_table_cells".into(),
                message: "must be positive".into(),
            });
        }

        errors
    }

    /// Parsed listener address.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|e| ConfigError {
            field: "server.bind".into(),
            message: format!("{e}"),
        })
    }
}
