//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every section has defaults so the gateway runs without
//! any file present.

pub mod app;
pub mod content;
pub mod logging;
pub mod realtime;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::content::{AdminConfig, DataConfig, MockConfig};
pub use self::logging::LoggingConfig;
pub use self::realtime::RealtimeConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Prefix for environment variable overrides (`GATEWAY__SERVER__PORT`).
const ENV_PREFIX: &str = "GATEWAY";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Real-time WebSocket settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,
    /// Admin UI static files.
    #[serde(default)]
    pub admin: AdminConfig,
    /// JSON data files.
    #[serde(default)]
    pub data: DataConfig,
    /// Mock fixture settings.
    #[serde(default)]
    pub mock: MockConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config/` relative to the working directory.
    pub fn load(env: &str) -> AppResult<Self> {
        Self::load_from(Path::new("config"), env)
    }

    /// Load configuration from TOML files in `dir`.
    ///
    /// Merges `default.toml` with an environment-specific overlay and
    /// environment variables prefixed with `GATEWAY_`. A bare `PORT`
    /// variable overrides `server.port`.
    pub fn load_from(dir: &Path, env: &str) -> AppResult<Self> {
        let default_file = dir.join("default");
        let env_file = dir.join(env);

        let config = config::Config::builder()
            .add_source(config::File::from(default_file).required(false))
            .add_source(config::File::from(env_file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the gateway cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.realtime.viewers_min >= self.realtime.viewers_max {
            return Err(AppError::configuration(format!(
                "realtime.viewers_min ({}) must be below realtime.viewers_max ({})",
                self.realtime.viewers_min, self.realtime.viewers_max
            )));
        }
        if self.realtime.channel_buffer_size == 0 {
            return Err(AppError::configuration(
                "realtime.channel_buffer_size must be positive",
            ));
        }
        Ok(())
    }
}
