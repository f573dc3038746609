//! # sky-config
//!
//! Layered configuration loading for Skylark using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SKYLARK_*` prefix, `__` as separator)
//! 2. `skylark.toml` in the current directory
//! 3. User-level `~/.config/skylark/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SKYLARK_API__BASE_URL` -> `api.base_url`,
//! `SKYLARK_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc. The
//! `__` (double underscore) separates nested config sections.

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SkyConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SkyConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`SkyConfig::load_with_dotenv`] if
    /// you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to merge or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// This is the typical entry point for the CLI and tests. Silently does
    /// nothing if no `.env` file is found.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Current-directory config
        let local_path = PathBuf::from("skylark.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SKYLARK_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("skylark").join("config.toml"))
    }
}
