//! # infra_config
//!
//! Settings shared by the EduRAG client tools.
//!
//! Values are layered, highest priority first:
//! 1. CLI arguments ([`CliOverrides`])
//! 2. Environment variables (`EDURAG_*`)
//! 3. TOML configuration file
//! 4. Built-in defaults
//!
//! The result is a plain [`ClientSettings`] value. Nothing here is global:
//! callers build the settings once and hand the relevant parts to the API
//! client and the router.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    build_settings, ClientSettings, CliOverrides, Environment, LogLevel, DEFAULT_BASE_URL,
    DEFAULT_HISTORY_BASE, ENV_BASE_URL, ENV_ENVIRONMENT, ENV_HISTORY_BASE, ENV_LOG_LEVEL,
    ENV_TIMEOUT_SECS,
};
