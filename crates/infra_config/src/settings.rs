//! Client settings and their loading from file, environment and CLI.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use url::Url;

use crate::ConfigError;

/// Backend origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// History base path used when nothing else is configured.
pub const DEFAULT_HISTORY_BASE: &str = "/";

pub const ENV_BASE_URL: &str = "EDURAG_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "EDURAG_TIMEOUT_SECS";
pub const ENV_HISTORY_BASE: &str = "EDURAG_HISTORY_BASE";
pub const ENV_LOG_LEVEL: &str = "EDURAG_LOG_LEVEL";
pub const ENV_ENVIRONMENT: &str = "EDURAG_ENV";

/// Log levels accepted by the tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Deployment environment. Production switches logs to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Resolved settings for the client tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Per-request timeout; `None` keeps the HTTP client's default
    pub timeout_secs: Option<u64>,
    /// Base path the router's web history is mounted under
    pub history_base: String,
    pub log_level: LogLevel,
    pub environment: Environment,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            history_base: DEFAULT_HISTORY_BASE.to_string(),
            log_level: LogLevel::Info,
            environment: Environment::Development,
        }
    }
}

/// On-disk shape of the TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    history_base: Option<String>,
    log_level: Option<String>,
    environment: Option<String>,
}

impl ClientSettings {
    /// Parse settings from TOML text layered over the defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: FileSettings = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        let mut settings = Self::default();
        if let Some(base_url) = file.base_url {
            settings.base_url = base_url;
        }
        if file.timeout_secs.is_some() {
            settings.timeout_secs = file.timeout_secs;
        }
        if let Some(history_base) = file.history_base {
            settings.history_base = history_base;
        }
        if let Some(level) = file.log_level {
            settings.log_level = level.parse()?;
        }
        if let Some(env) = file.environment {
            settings.environment = env.parse()?;
        }
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `EDURAG_*` overrides read through `lookup`.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            let secs = timeout
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(timeout.clone()))?;
            self.timeout_secs = Some(secs);
        }
        if let Some(history_base) = lookup(ENV_HISTORY_BASE) {
            self.history_base = history_base;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }
        if let Some(env) = lookup(ENV_ENVIRONMENT) {
            self.environment = env.parse()?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if cli.timeout_secs.is_some() {
            self.timeout_secs = cli.timeout_secs;
        }
        if let Some(history_base) = &cli.history_base {
            self.history_base = history_base.clone();
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.parse()?;
        }
        Ok(())
    }

    /// Validate the merged settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidBaseUrl(self.base_url.clone());
        let url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https")
            || url.host_str().is_none()
            || url.query().is_some()
            || url.fragment().is_some()
        {
            return Err(invalid());
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }

        if !self.history_base.starts_with('/') {
            return Err(ConfigError::InvalidHistoryBase(self.history_base.clone()));
        }

        Ok(())
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub history_base: Option<String>,
    pub log_level: Option<String>,
}

/// Build settings from all sources.
///
/// Priority (highest to lowest): CLI, environment, config file, defaults.
pub fn build_settings(cli: &CliOverrides) -> Result<ClientSettings, ConfigError> {
    build_settings_with(cli, |key| std::env::var(key).ok())
}

pub(crate) fn build_settings_with<F>(
    cli: &CliOverrides,
    lookup: F,
) -> Result<ClientSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match &cli.config_file {
        Some(path) => ClientSettings::from_file(path)?,
        None => ClientSettings::default(),
    };

    settings.apply_env(lookup)?;
    settings.merge_with_cli(cli)?;
    settings.validate()?;

    tracing::debug!(
        base_url = %settings.base_url,
        history_base = %settings.history_base,
        environment = %settings.environment,
        "Settings resolved"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, "http://localhost:8000");
        assert_eq!(settings.timeout_secs, None);
        assert_eq!(settings.history_base, "/");
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.environment, Environment::Development);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str(" Info ").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str("dev").unwrap(), Environment::Development);
        assert_eq!(Environment::from_str("stage").unwrap(), Environment::Staging);
        assert_eq!(Environment::from_str("PROD").unwrap(), Environment::Production);
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::from_str("qa").is_err());
    }

    #[test]
    fn test_partial_toml() {
        let settings = ClientSettings::from_toml_str("timeout_secs = 15").unwrap();
        assert_eq!(settings.timeout_secs, Some(15));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_unknown_toml_key_is_rejected() {
        let err = ClientSettings::from_toml_str("base_uri = \"http://x\"").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_validate_base_url() {
        let mut settings = ClientSettings::default();
        for bad in [
            "localhost:8000",
            "ftp://host",
            "http://",
            "https:// spaced",
            "http://host:notaport",
            "http://host:99999",
            "http://localhost:8000/?v=1",
            "http://localhost:8000#top",
        ] {
            settings.base_url = bad.to_string();
            assert!(settings.validate().is_err(), "{bad} should be rejected");
        }
        settings.base_url = "https://api.example.edu/".to_string();
        assert!(settings.validate().is_ok());
        settings.base_url = "http://127.0.0.1:9000/edurag".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_and_history_base() {
        let mut settings = ClientSettings::default();
        settings.timeout_secs = Some(0);
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidTimeout(_))));

        settings.timeout_secs = Some(5);
        settings.history_base = "app".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidHistoryBase(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut settings = ClientSettings::default();
        settings
            .apply_env(lookup_from(&[
                (ENV_BASE_URL, "http://backend:9000"),
                (ENV_TIMEOUT_SECS, "20"),
                (ENV_ENVIRONMENT, "production"),
            ]))
            .unwrap();

        assert_eq!(settings.base_url, "http://backend:9000");
        assert_eq!(settings.timeout_secs, Some(20));
        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn test_env_bad_timeout() {
        let mut settings = ClientSettings::default();
        let err = settings
            .apply_env(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(_)));
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url = \"http://from-file:1\"\nlog_level = \"warn\"\nhistory_base = \"/file/\""
        )
        .unwrap();

        let cli = CliOverrides {
            config_file: Some(file.path().to_path_buf()),
            base_url: Some("http://from-cli:3".to_string()),
            ..Default::default()
        };
        let settings = build_settings_with(
            &cli,
            lookup_from(&[
                (ENV_BASE_URL, "http://from-env:2"),
                (ENV_LOG_LEVEL, "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.base_url, "http://from-cli:3");
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.history_base, "/file/");
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliOverrides {
            config_file: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Default::default()
        };
        let err = build_settings_with(&cli, |_| None).unwrap_err();
        assert!(err.to_string().contains("Configuration file error"));
    }

    #[test]
    fn test_invalid_cli_value_fails_validation() {
        let cli = CliOverrides {
            base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(build_settings_with(&cli, |_| None).is_err());
    }
}
