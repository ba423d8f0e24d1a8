use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::clock::SystemClock;

pub const DEFAULT_CONFIG_FILE: &str = "campus.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub campus: CampusConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            graceful_shutdown_secs: 15,
            cors_permissive: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CampusConfig {
    /// Fixed UTC offset for the campus clock; unset means the host's local zone.
    pub utc_offset_minutes: Option<i32>,
}

impl CampusConfig {
    /// The clock the responder and the chat envelope read time from.
    pub fn system_clock(&self) -> SystemClock {
        self.utc_offset_minutes
            .and_then(SystemClock::with_utc_offset_minutes)
            .unwrap_or_else(SystemClock::local)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::Compact }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unsupported log format `{other}`")),
        }
    }
}

/// Programmatic overrides; these beat every other layer.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("config file references unset environment variable `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("config file has an unterminated `${{...}}` reference")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl AppConfig {
    /// Layers, lowest first: defaults, config file, `CAMPUS_*` environment, overrides.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = match resolve_config_path(options.config_path.as_deref()) {
            Some(path) => Self::from_file(&path)?,
            None if options.require_file => {
                return Err(ConfigError::MissingConfigFile(
                    options.config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
                ));
            }
            None => Self::default(),
        };

        config.apply_env()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    /// Reports every problem at once rather than stopping at the first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.server.bind_address.trim().is_empty() {
            problems.push("server.bind_address must not be empty".to_string());
        }
        if self.server.port == 0 {
            problems.push("server.port must be greater than zero".to_string());
        }
        if self.server.graceful_shutdown_secs == 0 {
            problems.push("server.graceful_shutdown_secs must be greater than zero".to_string());
        }
        if let Some(minutes) = self.campus.utc_offset_minutes {
            if !(-1439..=1439).contains(&minutes) {
                problems.push(format!(
                    "campus.utc_offset_minutes must be strictly between -1440 and 1440 (got {minutes})"
                ));
            }
        }
        if !matches!(
            self.logging.level.trim().to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            problems.push(format!(
                "logging.level must be one of trace|debug|info|warn|error (got `{}`)",
                self.logging.level
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems.join("; ")))
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        toml::from_str(&expand_env_refs(&raw)?)
            .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(bind_address) = env_value(&["CAMPUS_SERVER_BIND_ADDRESS"])? {
            self.server.bind_address = bind_address;
        }
        // `PORT` is the conventional hosting variable; the prefixed one wins.
        if let Some(port) = env_value(&["CAMPUS_SERVER_PORT", "PORT"])? {
            self.server.port = port;
        }
        if let Some(secs) = env_value(&["CAMPUS_SERVER_GRACEFUL_SHUTDOWN_SECS"])? {
            self.server.graceful_shutdown_secs = secs;
        }
        if let Some(permissive) = env_value(&["CAMPUS_SERVER_CORS_PERMISSIVE"])? {
            self.server.cors_permissive = permissive;
        }
        if let Some(minutes) = env_value(&["CAMPUS_UTC_OFFSET_MINUTES"])? {
            self.campus.utc_offset_minutes = Some(minutes);
        }
        if let Some(level) = env_value(&["CAMPUS_LOGGING_LEVEL", "CAMPUS_LOG_LEVEL"])? {
            self.logging.level = level;
        }
        if let Some(format) = env_value(&["CAMPUS_LOGGING_FORMAT", "CAMPUS_LOG_FORMAT"])? {
            self.logging.format = format;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        let ConfigOverrides { bind_address, port, log_level, log_format, utc_offset_minutes } =
            overrides;

        if let Some(bind_address) = bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        if let Some(format) = log_format {
            self.logging.format = format;
        }
        if utc_offset_minutes.is_some() {
            self.campus.utc_offset_minutes = utc_offset_minutes;
        }
    }
}

/// An explicit path is used only if it exists; otherwise `campus.toml`, then
/// `config/campus.toml`, relative to the working directory.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from(DEFAULT_CONFIG_FILE), Path::new("config").join(DEFAULT_CONFIG_FILE)]
        .into_iter()
        .find(|path| path.exists())
}

/// First non-blank variable among `keys`, parsed. Keys are listed highest priority first.
fn env_value<T: FromStr>(keys: &[&str]) -> Result<Option<T>, ConfigError> {
    let present = |key: &&str| env::var(key).ok().filter(|raw| !raw.trim().is_empty());
    let Some((key, raw)) = keys.iter().find_map(|key| present(key).map(|raw| (*key, raw))) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvOverride { key: key.to_string(), value: raw })
}

/// Replaces each `${VAR}` with the variable's value.
fn expand_env_refs(raw: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        expanded.push_str(&rest[..start]);
        let reference = &rest[start + 2..];
        let end = reference.find('}').ok_or(ConfigError::UnterminatedInterpolation)?;
        let var = &reference[..end];
        let value = env::var(var)
            .map_err(|_| ConfigError::MissingEnvInterpolation { var: var.to_string() })?;
        expanded.push_str(&value);
        rest = &reference[end + 1..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}
