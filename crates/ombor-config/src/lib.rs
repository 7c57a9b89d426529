//! Configuration for the ombor dashboard.
//!
//! A single TOML file (platform config dir, or an explicit path) layered over
//! built-in defaults, with `OMBOR_*` environment variables on top. Nested
//! keys use a double underscore: `OMBOR_TUI__TICK_RATE_MS=100`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ombor_core::DEFAULT_CURRENCY;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Suffix appended to formatted prices and salaries. Empty for none.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Start with the demo inventory and roster instead of empty stores.
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,

    #[serde(default)]
    pub tui: TuiSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            seed_demo_data: default_seed(),
            tui: TuiSettings::default(),
            log: LogSettings::default(),
        }
    }
}

impl Config {
    /// Reject values the front-end cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tui.tick_rate_ms == 0 {
            return Err(invalid("tui.tick_rate_ms", "must be greater than zero"));
        }
        if self.tui.render_rate_ms == 0 {
            return Err(invalid("tui.render_rate_ms", "must be greater than zero"));
        }
        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(invalid(
                "log.level",
                format!(
                    "expected one of {}, got '{}'",
                    LOG_LEVELS.join(", "),
                    self.log.level
                ),
            ));
        }
        if self.currency.chars().any(char::is_control) {
            return Err(invalid("currency", "must not contain control characters"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TuiSettings {
    /// Interval between background ticks (notification expiry).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Interval between redraws.
    #[serde(default = "default_render_rate")]
    pub render_rate_ms: u64,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            render_rate_ms: default_render_rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogSettings {
    /// Log file; the terminal UI never logs to stdout.
    pub file: Option<PathBuf>,

    /// Default filter level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.into()
}
fn default_seed() -> bool {
    true
}
fn default_tick_rate() -> u64 {
    250
}
fn default_render_rate() -> u64 {
    33
}
fn default_log_level() -> String {
    "warn".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "ombor", "ombor").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("ombor");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load config from the canonical path plus environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path` plus environment. A missing file is not an
/// error; defaults and env still apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("OMBOR_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parent dirs.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    cfg.validate()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
