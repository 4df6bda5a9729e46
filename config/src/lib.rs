//! Configuration loading for profdemo.
//!
//! The config file is optional. When present it lives at
//! `~/.profdemo/config.toml` (or wherever `PROFDEMO_CONFIG` points):
//!
//! ```toml
//! [workload]
//! size = 1000
//! sleepy_seconds = 1.0
//! supersleepy_seconds = 2.0
//! ```
//!
//! `size` accepts any TOML value. Non-integers are kept as-is so the workload's
//! integer guard can turn them into a no-op instead of failing at parse time.

use std::{
    env, fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use profdemo_types::{
    DEFAULT_MATRIX_SIZE, DEFAULT_SLEEPY_SECONDS, DEFAULT_SUPERSLEEPY_SECONDS, WorkloadArg,
};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "PROFDEMO_CONFIG";
/// Overrides `[workload] size`.
pub const SIZE_ENV: &str = "PROFDEMO_SIZE";

#[derive(Debug, Default, Deserialize)]
pub struct ProfdemoConfig {
    pub workload: Option<WorkloadConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkloadConfig {
    pub size: Option<toml::Value>,
    pub sleepy_seconds: Option<f64>,
    pub supersleepy_seconds: Option<f64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl ProfdemoConfig {
    /// Load the config from [`config_path`]. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(Some(config))
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

/// Resolved workload settings after applying the config file and env override.
///
/// Sleep lengths stay raw `f64` here; they are validated by the sleep itself,
/// so a bad value fails at the point it would be used.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub size: WorkloadArg,
    pub sleepy_seconds: f64,
    pub supersleepy_seconds: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: WorkloadArg::Int(DEFAULT_MATRIX_SIZE),
            sleepy_seconds: DEFAULT_SLEEPY_SECONDS,
            supersleepy_seconds: DEFAULT_SUPERSLEEPY_SECONDS,
        }
    }
}

impl Settings {
    /// Combine an optional config with an optional raw size override.
    /// The override wins over the file.
    #[must_use]
    pub fn resolve(config: Option<&ProfdemoConfig>, size_override: Option<&str>) -> Self {
        let mut settings = Self::default();

        if let Some(workload) = config.and_then(|cfg| cfg.workload.as_ref()) {
            if let Some(size) = &workload.size {
                settings.size = workload_arg(size);
            }
            if let Some(seconds) = workload.sleepy_seconds {
                settings.sleepy_seconds = seconds;
            }
            if let Some(seconds) = workload.supersleepy_seconds {
                settings.supersleepy_seconds = seconds;
            }
        }

        if let Some(raw) = size_override {
            settings.size = WorkloadArg::parse(raw);
        }

        settings
    }

    /// [`Settings::resolve`] with the override read from `PROFDEMO_SIZE`.
    #[must_use]
    pub fn from_env(config: Option<&ProfdemoConfig>) -> Self {
        let size_override = env::var(SIZE_ENV).ok();
        Self::resolve(config, size_override.as_deref())
    }
}

/// Convert a TOML value to a workload argument.
#[must_use]
pub fn workload_arg(value: &toml::Value) -> WorkloadArg {
    match value {
        toml::Value::Integer(i) => WorkloadArg::Int(*i),
        toml::Value::Float(f) => WorkloadArg::Float(*f),
        toml::Value::Boolean(b) => WorkloadArg::Bool(*b),
        toml::Value::String(s) => WorkloadArg::Text(s.clone()),
        other => WorkloadArg::Other(other.to_string()),
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".profdemo").join("config.toml"))
}
