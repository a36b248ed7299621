//! Configuration for ringsize.
//!
//! Read from `~/.ringsize/config.toml`, or from the file named by
//! `RINGSIZE_CONFIG`. A missing file is not an error; every field has a
//! default.
//!
//! ```toml
//! [engine]
//! comparison = "exact"
//! min_samples = 100
//!
//! [harness]
//! trials = 500
//! seed = 7
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use ringsize_engine::EstimatorConfig;
use ringsize_harness::HarnessConfig;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "RINGSIZE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RingsizeConfig {
    #[serde(default)]
    pub engine: EstimatorConfig,
    #[serde(default)]
    pub harness: HarnessConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl RingsizeConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from `path`. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }
}

/// `RINGSIZE_CONFIG` if set, else `~/.ringsize/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".ringsize").join("config.toml"))
}
