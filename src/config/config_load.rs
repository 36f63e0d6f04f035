// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::*;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid colour {0:?}, expected #RRGGBB")]
    Color(String),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
    pub osc: OscConfig,
    pub autoplay: AutoplayConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then from the
    /// working directory. Falls back to defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Self::load_from(&path)
            }
            None => {
                log::warn!("no {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn locate() -> Option<PathBuf> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));
        if let Some(path) = exe_config.filter(|p| p.exists()) {
            return Some(path);
        }

        let local = PathBuf::from(CONFIG_FILE);
        local.exists().then_some(local)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason: &str| {
            Err(ConfigError::Invalid {
                field,
                reason: reason.to_string(),
            })
        };

        if !(self.animation.step > 0.0 && self.animation.step <= 1.0) {
            return invalid("animation.step", "must lie in (0, 1]");
        }
        if self.animation.tick_ms == 0 {
            return invalid("animation.tick_ms", "must be positive");
        }
        if self.animation.capacity == 0 {
            return invalid("animation.capacity", "must be at least 1");
        }
        if self.style.size_factor <= 0.0 {
            return invalid("style.size_factor", "must be positive");
        }
        if self.style.stroke_factor <= 0.0 {
            return invalid("style.stroke_factor", "must be positive");
        }
        if self.style.arc_resolution < 3 {
            return invalid("style.arc_resolution", "must be at least 3");
        }
        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window", "width and height must be positive");
        }
        if self.autoplay.interval <= 0.0 {
            return invalid("autoplay.interval", "must be positive");
        }
        Ok(())
    }
}
