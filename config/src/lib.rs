//! Configuration for Slice.
//!
//! The raw TOML structs below keep every field optional. [`DisplaySettings`]
//! is the resolved form the binary works with, after environment overrides.
//!
//! ```toml
//! [shop]
//! name = "Sebastiano's"
//!
//! [display]
//! color = true
//! show_empty = false
//! ```

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SHOP_NAME: &str = "Sebastiano's";

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct SliceConfig {
    pub shop: Option<ShopConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShopConfig {
    /// Name used in the greeting.
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Colored console output. Default: true.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Render zero-quantity lines in the check summary. Default: false.
    #[serde(default)]
    pub show_empty: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_empty: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
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

impl SliceConfig {
    /// Load from `~/.slice/config.toml`. `None` when there is no file; a file
    /// that cannot be read or parsed is logged and skipped.
    #[must_use]
    pub fn load_or_default() -> Option<Self> {
        config_path().and_then(|path| Self::load_or_default_from(&path))
    }

    #[must_use]
    pub fn load_or_default_from(path: &Path) -> Option<Self> {
        Self::load_from(path).unwrap_or_else(|err| {
            tracing::warn!(path = %err.path().display(), "Ignoring config, using defaults");
            None
        })
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
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

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn shop_name(&self) -> &str {
        self.shop
            .as_ref()
            .and_then(|shop| shop.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_SHOP_NAME)
    }
}

/// Display settings after applying config and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub color: bool,
    pub show_empty: bool,
}

impl DisplaySettings {
    /// Resolve from config, then `SLICE_COLOR`, then `NO_COLOR`.
    #[must_use]
    pub fn resolve(config: Option<&SliceConfig>) -> Self {
        Self::resolve_with(
            config,
            env::var("SLICE_COLOR").ok().as_deref(),
            env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        )
    }

    fn resolve_with(config: Option<&SliceConfig>, slice_color: Option<&str>, no_color: bool) -> Self {
        let display = config.and_then(|cfg| cfg.display.as_ref());
        let mut color = display.is_none_or(|d| d.color);
        let show_empty = display.is_some_and(|d| d.show_empty);

        if let Some(raw) = slice_color {
            match parse_color_override(raw) {
                Some(value) => color = value,
                None => tracing::warn!("Unknown SLICE_COLOR value: {}", raw),
            }
        }
        if no_color {
            color = false;
        }

        Self { color, show_empty }
    }
}

fn parse_color_override(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "always" | "on" => Some(true),
        "0" | "false" | "never" | "off" => Some(false),
        _ => None,
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".slice").join("config.toml"))
}
