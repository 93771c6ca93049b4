//! Injector configuration.
//!
//! The only setting is where the stylesheet lives. Relative paths are
//! resolved against the working directory when the style is applied, not
//! when the configuration is built.
//!
//! Configuration can be written in YAML, the same format used for the
//! notebook's other settings files:
//!
//! ```yaml
//! path: assets/notebook.html
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Stylesheet location used when none is configured.
pub const DEFAULT_STYLE_PATH: &str = "./styles.html";

/// Error returned when configuration text cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid injector configuration: {0}")]
pub struct ConfigError(#[from] serde_yaml::Error);

/// Where a [`StyleInjector`](crate::StyleInjector) reads its stylesheet from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// Path to the style-definition file.
    pub path: PathBuf,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STYLE_PATH),
        }
    }
}

impl InjectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stylesheet path, returning the updated config for chaining.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a configuration from YAML.
    ///
    /// Missing keys fall back to their defaults. An empty, comment-only or
    /// null (`~`) document yields [`InjectorConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid YAML or has the wrong shape.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_yaml::from_str::<serde_yaml::Value>(yaml)? {
            serde_yaml::Value::Null => Ok(Self::default()),
            value => Ok(serde_yaml::from_value(value)?),
        }
    }
}
