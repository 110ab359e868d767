//! Raw configuration: the user-authored input before resolution.
//!
//! A `RawConfig` names the content patterns, optional theme overrides, and
//! plugin registrations. It is loaded from workspace files by
//! [`ConfigLoader`] or built in memory by embedding callers, then handed to
//! [`crate::resolver::ConfigResolver`].

use crate::error::{ConfigError, FragmentError};
use crate::logging::LoggingConfig;
use crate::plugin::PluginDescriptor;
use serde::Deserialize;
use serde_json::Value;

mod facade;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    /// Glob patterns locating the source files to scan (required).
    #[serde(default)]
    pub content: Vec<String>,

    /// Theme overrides. Keys replace the built-in defaults wholesale; the
    /// nested `extend` table deep-merges instead.
    #[serde(default)]
    pub theme: Option<Value>,

    /// Plugins applied after the user merge, in order.
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RawConfig {
    /// Validate the raw shape: `content` must be present and non-empty, and
    /// `theme` must be a table when given. Token-level validation happens
    /// during resolution.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.is_empty() {
            return Err(ConfigError::MissingContent);
        }
        if let Some(theme) = &self.theme {
            if !theme.is_object() {
                return Err(ConfigError::InvalidTheme(FragmentError::new(
                    "theme",
                    "expected a table of token values",
                )));
            }
        }
        Ok(())
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
