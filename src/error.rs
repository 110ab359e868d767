//! Error types for theme resolution and content scanning.

use thiserror::Error;

/// A raw value that cannot be represented as a token tree node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{path}`: {reason}")]
pub struct FragmentError {
    /// Dotted token path of the offending value (`<root>` for the top level).
    pub path: String,
    pub reason: String,
}

impl FragmentError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Configuration errors: the raw configuration cannot be loaded or is
/// structurally invalid. Always fatal for the current resolution pass.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Required `content` field is missing or empty")]
    MissingContent,

    #[error("`theme` is not a valid token tree: {0}")]
    InvalidTheme(#[from] FragmentError),

    #[error("Invalid content pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },

    #[error("Invalid logging configuration: {0}")]
    InvalidLogging(String),
}

/// Plugin errors: a registered plugin contributed a token fragment that
/// cannot be merged. Fatal, and always names the offending plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Plugin '{plugin}' contributed an invalid token fragment: {source}")]
    InvalidFragment {
        plugin: String,
        source: FragmentError,
    },
}

/// Top-level error surface of a resolution pass.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plugin(#[from] PluginError),
}

/// Non-fatal merge conflict: base and override disagree on the kind of value
/// at a token path. The merge proceeds override-wins; warnings are collected
/// and returned alongside the resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeWarning {
    /// Dotted token path where the conflict occurred.
    pub path: String,
    pub base_kind: &'static str,
    pub override_kind: &'static str,
}

impl std::fmt::Display for MergeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Type mismatch at `{}`: base is a {}, override is a {}; override wins",
            self.path, self.base_kind, self.override_kind
        )
    }
}
