//! Configuration resolution orchestration.
//!
//! `ConfigResolver` ties the pieces together: validate the raw shape, merge
//! user theme overrides into the built-in defaults, expand the content
//! patterns, apply plugin contributions, and assemble the immutable
//! [`ResolvedConfig`]. A pass either returns a complete [`Resolution`] or an
//! error; no partial state escapes.

use crate::config::RawConfig;
use crate::content::GlobResolver;
use crate::error::{ConfigError, MergeWarning, ResolveError};
use crate::merge::{merge, MergeSpec};
use crate::plugin::{PluginDescriptor, PluginRegistry};
use crate::theme::default_theme;
use crate::token::TokenTree;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Immutable output of a resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    theme: TokenTree,
    files: HashSet<PathBuf>,
    plugins: Vec<PluginDescriptor>,
}

impl ResolvedConfig {
    /// The final token tree: defaults, user overrides, plugin contributions.
    pub fn theme(&self) -> &TokenTree {
        &self.theme
    }

    /// The deduplicated set of source files to scan. Unordered; sort before
    /// presenting in diagnostics.
    pub fn files(&self) -> &HashSet<PathBuf> {
        &self.files
    }

    /// Plugins in registration order, for the downstream generator's
    /// utility-contribution hooks.
    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }
}

/// A completed resolution pass: the resolved configuration plus the
/// non-fatal warnings accumulated along the way.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: ResolvedConfig,
    pub warnings: Vec<MergeWarning>,
}

/// Orchestrates a resolution pass over a workspace root.
pub struct ConfigResolver {
    root: PathBuf,
}

impl ConfigResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a raw configuration into a [`Resolution`].
    ///
    /// Orchestration order: validate shape, merge user theme into the
    /// built-in defaults, expand content patterns, apply plugins, assemble.
    pub fn resolve(&self, raw: &RawConfig) -> Result<Resolution, ResolveError> {
        raw.validate()?;

        let specs = theme_specs(raw.theme.as_ref())?;
        let outcome = merge(default_theme(), &specs);
        let mut warnings = outcome.warnings;

        let files = GlobResolver::new(&self.root).resolve(&raw.content)?;

        let registry = PluginRegistry::from_descriptors(raw.plugins.clone());
        let (theme, plugin_warnings) = registry.apply_all(&outcome.tree)?;
        warnings.extend(plugin_warnings);

        debug!(
            files = files.len(),
            plugins = raw.plugins.len(),
            warnings = warnings.len(),
            "configuration resolved"
        );

        Ok(Resolution {
            config: ResolvedConfig {
                theme,
                files,
                plugins: raw.plugins.clone(),
            },
            warnings,
        })
    }
}

/// Split the raw `theme` value into merge specs: keys other than `extend`
/// replace the defaults wholesale, the `extend` table deep-merges.
fn theme_specs(theme: Option<&Value>) -> Result<Vec<MergeSpec>, ConfigError> {
    let Some(value) = theme else {
        return Ok(Vec::new());
    };
    let Value::Object(map) = value else {
        return Err(ConfigError::InvalidTheme(crate::error::FragmentError::new(
            "theme",
            "expected a table of token values",
        )));
    };

    let mut replace = serde_json::Map::new();
    let mut extend = None;
    for (key, val) in map {
        if key == "extend" {
            extend = Some(val);
        } else {
            replace.insert(key.clone(), val.clone());
        }
    }

    let mut specs = Vec::new();
    if !replace.is_empty() {
        specs.push(MergeSpec::replace(TokenTree::from_json(&Value::Object(
            replace,
        ))?));
    }
    if let Some(extend) = extend {
        specs.push(MergeSpec::extend(TokenTree::from_json(extend)?));
    }
    Ok(specs)
}
