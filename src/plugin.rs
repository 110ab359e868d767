//! Plugin registry and token contribution.
//!
//! Plugins contribute token fragments after the user merge, in registration
//! order. Each contribution is extend-merged against the tree produced by
//! all prior plugins, so a later plugin sees what an earlier one added.

use crate::error::{MergeWarning, PluginError};
use crate::merge::{merge, MergeSpec};
use crate::token::TokenTree;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A registered plugin: identity, ordered token contributions, and an
/// opaque options payload passed through to the downstream generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub name: String,

    /// Raw token fragments, validated when the plugin is applied.
    #[serde(default)]
    pub tokens: Vec<Value>,

    /// Configuration payload, carried unmodified.
    #[serde(default)]
    pub options: Option<Value>,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: Vec::new(),
            options: None,
        }
    }

    pub fn with_tokens(mut self, tokens: Vec<Value>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// Extension seam: anything that can contribute token trees given the tree
/// resolved so far.
pub trait TokenSource {
    fn name(&self) -> &str;

    /// Produce the contributed trees. A fragment that cannot be represented
    /// as a token tree is an error naming this source.
    fn contribute(&self, current: &TokenTree) -> Result<Vec<TokenTree>, PluginError>;
}

impl TokenSource for PluginDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn contribute(&self, _current: &TokenTree) -> Result<Vec<TokenTree>, PluginError> {
        self.tokens
            .iter()
            .map(|fragment| {
                TokenTree::from_json(fragment).map_err(|source| PluginError::InvalidFragment {
                    plugin: self.name.clone(),
                    source,
                })
            })
            .collect()
    }
}

/// Ordered list of plugins applied during resolution.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    plugins: Vec<PluginDescriptor>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors(plugins: Vec<PluginDescriptor>) -> Self {
        Self { plugins }
    }

    pub fn register(&mut self, descriptor: PluginDescriptor) {
        self.plugins.push(descriptor);
    }

    pub fn descriptors(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Apply every plugin's contributions in registration order, chained.
    ///
    /// Fails on the first invalid fragment; the registry holds no mutable
    /// state, so applying twice from the same tree yields the same result.
    pub fn apply_all(
        &self,
        tree: &TokenTree,
    ) -> Result<(TokenTree, Vec<MergeWarning>), PluginError> {
        let mut current = tree.clone();
        let mut warnings = Vec::new();

        for plugin in &self.plugins {
            let fragments = plugin.contribute(&current)?;
            debug!(
                plugin = plugin.name(),
                fragments = fragments.len(),
                "applying plugin contributions"
            );
            for fragment in fragments {
                let outcome = merge(&current, &[MergeSpec::extend(fragment)]);
                current = outcome.tree;
                warnings.extend(outcome.warnings);
            }
        }

        Ok((current, warnings))
    }
}
