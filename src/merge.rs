//! Merge rules: defaults, override order, conflict handling.
//!
//! The merge is a pure function of its inputs. Specs apply in order; at
//! `Override` mode each key present replaces the base value at that path,
//! at `Extend` mode trees deep-merge and sequences concatenate with the
//! override entries leading the chain. Kind conflicts in `Extend` mode are
//! reported as warnings and resolved override-wins.

use crate::error::MergeWarning;
use crate::token::{TokenTree, TokenValue};
use tracing::warn;

/// Merge policy for a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Combine with the base: deep-merge trees, concatenate sequences.
    Extend,
    /// Fully replace the base value at each key present in the spec.
    Override,
}

/// A token tree paired with the policy used to apply it.
#[derive(Debug, Clone)]
pub struct MergeSpec {
    pub tokens: TokenTree,
    pub mode: MergeMode,
}

impl MergeSpec {
    pub fn extend(tokens: TokenTree) -> Self {
        Self {
            tokens,
            mode: MergeMode::Extend,
        }
    }

    pub fn replace(tokens: TokenTree) -> Self {
        Self {
            tokens,
            mode: MergeMode::Override,
        }
    }
}

/// Result of a merge pass: the merged tree plus accumulated warnings.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub tree: TokenTree,
    pub warnings: Vec<MergeWarning>,
}

/// Deep-merge `base` with `specs`, applied in order. Later specs win
/// conflicts at `Override` paths; `Extend` specs accumulate.
pub fn merge(base: &TokenTree, specs: &[MergeSpec]) -> MergeOutcome {
    let mut tree = base.clone();
    let mut warnings = Vec::new();

    for spec in specs {
        match spec.mode {
            MergeMode::Override => tree = replace_keys(&tree, &spec.tokens),
            MergeMode::Extend => {
                tree = extend_tree(&tree, &spec.tokens, &mut Vec::new(), &mut warnings)
            }
        }
    }

    MergeOutcome { tree, warnings }
}

/// Override mode: each key present in the spec replaces the base value at
/// that key wholesale. Keys absent from the spec are retained from base.
fn replace_keys(base: &TokenTree, over: &TokenTree) -> TokenTree {
    let mut out = base.clone();
    for (key, value) in over {
        out.insert(key.clone(), value.clone());
    }
    out
}

fn extend_tree(
    base: &TokenTree,
    over: &TokenTree,
    path: &mut Vec<String>,
    warnings: &mut Vec<MergeWarning>,
) -> TokenTree {
    let mut out = base.clone();
    for (key, over_value) in over {
        path.push(key.clone());
        let next = match out.get(key) {
            Some(base_value) => extend_value(base_value, over_value, path, warnings),
            None => over_value.clone(),
        };
        path.pop();
        out.insert(key.clone(), next);
    }
    out
}

fn extend_value(
    base: &TokenValue,
    over: &TokenValue,
    path: &mut Vec<String>,
    warnings: &mut Vec<MergeWarning>,
) -> TokenValue {
    match (base, over) {
        (TokenValue::Tree(base_sub), TokenValue::Tree(over_sub)) => {
            TokenValue::Tree(extend_tree(base_sub, over_sub, path, warnings))
        }
        (TokenValue::Sequence(base_seq), TokenValue::Sequence(over_seq)) => {
            // Override entries lead the chain; duplicates are preserved so
            // fallback chains keep order and repetition intact.
            let mut chain = over_seq.clone();
            chain.extend(base_seq.iter().cloned());
            TokenValue::Sequence(chain)
        }
        (base, over) if base.kind() != over.kind() => {
            let warning = MergeWarning {
                path: path.join("."),
                base_kind: base.kind(),
                override_kind: over.kind(),
            };
            warn!(
                path = %warning.path,
                base = warning.base_kind,
                incoming = warning.override_kind,
                "token kind mismatch during extend merge; override wins"
            );
            warnings.push(warning);
            over.clone()
        }
        // Same-kind scalars: the override simply wins.
        (_, over) => over.clone(),
    }
}
