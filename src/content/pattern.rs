//! Content pattern parsing.

use crate::error::ConfigError;
use globset::{Glob, GlobBuilder};
use std::path::{Path, PathBuf};

/// Characters that start glob syntax; everything before them is a literal
/// path prefix usable as a walk root.
const META_CHARS: &[char] = &['*', '?', '[', '{'];

/// A single parsed `content` pattern.
///
/// Patterns are interpreted relative to the scan root. A leading `!` negates
/// the pattern; a leading `./` is stripped before matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPattern {
    raw: String,
    glob: String,
    negated: bool,
    walk_root: PathBuf,
}

impl ContentPattern {
    pub fn parse(raw: &str) -> Self {
        let (negated, rest) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let glob = rest.strip_prefix("./").unwrap_or(rest).to_string();
        let walk_root = literal_prefix(&glob);
        Self {
            raw: raw.to_string(),
            glob,
            negated,
            walk_root,
        }
    }

    /// The pattern as written, for diagnostics.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    /// The literal directory prefix of the pattern, relative to the scan
    /// root. Walks for patterns sharing a prefix are shared.
    pub fn walk_root(&self) -> &Path {
        &self.walk_root
    }

    /// Compile the matcher. `*` and `?` do not cross path separators, so
    /// `*.ts` matches direct children only while `**/*.ts` recurses.
    pub fn compile(&self) -> Result<Glob, ConfigError> {
        GlobBuilder::new(&self.glob)
            .literal_separator(true)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: self.raw.clone(),
                source,
            })
    }
}

/// Longest leading run of path components containing no glob syntax. A
/// fully literal pattern names a file, so its final component is dropped.
fn literal_prefix(glob: &str) -> PathBuf {
    let mut components: Vec<&str> = Vec::new();
    let mut saw_meta = false;
    for component in glob.split('/') {
        if component.contains(META_CHARS) {
            saw_meta = true;
            break;
        }
        components.push(component);
    }
    if !saw_meta {
        components.pop();
    }
    if components.is_empty() {
        PathBuf::from(".")
    } else {
        components.iter().collect()
    }
}
