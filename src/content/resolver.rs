//! Glob expansion against the filesystem.

use super::pattern::ContentPattern;
use crate::error::ConfigError;
use globset::{GlobSet, GlobSetBuilder};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Expands an ordered list of glob patterns into a deduplicated set of
/// absolute file paths under a scan root.
///
/// Positive patterns accumulate first; negated patterns subtract from the
/// accumulated set afterwards, regardless of where they appear in the list.
/// Patterns sharing a literal prefix directory share one directory walk, and
/// a nested prefix joins its ancestor's walk, so no part of the tree is
/// scanned twice in a single pass.
pub struct GlobResolver {
    root: PathBuf,
}

impl GlobResolver {
    /// Create a resolver rooted at `root`. The root is canonicalized so the
    /// returned paths are absolute and normalized; a root that does not
    /// exist simply yields zero matches.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = dunce::canonicalize(&root).unwrap_or(root);
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Expand `patterns` into the set of matching files.
    ///
    /// Missing directories and unreadable entries contribute zero matches;
    /// a syntactically invalid pattern is a configuration error.
    pub fn resolve(&self, patterns: &[String]) -> Result<HashSet<PathBuf>, ConfigError> {
        let parsed: Vec<ContentPattern> = patterns
            .iter()
            .map(|raw| ContentPattern::parse(raw))
            .collect();

        let positives: Vec<&ContentPattern> = parsed.iter().filter(|p| !p.negated()).collect();
        let groups = group_by_walk_root(&positives);

        let mut matched: HashSet<PathBuf> = HashSet::new();
        for (walk_root, group) in &groups {
            let matcher = build_glob_set(group)?;
            let dir = if walk_root == Path::new(".") {
                self.root.clone()
            } else {
                self.root.join(walk_root)
            };
            if !dir.is_dir() {
                debug!(dir = %dir.display(), "content root missing, zero matches");
                continue;
            }
            self.walk_into(&dir, &matcher, &mut matched);
        }

        let negations: Vec<&ContentPattern> = parsed.iter().filter(|p| p.negated()).collect();
        if !negations.is_empty() && !matched.is_empty() {
            let matcher = build_glob_set(&negations)?;
            matched.retain(|path| {
                path.strip_prefix(&self.root)
                    .map(|rel| !matcher.is_match(rel))
                    .unwrap_or(true)
            });
        }

        debug!(
            patterns = patterns.len(),
            walks = groups.len(),
            files = matched.len(),
            "content patterns resolved"
        );
        Ok(matched)
    }

    /// Walk one directory, collecting files whose root-relative path matches.
    /// Symlinks are not followed; errors are skipped, never fatal.
    fn walk_into(&self, dir: &Path, matcher: &GlobSet, matched: &mut HashSet<PathBuf>) {
        for entry in WalkDir::new(dir).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if matcher.is_match(relative) {
                matched.insert(entry.path().to_path_buf());
            }
        }
    }
}

/// Group positive patterns by walk root, folding a nested root into its
/// ancestor's group. The resulting walk roots are mutually disjoint, so each
/// directory is traversed at most once per resolution pass.
fn group_by_walk_root<'a>(
    patterns: &[&'a ContentPattern],
) -> IndexMap<PathBuf, Vec<&'a ContentPattern>> {
    let roots: Vec<&Path> = patterns.iter().map(|p| p.walk_root()).collect();

    let mut groups: IndexMap<PathBuf, Vec<&ContentPattern>> = IndexMap::new();
    for pattern in patterns.iter().copied() {
        let own = pattern.walk_root();
        let effective = roots
            .iter()
            .filter(|root| covers(root, own))
            .min_by_key(|root| depth(root))
            .copied()
            .unwrap_or(own);
        groups
            .entry(effective.to_path_buf())
            .or_default()
            .push(pattern);
    }
    groups
}

/// Whether walking `ancestor` visits everything under `root`.
fn covers(ancestor: &Path, root: &Path) -> bool {
    ancestor == Path::new(".") || root.starts_with(ancestor)
}

fn depth(root: &Path) -> usize {
    if root == Path::new(".") {
        0
    } else {
        root.components().count()
    }
}

fn build_glob_set(patterns: &[&ContentPattern]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(pattern.compile()?);
    }
    builder
        .build()
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: patterns
                .first()
                .map(|p| p.raw().to_string())
                .unwrap_or_default(),
            source,
        })
}
