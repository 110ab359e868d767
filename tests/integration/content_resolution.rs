//! Integration tests for content file-set resolution

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use weft::content::GlobResolver;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x").unwrap();
}

fn resolve(root: &Path, patterns: &[&str]) -> HashSet<String> {
    let patterns: Vec<String> = patterns.iter().map(|p| (*p).to_string()).collect();
    let set = GlobResolver::new(root).resolve(&patterns).unwrap();
    let canonical = root.canonicalize().unwrap();
    set.iter()
        .map(|p| {
            p.strip_prefix(&canonical)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_svelte_kit_style_content_pattern() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/routes/+page.svelte");
    touch(temp.path(), "src/lib/Button.svelte");
    touch(temp.path(), "src/app.html");
    touch(temp.path(), "src/main.ts");
    touch(temp.path(), "src/styles/app.css");
    touch(temp.path(), "static/favicon.png");

    let set = resolve(temp.path(), &["./src/**/*.{html,js,svelte,ts}"]);
    assert_eq!(
        set,
        HashSet::from([
            "src/routes/+page.svelte".to_string(),
            "src/lib/Button.svelte".to_string(),
            "src/app.html".to_string(),
            "src/main.ts".to_string(),
        ])
    );
}

#[test]
fn test_returned_paths_are_absolute() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/a.html");

    let set = GlobResolver::new(temp.path())
        .resolve(&["src/*.html".to_string()])
        .unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.iter().all(|p| p.is_absolute()));
}

#[test]
fn test_multiple_roots_accumulate_into_one_set() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "packages/web/index.html");
    touch(temp.path(), "packages/docs/guide.html");
    touch(temp.path(), "scripts/build.js");

    let set = resolve(
        temp.path(),
        &["packages/**/*.html", "scripts/*.js", "missing-root/**/*"],
    );
    assert_eq!(set.len(), 3);
}

#[test]
fn test_negation_applies_across_pattern_order() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/app.js");
    touch(temp.path(), "src/vendor/lib.js");
    touch(temp.path(), "src/vendor/deep/util.js");

    // Negation listed first; positive patterns after it still cannot re-add.
    let set = resolve(temp.path(), &["!src/vendor/**", "src/**/*.js"]);
    assert_eq!(set, HashSet::from(["src/app.js".to_string()]));
}

#[test]
fn test_overlapping_patterns_deduplicate() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/a.ts");

    let set = resolve(temp.path(), &["src/*.ts", "src/**/*.ts", "./src/a.ts"]);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_nonexistent_workspace_root_yields_empty_set() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let set = GlobResolver::new(&missing)
        .resolve(&["**/*.html".to_string()])
        .unwrap();
    assert!(set.is_empty());
}
