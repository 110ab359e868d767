//! Integration tests for merge semantics over token trees

use serde_json::json;
use weft::merge::{merge, MergeSpec};
use weft::theme::default_theme;
use weft::token::{TokenTree, TokenValue};

fn tree(value: serde_json::Value) -> TokenTree {
    TokenTree::from_json(&value).unwrap()
}

#[test]
fn test_merge_without_specs_returns_default_theme_unchanged() {
    let outcome = merge(default_theme(), &[]);
    assert_eq!(&outcome.tree, default_theme());
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_disjoint_specs_are_order_independent() {
    let colors = MergeSpec::extend(tree(json!({ "colors": { "brand": "#b91c1c" } })));
    let spacing = MergeSpec::extend(tree(json!({ "spacing": { "gutter": "1.5rem" } })));

    let forward = merge(default_theme(), &[colors.clone(), spacing.clone()]);
    let reverse = merge(default_theme(), &[spacing, colors]);

    assert_eq!(forward.tree, reverse.tree);
}

#[test]
fn test_overlapping_override_specs_apply_last_write_wins() {
    let first = MergeSpec::replace(tree(json!({ "screens": { "sm": "500px" } })));
    let second = MergeSpec::replace(tree(json!({ "screens": { "sm": "600px" } })));

    let outcome = merge(default_theme(), &[first, second]);
    let TokenValue::Tree(screens) = outcome.tree.get("screens").unwrap() else {
        panic!("screens should be a table");
    };
    assert_eq!(screens.get("sm"), Some(&TokenValue::from("600px")));
}

#[test]
fn test_extend_sequence_merge_puts_override_entries_first() {
    let base = tree(json!({ "fontFamily": { "sans": ["Arial"] } }));
    let spec = MergeSpec::extend(tree(json!({ "fontFamily": { "sans": ["Gochi Hand"] } })));

    let outcome = merge(&base, &[spec]);
    let TokenValue::Tree(fonts) = outcome.tree.get("fontFamily").unwrap() else {
        panic!("fontFamily should be a table");
    };
    assert_eq!(
        fonts.get("sans"),
        Some(&TokenValue::Sequence(vec![
            "Gochi Hand".to_string(),
            "Arial".to_string()
        ]))
    );
}

#[test]
fn test_extend_kind_mismatch_is_reported_not_fatal() {
    let spec = MergeSpec::extend(tree(json!({ "spacing": "compact" })));

    let outcome = merge(default_theme(), &[spec]);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].path, "spacing");
    assert_eq!(
        outcome.tree.get("spacing"),
        Some(&TokenValue::from("compact"))
    );
}

#[test]
fn test_default_theme_is_not_mutated_by_merging() {
    let before = default_theme().clone();
    let spec = MergeSpec::extend(tree(json!({ "colors": { "brand": "#000" } })));
    let _ = merge(default_theme(), &[spec]);
    assert_eq!(&before, default_theme());
}
