//! Integration tests for configuration loading

use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;
use weft::config::ConfigLoader;

// Serialize WEFT_ENV access to avoid race conditions in parallel test execution
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_load_workspace_config() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("weft.toml"),
        r#"
content = ["./src/**/*.{html,js,svelte,ts}"]

[theme.extend.font_family]
sans = ["Gochi Hand"]

[[plugins]]
name = "typography"

[plugins.options]
className = "prose"
"#,
    )
    .unwrap();

    let raw = ConfigLoader::load(temp.path()).unwrap();
    assert_eq!(raw.content, vec!["./src/**/*.{html,js,svelte,ts}".to_string()]);
    assert_eq!(raw.plugins.len(), 1);
    assert_eq!(raw.plugins[0].name, "typography");
    assert!(raw.plugins[0].options.is_some());
    assert!(raw.validate().is_ok());
}

#[test]
fn test_env_layer_overrides_base_file() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("weft.toml"),
        r#"content = ["src/**/*.html"]"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("weft.production.toml"),
        r#"content = ["dist/**/*.html"]"#,
    )
    .unwrap();

    std::env::set_var("WEFT_ENV", "production");
    let raw = ConfigLoader::load(temp.path());
    std::env::remove_var("WEFT_ENV");

    assert_eq!(raw.unwrap().content, vec!["dist/**/*.html".to_string()]);
}

#[test]
fn test_development_layer_applies_by_default() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("weft.toml"),
        r#"content = ["src/**/*.html"]"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("weft.development.toml"),
        r#"content = ["sandbox/**/*.html"]"#,
    )
    .unwrap();

    let raw = ConfigLoader::load(temp.path()).unwrap();
    assert_eq!(raw.content, vec!["sandbox/**/*.html".to_string()]);
}

#[test]
fn test_missing_workspace_file_yields_empty_config() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let temp = TempDir::new().unwrap();
    let raw = ConfigLoader::load(temp.path()).unwrap();
    assert!(raw.content.is_empty());
    assert!(raw.validate().is_err());
}

#[test]
fn test_load_from_explicit_file_errors_when_missing() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");
    assert!(ConfigLoader::load_from_file(&missing).is_err());
}
