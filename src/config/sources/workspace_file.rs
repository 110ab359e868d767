//! Workspace config file source: weft.toml and weft.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Add workspace config files to builder.
/// Precedence: weft.toml (base) then weft.{WEFT_ENV}.toml (env-specific).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let env_name = std::env::var("WEFT_ENV").unwrap_or_else(|_| "development".to_string());

    let mut builder = builder;

    let base_path = workspace_root.join("weft.toml");
    if base_path.exists() {
        builder = builder.add_source(File::from(base_path).required(false));
    }

    let env_path = workspace_root.join(format!("weft.{}.toml", env_name));
    if env_path.exists() {
        builder = builder.add_source(File::from(env_path).required(false));
    }

    Ok(builder)
}
