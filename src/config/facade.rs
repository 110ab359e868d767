//! Configuration loading facade.

use super::{sources, RawConfig};
use crate::error::ConfigError;
use config::{Config, File};
use std::path::Path;

/// Loads raw configuration from workspace files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace root.
    /// Precedence: `weft.toml` (base) then `weft.{WEFT_ENV}.toml`.
    pub fn load(workspace_root: &Path) -> Result<RawConfig, ConfigError> {
        let builder = sources::workspace_file::add_to_builder(Config::builder(), workspace_root)?;
        let raw = builder.build()?.try_deserialize()?;
        Ok(raw)
    }

    /// Load configuration from an explicit file path.
    pub fn load_from_file(path: &Path) -> Result<RawConfig, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
