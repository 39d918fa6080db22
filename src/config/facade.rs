//! ConfigLoader facade over the layered sources.

use super::paths;
use super::sources;
use super::NotesConfig;
use config::{Config, ConfigError};
use std::path::Path;
use tracing::debug;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    ///
    /// Precedence: defaults (lowest) -> global file -> environment (highest).
    pub fn load() -> Result<NotesConfig, ConfigError> {
        let global = paths::global_config_path().ok();
        Self::load_with_global(global.as_deref(), None)
    }

    /// Load configuration from a specific file with environment overlay.
    /// The global file is not consulted.
    pub fn load_from_file(path: &Path) -> Result<NotesConfig, ConfigError> {
        Self::load_with_global(None, Some(path))
    }

    pub(crate) fn load_with_global(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<NotesConfig, ConfigError> {
        let builder = Config::builder();
        let builder = sources::add_global_file(builder, global);
        let builder = match explicit {
            Some(path) => sources::add_explicit_file(builder, path)?,
            None => builder,
        };
        let builder = sources::add_environment(builder);

        let config: NotesConfig = builder.build()?.try_deserialize()?;
        debug!(
            level = %config.logging.level,
            output = %config.logging.output,
            "Loaded configuration"
        );
        Ok(config)
    }
}
