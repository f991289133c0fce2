//! Settings lookup for a workspace.

use std::io;
use std::path::Path;

use super::{
    CONFIG_FILE_NAME,
    ConfigError,
    RepositorySettings,
};

/// Holds the validated [`RepositorySettings`] in effect.
///
/// Settings start at their defaults, are replaced by the workspace's
/// `.po-repository.json` when one exists, and can then be overridden
/// from the command line.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    current_settings: RepositorySettings,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `<workspace>/.po-repository.json`, falling back to defaults when it is missing.
    ///
    /// The current settings are left untouched on error.
    ///
    /// # Errors
    /// - The file exists but cannot be read
    /// - The file is not valid settings JSON
    /// - The loaded settings fail validation
    pub fn load_settings(&mut self, workspace: &Path) -> Result<(), ConfigError> {
        let config_path = workspace.join(CONFIG_FILE_NAME);

        let settings = match std::fs::read_to_string(&config_path) {
            Ok(content) => {
                tracing::debug!(path = %config_path.display(), "Loading settings");
                serde_json::from_str(&content)?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %config_path.display(), "No settings file, using defaults");
                RepositorySettings::default()
            }
            Err(e) => return Err(e.into()),
        };

        self.replace(settings)
    }

    /// Points the repository at another locale root, keeping the other settings.
    ///
    /// # Errors
    /// The resulting settings fail validation; the current settings are kept.
    pub fn override_locale_directory(
        &mut self,
        locale_directory: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let settings = RepositorySettings {
            locale_directory: locale_directory.into(),
            ..self.current_settings.clone()
        };
        self.replace(settings)
    }

    #[must_use]
    pub const fn get_settings(&self) -> &RepositorySettings {
        &self.current_settings
    }

    fn replace(&mut self, settings: RepositorySettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!(settings = ?settings, "Settings in effect");
        self.current_settings = settings;
        Ok(())
    }
}
