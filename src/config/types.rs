use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::po::DuplicateMerge;

/// Name of the settings file looked up at the workspace root.
pub const CONFIG_FILE_NAME: &str = ".po-repository.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localeDirectory")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositorySettings {
    /// Root holding one `<tag>/messages.po` per language and `messages.pot`.
    /// Relative paths are resolved against the current directory.
    pub locale_directory: String,

    /// How repeated msgids inside one file are folded together.
    pub duplicate_merge: DuplicateMerge,

    /// Keep the previous file as `<file>.backup` before overwriting it.
    pub backup: bool,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            locale_directory: "locale".to_string(),
            duplicate_merge: DuplicateMerge::default(),
            backup: true,
        }
    }
}

impl RepositorySettings {
    /// # Errors
    /// - Locale directory is empty
    /// - Locale directory contains a NUL byte
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.locale_directory.trim().is_empty() {
            errors.push(ValidationError::new(
                "localeDirectory",
                "The locale directory cannot be empty. Example: \"locale\" or \"/srv/app/locale\"",
            ));
        } else if self.locale_directory.contains('\0') {
            errors.push(ValidationError::new(
                "localeDirectory",
                "The locale directory must not contain NUL characters",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
