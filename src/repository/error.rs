use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors returned by [`TranslationRepository`](super::TranslationRepository) operations.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No `messages.po` exists for the requested language
    #[error("No translation file for language '{tag}' at {}", .path.display())]
    NotFound { tag: String, path: PathBuf },
    /// Filesystem failure while reading, rotating or writing a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid repository settings
    #[error(transparent)]
    Config(#[from] ConfigError),
}
