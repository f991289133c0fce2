//! On-disk layout of a locale root.
//!
//! ```text
//! <root>/messages.pot
//! <root>/<tag>/messages.po
//! ```

use std::io;
use std::path::{
    Path,
    PathBuf,
};

/// File name of a language's translation file.
pub const TRANSLATION_FILE_NAME: &str = "messages.po";
/// File name of the extraction template.
pub const TEMPLATE_FILE_NAME: &str = "messages.pot";

/// Absolute locale root plus the path conventions below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleLayout {
    root: PathBuf,
}

impl LocaleLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Turns a configured locale directory into a layout rooted at an absolute path.
    ///
    /// Relative values are resolved against the current working directory.
    ///
    /// # Errors
    /// Fails when the current directory cannot be determined.
    pub fn resolve(locale_directory: impl AsRef<Path>) -> io::Result<Self> {
        let dir = locale_directory.as_ref();
        let root = if dir.is_absolute() { dir.to_path_buf() } else { std::path::absolute(dir)? };
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn translation_path(&self, tag: &str) -> PathBuf {
        self.root.join(tag).join(TRANSLATION_FILE_NAME)
    }

    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.root.join(TEMPLATE_FILE_NAME)
    }

    /// Names of the immediate subdirectories of the root, sorted.
    ///
    /// Whether a subdirectory actually holds a translation file is not checked.
    ///
    /// # Errors
    /// Fails when the root cannot be read.
    pub fn language_dirs(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => {
                    tracing::warn!(?name, "Skipping locale directory with a non UTF-8 name");
                }
            }
        }
        names.sort();
        Ok(names)
    }

    #[must_use]
    pub fn has_translation(&self, tag: &str) -> bool {
        self.translation_path(tag).is_file()
    }
}
