//! File-backed translation repository.
//!
//! Every read parses the file again; nothing is cached between calls.

mod backup;
mod error;
mod locale;

use std::collections::BTreeMap;
use std::io;

pub use backup::backup_path;
pub use error::RepositoryError;
pub use locale::{
    LocaleLayout,
    TEMPLATE_FILE_NAME,
    TRANSLATION_FILE_NAME,
};

use crate::config::{
    ConfigError,
    ConfigManager,
    RepositorySettings,
};
use crate::po::{
    self,
    DuplicateMerge,
};
use crate::types::{
    Language,
    TemplateItem,
    Translation,
};

/// Storage of translations and the extraction template.
pub trait TranslationRepository {
    /// Reads the translation for `tag`.
    ///
    /// # Errors
    /// [`RepositoryError::NotFound`] when the language has no translation file.
    fn parse(&self, tag: &str) -> Result<Translation, RepositoryError>;

    /// Writes `translation` in canonical order, replacing the previous file.
    ///
    /// # Errors
    /// Propagates filesystem failures.
    fn save(&self, translation: &Translation) -> Result<(), RepositoryError>;

    /// Writes the extraction template, one entry per map value.
    ///
    /// Entries are always written in ordinal id order, the iteration order of
    /// the map. Use [`po::write_template`] directly to choose another order.
    ///
    /// # Errors
    /// Propagates filesystem failures.
    fn save_template(&self, items: &BTreeMap<String, TemplateItem>)
    -> Result<(), RepositoryError>;

    /// Languages present under the locale root.
    ///
    /// # Errors
    /// Propagates failures reading the locale root.
    fn list_languages(&self) -> Result<Vec<Language>, RepositoryError>;

    /// Whether a translation file exists for `tag`.
    fn exists(&self, tag: &str) -> bool;
}

/// [`TranslationRepository`] over a directory of gettext files.
#[derive(Debug, Clone)]
pub struct PoTranslationRepository {
    layout: LocaleLayout,
    duplicate_merge: DuplicateMerge,
    keep_backup: bool,
}

impl PoTranslationRepository {
    /// # Errors
    /// - Settings fail validation
    /// - The locale directory cannot be resolved to an absolute path
    pub fn new(settings: &RepositorySettings) -> Result<Self, RepositoryError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        let layout = LocaleLayout::resolve(&settings.locale_directory)?;
        tracing::debug!(root = %layout.root().display(), "Opened locale repository");
        Ok(Self::with_layout(layout, settings))
    }

    /// # Errors
    /// See [`PoTranslationRepository::new`].
    pub fn from_config(config_manager: &ConfigManager) -> Result<Self, RepositoryError> {
        Self::new(config_manager.get_settings())
    }

    /// Uses `layout` as is, taking only the merge and backup options from `settings`.
    #[must_use]
    pub fn with_layout(layout: LocaleLayout, settings: &RepositorySettings) -> Self {
        Self { layout, duplicate_merge: settings.duplicate_merge, keep_backup: settings.backup }
    }

    #[must_use]
    pub const fn layout(&self) -> &LocaleLayout {
        &self.layout
    }
}

impl TranslationRepository for PoTranslationRepository {
    fn parse(&self, tag: &str) -> Result<Translation, RepositoryError> {
        let path = self.layout.translation_path(tag);
        tracing::debug!(tag, path = %path.display(), "Reading translation");

        let text = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RepositoryError::NotFound { tag: tag.to_string(), path },
            _ => RepositoryError::Io(e),
        })?;

        Ok(po::parse_str(&text, Language::new(tag), self.duplicate_merge))
    }

    fn save(&self, translation: &Translation) -> Result<(), RepositoryError> {
        let path = self.layout.translation_path(translation.tag());
        tracing::debug!(
            tag = translation.tag(),
            items = translation.len(),
            path = %path.display(),
            "Saving translation"
        );

        backup::write_file(&path, self.keep_backup, |out| {
            po::write_translation(out, translation)
        })?;
        Ok(())
    }

    fn save_template(
        &self,
        items: &BTreeMap<String, TemplateItem>,
    ) -> Result<(), RepositoryError> {
        let path = self.layout.template_path();
        tracing::debug!(items = items.len(), path = %path.display(), "Saving template");

        backup::write_file(&path, self.keep_backup, |out| {
            po::write_template(out, items.values())
        })?;
        Ok(())
    }

    fn list_languages(&self) -> Result<Vec<Language>, RepositoryError> {
        let languages = self.layout.language_dirs()?.into_iter().map(Language::new).collect();
        Ok(languages)
    }

    fn exists(&self, tag: &str) -> bool {
        self.layout.has_translation(tag)
    }
}
