//! po-repository
//!
//! Gettext PO/POT translation files: parsing, duplicate merging, canonical
//! write-back with orphan preservation, and single-slot backups.

pub mod config;
pub mod po;
pub mod repository;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use repository::{
    PoTranslationRepository,
    RepositoryError,
    TranslationRepository,
};
pub use types::{
    Language,
    TemplateItem,
    TranslateItem,
    Translation,
};
