//! Shared fixtures for unit tests.
#![cfg(test)]

use crate::types::{
    Language,
    TranslateItem,
    Translation,
};

/// Builds an item referenced from a single source location.
pub(crate) fn referenced_item(id: &str, message: &str, reference: &str) -> TranslateItem {
    TranslateItem { references: vec![reference.to_string()], ..TranslateItem::new(id, message) }
}

/// Builds a French translation holding `items`.
pub(crate) fn translation_of(items: Vec<TranslateItem>) -> Translation {
    let mut translation = Translation::new(Language::new("fr"));
    for item in items {
        translation.insert(item);
    }
    translation
}
