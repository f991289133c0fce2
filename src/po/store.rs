//! Keyed item store used while reading a PO file.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{
    Deserialize,
    Serialize,
};

use crate::types::TranslateItem;

/// How a repeated `msgid` is folded into the item already stored under that id.
///
/// In both modes the first occurrence keeps its `id` and `message`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateMerge {
    /// Each list field is extended with the same field of the new occurrence.
    #[default]
    PerField,
    /// Every list field is extended with the new occurrence's references.
    ///
    /// Reproduces files written by older tooling byte for byte.
    LegacyReferences,
}

/// Upsert-by-id collection of [`TranslateItem`]s.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    policy: DuplicateMerge,
    items: HashMap<String, TranslateItem>,
}

impl ItemStore {
    #[must_use]
    pub fn new(policy: DuplicateMerge) -> Self {
        Self { policy, items: HashMap::new() }
    }

    /// Stores `item`, or merges it into the existing item with the same id.
    pub fn upsert(&mut self, item: TranslateItem) {
        match self.items.entry(item.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
            Entry::Occupied(mut slot) => {
                tracing::debug!(id = %item.id, policy = ?self.policy, "Merging duplicate msgid");
                merge_into(slot.get_mut(), item, self.policy);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn into_items(self) -> HashMap<String, TranslateItem> {
        self.items
    }
}

fn merge_into(existing: &mut TranslateItem, incoming: TranslateItem, policy: DuplicateMerge) {
    match policy {
        DuplicateMerge::PerField => {
            existing.references.extend(incoming.references);
            existing.extracted_comments.extend(incoming.extracted_comments);
            existing.translator_comments.extend(incoming.translator_comments);
            existing.flags.extend(incoming.flags);
        }
        DuplicateMerge::LegacyReferences => {
            let references = incoming.references;
            existing.extracted_comments.extend(references.iter().cloned());
            existing.translator_comments.extend(references.iter().cloned());
            existing.flags.extend(references.iter().cloned());
            existing.references.extend(references);
        }
    }
}
