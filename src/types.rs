//! Core types used throughout the project.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// A language tag identifying one translation set (e.g. `fr`, `en-US`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub short_tag: String,
}

impl Language {
    #[must_use]
    pub fn new(short_tag: impl Into<String>) -> Self {
        Self { short_tag: short_tag.into() }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.short_tag)
    }
}

/// A single `msgid`/`msgstr` pair together with its comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslateItem {
    /// Source string. Unique within one [`Translation`].
    pub id: String,
    /// Translated string, empty when untranslated.
    pub message: String,
    /// `# ...` lines
    pub translator_comments: Vec<String>,
    /// `#. ...` lines
    pub extracted_comments: Vec<String>,
    /// `#: ...` lines (source locations)
    pub references: Vec<String>,
    /// `#, ...` lines
    pub flags: Vec<String>,
}

impl TranslateItem {
    #[must_use]
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self { id: id.into(), message: message.into(), ..Self::default() }
    }

    /// An item is orphaned once no source location refers to it any more.
    ///
    /// Orphans are written as disabled (`#~`) entries instead of being dropped.
    #[must_use]
    pub fn is_orphan(&self) -> bool {
        self.references.is_empty()
    }

    /// Whether a non-blank translation is present.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

/// All items of one language, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language: Language,
    pub items: HashMap<String, TranslateItem>,
}

impl Translation {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language, items: HashMap::new() }
    }

    #[must_use]
    pub fn with_items(language: Language, items: HashMap<String, TranslateItem>) -> Self {
        Self { language, items }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.language.short_tag
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TranslateItem> {
        self.items.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts an item keyed by its own id, replacing any previous item with that id.
    pub fn insert(&mut self, item: TranslateItem) -> Option<TranslateItem> {
        self.items.insert(item.id.clone(), item)
    }

    /// Id → message lookup restricted to items that actually carry a translation.
    ///
    /// Items whose message is empty or whitespace-only are left out, so a
    /// freshly merged file with no msgstr filled in yields an empty map.
    #[must_use]
    pub fn translated_messages(&self) -> HashMap<&str, &str> {
        self.items
            .values()
            .filter(|item| item.is_translated())
            .map(|item| (item.id.as_str(), item.message.as_str()))
            .collect()
    }
}

/// An entry of the extraction template (`messages.pot`). Carries no translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateItem {
    pub id: String,
    /// Extracted comments, written as `#. ...`
    pub comments: Vec<String>,
    pub references: Vec<String>,
}

impl TemplateItem {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }
}
