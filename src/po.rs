//! Gettext PO codec: text ⇄ [`Translation`].

mod escape;
mod reader;
mod store;
mod writer;

pub use escape::{
    escape,
    unescape,
    unquote,
};
pub use reader::Entries;
pub use store::{
    DuplicateMerge,
    ItemStore,
};
pub use writer::{
    ordered_items,
    write_template,
    write_translation,
};

use crate::types::{
    Language,
    Translation,
};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Parses PO text into a [`Translation`] for `language`.
///
/// Parsing never fails: malformed blocks are skipped or read permissively.
/// A leading byte order mark is ignored.
#[must_use]
pub fn parse_str(text: &str, language: Language, policy: DuplicateMerge) -> Translation {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut store = ItemStore::new(policy);
    for item in Entries::new(text) {
        store.upsert(item);
    }
    tracing::debug!(language = %language, items = store.len(), "Parsed PO text");
    Translation::with_items(language, store.into_items())
}
