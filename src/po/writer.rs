//! PO / POT emission.

use std::io::{
    self,
    Write,
};

use super::escape::escape;
use crate::types::{
    TemplateItem,
    TranslateItem,
    Translation,
};

/// Prefix put in front of `msgid`/`msgstr` of orphaned items.
const DISABLED_PREFIX: &str = "#~ ";

/// Items in write order: referenced items first, orphans last, each group by id.
///
/// Ids are compared ordinally (byte order of the UTF-8 text).
#[must_use]
pub fn ordered_items(translation: &Translation) -> Vec<&TranslateItem> {
    let mut items: Vec<&TranslateItem> = translation.items.values().collect();
    items.sort_by(|a, b| a.is_orphan().cmp(&b.is_orphan()).then_with(|| a.id.cmp(&b.id)));
    items
}

/// Writes `translation` as PO text.
///
/// # Errors
/// Propagates any error from `out`.
pub fn write_translation<W: Write>(mut out: W, translation: &Translation) -> io::Result<()> {
    for item in ordered_items(translation) {
        write_item(&mut out, item)?;
    }
    out.flush()
}

fn write_item<W: Write>(out: &mut W, item: &TranslateItem) -> io::Result<()> {
    write_comments(out, "#", &item.translator_comments)?;
    write_comments(out, "#.", &item.extracted_comments)?;
    write_comments(out, "#:", &item.references)?;
    write_comments(out, "#,", &item.flags)?;

    let prefix = if item.is_orphan() { DISABLED_PREFIX } else { "" };
    writeln!(out, "{prefix}msgid \"{}\"", escape(&item.id).unwrap_or_default())?;
    writeln!(out, "{prefix}msgstr \"{}\"", escape(&item.message).unwrap_or_default())?;
    writeln!(out)
}

fn write_comments<W: Write>(out: &mut W, marker: &str, comments: &[String]) -> io::Result<()> {
    for comment in comments {
        writeln!(out, "{marker} {comment}")?;
    }
    Ok(())
}

/// Writes extraction template (POT) entries in the order given.
///
/// # Errors
/// Propagates any error from `out`.
pub fn write_template<'a, W, I>(mut out: W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TemplateItem>,
{
    for item in items {
        write_comments(&mut out, "#.", &item.comments)?;
        write_comments(&mut out, "#:", &item.references)?;
        writeln!(out, "msgid \"{}\"", escape(&item.id).unwrap_or_default())?;
        writeln!(out)?;
    }
    out.flush()
}
