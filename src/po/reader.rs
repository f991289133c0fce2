//! Line-oriented PO entry reader.
//!
//! Reading is split in two stages per entry:
//! - the comment block (`#`, `#.`, `#:`, `#,`, `#|`) preceding the entry
//! - the body: `msgid` and `msgstr` keyword lines plus their `"..."` continuations
//!
//! Lines prefixed with `#~` are disabled entries. The marker is stripped and the
//! remainder is read exactly like an active entry, so a soft-deleted entry comes
//! back as a normal item.
//!
//! See <https://www.gnu.org/software/gettext/manual/html_node/PO-Files.html>

use std::iter::Peekable;
use std::str::Lines;

use super::escape::{
    unescape,
    unquote,
};
use crate::types::TranslateItem;

/// Marker of a disabled (obsolete) entry line.
const DISABLED_MARKER: &str = "#~";

/// Comments collected ahead of one entry body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CommentBlock {
    translator_comments: Vec<String>,
    extracted_comments: Vec<String>,
    references: Vec<String>,
    flags: Vec<String>,
}

impl CommentBlock {
    /// Consumes comment lines until a line that is not a comment or is a disabled entry.
    fn collect(lines: &mut Peekable<Lines<'_>>) -> Self {
        let mut block = Self::default();

        while let Some(line) = lines.next_if(|line| is_comment(line)) {
            block.classify(line);
        }

        block
    }

    fn classify(&mut self, line: &str) {
        let body = line.strip_prefix('#').unwrap_or(line);
        let mut chars = body.chars();
        match chars.next() {
            Some('.') => self.extracted_comments.push(chars.as_str().trim().to_string()),
            Some(':') => self.references.push(chars.as_str().trim().to_string()),
            Some(',') => self.flags.push(chars.as_str().trim().to_string()),
            // previous msgid, not kept
            Some('|') => {}
            _ => self.translator_comments.push(body.trim().to_string()),
        }
    }

    fn into_item(self, id: String, message: String) -> TranslateItem {
        TranslateItem {
            id,
            message,
            translator_comments: self.translator_comments,
            extracted_comments: self.extracted_comments,
            references: self.references,
            flags: self.flags,
        }
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') && !line.starts_with(DISABLED_MARKER)
}

/// Removes the `#~` marker and the whitespace around it; other lines pass unchanged.
fn strip_disabled(line: &str) -> &str {
    line.strip_prefix(DISABLED_MARKER).map_or(line, str::trim)
}

/// Returns the unquoted literal of a `keyword "..."` line.
///
/// The keyword must be followed by whitespace or a quote, so `msgid_plural`
/// is not mistaken for `msgid`.
fn keyword_literal<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(keyword)?;
    if !rest.starts_with(|c: char| c == '"' || c.is_whitespace()) {
        return None;
    }
    Some(unquote(rest).unwrap_or_default())
}

/// Returns the unquoted literal of a bare `"..."` continuation line.
fn continuation_literal(line: &str) -> Option<&str> {
    let line = strip_disabled(line);
    if !line.trim_start().starts_with('"') {
        return None;
    }
    unquote(line)
}

/// Concatenates `first` with every continuation line that follows it.
fn accumulate(first: &str, lines: &mut Peekable<Lines<'_>>) -> String {
    let mut raw = String::from(first);
    while let Some(fragment) = lines.peek().copied().and_then(continuation_literal) {
        raw.push_str(fragment);
        lines.next();
    }
    raw
}

/// Skips a `msgctxt` line and its continuations.
///
/// Message context is not part of an item, so the comments collected ahead of
/// it stay with the `msgid` that follows.
fn skip_context(lines: &mut Peekable<Lines<'_>>) {
    let context = lines.next_if(|line| keyword_literal(strip_disabled(line), "msgctxt").is_some());
    if context.is_some() {
        while lines.next_if(|line| continuation_literal(line).is_some()).is_some() {}
    }
}

/// Raw decoded `msgid`/`msgstr` pair of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EntryBody {
    id: String,
    message: String,
}

impl EntryBody {
    /// Reads one entry body starting at the next line.
    ///
    /// Returns `None` (after consuming that line) for blank lines and for
    /// lines that do not open a `msgid`.
    fn parse(lines: &mut Peekable<Lines<'_>>) -> Option<Self> {
        let line = strip_disabled(lines.next()?);
        if line.trim().is_empty() {
            return None;
        }

        let first = keyword_literal(line, "msgid")?;
        let id = accumulate(first, lines);

        let msgstr =
            lines.peek().copied().and_then(|next| keyword_literal(strip_disabled(next), "msgstr"));
        let message = match msgstr {
            Some(first) => {
                lines.next();
                accumulate(first, lines)
            }
            None => String::new(),
        };

        Some(Self { id: unescape(&id), message: unescape(&message) })
    }
}

/// Iterator over the entries of PO text, in file order.
///
/// Duplicate ids are yielded as they appear; folding them is left to
/// [`ItemStore`](super::ItemStore). Entries with an empty `msgid` (the PO
/// header) are skipped.
#[derive(Debug)]
pub struct Entries<'a> {
    lines: Peekable<Lines<'a>>,
}

impl<'a> Entries<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { lines: text.lines().peekable() }
    }
}

impl Iterator for Entries<'_> {
    type Item = TranslateItem;

    fn next(&mut self) -> Option<Self::Item> {
        while self.lines.peek().is_some() {
            let comments = CommentBlock::collect(&mut self.lines);
            skip_context(&mut self.lines);
            let Some(body) = EntryBody::parse(&mut self.lines) else {
                continue;
            };

            if body.id.is_empty() {
                tracing::debug!("Skipping entry with empty msgid");
                continue;
            }

            return Some(comments.into_item(body.id, body.message));
        }
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn read(text: &str) -> Vec<TranslateItem> {
        Entries::new(text).collect()
    }

    #[googletest::test]
    fn test_read_simple_entries() {
        let text = r#"#: src/app.rs:1
msgid "Hello"
msgstr "Bonjour"

#: src/app.rs:2
msgid "Goodbye"
msgstr "Au revoir"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(2));
        expect_that!(items[0].id, eq("Hello"));
        expect_that!(items[0].message, eq("Bonjour"));
        expect_that!(items[1].id, eq("Goodbye"));
        expect_that!(items[1].message, eq("Au revoir"));
    }

    #[googletest::test]
    fn test_read_classifies_comments() {
        let text = r#"# reviewed by Anne
#. shown on the login page
#: src/login.rs:12
#: src/login.rs:40
#, fuzzy
#| msgid "Sign in"
msgid "Log in"
msgstr "Connexion"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(1));
        let item = &items[0];
        expect_that!(item.translator_comments, elements_are![eq("reviewed by Anne")]);
        expect_that!(item.extracted_comments, elements_are![eq("shown on the login page")]);
        expect_that!(item.references, elements_are![eq("src/login.rs:12"), eq("src/login.rs:40")]);
        expect_that!(item.flags, elements_are![eq("fuzzy")]);
    }

    #[googletest::test]
    fn test_read_multiline_strings() {
        let text = r#"msgid ""
"Hello "
"World"
msgstr ""
"Bonjour "
"le monde"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(1));
        expect_that!(items[0].id, eq("Hello World"));
        expect_that!(items[0].message, eq("Bonjour le monde"));
    }

    #[googletest::test]
    fn test_read_decodes_after_concatenation() {
        // The escape is split across two continuation lines.
        let text = "msgid \"tab\\\"\n\"there\"\nmsgstr \"x\"\n";

        let items = read(text);

        assert_that!(items.len(), eq(1));
        expect_that!(items[0].id, eq("tab\there"));
    }

    #[googletest::test]
    fn test_read_disabled_entry_is_revived() {
        let text = r#"# kept for later
#~ msgid "Old label"
#~ msgstr "Ancien libellé"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(1));
        expect_that!(items[0].id, eq("Old label"));
        expect_that!(items[0].message, eq("Ancien libellé"));
        expect_that!(items[0].references, is_empty());
        expect_that!(items[0].translator_comments, elements_are![eq("kept for later")]);
    }

    #[googletest::test]
    fn test_read_disabled_multiline_entry() {
        let text = r#"#~ msgid ""
#~ "Old "
#~ "label"
#~ msgstr "Ancien"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(1));
        expect_that!(items[0].id, eq("Old label"));
        expect_that!(items[0].message, eq("Ancien"));
    }

    #[googletest::test]
    fn test_read_msgid_without_msgstr() {
        let text = r#"#: src/app.rs:1
msgid "Untranslated"

#: src/app.rs:2
msgid "Next"
msgstr "Suivant"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(2));
        expect_that!(items[0].id, eq("Untranslated"));
        expect_that!(items[0].message, eq(""));
        expect_that!(items[1].id, eq("Next"));
        expect_that!(items[1].message, eq("Suivant"));
    }

    #[googletest::test]
    fn test_read_entries_without_blank_separator() {
        let text = r#"msgid "One"
msgstr "Un"
#: src/app.rs:2
msgid "Two"
msgstr "Deux"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(2));
        expect_that!(items[1].id, eq("Two"));
        expect_that!(items[1].references, elements_are![eq("src/app.rs:2")]);
    }

    #[googletest::test]
    fn test_read_skips_header_entry() {
        let text = r#"# SOME DESCRIPTIVE TITLE.
msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

#: src/app.rs:1
msgid "Hello"
msgstr "Bonjour"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(1));
        expect_that!(items[0].id, eq("Hello"));
        expect_that!(items[0].translator_comments, is_empty());
    }

    #[googletest::test]
    fn test_read_ignores_plural_forms_keyword() {
        let text = r#"msgid "file"
msgid_plural "files"
msgstr[0] "fichier"
msgstr[1] "fichiers"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(1));
        expect_that!(items[0].id, eq("file"));
        expect_that!(items[0].message, eq(""));
    }

    #[googletest::test]
    fn test_read_keeps_comments_across_message_context() {
        let text = r#"#: src/menu.rs:3
msgctxt "menu"
msgid "File"
msgstr "Fichier"

#, fuzzy
#~ msgctxt ""
#~ "toolbar"
#~ msgid "Open"
#~ msgstr "Ouvrir"
"#;

        let items = read(text);

        assert_that!(items.len(), eq(2));
        expect_that!(items[0].id, eq("File"));
        expect_that!(items[0].message, eq("Fichier"));
        expect_that!(items[0].references, elements_are![eq("src/menu.rs:3")]);
        expect_that!(items[1].id, eq("Open"));
        expect_that!(items[1].flags, elements_are![eq("fuzzy")]);
    }

    #[rstest]
    #[case::translator("# note", CommentBlock { translator_comments: vec!["note".into()], ..CommentBlock::default() })]
    #[case::bare_hash("#", CommentBlock { translator_comments: vec![String::new()], ..CommentBlock::default() })]
    #[case::extracted("#.  context ", CommentBlock { extracted_comments: vec!["context".into()], ..CommentBlock::default() })]
    #[case::reference("#: a.rs:1", CommentBlock { references: vec!["a.rs:1".into()], ..CommentBlock::default() })]
    #[case::flag("#, fuzzy", CommentBlock { flags: vec!["fuzzy".into()], ..CommentBlock::default() })]
    #[case::previous_id("#| msgid \"old\"", CommentBlock::default())]
    fn test_classify(#[case] line: &str, #[case] expected: CommentBlock) {
        let mut block = CommentBlock::default();
        block.classify(line);

        assert_that!(block, eq(&expected));
    }

    #[rstest]
    #[case::disabled("#~ msgid \"x\"", "msgid \"x\"")]
    #[case::disabled_no_space("#~msgstr \"y\"", "msgstr \"y\"")]
    #[case::active("msgid \"x\"", "msgid \"x\"")]
    fn test_strip_disabled(#[case] line: &str, #[case] expected: &str) {
        assert_that!(strip_disabled(line), eq(expected));
    }

    #[rstest]
    #[case::msgid("msgid \"Hello\"", "msgid", Some("Hello"))]
    #[case::plural("msgid_plural \"Hellos\"", "msgid", None)]
    #[case::indexed_msgstr("msgstr[0] \"x\"", "msgstr", None)]
    #[case::unterminated("msgid \"Hello", "msgid", Some(""))]
    #[case::other_keyword("msgctxt \"menu\"", "msgid", None)]
    fn test_keyword_literal(
        #[case] line: &str,
        #[case] keyword: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_that!(keyword_literal(line, keyword), eq(expected));
    }
}
