//! Quoting and C-style escape handling for PO string literals.
//!
//! [`unescape`] and [`escape`] are deliberately not inverses: decoding
//! understands the full C escape set, while encoding only protects `"`.
//! Control characters already present in the text are written back raw, which
//! keeps files produced by earlier versions byte-identical on re-save.

/// Strips everything up to and including the first `"` and from the last `"` on.
///
/// Returns `None` when the line does not contain two distinct quotes.
#[must_use]
pub fn unquote(line: &str) -> Option<&str> {
    let begin = line.find('"')?;
    let end = line.rfind('"')?;
    if end <= begin {
        return None;
    }
    line.get(begin + 1..end)
}

/// Decodes C escape sequences (`\n`, `\"`, `\101`, `\u0041`, ...) into their characters.
///
/// Sequences are matched longest-first:
/// - `\a \b \f \n \r \t \v \" \' \\ \?`
/// - `\0`..`\3` followed by up to two more octal digits
/// - `\u` followed by exactly four hex digits
///
/// Anything else, including a lone trailing backslash, is copied through verbatim.
#[must_use]
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some((before, after)) = rest.split_once('\\') {
        out.push_str(before);

        if let Some((decoded, consumed)) = decode_escape(after) {
            out.push(decoded);
            rest = after.get(consumed..).unwrap_or_default();
        } else {
            out.push('\\');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// Decodes the escape body following a backslash.
///
/// Returns the decoded character and the number of bytes consumed after the backslash.
fn decode_escape(after: &str) -> Option<(char, usize)> {
    let first = after.chars().next()?;

    let simple = match first {
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        '"' | '\'' | '\\' | '?' => Some(first),
        _ => None,
    };
    if let Some(c) = simple {
        return Some((c, 1));
    }

    match first {
        '0'..='3' => {
            let digits: String =
                after.chars().take(3).take_while(|c| ('0'..='7').contains(c)).collect();
            let code = u32::from_str_radix(&digits, 8).ok()?;
            char::from_u32(code).map(|c| (c, digits.len()))
        }
        'u' => {
            let hex = after.get(1..5)?;
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let code = u32::from_str_radix(hex, 16).ok()?;
            char::from_u32(code).map(|c| (c, 5))
        }
        _ => None,
    }
}

/// Prepares text for a quoted PO literal by escaping `"` only.
///
/// Returns `None` for empty or whitespace-only input; the caller writes an
/// empty literal in that case.
#[must_use]
pub fn escape(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        return None;
    }
    Some(s.replace('"', "\\\""))
}
