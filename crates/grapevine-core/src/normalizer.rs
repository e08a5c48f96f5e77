//! Normalizer — cleans raw transcript lines before header matching.
//!
//! Chat exports sprinkle left-to-right / right-to-left marks around
//! timestamps and sender names; left in place they stop the header pattern
//! from matching at the start of the line.

use std::borrow::Cow;

/// Characters removed from every line: LRM, RLM and the byte-order mark some
/// exporters put at the start of the file.
const STRIPPED: &[char] = &['\u{200E}', '\u{200F}', '\u{FEFF}'];

/// Strip directional marks, then trim surrounding whitespace (including a
/// trailing `\r` from CRLF exports).
///
/// Borrows when the line contains none of the stripped characters.
pub fn normalize_line(raw: &str) -> Cow<'_, str> {
    if raw.contains(STRIPPED) {
        let cleaned: String = raw.chars().filter(|c| !STRIPPED.contains(c)).collect();
        Cow::Owned(cleaned.trim().to_string())
    } else {
        Cow::Borrowed(raw.trim())
    }
}
