//! Outbound message length enforcement.
//!
//! A single SMS segment is 160 characters. Replies over the budget are
//! truncated, but the links suffix is sacred: it appears verbatim in the
//! output and only the descriptive text in front of it is shortened.
//! Lengths are counted in characters, not bytes, so Devanagari output
//! obeys the same bound as ASCII.

/// Maximum characters per outbound message.
pub const MAX_SMS_CHARS: usize = 160;

const ELLIPSIS: &str = "... ";

/// Shorten `text` to at most [`MAX_SMS_CHARS`] characters.
///
/// `links_marker` is the localized label that introduces the links suffix
/// (e.g. `"Links: "`). If present, everything from its first occurrence on
/// is preserved verbatim and the preceding text is truncated to fit. With
/// no marker the whole text is flat-truncated. If the links suffix alone
/// leaves no budget the length bound wins over suffix preservation.
pub fn summarize(text: &str, links_marker: &str) -> String {
    if text.chars().count() <= MAX_SMS_CHARS {
        return text.to_string();
    }

    let ellipsis_chars = ELLIPSIS.chars().count();

    if !links_marker.is_empty() {
        if let Some(idx) = text.find(links_marker) {
            let suffix = &text[idx..];
            let suffix_chars = suffix.chars().count();
            if suffix_chars + ellipsis_chars <= MAX_SMS_CHARS {
                let budget = MAX_SMS_CHARS - suffix_chars - ellipsis_chars;
                let main: String = text[..idx].trim_end().chars().take(budget).collect();
                return format!("{main}{ELLIPSIS}{suffix}");
            }
            // Suffix alone blows the budget; fall through to flat truncation.
        }
    }

    let main: String = text.chars().take(MAX_SMS_CHARS - ellipsis_chars).collect();
    format!("{main}{ELLIPSIS}")
}
