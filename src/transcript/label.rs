//! Leading `word:` labels and continuation markers in line content.

/// Tokens that look like labels but are URL or address prefixes.
const NON_LABELS: &[&str] = &["http", "https", "email", "ftp"];

/// Marker typed by scribes to continue their previous statement.
const CONTINUATION_MARKERS: &[&str] = &["...", "\u{2026}"];

/// A leading `word:` token and the text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    /// The word before the colon, as written
    pub name: &'a str,
    /// Remaining content after the colon, trimmed
    pub text: &'a str,
}

impl<'a> Label<'a> {
    /// Extract the label of `content`, if it has one.
    ///
    /// The label word may not contain whitespace. URL-like prefixes
    /// (`http:`, `https:`, `email:`, `ftp:`) and the continuation marker
    /// (`...:`) are not labels.
    pub fn parse(content: &'a str) -> Option<Self> {
        let content = content.trim_start();
        let colon = content.find(':')?;
        let name = &content[..colon];

        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return None;
        }
        if NON_LABELS.iter().any(|n| name.eq_ignore_ascii_case(n)) {
            return None;
        }
        if CONTINUATION_MARKERS.contains(&name) {
            return None;
        }

        Some(Self {
            name,
            text: content[colon + 1..].trim(),
        })
    }

    /// Whether the label is `candidate`, ignoring case.
    pub fn is(&self, candidate: &str) -> bool {
        self.name.eq_ignore_ascii_case(candidate)
    }
}

/// Text of a continuation line with its marker removed.
///
/// Recognizes `...` and `…`; the `...:` typo is treated the same way.
/// Returns `None` when `content` is not a continuation.
pub fn continuation_text(content: &str) -> Option<&str> {
    let content = content.trim_start();
    CONTINUATION_MARKERS.iter().find_map(|marker| {
        content.strip_prefix(marker).map(|rest| {
            let rest = rest.strip_prefix(':').unwrap_or(rest);
            rest.trim()
        })
    })
}
