//! Transcript lines and the normalization stage.
//!
//! A raw transcript is the text dump of a logging bot, one message per line:
//!
//! ```text
//! 14:02:11 <alice> Topic: Introductions
//! ```
//!
//! [`normalize`] turns that text into [`LogLine`]s and runs the noise filters
//! from [`filters`] over them. Every later stage works on `Vec<LogLine>`.

mod filters;
mod label;

pub use filters::{FilterBotLines, FilterControlLines, FilterPresenceNotices};
pub use label::{continuation_text, Label};

/// A single speaker/content record from the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Speaker nickname, as written between `<` and `>`
    pub nick: String,
    /// Message text, trimmed
    pub content: String,
    /// Lowercase copy of `content`, used for directive matching
    pub content_lower: String,
}

impl LogLine {
    pub fn new(nick: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            nick: nick.into(),
            content_lower: content.to_lowercase(),
            content,
        }
    }

    /// Replace the content, keeping the lowercase copy in sync.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.content_lower = self.content.to_lowercase();
    }

    /// Parse one raw transcript line.
    ///
    /// The timestamp is everything up to and including the first space. The
    /// nick sits between the first `<` and the next `>`; the rest is content.
    /// Lines without a `<...>` pair keep an empty nick and the whole remainder
    /// as content. Returns `None` for blank lines.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let rest = match raw.find(' ') {
            Some(pos) => &raw[pos + 1..],
            None => raw,
        };

        if let Some(open) = rest.find('<') {
            if let Some(close) = rest[open + 1..].find('>') {
                let close = open + 1 + close;
                let nick = &rest[open + 1..close];
                let content = rest[close + 1..].trim();
                return Some(Self::new(nick, content));
            }
        }

        Some(Self::new("", rest.trim()))
    }

    /// Whether the line was spoken by `nick` (case-insensitive).
    pub fn is_from(&self, nick: &str) -> bool {
        self.nick.eq_ignore_ascii_case(nick)
    }
}

/// A pass over the line sequence that edits it in place.
pub trait Transform {
    fn transform(&mut self, lines: &mut Vec<LogLine>);
}

/// Split a raw transcript into lines and strip bot and floor-control noise.
///
/// Output preserves chronological order and never has more entries than the
/// input has lines.
pub fn normalize(raw: &str) -> Vec<LogLine> {
    let mut lines: Vec<LogLine> = raw.lines().filter_map(LogLine::parse).collect();
    let parsed = lines.len();

    FilterBotLines.transform(&mut lines);
    FilterControlLines.transform(&mut lines);
    FilterPresenceNotices.transform(&mut lines);

    tracing::debug!(parsed, kept = lines.len(), "normalized transcript");
    lines
}
