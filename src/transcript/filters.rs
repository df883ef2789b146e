//! Noise filters applied during normalization.
//!
//! These transforms remove lines that carry no narrative value: bot chatter,
//! floor-control commands and channel join/leave notices.

use std::sync::OnceLock;

use regex::Regex;

use super::{LogLine, Transform};

/// Nicks of the logging recorder and the conference bridge bot.
const BOT_NICKS: &[&str] = &["rrsagent", "zakim"];

/// Lowercase prefixes of queue management and bot commands.
const CONTROL_PREFIXES: &[&str] = &[
    "q+", "q-", "q?", "ack", "agenda+", "agenda?", "trackbot,", "zakim,", "rrsagent,",
];

/// Drops lines spoken by the logging bots.
pub struct FilterBotLines;

impl Transform for FilterBotLines {
    fn transform(&mut self, lines: &mut Vec<LogLine>) {
        lines.retain(|line| !BOT_NICKS.iter().any(|bot| line.is_from(bot)));
    }
}

/// Drops queue (`q+`, `ack`, ...) and bot command lines.
pub struct FilterControlLines;

impl Transform for FilterControlLines {
    fn transform(&mut self, lines: &mut Vec<LogLine>) {
        lines.retain(|line| {
            !CONTROL_PREFIXES
                .iter()
                .any(|prefix| line.content_lower.starts_with(prefix))
        });
    }
}

/// Drops `<nick> has joined #channel` and `<nick> has left #channel` notices.
pub struct FilterPresenceNotices;

fn presence_notice() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\S+ has (joined|left) #\S+").expect("Invalid regex pattern")
    })
}

impl Transform for FilterPresenceNotices {
    fn transform(&mut self, lines: &mut Vec<LogLine>) {
        lines.retain(|line| !presence_notice().is_match(&line.content));
    }
}
