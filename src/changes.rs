//! Retroactive text corrections.
//!
//! Participants fix earlier lines by typing a substitution command such as
//! `s/teh/the/`. The command line itself disappears from the minutes and the
//! replacement is applied to lines that came before it. A trailing `g` keeps
//! the command firing on every earlier match; `G` applies it to every line in
//! the transcript regardless of position.

use std::sync::OnceLock;

use regex::Regex;

use crate::transcript::{LogLine, Transform};

/// A substitution command discovered in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    /// Index of the command line in most-recent-first order
    pub position: usize,
    pub from: String,
    pub to: String,
    /// `g` flag: every earlier match, not just the nearest
    pub global_forward: bool,
    /// `G` flag: every match anywhere in the transcript
    pub global_any: bool,
    pub active: bool,
}

impl ChangeRequest {
    /// Parse `s/from/to/`, `s|from|to|` and their `g`/`G` variants.
    pub fn parse(content: &str, position: usize) -> Option<Self> {
        let content = content.trim();
        let caps = slash_command()
            .captures(content)
            .or_else(|| pipe_command().captures(content))?;
        let flag = caps.get(3).map_or("", |m| m.as_str());

        Some(Self {
            position,
            from: caps[1].to_string(),
            to: caps[2].to_string(),
            global_forward: flag == "g",
            global_any: flag == "G",
            active: true,
        })
    }

    /// Whether the line at `index` (most-recent-first) is within reach.
    fn in_scope(&self, index: usize) -> bool {
        self.global_any || index >= self.position
    }

    /// One-shot requests retire after their first replacement.
    fn is_persistent(&self) -> bool {
        self.global_forward || self.global_any
    }
}

fn slash_command() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^s/([^/]+)/([^/]*)(?:/([gG])?)?$").expect("Invalid regex pattern")
    })
}

fn pipe_command() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^s\|([^|]+)\|([^|]*)(?:\|([gG])?)?$").expect("Invalid regex pattern")
    })
}

/// Applies substitution commands and removes the command lines.
///
/// **Algorithm**:
/// 1. Reverse the lines so index 0 is the most recent one
/// 2. Record every command with its index and blank its line as a sentinel
/// 3. Walk the reversed lines again; each active command whose scope covers
///    the line replaces the first occurrence of its `from` text
/// 4. Drop the sentinels and restore chronological order
pub struct ApplyChanges {
    requests: Vec<ChangeRequest>,
    applied_count: usize,
}

impl ApplyChanges {
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
            applied_count: 0,
        }
    }

    /// Commands found by the last run, in discovery order.
    pub fn requests(&self) -> &[ChangeRequest] {
        &self.requests
    }

    /// Number of replacements performed by the last run.
    pub fn applied_count(&self) -> usize {
        self.applied_count
    }
}

impl Default for ApplyChanges {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for ApplyChanges {
    fn transform(&mut self, lines: &mut Vec<LogLine>) {
        self.requests.clear();
        self.applied_count = 0;

        let mut reversed: Vec<Option<LogLine>> = lines.drain(..).rev().map(Some).collect();

        // Pass 1: discover commands, leaving a sentinel in their place
        for (index, slot) in reversed.iter_mut().enumerate() {
            let request = slot
                .as_ref()
                .and_then(|line| ChangeRequest::parse(&line.content, index));
            if let Some(request) = request {
                self.requests.push(request);
                *slot = None;
            }
        }

        // Pass 2: replay against every surviving line
        if !self.requests.is_empty() {
            for (index, slot) in reversed.iter_mut().enumerate() {
                let Some(line) = slot.as_mut() else {
                    continue;
                };
                for request in self.requests.iter_mut() {
                    if !request.active
                        || !request.in_scope(index)
                        || !line.content.contains(&request.from)
                    {
                        continue;
                    }
                    let corrected = line.content.replacen(&request.from, &request.to, 1);
                    tracing::trace!(
                        nick = %line.nick,
                        from = %request.from,
                        to = %request.to,
                        "applied substitution"
                    );
                    line.set_content(corrected);
                    self.applied_count += 1;
                    if !request.is_persistent() {
                        request.active = false;
                    }
                }
            }
        }

        // Pass 3: drop sentinels, back to chronological order
        *lines = reversed.into_iter().rev().flatten().collect();

        tracing::debug!(
            commands = self.requests.len(),
            applied = self.applied_count,
            "applied substitutions"
        );
    }
}

/// Apply every substitution command in `lines` and return the corrected lines.
pub fn apply_changes(mut lines: Vec<LogLine>) -> Vec<LogLine> {
    ApplyChanges::new().transform(&mut lines);
    lines
}
