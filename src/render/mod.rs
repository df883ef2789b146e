//! Markdown rendering of corrected transcript lines.
//!
//! The renderer walks the lines once, tracking who the current scribe is.
//! Each line is classified into a [`Block`] first and then rendered, so every
//! outcome (including "render nothing") is an explicit variant.
//!
//! # Module Structure
//!
//! - [`document`] - TOC entries, resolutions and final assembly
//! - [`header`] - The metadata header template

mod document;
mod header;

pub use document::{Content, Resolution, TocEntry};
pub use header::render_header;

use crate::headers::scribe_name;
use crate::transcript::{continuation_text, Label, LogLine};

/// What a single transcript line turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// `scribenick: name`; switches the scribe, renders nothing
    ScribeChange(&'a str),
    /// `Topic:` (level 1) or `Subtopic:` (level 2)
    SectionHeader { level: u8, title: &'a str },
    /// `Proposed:` / `Proposal:`
    ProposalMarker { nick: &'a str, text: &'a str },
    /// `Resolved:` / `Resolution:`
    ResolutionMarker { text: &'a str },
    /// Scribe line naming a speaker, `alice: text`
    ScribeTurn { speaker: &'a str, text: &'a str },
    /// Scribe line starting with `...` or `…`
    ContinuationLine(&'a str),
    /// Anything said by someone other than the scribe
    NonScribeQuote { nick: &'a str, text: &'a str },
    /// Plain scribe text without label or continuation marker
    Suppressed,
}

impl<'a> Block<'a> {
    /// Classify `line` given the lowercased nick of the current scribe.
    pub fn classify(line: &'a LogLine, current_scribe: Option<&str>) -> Self {
        if let Some(name) = scribe_name(&line.content) {
            return Block::ScribeChange(name);
        }

        let label = Label::parse(&line.content);
        if let Some(label) = label {
            if label.is("topic") {
                return Block::SectionHeader {
                    level: 1,
                    title: label.text,
                };
            }
            if label.is("subtopic") {
                return Block::SectionHeader {
                    level: 2,
                    title: label.text,
                };
            }
            if label.is("proposed") || label.is("proposal") {
                return Block::ProposalMarker {
                    nick: &line.nick,
                    text: label.text,
                };
            }
            if label.is("resolved") || label.is("resolution") {
                return Block::ResolutionMarker { text: label.text };
            }
        }

        let is_scribe = current_scribe.map_or(false, |scribe| line.nick.to_lowercase() == scribe);
        if !is_scribe {
            return Block::NonScribeQuote {
                nick: &line.nick,
                text: &line.content,
            };
        }

        if let Some(label) = label {
            return Block::ScribeTurn {
                speaker: label.name,
                text: label.text,
            };
        }
        match continuation_text(&line.content) {
            Some(text) => Block::ContinuationLine(text),
            None => Block::Suppressed,
        }
    }
}

/// Stateful single-pass renderer for the minutes body.
#[derive(Debug, Default)]
pub struct ContentRenderer {
    current_scribe: Option<String>,
    paragraph: Option<String>,
    level1: usize,
    level2: usize,
    anchor_counter: usize,
    content: Content,
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `lines` into TOC, body and resolutions.
    pub fn render(mut self, lines: &[LogLine]) -> Content {
        for line in lines {
            let block = Block::classify(line, self.current_scribe.as_deref());
            self.push(block);
        }
        self.close_paragraph();

        self.content.topic_count = self.level1;
        tracing::debug!(
            sections = self.content.toc.len(),
            blocks = self.content.body.len(),
            resolutions = self.content.resolutions.len(),
            "rendered minutes body"
        );
        self.content
    }

    fn push(&mut self, block: Block<'_>) {
        match block {
            Block::ScribeChange(name) => {
                tracing::debug!(scribe = name, "scribe changed");
                self.current_scribe = Some(name.to_lowercase());
            }
            Block::SectionHeader { level, title } => {
                self.close_paragraph();
                self.anchor_counter += 1;
                let anchor = format!("section{}", self.anchor_counter);
                let (numbering, depth) = if level == 1 {
                    self.level1 += 1;
                    self.level2 = 0;
                    (self.level1.to_string(), 0)
                } else {
                    self.level2 += 1;
                    (format!("{}.{}", self.level1, self.level2), 1)
                };
                self.content.body.push(format!(
                    "{} [{}. {}](id:{})",
                    "#".repeat(2 + level as usize),
                    numbering,
                    title,
                    anchor
                ));
                self.content.toc.push(TocEntry {
                    numbering,
                    title: title.to_string(),
                    anchor,
                    depth,
                });
            }
            Block::ProposalMarker { nick, text } => {
                self.close_paragraph();
                self.content
                    .body
                    .push(format!("> **Proposed resolution:** {} *({})*", text, nick));
            }
            Block::ResolutionMarker { text } => {
                self.close_paragraph();
                let resolution = Resolution::new(self.content.resolutions.len() + 1, text);
                self.content.body.push(resolution.inline_markdown());
                self.content.resolutions.push(resolution);
            }
            Block::ScribeTurn { speaker, text } => {
                self.close_paragraph();
                let turn = format!("**{}:** {}", speaker, text);
                self.paragraph = Some(turn.trim_end().to_string());
            }
            Block::ContinuationLine(text) => match self.paragraph.as_mut() {
                Some(paragraph) => {
                    if !text.is_empty() {
                        paragraph.push(' ');
                        paragraph.push_str(text);
                    }
                }
                None => self.paragraph = Some(text.to_string()),
            },
            Block::NonScribeQuote { nick, text } => {
                self.close_paragraph();
                self.content.body.push(format!("> **{}:** {}", nick, text));
            }
            Block::Suppressed => {}
        }
    }

    fn close_paragraph(&mut self) {
        if let Some(paragraph) = self.paragraph.take() {
            if !paragraph.is_empty() {
                self.content.body.push(paragraph);
            }
        }
    }
}
