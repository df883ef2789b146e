//! Meeting metadata extraction.
//!
//! Directive lines such as `Present+ alice`, `Chair: bob` or `scribenick: carol`
//! configure the header of the minutes instead of being rendered. The
//! [`HeaderExtractor`] folds them into an accumulator and hands back the
//! residual lines.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::transcript::LogLine;

/// Nick of the issue tracker bot, dropped after directives are read.
const TRACKER_NICK: &str = "trackbot";

/// Final meeting metadata, with list fields joined by `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MeetingHeaders {
    pub present: String,
    pub regrets: String,
    pub guests: String,
    pub chair: String,
    pub agenda: String,
    pub meeting: String,
    pub date: String,
    pub scribe: String,
}

/// Attendance categories that accept `+` (append) and `:` (replace) forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attendance {
    Present,
    Regrets,
    Guests,
}

/// Single-valued fields where the last directive wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Chair,
    Agenda,
    Meeting,
    Date,
}

/// A recognized directive and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Directive {
    Append(Attendance, Vec<String>),
    Replace(Attendance, Vec<String>),
    Set(Field, String),
    Scribe(String),
}

impl Directive {
    fn parse(line: &LogLine) -> Option<Self> {
        if let Some(caps) = attendance_re().captures(&line.content) {
            let category = match caps[1].to_lowercase().as_str() {
                "present" => Attendance::Present,
                "regrets" => Attendance::Regrets,
                _ => Attendance::Guests,
            };
            let names = split_names(&caps[3]);
            return Some(if &caps[2] == "+" {
                let names = if names.is_empty() {
                    vec![line.nick.clone()]
                } else {
                    names
                };
                Directive::Append(category, names)
            } else {
                Directive::Replace(category, names)
            });
        }

        if let Some(caps) = field_re().captures(&line.content) {
            let field = match caps[1].to_lowercase().as_str() {
                "chair" => Field::Chair,
                "agenda" => Field::Agenda,
                "meeting" => Field::Meeting,
                _ => Field::Date,
            };
            return Some(Directive::Set(field, caps[2].trim().to_string()));
        }

        scribe_name(&line.content).map(|name| Directive::Scribe(name.to_string()))
    }
}

fn attendance_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(present|regrets|guests)\s*([+:])\s*(.*)$").expect("Invalid regex pattern")
    })
}

fn field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(chair|agenda|meeting|date)\s*:\s*(.*)$").expect("Invalid regex pattern")
    })
}

fn scribe_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(scribenick|scribe)\s*:\s*(\S+)").expect("Invalid regex pattern")
    })
}

/// Name designated by a `scribenick:` or `scribe:` line, as written.
///
/// Shared with the renderer, which tracks scribe changes in-line.
pub fn scribe_name(content: &str) -> Option<&str> {
    scribe_re()
        .captures(content)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Appends `names` to `set`, skipping ones already there.
fn union(set: &mut Vec<String>, names: Vec<String>) {
    for name in names {
        if !set.contains(&name) {
            set.push(name);
        }
    }
}

/// Accumulates meeting metadata across one or more passes over the lines.
#[derive(Debug, Clone, Default)]
pub struct HeaderExtractor {
    present: Vec<String>,
    regrets: Vec<String>,
    guests: Vec<String>,
    chair: String,
    agenda: String,
    meeting: String,
    date: String,
    scribe: Vec<String>,
}

impl HeaderExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    fn attendance(&mut self, category: Attendance) -> &mut Vec<String> {
        match category {
            Attendance::Present => &mut self.present,
            Attendance::Regrets => &mut self.regrets,
            Attendance::Guests => &mut self.guests,
        }
    }

    /// Fold one directive into the accumulator.
    fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Append(category, names) => union(self.attendance(category), names),
            Directive::Replace(category, names) => {
                let set = self.attendance(category);
                set.clear();
                union(set, names);
            }
            Directive::Set(field, value) => {
                let slot = match field {
                    Field::Chair => &mut self.chair,
                    Field::Agenda => &mut self.agenda,
                    Field::Meeting => &mut self.meeting,
                    Field::Date => &mut self.date,
                };
                *slot = value;
            }
            Directive::Scribe(name) => union(&mut self.scribe, vec![name]),
        }
    }

    /// Absorb the directives in `lines` and return the residual lines.
    ///
    /// Directive lines are removed, except scribe designations which the
    /// renderer needs to see again. Lines from `trackbot` are dropped.
    pub fn extract(&mut self, lines: Vec<LogLine>) -> Vec<LogLine> {
        let before = lines.len();
        let residual = lines.into_iter().fold(Vec::new(), |mut residual, line| {
            let keep = match Directive::parse(&line) {
                Some(directive) => {
                    let is_scribe = matches!(directive, Directive::Scribe(_));
                    self.apply(directive);
                    is_scribe
                }
                None => true,
            };
            if keep && !line.is_from(TRACKER_NICK) {
                residual.push(line);
            }
            residual
        });

        tracing::debug!(
            absorbed = before - residual.len(),
            residual = residual.len(),
            "extracted meeting headers"
        );
        residual
    }

    /// Snapshot of the metadata gathered so far.
    pub fn headers(&self) -> MeetingHeaders {
        MeetingHeaders {
            present: self.present.join(", "),
            regrets: self.regrets.join(", "),
            guests: self.guests.join(", "),
            chair: self.chair.clone(),
            agenda: self.agenda.clone(),
            meeting: self.meeting.clone(),
            date: self.date.clone(),
            scribe: self.scribe.join(", "),
        }
    }
}

/// Extract meeting metadata from `lines` in a single pass.
pub fn extract_headers(lines: Vec<LogLine>) -> (MeetingHeaders, Vec<LogLine>) {
    let mut extractor = HeaderExtractor::new();
    let residual = extractor.extract(lines);
    (extractor.headers(), residual)
}
