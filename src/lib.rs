//! Minutes - turn IRC meeting transcripts into structured markdown minutes.
//!
//! The pipeline lives in [`minutes`]; each stage is public so it can be used
//! and tested on its own:
//!
//! - [`transcript`] - line parsing and noise filtering
//! - [`headers`] - meeting metadata directives
//! - [`changes`] - `s/old/new/` corrections
//! - [`render`] - markdown body, TOC and resolutions

pub mod changes;
pub mod cli;
pub mod config;
pub mod headers;
pub mod minutes;
pub mod render;
pub mod transcript;

pub use changes::{apply_changes, ApplyChanges, ChangeRequest};
pub use config::{Config, ConfigError, HeaderConfig};
pub use headers::{extract_headers, HeaderExtractor, MeetingHeaders};
pub use minutes::{to_markdown, Minutes};
pub use render::{Block, Content, ContentRenderer};
pub use transcript::{normalize, LogLine, Transform};
