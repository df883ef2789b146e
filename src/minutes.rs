//! The transcript to minutes pipeline.
//!
//! normalize → extract headers → apply substitutions → render. Each call is
//! independent and performs no I/O.

use crate::changes::apply_changes;
use crate::config::HeaderConfig;
use crate::headers::{extract_headers, MeetingHeaders};
use crate::render::{render_header, ContentRenderer};
use crate::transcript::normalize;

/// Converts transcripts into markdown minutes.
#[derive(Debug, Clone, Default)]
pub struct Minutes {
    header: HeaderConfig,
}

impl Minutes {
    pub fn new(header: HeaderConfig) -> Self {
        Self { header }
    }

    /// Meeting metadata of `transcript`, without rendering.
    pub fn headers(&self, transcript: &str) -> MeetingHeaders {
        extract_headers(normalize(transcript)).0
    }

    /// Render `transcript` as markdown minutes.
    ///
    /// `source_reference` (typically the URL of the raw log) is linked from
    /// the header.
    pub fn to_markdown(&self, source_reference: &str, transcript: &str) -> String {
        let lines = normalize(transcript);
        let (headers, residual) = extract_headers(lines);
        let corrected = apply_changes(residual);
        let content = ContentRenderer::new().render(&corrected);

        let mut out = render_header(&headers, source_reference, &self.header);
        out.push_str(&content.to_markdown());
        out
    }
}

/// Render `transcript` with the default header settings.
pub fn to_markdown(source_reference: &str, transcript: &str) -> String {
    Minutes::default().to_markdown(source_reference, transcript)
}
