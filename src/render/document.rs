//! Output records and final document assembly.

/// A table of contents line for a topic or subtopic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Hierarchical number, e.g. `2` or `2.1`
    pub numbering: String,
    pub title: String,
    /// Anchor id without the leading `#`
    pub anchor: String,
    /// 0 for topics, 1 for subtopics
    pub depth: usize,
}

impl TocEntry {
    pub fn to_markdown(&self) -> String {
        format!(
            "{}* [{}. {}](#{})",
            "    ".repeat(self.depth),
            self.numbering,
            self.title,
            self.anchor
        )
    }
}

/// A recorded resolution, listed again at the end of the minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// 1-based resolution number
    pub index: usize,
    pub text: String,
    pub anchor: String,
}

impl Resolution {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            anchor: format!("resolution{}", index),
        }
    }

    /// The anchored block shown where the resolution was made.
    pub fn inline_markdown(&self) -> String {
        format!(
            "> [**Resolution #{}: {}**](id:{})",
            self.index, self.text, self.anchor
        )
    }

    /// The bullet in the trailing resolutions index.
    pub fn index_markdown(&self) -> String {
        format!(
            "* [Resolution #{}: {}](#{})",
            self.index, self.text, self.anchor
        )
    }
}

/// Anchor of the trailing resolutions section.
const RESOLUTIONS_ANCHOR: &str = "res";

/// Rendered content: table of contents, body blocks and resolutions.
///
/// Kept as separate buffers until [`Content::to_markdown`] joins them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    pub toc: Vec<TocEntry>,
    /// Markdown blocks, separated by blank lines on output
    pub body: Vec<String>,
    pub resolutions: Vec<Resolution>,
    /// Number of top-level topics, used to number the resolutions section
    pub topic_count: usize,
}

impl Content {
    /// TOC, separator, body and (when present) the resolutions section.
    pub fn to_markdown(&self) -> String {
        let mut toc: Vec<String> = self.toc.iter().map(TocEntry::to_markdown).collect();
        let mut body = self.body.clone();

        if !self.resolutions.is_empty() {
            let number = self.topic_count + 1;
            toc.push(format!("* [{}. Resolutions](#{})", number, RESOLUTIONS_ANCHOR));
            body.push(format!("### [{}. Resolutions](id:{})", number, RESOLUTIONS_ANCHOR));
            body.push(
                self.resolutions
                    .iter()
                    .map(Resolution::index_markdown)
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        let mut out = String::from("## Content:\n\n");
        if !toc.is_empty() {
            out.push_str(&toc.join("\n"));
            out.push_str("\n\n");
        }
        out.push_str("---\n");
        if !body.is_empty() {
            out.push('\n');
            out.push_str(&body.join("\n\n"));
            out.push('\n');
        }
        out
    }
}
