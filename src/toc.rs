//! Table of contents construction from extracted header lines.
//!
//! Each header becomes one markdown list item, indented by its depth and
//! linking to the header's anchor. Order follows the input exactly.

use crate::formats::Format;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single linked entry in the table of contents.
pub struct TocEntry {
    /// Nesting depth, 1 for a top-level header.
    pub depth: usize,
    /// Header text without the marker run.
    pub text: String,
    /// In-document anchor target, without the leading `#`.
    pub anchor: String,
}

impl TocEntry {
    /// Render as a newline-terminated markdown list item.
    #[must_use]
    pub fn render(&self, indent_width: usize) -> String {
        let indent = " ".repeat(self.depth.saturating_sub(1) * indent_width);
        format!("{indent}- [{}](#{})\n", self.text, self.anchor)
    }
}

/// Builds TOC lines headed by the summary header and a blank line.
pub struct TocBuilder<'a, F: Format> {
    format: &'a F,
    summary_header: &'a str,
    indent_width: usize,
}

impl<'a, F: Format> TocBuilder<'a, F> {
    /// Create a builder for the given header syntax.
    #[must_use]
    pub fn new(format: &'a F, summary_header: &'a str, indent_width: usize) -> Self {
        Self {
            format,
            summary_header,
            indent_width,
        }
    }

    /// Parse one header line into an entry.
    ///
    /// The first whitespace-separated token is the marker run; the remaining
    /// tokens form the display text.
    #[must_use]
    pub fn entry(&self, header: &str) -> TocEntry {
        let mut tokens = header.split_whitespace();
        let depth = tokens.next().map_or(0, |marker| self.format.depth(marker));
        let words: Vec<&str> = tokens.collect();
        TocEntry {
            depth,
            text: words.join(" "),
            anchor: self.format.anchor(&words),
        }
    }

    /// Build the full list of TOC lines, each newline-terminated.
    #[must_use]
    pub fn build(&self, headers: &[String]) -> Vec<String> {
        let mut toc = vec![format!("{}\n", self.summary_header), "\n".to_string()];
        toc.extend(
            headers
                .iter()
                .map(|header| self.entry(header).render(self.indent_width)),
        );
        toc
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
