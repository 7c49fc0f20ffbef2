//! Markdown format implementation for ATX-style headings (# syntax).
//!
//! Anchors keep the header text verbatim apart from joining words with hyphens,
//! so punctuation and case pass straight through.

use crate::formats::Format;

/// ATX-style markdown headings with hyphen-joined anchors.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn marker(&self) -> char {
        '#'
    }

    fn anchor(&self, words: &[&str]) -> String {
        words.join("-")
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
