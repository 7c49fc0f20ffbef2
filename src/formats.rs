//! Header syntax for the markup carried in notebook cells.
//!
//! A `Format` knows which character marks a header line and how a header's
//! display text turns into an in-document anchor. Only markdown is provided.

pub mod markdown;

/// Marker and anchor rules for a header syntax.
pub trait Format {
    /// Character repeated at the start of a header line to denote its depth.
    fn marker(&self) -> char;

    /// Anchor target for a header made of the given display words.
    fn anchor(&self, words: &[&str]) -> String;

    /// Whether a line is a header once leading whitespace is stripped.
    #[must_use]
    fn is_header(&self, line: &str) -> bool {
        line.trim_start().starts_with(self.marker())
    }

    /// Header depth for the leading token of a header line.
    ///
    /// The whole token counts as the marker run, so `#1` is as deep as `##`.
    #[must_use]
    fn depth(&self, token: &str) -> usize {
        token.chars().count()
    }
}
