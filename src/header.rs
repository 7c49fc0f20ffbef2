//! Header extraction from the markdown cells of a notebook.
//!
//! Headers are harvested in document order. A markdown cell whose first line
//! is the summary header is a previously generated table of contents, and is
//! skipped so that regenerating the TOC never lists itself.

use crate::formats::Format;
use crate::notebook::{Cell, Notebook};

/// Whether a cell is a previously generated summary cell.
///
/// Only the first source line of a markdown cell is inspected.
#[must_use]
pub fn is_summary_cell(cell: &Cell, summary_header: &str) -> bool {
    cell.is_markdown()
        && cell
            .source_lines()
            .first()
            .is_some_and(|line| line.trim_start().starts_with(summary_header))
}

/// Collect header lines from every markdown cell, trimmed of surrounding whitespace.
#[must_use]
pub fn extract_headers<F: Format>(
    notebook: &Notebook,
    format: &F,
    summary_header: &str,
) -> Vec<String> {
    let mut headers = Vec::new();

    for cell in notebook.cells.iter().filter(|cell| cell.is_markdown()) {
        if is_summary_cell(cell, summary_header) {
            tracing::debug!("Skipping existing summary cell");
            continue;
        }
        headers.extend(
            cell.source_lines()
                .into_iter()
                .filter(|line| format.is_header(line))
                .map(|line| line.trim().to_string()),
        );
    }

    tracing::debug!("Extracted {} headers", headers.len());
    headers
}

#[cfg(test)]
#[path = "tests/header.rs"]
mod tests;
