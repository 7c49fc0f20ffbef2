//! nbtoc: table of contents generation for Jupyter notebooks.
//!
//! The pipeline runs one way: load a notebook, extract markdown headers,
//! build the TOC lines, then print them or write them back as the first cell.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod emit;
pub mod error;
pub mod formats;
pub mod header;
pub mod notebook;
pub mod toc;

use config::Config;
use formats::markdown::MarkdownFormat;
use notebook::Notebook;

/// Extract the headers of a notebook and build its markdown TOC lines.
#[must_use]
pub fn generate_toc(notebook: &Notebook, cfg: &Config) -> Vec<String> {
    let format = MarkdownFormat;
    let headers = header::extract_headers(notebook, &format, &cfg.summary_header);
    toc::TocBuilder::new(&format, &cfg.summary_header, cfg.indent_width).build(&headers)
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
