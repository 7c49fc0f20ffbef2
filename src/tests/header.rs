use super::{extract_headers, is_summary_cell};
use crate::config::SUMMARY_HEADER;
use crate::formats::markdown::MarkdownFormat;
use crate::notebook::{Cell, Notebook};
use serde_json::json;

fn notebook(cells: serde_json::Value) -> Notebook {
    serde_json::from_value(json!({ "cells": cells })).unwrap()
}

fn headers_of(nb: &Notebook) -> Vec<String> {
    extract_headers(nb, &MarkdownFormat, SUMMARY_HEADER)
}

#[test]
fn test_extracts_headers_in_document_order() {
    let nb = notebook(json!([
        {"cell_type": "markdown", "source": ["# Intro\n", "some text\n", "## Details\n", "### Sub"]},
        {"cell_type": "code", "source": ["# a comment\n", "x = 1"]},
        {"cell_type": "markdown", "source": ["## Outro\n"]}
    ]));

    assert_eq!(
        headers_of(&nb),
        vec!["# Intro", "## Details", "### Sub", "## Outro"]
    );
}

#[test]
fn test_leading_whitespace_is_stripped() {
    let nb = notebook(json!([
        {"cell_type": "markdown", "source": ["   ## Indented  \n", "text # with hash"]}
    ]));

    assert_eq!(headers_of(&nb), vec!["## Indented"]);
}

#[test]
fn test_skips_summary_cell() {
    let nb = notebook(json!([
        {"cell_type": "markdown", "source": ["# Summary\n", "\n", "- [Old](#Old)\n", "# Old\n"]},
        {"cell_type": "markdown", "source": ["# New\n"]}
    ]));

    assert_eq!(headers_of(&nb), vec!["# New"]);
}

#[test]
fn test_summary_detected_only_on_first_line() {
    let nb = notebook(json!([
        {"cell_type": "markdown", "source": ["intro text\n", "# Summary\n", "## Part\n"]}
    ]));

    assert_eq!(headers_of(&nb), vec!["# Summary", "## Part"]);
}

#[test]
fn test_empty_source_yields_nothing() {
    let nb = notebook(json!([
        {"cell_type": "markdown", "source": []},
        {"cell_type": "markdown", "source": ""},
        {"cell_type": "markdown"},
        {"cell_type": "markdown", "source": ["# Kept"]}
    ]));

    assert_eq!(headers_of(&nb), vec!["# Kept"]);
}

#[test]
fn test_headers_are_subsequence_of_markdown_lines() {
    let nb = notebook(json!([
        {"cell_type": "markdown", "source": ["a\n", "# One\n", "b\n", "#### Four\n"]},
        {"cell_type": "raw", "source": ["# raw cell\n"]},
        {"cell_type": "markdown", "source": "## Two\nc\n# Three"}
    ]));

    let markdown_lines: Vec<String> = nb
        .cells
        .iter()
        .filter(|c| c.is_markdown())
        .flat_map(|c| c.source_lines())
        .map(|l| l.trim().to_string())
        .collect();
    let headers = headers_of(&nb);

    let mut remaining = markdown_lines.iter();
    for header in &headers {
        assert!(
            remaining.any(|line| line == header),
            "{header:?} out of order in {markdown_lines:?}"
        );
    }
    assert_eq!(headers, vec!["# One", "#### Four", "## Two", "# Three"]);
}

#[test]
fn test_is_summary_cell_requires_markdown() {
    let code: Cell =
        serde_json::from_value(json!({"cell_type": "code", "source": ["# Summary\n"]})).unwrap();
    let markdown = Cell::markdown(vec!["# Summary\n".to_string()]);
    let other = Cell::markdown(vec!["## Summary\n".to_string()]);

    assert!(!is_summary_cell(&code, SUMMARY_HEADER));
    assert!(is_summary_cell(&markdown, SUMMARY_HEADER));
    assert!(!is_summary_cell(&other, SUMMARY_HEADER));
}
