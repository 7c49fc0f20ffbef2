//! Jupyter notebook documents as read from and written back to disk.
//!
//! Only the parts the table of contents touches are typed: the `cells` array,
//! each cell's `cell_type`, and its `source`. Every other key is carried in a
//! flattened map so that a rewrite reproduces it unchanged.

use crate::error::{TocError, TocResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Cell type tag for markdown cells.
pub const MARKDOWN: &str = "markdown";

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A notebook document: an ordered sequence of cells plus untouched top-level keys.
pub struct Notebook {
    /// Notebook cells in document order.
    pub cells: Vec<Cell>,
    #[serde(flatten)]
    /// Remaining top-level entries (`metadata`, `nbformat`, ...).
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A single notebook cell.
pub struct Cell {
    /// Cell kind, e.g. "markdown" or "code".
    pub cell_type: String,
    #[serde(flatten)]
    /// Remaining cell entries (`metadata`, `outputs`, `id`, ...).
    pub extra: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    /// Cell source, either an array of lines or one multi-line string.
    pub source: Value,
}

impl Cell {
    /// Build a markdown cell with empty metadata holding the given lines.
    #[must_use]
    pub fn markdown(lines: Vec<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("metadata".to_string(), Value::Object(Map::new()));
        Self {
            cell_type: MARKDOWN.to_string(),
            extra,
            source: lines_to_source(lines),
        }
    }

    #[must_use]
    /// Whether this cell holds markdown.
    pub fn is_markdown(&self) -> bool {
        self.cell_type == MARKDOWN
    }

    /// Source lines in order, each keeping its trailing newline if it had one.
    ///
    /// Array entries that are not strings are skipped rather than rejected.
    #[must_use]
    pub fn source_lines(&self) -> Vec<&str> {
        match &self.source {
            Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
            Value::String(text) => text.split_inclusive('\n').collect(),
            _ => Vec::new(),
        }
    }

    /// Replace the cell's source with the given lines.
    pub fn set_source(&mut self, lines: Vec<String>) {
        self.source = lines_to_source(lines);
    }
}

fn lines_to_source(lines: Vec<String>) -> Value {
    Value::Array(lines.into_iter().map(Value::String).collect())
}

impl Notebook {
    /// Parse a notebook from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the text is not a notebook with a `cells` array.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Read a notebook from a file.
    ///
    /// # Errors
    ///
    /// Returns `TocError::LoadError` if the file is missing, unreadable, or not a
    /// valid notebook.
    pub fn read_from_file(path: impl AsRef<Path>) -> TocResult<Self> {
        let path = path.as_ref();
        let load_error = |message: String| TocError::LoadError {
            path: path.to_path_buf(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let notebook = Self::from_json(&content).map_err(|e| load_error(e.to_string()))?;
        tracing::debug!(
            "Loaded {} ({} cells)",
            path.display(),
            notebook.cells.len()
        );
        Ok(notebook)
    }

    /// Serialize the notebook with the given indentation width and a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if serialization fails.
    pub fn to_json(&self, indent: usize) -> serde_json::Result<String> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Overwrite a file with the serialized notebook.
    ///
    /// The file is truncated and rewritten in place; a failure part way through
    /// can leave it corrupted.
    ///
    /// # Errors
    ///
    /// Returns `TocError::WriteError` if serialization or the write fails.
    pub fn write_to_file(&self, path: impl AsRef<Path>, indent: usize) -> TocResult<()> {
        let path = path.as_ref();
        let write_error = |message: String| TocError::WriteError {
            path: path.to_path_buf(),
            message,
        };
        let json = self.to_json(indent).map_err(|e| write_error(e.to_string()))?;
        fs::write(path, json).map_err(|e| write_error(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/notebook.rs"]
mod tests;
