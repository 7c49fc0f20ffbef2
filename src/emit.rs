//! Output of a finished table of contents.
//!
//! In print mode the TOC goes to a writer (stdout from the CLI) and nothing
//! touches disk. In insert mode the TOC becomes the notebook's first cell,
//! replacing an existing summary cell or shifting every cell down by one.

use crate::error::{TocError, TocResult};
use crate::header::is_summary_cell;
use crate::notebook::{Cell, Notebook};
use std::io::Write;
use std::path::Path;

/// Write each TOC line followed by a line break.
///
/// Lines already end in a newline, so each entry is followed by a blank line.
///
/// # Errors
///
/// Returns the I/O error if the writer fails.
pub fn print_toc<W: Write>(toc: &[String], out: &mut W) -> std::io::Result<()> {
    for line in toc {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the TOC was placed into the notebook.
pub enum Placement {
    /// An existing summary cell had its source replaced.
    Replaced,
    /// A new summary cell was inserted at index 0.
    Inserted,
}

/// Place the TOC into the notebook as its first cell.
pub fn place_toc(notebook: &mut Notebook, toc: Vec<String>, summary_header: &str) -> Placement {
    match notebook.cells.first_mut() {
        Some(first) if is_summary_cell(first, summary_header) => {
            first.set_source(toc);
            Placement::Replaced
        }
        _ => {
            notebook.cells.insert(0, Cell::markdown(toc));
            Placement::Inserted
        }
    }
}

/// Place the TOC into the notebook and overwrite the file at `path`.
///
/// # Errors
///
/// Returns `TocError::WriteError` if the notebook cannot be written.
pub fn insert_toc(
    notebook: &mut Notebook,
    toc: Vec<String>,
    path: &Path,
    summary_header: &str,
    indent: usize,
) -> TocResult<Placement> {
    let placement = place_toc(notebook, toc, summary_header);
    notebook.write_to_file(path, indent)?;
    tracing::info!(
        "{} summary cell in {} ({} cells)",
        match placement {
            Placement::Replaced => "Replaced",
            Placement::Inserted => "Inserted",
        },
        path.display(),
        notebook.cells.len()
    );
    Ok(placement)
}

/// Print the TOC to stdout, mapping failures to a write error on `<stdout>`.
///
/// # Errors
///
/// Returns `TocError::WriteError` if stdout cannot be written.
pub fn print_to_stdout(toc: &[String]) -> TocResult<()> {
    let stdout = std::io::stdout();
    print_toc(toc, &mut stdout.lock()).map_err(|e| TocError::WriteError {
        path: "<stdout>".into(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/emit.rs"]
mod tests;
