//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an nbtoc.toml, and if present we load settings from there.
//! This provides the summary header, list indentation, and JSON indentation preferences.

use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Header text that opens a generated table of contents.
pub const SUMMARY_HEADER: &str = "# Summary";

/// Default location of the configuration file.
pub const CONFIG_FILE: &str = "nbtoc.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from nbtoc.toml or falling back to defaults.
pub struct Config {
    #[facet(default = SUMMARY_HEADER.to_string())]
    /// First line of a generated TOC, also used to recognise an existing one.
    pub summary_header: String,
    #[facet(default = 2)]
    /// Spaces of indentation per header level.
    pub indent_width: usize,
    #[facet(default = 1)]
    /// Indentation used when writing the notebook back to disk.
    pub json_indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_header: SUMMARY_HEADER.to_string(),
            indent_width: 2,
            json_indent: 1,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from the given file, or nbtoc.toml if none is given.
    ///
    /// An absent nbtoc.toml yields the defaults silently; a named file that cannot
    /// be read, or any invalid file, is reported and ignored.
    pub fn load(path: Option<&Path>) -> Self {
        let explicit = path.is_some();
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        let contents = match read_config(path, explicit) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {}: {e}", path.display());
                return Self::default();
            }
        };
        Self::from_toml(&contents).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid config {}: {e}", path.display());
            Self::default()
        })
    }

    /// Parse configuration from TOML text, defaulting any missing field.
    ///
    /// # Errors
    ///
    /// Returns the parse error message if the text is not a valid configuration
    /// or sets an empty summary header.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        let config = facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())?;
        if config.summary_header.trim().is_empty() {
            return Err("summary_header must not be empty".to_string());
        }
        Ok(config)
    }
}

/// Read a config file, treating a missing implicit file as absent.
fn read_config(path: &Path, explicit: bool) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
