// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::ast::{Document, Value};
use crate::parser;
use crate::ConfigError;

mod access;
mod conversion;

/// A parsed config with path-based access to its constants.
pub struct Config {
    document: Document,
    raw_content: String, // kept for line lookups in error messages
}

impl Config {
    /// Load and parse a config file.
    ///
    /// # Example
    /// ```ignore
    /// let config = Config::from_file("settings.cfg")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.as_ref().to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        debug!(path = %path.as_ref().display(), bytes = content.len(), "loading config");
        Self::from_str(&content)
    }

    /// Parse a config from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let document = parser::Parser::new(content).parse_document()?;

        Ok(Self {
            document,
            raw_content: content.to_string(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Names of all top-level constants, first definition order, no repeats.
    pub fn constant_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.document.names() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// 1-based line where the top-level constant `name` was last assigned.
    fn find_assignment_line(&self, name: &str) -> Option<usize> {
        self.raw_content
            .lines()
            .enumerate()
            .filter(|(_, l)| {
                l.trim_start()
                    .strip_prefix(name)
                    .is_some_and(|rest| rest.trim_start().starts_with(":="))
            })
            .map(|(i, _)| i + 1)
            .last()
    }
}
