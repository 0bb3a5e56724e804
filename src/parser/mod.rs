use tracing::trace;

use crate::ast::{Document, Value};
use crate::lexer::{self, SourceLine};
use crate::resolver::ConstantTable;
use crate::ConfigError;

mod dictionary;
mod document;
mod reference;
mod value;

/// Recursive descent parser over classified lines.
///
/// One parser is one parse session: it owns the line cursor and the
/// constant table, and both start fresh for every new parser.
pub struct Parser<'a> {
    lines: Vec<SourceLine<'a>>,
    position: usize,
    constants: ConstantTable,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_lines(lexer::split_lines(input))
    }

    /// Parser over lines that were already split, e.g. read from a file.
    pub fn from_lines<S: AsRef<str>>(lines: &'a [S]) -> Self {
        Self::with_lines(
            lines
                .iter()
                .enumerate()
                .map(|(i, l)| SourceLine::new(i, l.as_ref()))
                .collect(),
        )
    }

    fn with_lines(lines: Vec<SourceLine<'a>>) -> Self {
        Self {
            lines,
            position: 0,
            constants: ConstantTable::new(),
        }
    }

    pub(crate) fn current(&self) -> Option<SourceLine<'a>> {
        let line = self.lines.get(self.position).copied();
        if let Some(l) = &line {
            trace!(line = l.number(), text = l.text(), "reading line");
        }
        line
    }

    pub(crate) fn bump(&mut self) {
        self.position += 1;
    }

    /// 1-based number of the line under the cursor (last line once exhausted).
    pub(crate) fn line(&self) -> usize {
        self.position.min(self.lines.len().saturating_sub(1)) + 1
    }

    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn parse_document(&mut self) -> Result<Document, ConfigError> {
        document::parse_document(self)
    }
}
