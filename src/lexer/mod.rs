// Author: Dustin Pilgrim
// License: MIT

//! Line classifier.
//!
//! The grammar is line oriented: no construct spans a line break, so every
//! physical line is classified on its own by pattern matching the trimmed
//! text. Nothing here touches parser state.

mod patterns;

pub use patterns::{
    is_identifier, is_integer, match_entry, reference_name, split_inline_entries, text_literal,
};

pub const DICT_OPEN: &str = "{";
pub const DICT_CLOSE: [&str; 3] = ["}", "};", "},"];

/// One physical line of input and its 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub index: usize,
    pub raw: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `name := value`, trailing `;` removed from `value`.
    Assignment { name: &'a str, value: &'a str },
    Terminator,
    /// `key => value`, trailing `,` removed from `value`.
    Entry { key: &'a str, value: &'a str },
}

/// A line matching none of the shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Malformed<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(index: usize, raw: &'a str) -> Self {
        Self { index, raw }
    }

    /// 1-based line number for diagnostics.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn text(&self) -> &'a str {
        self.raw.trim()
    }

    pub fn classify(&self) -> Result<LineKind<'a>, Malformed<'a>> {
        let text = self.text();

        if text.is_empty() {
            return Ok(LineKind::Blank);
        }
        if DICT_CLOSE.contains(&text) {
            return Ok(LineKind::Terminator);
        }
        if let Some(caps) = patterns::ASSIGNMENT.captures(text) {
            if let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) {
                return Ok(LineKind::Assignment {
                    name: name.as_str(),
                    value: value.as_str().trim_end_matches(';').trim(),
                });
            }
        }
        if let Some((key, value)) = match_entry(text) {
            return Ok(LineKind::Entry { key, value });
        }

        Err(Malformed { index: self.index, text })
    }

    /// Loose check used to pick between "invalid assignment" and
    /// "unexpected syntax" for a malformed top-level line.
    pub fn looks_like_assignment(&self) -> bool {
        let text = self.text();
        text.contains(":=") || text.ends_with(';') || text.starts_with(DICT_OPEN)
    }
}

/// Splits input into source lines, keeping original numbering.
pub fn split_lines(input: &str) -> Vec<SourceLine<'_>> {
    input
        .lines()
        .enumerate()
        .map(|(i, raw)| SourceLine::new(i, raw))
        .collect()
}

#[cfg(test)]
mod tests;
