use std::fmt;

/// The main error type for parsing, loading and reading configs.
///
/// Parse errors carry the 1-based line number and the trimmed source text of
/// the line that failed. The first error aborts the parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A top-level line that is none of the recognized shapes.
    UnexpectedSyntax {
        text: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidAssignment {
        text: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidDictionaryEntry {
        text: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidValue {
        value: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// `|name|` used before `name` was assigned.
    UndefinedConstant {
        name: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Input ran out inside a `{ ... }` block. `line` is where the block opened.
    UnterminatedBlock {
        name: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    MissingKey {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl ConfigError {
    /// Source line the error points at, if it came from the parser.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfigError::UnexpectedSyntax { line, .. }
            | ConfigError::InvalidAssignment { line, .. }
            | ConfigError::InvalidDictionaryEntry { line, .. }
            | ConfigError::InvalidValue { line, .. }
            | ConfigError::UndefinedConstant { line, .. }
            | ConfigError::UnterminatedBlock { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            ConfigError::UnexpectedSyntax { code, .. }
            | ConfigError::InvalidAssignment { code, .. }
            | ConfigError::InvalidDictionaryEntry { code, .. }
            | ConfigError::InvalidValue { code, .. }
            | ConfigError::UndefinedConstant { code, .. }
            | ConfigError::UnterminatedBlock { code, .. }
            | ConfigError::FileError { code, .. }
            | ConfigError::MissingKey { code, .. }
            | ConfigError::TypeError { code, .. } => *code,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnexpectedSyntax { text, line, hint, code } =>
                write!(f, "[CFG] Unexpected syntax at line {}: {}{}",
                    line, text, suffix(hint, code)),
            ConfigError::InvalidAssignment { text, line, hint, code } =>
                write!(f, "[CFG] Invalid assignment syntax at line {}: {}{}",
                    line, text, suffix(hint, code)),
            ConfigError::InvalidDictionaryEntry { text, line, hint, code } =>
                write!(f, "[CFG] Invalid dictionary syntax at line {}: {}{}",
                    line, text, suffix(hint, code)),
            ConfigError::InvalidValue { value, line, hint, code } =>
                write!(f, "[CFG] Invalid value at line {}: {}{}",
                    line, value, suffix(hint, code)),
            ConfigError::UndefinedConstant { name, line, hint, code } =>
                write!(f, "[CFG] Undefined constant at line {}: {}{}",
                    line, name, suffix(hint, code)),
            ConfigError::UnterminatedBlock { name, line, hint, code } =>
                write!(f, "[CFG] Unterminated block '{}' opened at line {}{}",
                    name, line, suffix(hint, code)),
            ConfigError::FileError { message, path, hint, code } =>
                write!(f, "[CFG] File Error '{}': {}{}",
                    path, message, suffix(hint, code)),
            ConfigError::MissingKey { path, hint, code } =>
                write!(f, "[CFG] Path '{}' not found in configuration{}",
                    path, suffix(hint, code)),
            ConfigError::TypeError { message, hint, code } =>
                write!(f, "[CFG] Type Error: {}{}",
                    message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for ConfigError {}
