use tracing::debug;

use super::*;
use crate::ast::Dictionary;
use crate::lexer::LineKind;

/// Multi-line `{ ... }` block. Called with the cursor on the line holding the
/// opening `{`; returns with the cursor on the terminator line.
pub(super) fn parse_block(parser: &mut Parser, owner: &str) -> Result<Value, ConfigError> {
    let opened_at = parser.line();
    parser.bump();
    debug!(owner, line = opened_at, "entering dictionary");

    let mut entries = Dictionary::new();

    loop {
        let Some(line) = parser.current() else {
            return Err(ConfigError::UnterminatedBlock {
                name: owner.to_string(),
                line: opened_at,
                hint: Some("Close the block with `}`, `};` or `},`".into()),
                code: Some(206),
            });
        };

        match line.classify() {
            Ok(LineKind::Blank) => {}
            Ok(LineKind::Terminator) => {
                debug!(owner, entries = entries.len(), "leaving dictionary");
                return Ok(Value::Dictionary(entries));
            }
            Ok(LineKind::Entry { key, value }) => {
                parse_entry(parser, &mut entries, key, value, owner)?;
            }
            Ok(LineKind::Assignment { .. }) | Err(_) => {
                return Err(ConfigError::InvalidDictionaryEntry {
                    text: line.text().to_string(),
                    line: line.number(),
                    hint: Some("Expected `key => value,` or a closing `}`".into()),
                    code: Some(203),
                });
            }
        }
        parser.bump();
    }
}

/// One-line `{ k => v, ... }` literal, already split into entry texts.
pub(super) fn parse_inline(
    parser: &mut Parser,
    segments: &[&str],
    owner: &str,
) -> Result<Value, ConfigError> {
    let mut entries = Dictionary::new();

    for segment in segments {
        let Some((key, value)) = lexer::match_entry(segment) else {
            return Err(ConfigError::InvalidDictionaryEntry {
                text: segment.to_string(),
                line: parser.line(),
                hint: Some("Expected `key => value` between the braces".into()),
                code: Some(203),
            });
        };
        parse_entry(parser, &mut entries, key, value, owner)?;
    }

    Ok(Value::Dictionary(entries))
}

/// Duplicate keys overwrite the value and keep the first key's position.
fn parse_entry(
    parser: &mut Parser,
    entries: &mut Dictionary,
    key: &str,
    text: &str,
    owner: &str,
) -> Result<(), ConfigError> {
    let path = format!("{}.{}", owner, key);
    let value = value::parse_value(parser, text, &path)?;

    if entries.insert(key.to_string(), value).is_some() {
        debug!(key = %path, "duplicate key overwritten");
    }
    Ok(())
}
