// Author: Dustin Pilgrim
// License: MIT

use super::*;

/// Resolves `|name|` to a copy of the constant's current value.
pub(super) fn resolve(parser: &Parser, name: &str, text: &str) -> Result<Value, ConfigError> {
    if !lexer::is_identifier(name) {
        return Err(value::invalid_value(
            parser,
            text,
            Some("A reference must wrap a constant name, e.g. |base_port|"),
        ));
    }

    parser
        .constants
        .lookup(name)
        .cloned()
        .ok_or_else(|| ConfigError::UndefinedConstant {
            name: name.to_string(),
            line: parser.line(),
            hint: Some("Constants must be assigned before they are referenced".into()),
            code: Some(205),
        })
}
