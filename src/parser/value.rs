use super::*;

/// Parses a value expression. `owner` names the constant or dictionary path
/// the value belongs to and only feeds diagnostics.
pub(super) fn parse_value(parser: &mut Parser, text: &str, owner: &str) -> Result<Value, ConfigError> {
    let text = text.trim_end_matches(';').trim();

    if text == lexer::DICT_OPEN {
        return dictionary::parse_block(parser, owner);
    }
    if let Some(entries) = lexer::split_inline_entries(text) {
        return dictionary::parse_inline(parser, &entries, owner);
    }
    if lexer::is_integer(text) {
        return parse_integer(parser, text);
    }
    if let Some(inner) = lexer::text_literal(text) {
        return Ok(Value::Text(inner.to_string()));
    }
    if let Some(name) = lexer::reference_name(text) {
        return reference::resolve(parser, name, text);
    }

    Err(invalid_value(parser, text, None))
}

fn parse_integer(parser: &Parser, text: &str) -> Result<Value, ConfigError> {
    text.parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| invalid_value(parser, text, Some("Integer does not fit in 64 bits")))
}

pub(super) fn invalid_value(parser: &Parser, text: &str, hint: Option<&str>) -> ConfigError {
    ConfigError::InvalidValue {
        value: text.to_string(),
        line: parser.line(),
        hint: Some(
            hint.unwrap_or("Expected digits, [[text]], |constant| or `{`")
                .to_string(),
        ),
        code: Some(204),
    }
}
