use tracing::debug;

use super::*;
use crate::ast::Assignment;
use crate::lexer::LineKind;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, ConfigError> {
    let mut assignments = Vec::new();

    while let Some(line) = parser.current() {
        match line.classify() {
            Ok(LineKind::Blank) => {}
            Ok(LineKind::Assignment { name, value }) => {
                assignments.push(parse_assignment(parser, name, value)?);
            }
            Ok(_) | Err(_) => {
                return Err(top_level_error(&line));
            }
        }
        parser.bump();
    }

    debug!(
        assignments = assignments.len(),
        constants = parser.constants.len(),
        "parsed document"
    );
    Ok(Document { assignments })
}

/// `name := value`. When the value opens a block, the cursor is left on the
/// block's terminator line.
fn parse_assignment(parser: &mut Parser, name: &str, text: &str) -> Result<Assignment, ConfigError> {
    let value = value::parse_value(parser, text, name)?;

    if parser.constants.define(name, value.clone()).is_some() {
        debug!(constant = name, "constant redefined");
    } else {
        debug!(constant = name, kind = value.type_name(), "constant defined");
    }

    Ok(Assignment {
        name: name.to_string(),
        value,
    })
}

fn top_level_error(line: &SourceLine) -> ConfigError {
    if line.looks_like_assignment() {
        ConfigError::InvalidAssignment {
            text: line.text().to_string(),
            line: line.number(),
            hint: Some("Expected `name := value`".into()),
            code: Some(202),
        }
    } else {
        ConfigError::UnexpectedSyntax {
            text: line.text().to_string(),
            line: line.number(),
            hint: Some("Only `name := value` assignments are allowed at top level".into()),
            code: Some(201),
        }
    }
}
