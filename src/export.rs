// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::ast::{Dictionary, Document, Value};
use crate::parser::Parser;
use crate::utils::escape_xml;
use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XmlStyle {
    /// XML declaration, one element per line, tab indentation.
    #[default]
    Pretty,
    /// No declaration and no whitespace between elements.
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xml(XmlStyle),
    Json,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Xml(XmlStyle::Pretty)
    }
}

/// Render a parsed document as XML.
///
/// Layout:
/// - root `<config>`
/// - one `<constant name="...">` per assignment, in source order (a constant
///   assigned twice appears twice)
/// - integers and text become element text
/// - dictionaries become a `<dictionary>` child with one `<entry key="...">`
///   per entry, nested the same way
///
/// # Examples
/// ```no_run
/// use cfgxml::export::{export_document_to_xml, XmlStyle};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = cfgxml::parse_str("port := 8080;")?;
/// let xml = export_document_to_xml(&doc, XmlStyle::Compact);
/// assert_eq!(xml, r#"<config><constant name="port">8080</constant></config>"#);
/// # Ok(())
/// # }
/// ```
pub fn export_document_to_xml(doc: &Document, style: XmlStyle) -> String {
    let mut writer = XmlWriter { out: String::new(), style };

    if style == XmlStyle::Pretty {
        writer.out.push_str("<?xml version=\"1.0\" ?>\n");
    }

    if doc.is_empty() {
        writer.line(0, "<config/>");
        return writer.out;
    }

    writer.line(0, "<config>");
    for assignment in doc {
        writer.element(1, "constant", ("name", assignment.name.as_str()), &assignment.value);
    }
    writer.line(0, "</config>");
    writer.out
}

struct XmlWriter {
    out: String,
    style: XmlStyle,
}

impl XmlWriter {
    fn indent(&mut self, depth: usize) {
        if self.style == XmlStyle::Pretty {
            for _ in 0..depth {
                self.out.push('\t');
            }
        }
    }

    fn newline(&mut self) {
        if self.style == XmlStyle::Pretty {
            self.out.push('\n');
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.indent(depth);
        self.out.push_str(text);
        self.newline();
    }

    fn element(&mut self, depth: usize, tag: &str, attr: (&str, &str), value: &Value) {
        self.indent(depth);
        self.out
            .push_str(&format!("<{} {}=\"{}\"", tag, attr.0, escape_xml(attr.1)));

        match value {
            Value::Integer(n) => {
                self.out.push_str(&format!(">{}</{}>", n, tag));
            }
            Value::Text(s) if s.is_empty() => {
                self.out.push_str("/>");
            }
            Value::Text(s) => {
                self.out.push_str(&format!(">{}</{}>", escape_xml(s), tag));
            }
            Value::Dictionary(entries) => {
                self.out.push('>');
                self.newline();
                self.dictionary(depth + 1, entries);
                self.indent(depth);
                self.out.push_str(&format!("</{}>", tag));
            }
        }
        self.newline();
    }

    fn dictionary(&mut self, depth: usize, entries: &Dictionary) {
        if entries.is_empty() {
            self.line(depth, "<dictionary/>");
            return;
        }

        self.line(depth, "<dictionary>");
        for (key, value) in entries {
            self.element(depth + 1, "entry", ("key", key.as_str()), value);
        }
        self.line(depth, "</dictionary>");
    }
}

/// Render a parsed document as a JSON object of constant name to value.
///
/// Key order follows the document. A constant assigned more than once keeps
/// its first position and its last value, like a dictionary key would.
pub fn export_document_to_json(doc: &Document) -> Result<String, ConfigError> {
    let mut top: IndexMap<&str, &Value> = IndexMap::new();
    for assignment in doc {
        top.insert(assignment.name.as_str(), &assignment.value);
    }

    serde_json::to_string_pretty(&top).map_err(|e| ConfigError::TypeError {
        message: format!("Failed to serialize document: {}", e),
        hint: None,
        code: Some(501),
    })
}

/// Read, parse and render a config file in one call.
///
/// # Errors
/// Returns error if the file can't be read or contains invalid syntax.
pub fn export_file<P: AsRef<Path>>(path: P, format: ExportFormat) -> Result<String, ConfigError> {
    let input = fs::read_to_string(&path).map_err(|e| ConfigError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.as_ref().to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;

    let doc = Parser::new(&input).parse_document()?;
    match format {
        ExportFormat::Xml(style) => Ok(export_document_to_xml(&doc, style)),
        ExportFormat::Json => export_document_to_json(&doc),
    }
}
