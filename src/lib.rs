pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod utils;
pub mod config;

pub use ast::{Assignment, Dictionary, Document, Value};
pub use error::ConfigError;
pub use config::Config;
pub use export::{ExportFormat, XmlStyle};

/// Parse a whole config source into a document.
pub fn parse_str(input: &str) -> Result<Document, ConfigError> {
    parser::Parser::new(input).parse_document()
}
