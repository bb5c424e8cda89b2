//! Error types for reading and converting documentation

use crate::model::NodeKind;
use crate::xml::Position;
use thiserror::Error;

/// Structural failures while reading a documentation XML tree.
///
/// Every variant that refers to a node carries its source position when the
/// XML tree provides one, so the `Display` output points at the offending
/// markup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The text could not be parsed as XML at all
    #[error("Invalid XML: {message}")]
    Xml { message: String },

    #[error("XML document has no root element")]
    MissingRootElement,

    #[error("Element '{parent}' is missing required child element '{child}'{}", at(.position))]
    MissingRequiredElement {
        parent: String,
        child: String,
        position: Option<Position>,
    },

    #[error("Element '{element}' is missing required attribute '{attribute}'{}", at(.position))]
    MissingRequiredAttribute {
        element: String,
        attribute: String,
        position: Option<Position>,
    },

    #[error("Value of '{name}' must not be empty{}", at(.position))]
    EmptyValue {
        name: String,
        position: Option<Position>,
    },

    #[error("Unexpected element '{actual}', expected {}{}", expected_names(.expected), at(.position))]
    UnexpectedElementName {
        expected: Vec<String>,
        actual: String,
        position: Option<Position>,
    },

    #[error("Unexpected value '{value}' for attribute '{attribute}' of element '{element}'{}", at(.position))]
    UnexpectedAttributeValue {
        element: String,
        attribute: String,
        value: String,
        position: Option<Position>,
    },
}

/// Failures while converting the documentation model to Markdown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Argument '{parameter}' must not be empty")]
    NullArgument { parameter: &'static str },

    #[error("Element of kind '{kind}' cannot be converted to an inline span")]
    NotConvertibleToSpan { kind: NodeKind },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Any failure of the read-then-convert pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocmarkError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

fn at(position: &Option<Position>) -> String {
    position.map(|p| p.to_string()).unwrap_or_default()
}

fn expected_names(expected: &[String]) -> String {
    let quoted: Vec<String> = expected.iter().map(|name| format!("'{name}'")).collect();
    quoted.join(" or ")
}
