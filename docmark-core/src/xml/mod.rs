//! XML plumbing shared by the reader and the model
//!
//! `access` wraps `roxmltree` lookups so that every missing or malformed piece of
//! required structure turns into a positioned [`ReadError`](crate::error::ReadError).
//! `fragment` holds owned copies of XML subtrees for elements the reader does
//! not understand.

pub mod access;
pub mod fragment;

pub use access::{
    ensure_name_is, position_string, require_attribute, require_element, require_root_element,
    require_value, HasPosition, HasValue, XmlAttribute,
};
pub use fragment::{XmlContent, XmlElement};

use serde::Serialize;
use std::fmt;

/// A 1-based line/column location inside the XML source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl From<roxmltree::TextPos> for Position {
    fn from(pos: roxmltree::TextPos) -> Self {
        Position {
            line: pos.row,
            column: pos.col,
        }
    }
}

/// Formats as the suffix appended to diagnostics, e.g. ` (at 3:14)`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " (at {}:{})", self.line, self.column)
    }
}

/// Collapses every whitespace run to a single space. Leading and trailing
/// space is kept, since it separates the text from its neighbors.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
