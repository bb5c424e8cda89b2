//! Required-or-fail access to parsed XML
//!
//! The reader is written as a transcription of the documentation grammar: it asks
//! for the element, attribute or value it needs and gets either the thing itself
//! or a [`ReadError`] naming what was missing and where. None of these helpers
//! return an absent value silently.

use super::Position;
use crate::error::ReadError;
use roxmltree::{Attribute, Document, Node};
use std::borrow::Cow;

/// Anything that may know where it starts in the XML source.
pub trait HasPosition {
    fn position(&self) -> Option<Position>;
}

impl HasPosition for Node<'_, '_> {
    fn position(&self) -> Option<Position> {
        // The document node is synthetic and has no location of its own.
        if self.is_root() {
            return None;
        }
        Some(self.document().text_pos_at(self.range().start).into())
    }
}

/// An attribute together with the element that owns it.
///
/// `roxmltree` attributes do not know their document, so the owner is kept
/// around to resolve positions and to name the element in diagnostics.
#[derive(Debug, Clone)]
pub struct XmlAttribute<'a, 'input> {
    pub owner: Node<'a, 'input>,
    pub attribute: Attribute<'a, 'input>,
}

impl<'a, 'input> XmlAttribute<'a, 'input> {
    pub fn name(&self) -> &str {
        self.attribute.name()
    }

    pub fn value(&self) -> &'a str {
        self.attribute.value()
    }
}

impl HasPosition for XmlAttribute<'_, '_> {
    fn position(&self) -> Option<Position> {
        Some(
            self.owner
                .document()
                .text_pos_at(self.attribute.position())
                .into(),
        )
    }
}

/// Elements and attributes that carry a textual value.
pub trait HasValue: HasPosition {
    /// Name used when reporting an empty value.
    fn value_name(&self) -> &str;

    /// The raw textual value. For elements this is all descendant text.
    fn raw_value(&self) -> Cow<'_, str>;
}

impl HasValue for Node<'_, '_> {
    fn value_name(&self) -> &str {
        self.tag_name().name()
    }

    fn raw_value(&self) -> Cow<'_, str> {
        let mut texts = self.descendants().filter(|n| n.is_text()).filter_map(|n| n.text());
        match (texts.next(), texts.next()) {
            (None, _) => Cow::Borrowed(""),
            (Some(only), None) => Cow::Borrowed(only),
            (Some(first), Some(second)) => {
                let mut value = String::from(first);
                value.push_str(second);
                texts.for_each(|text| value.push_str(text));
                Cow::Owned(value)
            }
        }
    }
}

impl HasValue for XmlAttribute<'_, '_> {
    fn value_name(&self) -> &str {
        self.name()
    }

    fn raw_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.value())
    }
}

/// Returns `" (at line:col)"` for nodes with a known position, `""` otherwise.
pub fn position_string(node: &impl HasPosition) -> String {
    node.position().map(|p| p.to_string()).unwrap_or_default()
}

pub fn require_root_element<'a, 'input>(
    document: &'a Document<'input>,
) -> Result<Node<'a, 'input>, ReadError> {
    document
        .root()
        .children()
        .find(|n| n.is_element())
        .ok_or(ReadError::MissingRootElement)
}

/// Returns the first child element called `name`.
///
/// When several children share the name the first one in source order wins;
/// later duplicates are left to whoever iterates the children.
pub fn require_element<'a, 'input>(
    parent: Node<'a, 'input>,
    name: &str,
) -> Result<Node<'a, 'input>, ReadError> {
    parent
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .ok_or_else(|| ReadError::MissingRequiredElement {
            parent: parent.tag_name().name().to_string(),
            child: name.to_string(),
            position: parent.position(),
        })
}

pub fn require_attribute<'a, 'input>(
    element: Node<'a, 'input>,
    name: &str,
) -> Result<XmlAttribute<'a, 'input>, ReadError> {
    element
        .attributes()
        .find(|a| a.name() == name)
        .map(|attribute| XmlAttribute {
            owner: element,
            attribute,
        })
        .ok_or_else(|| ReadError::MissingRequiredAttribute {
            element: element.tag_name().name().to_string(),
            attribute: name.to_string(),
            position: element.position(),
        })
}

/// Returns the value of an element or attribute, failing when it is blank.
///
/// The value is returned as written; only the emptiness check trims.
pub fn require_value(node: &impl HasValue) -> Result<String, ReadError> {
    let value = node.raw_value();
    if value.trim().is_empty() {
        return Err(ReadError::EmptyValue {
            name: node.value_name().to_string(),
            position: node.position(),
        });
    }
    Ok(value.into_owned())
}

pub fn ensure_name_is(element: Node<'_, '_>, expected: &[&str]) -> Result<(), ReadError> {
    let actual = element.tag_name().name();
    if expected.contains(&actual) {
        return Ok(());
    }
    Err(ReadError::UnexpectedElementName {
        expected: expected.iter().map(|name| name.to_string()).collect(),
        actual: actual.to_string(),
        position: element.position(),
    })
}
