//! The text content grammar: everything that may appear inside a
//! documentation section.

use super::member_id::MemberId;
use crate::xml::XmlElement;
use serde::Serialize;

/// Ordered mixed content of a documentation element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TextBlock {
    pub elements: Vec<TextNode>,
}

impl TextBlock {
    pub fn new(elements: Vec<TextNode>) -> Self {
        TextBlock { elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// One node of the text content grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TextNode {
    Text(TextElement),
    See(SeeElement),
    ParamRef(ParamRefElement),
    TypeParamRef(TypeParamRefElement),
    C(CElement),
    Code(CodeElement),
    Para(ParaElement),
    List(ListElement),
    Unrecognized(UnrecognizedElement),
}

impl TextNode {
    /// Whether the node can only be rendered as inline content.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            TextNode::Text(_)
                | TextNode::See(_)
                | TextNode::ParamRef(_)
                | TextNode::TypeParamRef(_)
                | TextNode::C(_)
                | TextNode::Unrecognized(_)
        )
    }
}

/// A run of literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextElement {
    pub content: String,
}

impl TextElement {
    pub fn new(content: impl Into<String>) -> Self {
        TextElement {
            content: content.into(),
        }
    }
}

/// What a `<see>` or `<seealso>` points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SeeTarget {
    /// A code reference (`cref`).
    Member(MemberId),
    /// An external link (`href`).
    Url(String),
    /// A language keyword (`langword`), e.g. `null`.
    Keyword(String),
}

impl SeeTarget {
    /// The identifier as written in the source.
    pub fn identifier(&self) -> &str {
        match self {
            SeeTarget::Member(id) => id.as_str(),
            SeeTarget::Url(url) => url,
            SeeTarget::Keyword(keyword) => keyword,
        }
    }
}

/// An inline cross reference (`<see>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SeeElement {
    pub target: SeeTarget,
    /// Display text, `None` when the element was empty.
    pub text: Option<TextBlock>,
}

/// A reference to a method parameter (`<paramref>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParamRefElement {
    pub name: String,
}

/// A reference to a type parameter (`<typeparamref>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeParamRefElement {
    pub name: String,
}

/// Inline code (`<c>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CElement {
    pub content: String,
}

/// A block of preformatted code (`<code>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CodeElement {
    pub language: Option<String>,
    pub content: String,
}

/// An explicit paragraph (`<para>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParaElement {
    pub content: TextBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListKind {
    Bullet,
    Number,
    Table,
}

/// A `<list>` of items, optionally with a `<listheader>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ListElement {
    pub kind: ListKind,
    pub header: Option<ListItem>,
    pub items: Vec<ListItem>,
}

/// An `<item>` or `<listheader>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ListItem {
    pub term: Option<TextBlock>,
    pub description: Option<TextBlock>,
}

/// An element outside the known grammar, kept as written.
///
/// Equality and hashing come from the wrapped XML structure, so two
/// separately parsed copies of the same markup are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UnrecognizedElement {
    element: XmlElement,
}

impl UnrecognizedElement {
    pub fn new(element: XmlElement) -> Self {
        UnrecognizedElement { element }
    }

    pub fn element(&self) -> &XmlElement {
        &self.element
    }

    pub fn name(&self) -> &str {
        &self.element.name
    }

    pub fn inner_text(&self) -> String {
        self.element.inner_text()
    }

    pub fn to_xml_string(&self) -> String {
        self.element.to_xml_string()
    }
}
