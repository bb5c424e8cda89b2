//! Markdown output model
//!
//! The converter produces a tree of [`MdBlock`]s and [`MdSpan`]s rather than
//! text. Keeping the structure around lets callers and tests inspect what was
//! produced (is this a link? what is its label?) before anything is written
//! out. [`serializer`] turns the tree into CommonMark text through `comrak`.
//!
//! | Block            | Markdown                         |
//! |------------------|----------------------------------|
//! | Paragraph        | text block                       |
//! | Heading          | `#` … `######`                   |
//! | BulletList       | `- item`                         |
//! | OrderedList      | `1. item`                        |
//! | CodeBlock        | fenced block with info string    |
//! | Table            | GFM pipe table                   |
//! | Container        | its children, one after another  |

pub mod serializer;

pub use serializer::serialize_to_markdown;

use crate::error::ConvertError;
use serde::Serialize;

/// Inline Markdown content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MdSpan {
    Empty,
    Text(String),
    Code(String),
    Emphasis(Box<MdSpan>),
    Strong(Box<MdSpan>),
    Link { label: Box<MdSpan>, url: String },
    /// Markup written out as is (inline HTML).
    Raw(String),
    Composite(Vec<MdSpan>),
}

impl MdSpan {
    pub fn text(text: impl Into<String>) -> Self {
        MdSpan::Text(text.into())
    }

    pub fn code(code: impl Into<String>) -> Self {
        MdSpan::Code(code.into())
    }

    pub fn strong(span: MdSpan) -> Self {
        MdSpan::Strong(Box::new(span))
    }

    pub fn link(label: MdSpan, url: impl Into<String>) -> Self {
        MdSpan::Link {
            label: Box::new(label),
            url: url.into(),
        }
    }

    /// Joins spans, dropping empty ones. A single survivor is returned as is.
    pub fn composite(spans: Vec<MdSpan>) -> Self {
        let mut spans: Vec<MdSpan> = spans.into_iter().filter(|s| !s.is_empty()).collect();
        match spans.len() {
            0 => MdSpan::Empty,
            1 => spans.remove(0),
            _ => MdSpan::Composite(spans),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MdSpan::Empty => true,
            MdSpan::Text(text) | MdSpan::Raw(text) => text.is_empty(),
            MdSpan::Code(_) | MdSpan::Link { .. } => false,
            MdSpan::Emphasis(inner) | MdSpan::Strong(inner) => inner.is_empty(),
            MdSpan::Composite(spans) => spans.iter().all(MdSpan::is_empty),
        }
    }

    /// The text a reader would see, with all markup removed.
    pub fn plain_text(&self) -> String {
        match self {
            MdSpan::Empty => String::new(),
            MdSpan::Text(text) | MdSpan::Code(text) | MdSpan::Raw(text) => text.clone(),
            MdSpan::Emphasis(inner) | MdSpan::Strong(inner) => inner.plain_text(),
            MdSpan::Link { label, .. } => label.plain_text(),
            MdSpan::Composite(spans) => spans.iter().map(MdSpan::plain_text).collect(),
        }
    }

    /// Removes leading and trailing whitespace from the outermost text runs.
    pub fn trim(self) -> Self {
        self.trim_start().trim_end()
    }

    fn trim_start(self) -> Self {
        match self {
            MdSpan::Text(text) => MdSpan::Text(text.trim_start().to_string()),
            MdSpan::Composite(mut spans) => {
                if let Some(first) = spans.first_mut() {
                    *first = std::mem::replace(first, MdSpan::Empty).trim_start();
                }
                MdSpan::composite(spans)
            }
            other => other,
        }
    }

    fn trim_end(self) -> Self {
        match self {
            MdSpan::Text(text) => MdSpan::Text(text.trim_end().to_string()),
            MdSpan::Composite(mut spans) => {
                if let Some(last) = spans.last_mut() {
                    *last = std::mem::replace(last, MdSpan::Empty).trim_end();
                }
                MdSpan::composite(spans)
            }
            other => other,
        }
    }
}

/// One item of a bullet or ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MdListItem {
    pub blocks: Vec<MdBlock>,
}

impl MdListItem {
    pub fn new(blocks: Vec<MdBlock>) -> Self {
        MdListItem { blocks }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MdTable {
    pub header: Vec<MdSpan>,
    pub rows: Vec<Vec<MdSpan>>,
}

/// Block-level Markdown content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MdBlock {
    Paragraph(MdSpan),
    Heading { level: u8, text: MdSpan },
    BulletList(Vec<MdListItem>),
    OrderedList(Vec<MdListItem>),
    CodeBlock { info: Option<String>, code: String },
    Table(MdTable),
    Container(Vec<MdBlock>),
}

impl MdBlock {
    /// Wraps blocks in a container, unwrapping a single block.
    pub fn container(blocks: Vec<MdBlock>) -> Self {
        let mut blocks: Vec<MdBlock> = blocks.into_iter().filter(|b| !b.is_empty()).collect();
        if blocks.len() == 1 {
            return blocks.remove(0);
        }
        MdBlock::Container(blocks)
    }

    pub fn heading(level: u8, text: MdSpan) -> Self {
        MdBlock::Heading { level, text }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MdBlock::Paragraph(span) => span.is_empty(),
            MdBlock::Container(blocks) => blocks.iter().all(MdBlock::is_empty),
            _ => false,
        }
    }

    /// Child blocks of a container, or the block itself.
    pub fn blocks(&self) -> &[MdBlock] {
        match self {
            MdBlock::Container(blocks) => blocks,
            other => std::slice::from_ref(other),
        }
    }

    /// Flattens one level of container.
    pub fn into_blocks(self) -> Vec<MdBlock> {
        match self {
            MdBlock::Container(blocks) => blocks,
            other => vec![other],
        }
    }

    pub fn to_markdown(&self) -> Result<String, ConvertError> {
        serialize_to_markdown(self)
    }
}
