//! Per-kind renderer overrides
//!
//! A [`RendererRegistry`] maps a [`NodeKind`] to a function that replaces the
//! default block or span rule for that kind. The converter consults it for
//! every node it converts, including nodes reached while converting a parent,
//! so one registration changes a kind's rendering everywhere.
//!
//! ```ignore
//! let mut renderers = RendererRegistry::new();
//! renderers.register_span(NodeKind::ParamRef, |node, _| match node {
//!     NodeRef::ParamRef(p) => Ok(MdSpan::strong(MdSpan::text(&p.name))),
//!     _ => unreachable!(),
//! });
//! let converter = MarkdownConverter::default().with_renderers(renderers);
//! ```
//!
//! Functions receive the converter so they can convert children or fall back
//! to [`MarkdownConverter::default_block`] / [`MarkdownConverter::default_span`].

use super::MarkdownConverter;
use crate::error::ConvertError;
use crate::markdown::{MdBlock, MdSpan};
use crate::model::{NodeKind, NodeRef};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type BlockRenderer =
    Arc<dyn Fn(NodeRef<'_>, &MarkdownConverter) -> Result<MdBlock, ConvertError> + Send + Sync>;

pub type SpanRenderer =
    Arc<dyn Fn(NodeRef<'_>, &MarkdownConverter) -> Result<MdSpan, ConvertError> + Send + Sync>;

#[derive(Clone, Default)]
pub struct RendererRegistry {
    block: HashMap<NodeKind, BlockRenderer>,
    span: HashMap<NodeKind, SpanRenderer>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block renderer, replacing any earlier one for `kind`.
    pub fn register_block<F>(&mut self, kind: NodeKind, render: F)
    where
        F: Fn(NodeRef<'_>, &MarkdownConverter) -> Result<MdBlock, ConvertError>
            + Send
            + Sync
            + 'static,
    {
        self.block.insert(kind, Arc::new(render));
    }

    /// Register a span renderer, replacing any earlier one for `kind`.
    pub fn register_span<F>(&mut self, kind: NodeKind, render: F)
    where
        F: Fn(NodeRef<'_>, &MarkdownConverter) -> Result<MdSpan, ConvertError>
            + Send
            + Sync
            + 'static,
    {
        self.span.insert(kind, Arc::new(render));
    }

    pub fn block(&self, kind: NodeKind) -> Option<&BlockRenderer> {
        self.block.get(&kind)
    }

    pub fn span(&self, kind: NodeKind) -> Option<&SpanRenderer> {
        self.span.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_empty() && self.span.is_empty()
    }

    fn sorted_kinds<T>(map: &HashMap<NodeKind, T>) -> Vec<NodeKind> {
        let mut kinds: Vec<_> = map.keys().copied().collect();
        kinds.sort();
        kinds
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("block", &Self::sorted_kinds(&self.block))
            .field("span", &Self::sorted_kinds(&self.span))
            .finish()
    }
}
