//! Documentation model → Markdown
//!
//! [`MarkdownConverter`] is the entry point. It owns the [`ConvertOptions`]
//! and the [`RendererRegistry`], and hands nodes to one of two visitors:
//!
//! - [`BlockVisitor`](block::BlockVisitor) turns any node into an [`MdBlock`].
//! - [`SpanVisitor`](span::SpanVisitor) turns inline nodes into an [`MdSpan`]
//!   and rejects block-only nodes with
//!   [`ConvertError::NotConvertibleToSpan`].
//!
//! Visitors never recurse into children directly; they go back through the
//! converter so registered renderers apply at every depth.

pub mod block;
pub mod options;
pub mod registry;
pub mod span;

pub use options::{ConvertOptions, CrossRefStyle, UnrecognizedPolicy};
pub use registry::{BlockRenderer, RendererRegistry, SpanRenderer};

use crate::error::ConvertError;
use crate::markdown::{MdBlock, MdSpan};
use crate::model::{Accept, NodeRef};
use block::BlockVisitor;
use span::SpanVisitor;

#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConvertOptions,
    renderers: RendererRegistry,
}

impl MarkdownConverter {
    pub fn new(options: ConvertOptions) -> Self {
        MarkdownConverter {
            options,
            renderers: RendererRegistry::new(),
        }
    }

    pub fn with_renderers(mut self, renderers: RendererRegistry) -> Self {
        self.renderers = renderers;
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Converts a node to block content.
    ///
    /// Fails with [`ConvertError::NullArgument`] when no node is given.
    pub fn convert_to_block<'n, N>(
        &self,
        node: impl Into<Option<&'n N>>,
    ) -> Result<MdBlock, ConvertError>
    where
        N: Accept + 'n,
    {
        let node: Option<&N> = node.into();
        let node = node.ok_or(ConvertError::NullArgument { parameter: "node" })?;
        self.render_block(node.as_node())
    }

    /// Converts an inline node to span content.
    pub fn convert_to_span<'n, N>(
        &self,
        node: impl Into<Option<&'n N>>,
    ) -> Result<MdSpan, ConvertError>
    where
        N: Accept + 'n,
    {
        let node: Option<&N> = node.into();
        let node = node.ok_or(ConvertError::NullArgument { parameter: "node" })?;
        self.render_span(node.as_node())
    }

    /// Converts a node to block content and serializes it.
    pub fn convert_to_markdown<'n, N>(
        &self,
        node: impl Into<Option<&'n N>>,
    ) -> Result<String, ConvertError>
    where
        N: Accept + 'n,
    {
        self.convert_to_block(node)?.to_markdown()
    }

    /// Block conversion of `node`, honoring registered renderers.
    pub fn render_block(&self, node: NodeRef<'_>) -> Result<MdBlock, ConvertError> {
        match self.renderers.block(node.kind()) {
            Some(render) => render(node, self),
            None => self.default_block(node),
        }
    }

    /// Span conversion of `node`, honoring registered renderers.
    pub fn render_span(&self, node: NodeRef<'_>) -> Result<MdSpan, ConvertError> {
        match self.renderers.span(node.kind()) {
            Some(render) => render(node, self),
            None => self.default_span(node),
        }
    }

    /// The built-in block rule for `node`, skipping the registry for this node only.
    pub fn default_block(&self, node: NodeRef<'_>) -> Result<MdBlock, ConvertError> {
        node.accept(&mut BlockVisitor::new(self))
    }

    /// The built-in span rule for `node`, skipping the registry for this node only.
    pub fn default_span(&self, node: NodeRef<'_>) -> Result<MdSpan, ConvertError> {
        node.accept(&mut SpanVisitor::new(self))
    }
}
