//! Span conversion rules
//!
//! Inline nodes become [`MdSpan`]s. Paragraphs, code blocks, lists, sections,
//! members and files have no inline form and fail with
//! [`ConvertError::NotConvertibleToSpan`].

use super::{CrossRefStyle, MarkdownConverter, UnrecognizedPolicy};
use crate::error::ConvertError;
use crate::markdown::MdSpan;
use crate::xml::collapse_whitespace;
use crate::model::{
    Accept, CElement, CodeElement, DocVisitor, DocumentationFile, ListElement, MemberElement,
    NodeKind, ParaElement, ParamRefElement, SectionElement, SeeAlsoElement, SeeElement, SeeTarget,
    TextBlock, TextElement, TypeParamRefElement, UnrecognizedElement,
};

type SpanResult = Result<MdSpan, ConvertError>;

pub struct SpanVisitor<'c> {
    converter: &'c MarkdownConverter,
}

impl<'c> SpanVisitor<'c> {
    pub fn new(converter: &'c MarkdownConverter) -> Self {
        SpanVisitor { converter }
    }

    fn reference(&self, target: &SeeTarget, text: Option<&TextBlock>) -> SpanResult {
        let label = match text {
            Some(text) => self.converter.render_span(text.as_node())?.trim(),
            None => MdSpan::Empty,
        };
        Ok(reference_span(self.converter, target, label))
    }
}

/// Renders a cross reference.
///
/// An empty `label` is replaced by a name derived from the target:
/// `T:Ns.Foo` shows as `Foo`, `M:Ns.Foo.Run(System.Int32)` as `Foo.Run`.
/// Identifiers with no usable name, like `T:`, show verbatim.
pub fn reference_span(converter: &MarkdownConverter, target: &SeeTarget, label: MdSpan) -> MdSpan {
    let options = converter.options();
    match target {
        SeeTarget::Keyword(keyword) if label.is_empty() => MdSpan::code(keyword.clone()),
        SeeTarget::Keyword(_) => label,
        SeeTarget::Url(url) => {
            let label = if label.is_empty() {
                MdSpan::text(url.clone())
            } else {
                label
            };
            MdSpan::link(label, url.clone())
        }
        SeeTarget::Member(id) => {
            let label = if !label.is_empty() {
                label
            } else {
                let name = id.display_name();
                if name.is_empty() {
                    MdSpan::text(id.as_str())
                } else {
                    MdSpan::text(name)
                }
            };
            match options.cross_references {
                CrossRefStyle::Link => {
                    MdSpan::link(label, format!("{}{}", options.anchor_prefix, id.anchor()))
                }
                CrossRefStyle::Code => MdSpan::code(label.plain_text()),
                CrossRefStyle::Text => label,
            }
        }
    }
}

impl DocVisitor for SpanVisitor<'_> {
    type Output = SpanResult;

    fn visit_documentation_file(&mut self, _: &DocumentationFile) -> SpanResult {
        Err(ConvertError::NotConvertibleToSpan {
            kind: NodeKind::DocumentationFile,
        })
    }

    fn visit_member(&mut self, _: &MemberElement) -> SpanResult {
        Err(ConvertError::NotConvertibleToSpan {
            kind: NodeKind::Member,
        })
    }

    fn visit_section(&mut self, _: &SectionElement) -> SpanResult {
        Err(ConvertError::NotConvertibleToSpan {
            kind: NodeKind::Section,
        })
    }

    fn visit_see_also(&mut self, see_also: &SeeAlsoElement) -> SpanResult {
        self.reference(&see_also.target, see_also.text.as_ref())
    }

    fn visit_text_block(&mut self, block: &TextBlock) -> SpanResult {
        let spans = block
            .elements
            .iter()
            .map(|node| self.converter.render_span(node.as_node()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MdSpan::composite(spans))
    }

    fn visit_text(&mut self, text: &TextElement) -> SpanResult {
        Ok(MdSpan::text(text.content.clone()))
    }

    fn visit_see(&mut self, see: &SeeElement) -> SpanResult {
        self.reference(&see.target, see.text.as_ref())
    }

    fn visit_param_ref(&mut self, param_ref: &ParamRefElement) -> SpanResult {
        Ok(MdSpan::code(param_ref.name.clone()))
    }

    fn visit_type_param_ref(&mut self, type_param_ref: &TypeParamRefElement) -> SpanResult {
        Ok(MdSpan::code(type_param_ref.name.clone()))
    }

    fn visit_c(&mut self, c: &CElement) -> SpanResult {
        Ok(MdSpan::code(c.content.clone()))
    }

    fn visit_code(&mut self, _: &CodeElement) -> SpanResult {
        Err(ConvertError::NotConvertibleToSpan {
            kind: NodeKind::Code,
        })
    }

    fn visit_para(&mut self, _: &ParaElement) -> SpanResult {
        Err(ConvertError::NotConvertibleToSpan {
            kind: NodeKind::Para,
        })
    }

    fn visit_list(&mut self, _: &ListElement) -> SpanResult {
        Err(ConvertError::NotConvertibleToSpan {
            kind: NodeKind::List,
        })
    }

    fn visit_unrecognized(&mut self, element: &UnrecognizedElement) -> SpanResult {
        Ok(match self.converter.options().unrecognized {
            UnrecognizedPolicy::Text => MdSpan::text(collapse_whitespace(&element.inner_text())),
            UnrecognizedPolicy::Markup => MdSpan::Raw(element.to_xml_string()),
            UnrecognizedPolicy::Omit => MdSpan::Empty,
        })
    }
}
