//! Block conversion rules
//!
//! | Node                | Markdown                                         |
//! |---------------------|--------------------------------------------------|
//! | DocumentationFile   | heading with the assembly name, then members     |
//! | Member              | heading, sections, "See Also" list, leftovers    |
//! | Section             | heading, then its content                        |
//! | TextBlock           | inline runs grouped into paragraphs              |
//! | Para                | paragraph(s)                                     |
//! | Code                | fenced code block                                |
//! | List                | bullet list, ordered list or table               |
//! | inline nodes        | a paragraph around the span rule's result        |

use super::span::reference_span;
use super::{CrossRefStyle, MarkdownConverter};
use crate::error::ConvertError;
use crate::markdown::{MdBlock, MdListItem, MdSpan, MdTable};
use crate::model::{
    Accept, CElement, CodeElement, DocVisitor, DocumentationFile, ListElement, ListItem,
    ListKind, MemberContent, MemberElement, NodeRef, ParaElement, ParamRefElement,
    SectionElement, SectionKind, SeeAlsoElement, SeeElement, SeeTarget, TextBlock, TextElement, TypeParamRefElement,
    UnrecognizedElement,
};

type BlockResult = Result<MdBlock, ConvertError>;

pub struct BlockVisitor<'c> {
    converter: &'c MarkdownConverter,
}

impl<'c> BlockVisitor<'c> {
    pub fn new(converter: &'c MarkdownConverter) -> Self {
        BlockVisitor { converter }
    }

    fn inline(&self, node: NodeRef<'_>) -> BlockResult {
        Ok(MdBlock::Paragraph(self.converter.render_span(node)?))
    }

    fn text_span(&self, block: &TextBlock) -> Result<MdSpan, ConvertError> {
        Ok(self.converter.render_span(NodeRef::TextBlock(block))?.trim())
    }

    fn section_title(&self, kind: &SectionKind) -> MdSpan {
        match kind {
            SectionKind::Summary => MdSpan::text("Summary"),
            SectionKind::Remarks => MdSpan::text("Remarks"),
            SectionKind::Returns => MdSpan::text("Returns"),
            SectionKind::Value => MdSpan::text("Value"),
            SectionKind::Example => MdSpan::text("Example"),
            SectionKind::Param { name } => {
                MdSpan::composite(vec![MdSpan::text("Parameter "), MdSpan::code(name.clone())])
            }
            SectionKind::TypeParam { name } => MdSpan::composite(vec![
                MdSpan::text("Type Parameter "),
                MdSpan::code(name.clone()),
            ]),
            SectionKind::Exception { cref } => MdSpan::composite(vec![
                MdSpan::text("Exception "),
                reference_span(
                    self.converter,
                    &SeeTarget::Member(cref.clone()),
                    MdSpan::Empty,
                ),
            ]),
        }
    }

    /// `**term**: description` when the description is one paragraph,
    /// otherwise the term paragraph followed by the description blocks.
    fn list_item(&self, item: &ListItem) -> Result<MdListItem, ConvertError> {
        let term = match &item.term {
            Some(term) => self.text_span(term)?,
            None => MdSpan::Empty,
        };
        let description = match &item.description {
            Some(description) => self
                .converter
                .render_block(NodeRef::TextBlock(description))?
                .into_blocks(),
            None => Vec::new(),
        };

        if term.is_empty() {
            return Ok(MdListItem::new(description));
        }

        let term = MdSpan::strong(term);
        let blocks = if let [MdBlock::Paragraph(text)] = description.as_slice() {
            vec![MdBlock::Paragraph(MdSpan::composite(vec![
                term,
                MdSpan::text(": "),
                text.clone(),
            ]))]
        } else {
            let mut blocks = vec![MdBlock::Paragraph(term)];
            blocks.extend(description);
            blocks
        };
        Ok(MdListItem::new(blocks))
    }

    fn table(&self, list: &ListElement) -> BlockResult {
        let has_terms = list
            .header
            .iter()
            .chain(list.items.iter())
            .any(|item| item.term.is_some());

        let cell = |block: &Option<TextBlock>| -> Result<MdSpan, ConvertError> {
            match block {
                Some(block) => self.text_span(block),
                None => Ok(MdSpan::Empty),
            }
        };
        let or_default = |span: MdSpan, default: &str| {
            if span.is_empty() {
                MdSpan::text(default)
            } else {
                span
            }
        };

        let (term_header, description_header) = match &list.header {
            Some(header) => (cell(&header.term)?, cell(&header.description)?),
            None => (MdSpan::Empty, MdSpan::Empty),
        };
        let description_header = or_default(description_header, "Description");

        let mut header = Vec::new();
        if has_terms {
            header.push(or_default(term_header, "Term"));
        }
        header.push(description_header);

        let rows = list
            .items
            .iter()
            .map(|item| {
                let mut row = Vec::new();
                if has_terms {
                    row.push(cell(&item.term)?);
                }
                row.push(cell(&item.description)?);
                Ok(row)
            })
            .collect::<Result<Vec<_>, ConvertError>>()?;

        Ok(MdBlock::Table(MdTable { header, rows }))
    }
}

impl DocVisitor for BlockVisitor<'_> {
    type Output = BlockResult;

    fn visit_documentation_file(&mut self, file: &DocumentationFile) -> BlockResult {
        let level = self.converter.options().file_heading_level;
        let mut blocks = vec![MdBlock::heading(level, MdSpan::text(file.assembly_name.clone()))];
        for member in &file.members {
            blocks.extend(self.converter.render_block(member.as_node())?.into_blocks());
        }
        Ok(MdBlock::container(blocks))
    }

    fn visit_member(&mut self, member: &MemberElement) -> BlockResult {
        let options = self.converter.options();
        let mut title = Vec::new();
        if options.cross_references == CrossRefStyle::Link {
            title.push(MdSpan::Raw(format!("<a id=\"{}\"></a>", member.id.anchor())));
        }
        title.push(MdSpan::text(member.id.display_name()));

        let mut blocks = vec![MdBlock::heading(
            options.member_heading_level,
            MdSpan::composite(title),
        )];

        for child in &member.content {
            let node = match child {
                MemberContent::Section(section) => section.as_node(),
                MemberContent::Unrecognized(element) => element.as_node(),
            };
            blocks.extend(self.converter.render_block(node)?.into_blocks());
        }

        if !member.see_also.is_empty() {
            blocks.push(MdBlock::heading(
                options.section_heading_level,
                MdSpan::text("See Also"),
            ));
            let items = member
                .see_also
                .iter()
                .map(|see_also| {
                    let block = self.converter.render_block(see_also.as_node())?;
                    Ok(MdListItem::new(block.into_blocks()))
                })
                .collect::<Result<Vec<_>, ConvertError>>()?;
            blocks.push(MdBlock::BulletList(items));
        }

        Ok(MdBlock::container(blocks))
    }

    fn visit_section(&mut self, section: &SectionElement) -> BlockResult {
        let level = self.converter.options().section_heading_level;
        let mut blocks = vec![MdBlock::heading(level, self.section_title(&section.kind))];
        blocks.extend(
            self.converter
                .render_block(section.content.as_node())?
                .into_blocks(),
        );
        Ok(MdBlock::container(blocks))
    }

    fn visit_see_also(&mut self, see_also: &SeeAlsoElement) -> BlockResult {
        self.inline(see_also.as_node())
    }

    /// Consecutive inline nodes share a paragraph; block nodes stand alone.
    fn visit_text_block(&mut self, block: &TextBlock) -> BlockResult {
        let mut blocks = Vec::new();
        let mut run = Vec::new();

        for node in &block.elements {
            if node.is_inline() {
                run.push(self.converter.render_span(node.as_node())?);
                continue;
            }
            if !run.is_empty() {
                let spans = std::mem::take(&mut run);
                blocks.push(MdBlock::Paragraph(MdSpan::composite(spans).trim()));
            }
            blocks.extend(self.converter.render_block(node.as_node())?.into_blocks());
        }
        if !run.is_empty() {
            blocks.push(MdBlock::Paragraph(MdSpan::composite(run).trim()));
        }

        Ok(MdBlock::container(blocks))
    }

    fn visit_text(&mut self, text: &TextElement) -> BlockResult {
        self.inline(text.as_node())
    }

    fn visit_see(&mut self, see: &SeeElement) -> BlockResult {
        self.inline(see.as_node())
    }

    fn visit_param_ref(&mut self, param_ref: &ParamRefElement) -> BlockResult {
        self.inline(param_ref.as_node())
    }

    fn visit_type_param_ref(&mut self, type_param_ref: &TypeParamRefElement) -> BlockResult {
        self.inline(type_param_ref.as_node())
    }

    fn visit_c(&mut self, c: &CElement) -> BlockResult {
        self.inline(c.as_node())
    }

    fn visit_code(&mut self, code: &CodeElement) -> BlockResult {
        let info = code
            .language
            .clone()
            .or_else(|| self.converter.options().default_language.clone());
        Ok(MdBlock::CodeBlock {
            info,
            code: code.content.clone(),
        })
    }

    fn visit_para(&mut self, para: &ParaElement) -> BlockResult {
        self.converter.render_block(para.content.as_node())
    }

    fn visit_list(&mut self, list: &ListElement) -> BlockResult {
        if list.kind == ListKind::Table {
            return self.table(list);
        }
        let items = list
            .items
            .iter()
            .map(|item| self.list_item(item))
            .collect::<Result<Vec<_>, ConvertError>>()?;
        Ok(match list.kind {
            ListKind::Number => MdBlock::OrderedList(items),
            _ => MdBlock::BulletList(items),
        })
    }

    fn visit_unrecognized(&mut self, element: &UnrecognizedElement) -> BlockResult {
        self.inline(element.as_node())
    }
}
