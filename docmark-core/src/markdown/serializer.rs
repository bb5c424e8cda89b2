//! Markdown serialization
//!
//! Pipeline: MdBlock tree → Comrak AST → CommonMark string
//!
//! Comrak does the escaping and layout; this module only builds its AST.

use super::{MdBlock, MdListItem, MdSpan, MdTable};
use crate::error::ConvertError;
use comrak::nodes::{
    Ast, AstNode, ListDelimType, ListType, NodeCode, NodeCodeBlock, NodeHeading, NodeLink,
    NodeList, NodeTable, NodeValue, TableAlignment,
};
use comrak::{format_commonmark, Arena, ComrakOptions};
use std::cell::RefCell;

/// Serialize a block tree to CommonMark text.
pub fn serialize_to_markdown(block: &MdBlock) -> Result<String, ConvertError> {
    let arena = Arena::new();
    let root = new_node(&arena, NodeValue::Document);
    append_block(&arena, root, block);

    let mut output = Vec::new();
    let options = default_comrak_options();
    format_commonmark(root, &options, &mut output).map_err(|e| {
        ConvertError::Serialization(format!("Comrak serialization failed: {e}"))
    })?;

    let markdown = String::from_utf8(output)
        .map_err(|e| ConvertError::Serialization(format!("UTF-8 conversion failed: {e}")))?;

    // Comrak separates consecutive lists with an "end list" HTML comment
    Ok(markdown.replace("<!-- end list -->\n\n", ""))
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.render.unsafe_ = true;
    options
}

fn new_node<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

fn list_value(list_type: ListType) -> NodeList {
    NodeList {
        list_type,
        marker_offset: 0,
        padding: 0,
        start: 1,
        delimiter: ListDelimType::Period,
        bullet_char: b'-',
        tight: true,
    }
}

fn append_block<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, block: &MdBlock) {
    match block {
        MdBlock::Paragraph(span) => {
            if span.is_empty() {
                return;
            }
            let para = new_node(arena, NodeValue::Paragraph);
            parent.append(para);
            append_span(arena, para, span);
        }

        MdBlock::Heading { level, text } => {
            let heading = new_node(
                arena,
                NodeValue::Heading(NodeHeading {
                    level: (*level).clamp(1, 6),
                    setext: false,
                }),
            );
            parent.append(heading);
            append_span(arena, heading, text);
        }

        MdBlock::BulletList(items) => append_list(arena, parent, ListType::Bullet, items),

        MdBlock::OrderedList(items) => append_list(arena, parent, ListType::Ordered, items),

        MdBlock::CodeBlock { info, code } => {
            let mut literal = code.clone();
            if !literal.ends_with('\n') {
                literal.push('\n');
            }
            let node = new_node(
                arena,
                NodeValue::CodeBlock(NodeCodeBlock {
                    fenced: true,
                    fence_char: b'`',
                    fence_length: 3,
                    fence_offset: 0,
                    info: info.clone().unwrap_or_default(),
                    literal,
                }),
            );
            parent.append(node);
        }

        MdBlock::Table(table) => append_table(arena, parent, table),

        // Containers have no Markdown form of their own
        MdBlock::Container(blocks) => {
            for child in blocks {
                append_block(arena, parent, child);
            }
        }
    }
}

fn append_list<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    list_type: ListType,
    items: &[MdListItem],
) {
    let list = new_node(arena, NodeValue::List(list_value(list_type)));
    parent.append(list);

    for item in items {
        let item_node = new_node(arena, NodeValue::Item(list_value(list_type)));
        list.append(item_node);
        for block in &item.blocks {
            append_block(arena, item_node, block);
        }
    }
}

fn append_table<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, table: &MdTable) {
    let num_columns = table
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.header.len()))
        .max()
        .unwrap_or(0);
    if num_columns == 0 {
        return;
    }

    let num_nonempty_cells = table
        .rows
        .iter()
        .flatten()
        .chain(table.header.iter())
        .filter(|cell| !cell.is_empty())
        .count();

    let table_node = new_node(
        arena,
        NodeValue::Table(NodeTable {
            alignments: vec![TableAlignment::None; num_columns],
            num_columns,
            num_rows: table.rows.len() + 1,
            num_nonempty_cells,
        }),
    );
    parent.append(table_node);

    append_row(arena, table_node, &table.header, num_columns, true);
    for row in &table.rows {
        append_row(arena, table_node, row, num_columns, false);
    }
}

fn append_row<'a>(
    arena: &'a Arena<AstNode<'a>>,
    table: &'a AstNode<'a>,
    cells: &[MdSpan],
    num_columns: usize,
    header: bool,
) {
    let row = new_node(arena, NodeValue::TableRow(header));
    table.append(row);

    for index in 0..num_columns {
        let cell = new_node(arena, NodeValue::TableCell);
        row.append(cell);
        if let Some(span) = cells.get(index) {
            append_span(arena, cell, span);
        }
    }
}

fn append_span<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, span: &MdSpan) {
    match span {
        MdSpan::Empty => {}

        MdSpan::Text(text) => {
            if !text.is_empty() {
                parent.append(new_node(arena, NodeValue::Text(text.replace('\n', " "))));
            }
        }

        MdSpan::Code(code) => {
            parent.append(new_node(
                arena,
                NodeValue::Code(NodeCode {
                    num_backticks: 1,
                    literal: code.clone(),
                }),
            ));
        }

        MdSpan::Emphasis(inner) => {
            let emph = new_node(arena, NodeValue::Emph);
            parent.append(emph);
            append_span(arena, emph, inner);
        }

        MdSpan::Strong(inner) => {
            let strong = new_node(arena, NodeValue::Strong);
            parent.append(strong);
            append_span(arena, strong, inner);
        }

        MdSpan::Link { label, url } => {
            let link = new_node(
                arena,
                NodeValue::Link(NodeLink {
                    url: url.clone(),
                    title: String::new(),
                }),
            );
            parent.append(link);
            append_span(arena, link, label);
        }

        MdSpan::Raw(markup) => {
            parent.append(new_node(arena, NodeValue::HtmlInline(markup.clone())));
        }

        MdSpan::Composite(spans) => {
            for child in spans {
                append_span(arena, parent, child);
            }
        }
    }
}
