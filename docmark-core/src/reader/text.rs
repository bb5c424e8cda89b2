//! Rules for the text content grammar.

use crate::error::ReadError;
use crate::model::{
    CElement, CodeElement, ListElement, ListItem, ListKind, MemberId, ParaElement,
    ParamRefElement, SeeElement, SeeTarget, TextBlock, TextElement, TextNode,
    TypeParamRefElement, UnrecognizedElement,
};
use crate::xml::{
    collapse_whitespace, require_attribute, require_value, HasPosition, HasValue, XmlElement,
};
use roxmltree::{Node, NodeType};

/// Reads the mixed content of `element` as a text block.
///
/// Whitespace runs inside text are collapsed to a single space; whether a
/// leading or trailing space survives is left to the renderer.
pub fn read_text_block(element: Node<'_, '_>) -> Result<TextBlock, ReadError> {
    let mut elements = Vec::new();

    for child in element.children() {
        match child.node_type() {
            NodeType::Text => {
                let text = collapse_whitespace(child.text().unwrap_or(""));
                if text.is_empty() {
                    continue;
                }
                if let Some(TextNode::Text(previous)) = elements.last_mut() {
                    previous.content.push_str(&text);
                    let merged = collapse_whitespace(&previous.content);
                    previous.content = merged;
                } else {
                    elements.push(TextNode::Text(TextElement::new(text)));
                }
            }
            NodeType::Element => elements.push(read_text_node(child)?),
            _ => {}
        }
    }

    Ok(TextBlock::new(elements))
}

fn read_text_node(element: Node<'_, '_>) -> Result<TextNode, ReadError> {
    let node = match element.tag_name().name() {
        "see" => TextNode::See(read_see(element)?),
        "paramref" => TextNode::ParamRef(ParamRefElement {
            name: read_name(element, "name")?,
        }),
        "typeparamref" => TextNode::TypeParamRef(TypeParamRefElement {
            name: read_name(element, "name")?,
        }),
        "c" => TextNode::C(CElement {
            content: collapse_whitespace(&element.raw_value()).trim().to_string(),
        }),
        "code" => TextNode::Code(read_code(element)),
        "para" => TextNode::Para(ParaElement {
            content: read_text_block(element)?,
        }),
        "list" => TextNode::List(read_list(element)?),
        _ => TextNode::Unrecognized(UnrecognizedElement::new(XmlElement::from_node(element))),
    };
    Ok(node)
}

fn read_see(element: Node<'_, '_>) -> Result<SeeElement, ReadError> {
    Ok(SeeElement {
        target: read_target(element, true)?,
        text: read_display_text(element)?,
    })
}

/// Reads the target of a `<see>`/`<seealso>`.
///
/// `cref` wins over `href`, which wins over `langword`. With none of them
/// present the element is reported as missing its `cref`.
pub(super) fn read_target(
    element: Node<'_, '_>,
    allow_keyword: bool,
) -> Result<SeeTarget, ReadError> {
    if element.has_attribute("href") && !element.has_attribute("cref") {
        let href = require_attribute(element, "href")?;
        return Ok(SeeTarget::Url(require_value(&href)?.trim().to_string()));
    }
    if allow_keyword && element.has_attribute("langword") && !element.has_attribute("cref") {
        let keyword = require_attribute(element, "langword")?;
        return Ok(SeeTarget::Keyword(require_value(&keyword)?.trim().to_string()));
    }
    let cref = require_attribute(element, "cref")?;
    Ok(SeeTarget::Member(MemberId::parse(
        require_value(&cref)?.trim(),
    )))
}

/// Inline display text of a reference, `None` when there is nothing to show.
pub(super) fn read_display_text(element: Node<'_, '_>) -> Result<Option<TextBlock>, ReadError> {
    let text = read_text_block(element)?;
    let blank = text
        .elements
        .iter()
        .all(|node| matches!(node, TextNode::Text(t) if t.content.trim().is_empty()));
    Ok(if blank { None } else { Some(text) })
}

pub(super) fn read_name(element: Node<'_, '_>, attribute: &str) -> Result<String, ReadError> {
    let attribute = require_attribute(element, attribute)?;
    Ok(require_value(&attribute)?.trim().to_string())
}

fn read_code(element: Node<'_, '_>) -> CodeElement {
    let language = element
        .attribute("language")
        .or_else(|| element.attribute("lang"))
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string);
    CodeElement {
        language,
        content: normalize_code(&element.raw_value()),
    }
}

fn read_list(element: Node<'_, '_>) -> Result<ListElement, ReadError> {
    let kind = match element.attribute("type").map(str::trim) {
        None | Some("bullet") => ListKind::Bullet,
        Some("number") => ListKind::Number,
        Some("table") => ListKind::Table,
        Some(other) => {
            return Err(ReadError::UnexpectedAttributeValue {
                element: "list".to_string(),
                attribute: "type".to_string(),
                value: other.to_string(),
                position: element.position(),
            })
        }
    };

    let mut header = None;
    let mut items = Vec::new();
    for child in element.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "listheader" if header.is_none() => header = Some(read_list_item(child)?),
            "listheader" | "item" => items.push(read_list_item(child)?),
            // Anything else still has to survive; it becomes a description-only item.
            _ => items.push(ListItem {
                term: None,
                description: Some(TextBlock::new(vec![TextNode::Unrecognized(
                    UnrecognizedElement::new(XmlElement::from_node(child)),
                )])),
            }),
        }
    }

    Ok(ListElement {
        kind,
        header,
        items,
    })
}

fn read_list_item(element: Node<'_, '_>) -> Result<ListItem, ReadError> {
    let find = |name: &str| {
        element
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == name)
    };
    let term = find("term");
    let description = find("description");

    if term.is_none() && description.is_none() {
        let content = read_text_block(element)?;
        return Ok(ListItem {
            term: None,
            description: (!content.is_empty()).then_some(content),
        });
    }

    Ok(ListItem {
        term: term.map(read_text_block).transpose()?,
        description: description.map(read_text_block).transpose()?,
    })
}

/// Strips blank lines around the code and the indentation common to all lines.
fn normalize_code(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let Some(start) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return String::new();
    };
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(start);
    let body = &lines[start..=end];

    let indent = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.bytes().take_while(|b| *b == b' ' || *b == b'\t').count())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| l.get(indent..).unwrap_or("").trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
