//! Rules for `<doc>` files and `<member>` elements.

use super::text::{read_display_text, read_name, read_target, read_text_block};
use crate::error::ReadError;
use crate::model::{
    DocumentationFile, MemberContent, MemberElement, MemberId, SectionElement, SectionKind, SeeAlsoElement,
    UnrecognizedElement,
};
use crate::xml::{
    ensure_name_is, require_attribute, require_element, require_value, XmlElement,
};
use roxmltree::Node;

/// Reads a `<doc>` element.
///
/// `<assembly><name>` and `<members>` are required; every element inside
/// `<members>` must be a `<member>`. Other children of `<doc>` are ignored.
pub fn read_documentation_file(element: Node<'_, '_>) -> Result<DocumentationFile, ReadError> {
    ensure_name_is(element, &["doc"])?;

    let assembly = require_element(element, "assembly")?;
    let name = require_element(assembly, "name")?;
    let assembly_name = require_value(&name)?.trim().to_string();

    let members = require_element(element, "members")?;
    let members = members
        .children()
        .filter(|n| n.is_element())
        .map(read_member)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DocumentationFile {
        assembly_name,
        members,
    })
}

/// Reads a single `<member name="...">` element.
pub fn read_member(element: Node<'_, '_>) -> Result<MemberElement, ReadError> {
    ensure_name_is(element, &["member"])?;

    let name = require_attribute(element, "name")?;
    let mut member = MemberElement::new(MemberId::parse(require_value(&name)?.trim()));

    for child in element.children().filter(|n| n.is_element()) {
        let kind = match child.tag_name().name() {
            "summary" => SectionKind::Summary,
            "remarks" => SectionKind::Remarks,
            "returns" => SectionKind::Returns,
            "value" => SectionKind::Value,
            "example" => SectionKind::Example,
            "param" => SectionKind::Param {
                name: read_name(child, "name")?,
            },
            "typeparam" => SectionKind::TypeParam {
                name: read_name(child, "name")?,
            },
            "exception" => {
                let cref = require_attribute(child, "cref")?;
                SectionKind::Exception {
                    cref: MemberId::parse(require_value(&cref)?.trim()),
                }
            }
            "seealso" => {
                member.see_also.push(read_see_also(child)?);
                continue;
            }
            _ => {
                member.content.push(MemberContent::Unrecognized(UnrecognizedElement::new(
                    XmlElement::from_node(child),
                )));
                continue;
            }
        };

        member.content.push(MemberContent::Section(SectionElement {
            kind,
            content: read_text_block(child)?,
        }));
    }

    Ok(member)
}

fn read_see_also(element: Node<'_, '_>) -> Result<SeeAlsoElement, ReadError> {
    Ok(SeeAlsoElement {
        target: read_target(element, false)?,
        text: read_display_text(element)?,
    })
}
