//! Block and span conversion agree on inline nodes: the block form of an
//! inline node is a paragraph holding its span form.

use docmark_core::model::{
    Accept, CElement, MemberId, ParamRefElement, SeeAlsoElement, SeeElement, SeeTarget,
    TextElement, TypeParamRefElement, UnrecognizedElement,
};
use docmark_core::xml::{XmlContent, XmlElement};
use docmark_core::{ConvertOptions, MarkdownConverter, MdBlock, UnrecognizedPolicy};

fn assert_consistent<N: Accept>(converter: &MarkdownConverter, node: &N) {
    let span = converter.convert_to_span(node).unwrap();
    let block = converter.convert_to_block(node).unwrap();
    assert_eq!(block, MdBlock::Paragraph(span), "kind {}", node.kind());
}

#[test]
fn test_inline_kinds_agree() {
    let converter = MarkdownConverter::default();

    assert_consistent(&converter, &TextElement::new("plain"));
    assert_consistent(
        &converter,
        &CElement {
            content: "x".to_string(),
        },
    );
    assert_consistent(
        &converter,
        &ParamRefElement {
            name: "count".to_string(),
        },
    );
    assert_consistent(
        &converter,
        &TypeParamRefElement {
            name: "T".to_string(),
        },
    );
    assert_consistent(
        &converter,
        &SeeElement {
            target: SeeTarget::Member(MemberId::parse("T:Foo")),
            text: None,
        },
    );
    assert_consistent(
        &converter,
        &SeeAlsoElement {
            target: SeeTarget::Url("https://example.com".to_string()),
            text: None,
        },
    );
    assert_consistent(
        &converter,
        &UnrecognizedElement::new(
            XmlElement::new("note").with_child(XmlContent::Text("kept".to_string())),
        ),
    );
}

#[test]
fn test_unrecognized_policies_agree() {
    for policy in [UnrecognizedPolicy::Markup, UnrecognizedPolicy::Omit] {
        let converter = MarkdownConverter::new(ConvertOptions {
            unrecognized: policy,
            ..ConvertOptions::default()
        });
        assert_consistent(
            &converter,
            &UnrecognizedElement::new(XmlElement::new("br")),
        );
        assert_consistent(
            &converter,
            &UnrecognizedElement::new(
                XmlElement::new("note").with_child(XmlContent::Text(" kept ".to_string())),
            ),
        );
    }
}
