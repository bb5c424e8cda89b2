//! Structural equality of unrecognized elements
//!
//! Equality must depend only on the XML content: the same markup parsed twice,
//! or with its attributes written in another order, gives equal nodes with equal
//! hashes.

use crate::common::read_member;
use docmark_core::model::{TextNode, UnrecognizedElement};
use docmark_core::xml::{XmlContent, XmlElement};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// The single unrecognized node inside a member's summary.
fn unrecognized_in(markup: &str) -> UnrecognizedElement {
    let member = read_member(&format!(
        r#"<member name="T:A"><summary>{markup}</summary></member>"#
    ));
    let summary = member.summary().expect("summary").clone();
    summary
        .content
        .elements
        .into_iter()
        .find_map(|node| match node {
            TextNode::Unrecognized(element) => Some(element),
            _ => None,
        })
        .expect("summary holds an unrecognized element")
}

#[test]
fn test_separately_parsed_fragments_are_equal() {
    let markup = r#"<note kind="tip">Mind <b>the</b> gap</note>"#;
    let a = unrecognized_in(markup);
    let b = unrecognized_in(markup);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_different_content_is_not_equal() {
    let a = unrecognized_in(r#"<note kind="tip">A</note>"#);
    let b = unrecognized_in(r#"<note kind="warn">A</note>"#);
    let c = unrecognized_in(r#"<note kind="tip">B</note>"#);
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_comparing_against_other_node_kinds_is_false() {
    let element = unrecognized_in("<note>x</note>");
    let as_node = TextNode::Unrecognized(element);
    let text = TextNode::Text(docmark_core::model::TextElement::new("x"));
    assert_ne!(as_node, text);
}

#[test]
fn test_round_trip_through_markup() {
    let original = unrecognized_in(r#"<note a="1 &amp; 2" b="&quot;q&quot;">x &lt; y<br/></note>"#);
    let reparsed = unrecognized_in(&original.to_xml_string());
    assert_eq!(original, reparsed);
}

#[test]
fn test_namespace_is_part_of_equality() {
    let a = unrecognized_in(r#"<x:note xmlns:x="urn:a" x:kind="tip">hi</x:note>"#);
    let b = unrecognized_in(r#"<x:note xmlns:x="urn:b" x:kind="tip">hi</x:note>"#);
    let other_prefix = unrecognized_in(r#"<y:note xmlns:y="urn:a" y:kind="tip">hi</y:note>"#);
    assert_ne!(a, b);
    assert_eq!(a, other_prefix);
    assert_eq!(hash_of(&a), hash_of(&other_prefix));
}

#[test]
fn test_namespaced_round_trip_through_markup() {
    let original = unrecognized_in(
        r#"<x:note xmlns:x="urn:a" x:kind="tip" plain="1">hi <x:b>there</x:b><i>!</i></x:note>"#,
    );
    assert_eq!(original.element().namespace.as_deref(), Some("urn:a"));
    let markup = original.to_xml_string();
    assert!(markup.starts_with(r#"<note xmlns="urn:a""#), "{markup}");
    let reparsed = unrecognized_in(&markup);
    assert_eq!(original, reparsed);
}

fn name() -> impl Strategy<Value = String> {
    "e[a-z]{0,4}"
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 &<>\"']{1,12}"
}

fn attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("a[a-z]{0,3}", "[a-z0-9 ]{0,6}", 0..4)
        .prop_map(|map| map.into_iter().collect())
}

/// Fragments without empty or adjacent text nodes, which XML cannot express.
fn fragment() -> impl Strategy<Value = XmlElement> {
    let leaf = (name(), attributes(), prop::option::of(text())).prop_map(|(name, attrs, text)| {
        let mut element = XmlElement::new(name);
        for (key, value) in attrs {
            element = element.with_attribute(key, value);
        }
        if let Some(text) = text {
            element = element.with_child(XmlContent::Text(text));
        }
        element
    });

    leaf.prop_recursive(3, 16, 3, |inner| {
        (
            name(),
            attributes(),
            prop::option::of(text()),
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(name, attrs, text, children)| {
                let mut element = XmlElement::new(name);
                for (key, value) in attrs {
                    element = element.with_attribute(key, value);
                }
                if let Some(text) = text {
                    element = element.with_child(XmlContent::Text(text));
                }
                for child in children {
                    element = element.with_child(XmlContent::Element(child));
                }
                element
            })
    })
}

/// Writes an element with its attributes in reverse name order.
fn write_reversed(element: &XmlElement, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    for (key, value) in element.attributes.iter().rev() {
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out.push('>');
    for child in &element.children {
        match child {
            XmlContent::Text(text) => out.push_str(
                &text
                    .replace('&', "&amp;")
                    .replace('<', "&lt;")
                    .replace('>', "&gt;"),
            ),
            XmlContent::Element(child) => write_reversed(child, out),
        }
    }
    out.push_str(&format!("</{}>", element.name));
}

proptest! {
    #[test]
    fn prop_parsing_twice_gives_equal_nodes(element in fragment()) {
        let markup = element.to_xml_string();
        let a = unrecognized_in(&markup);
        let b = unrecognized_in(&markup);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_eq!(a.element(), &element);
    }

    #[test]
    fn prop_attribute_order_does_not_matter(element in fragment()) {
        let mut reversed = String::new();
        write_reversed(&element, &mut reversed);
        let a = unrecognized_in(&element.to_xml_string());
        let b = unrecognized_in(&reversed);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }
}
