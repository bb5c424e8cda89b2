//! Owned, structurally comparable XML subtrees.
//!
//! Parsed `roxmltree` nodes borrow their document, which does not outlive the
//! reader. Elements the reader cannot map onto the documentation model are copied
//! into an [`XmlElement`] instead, so they survive into the model and can be
//! written back out.
//!
//! Equality and hashing are structural: expanded element names (namespace URI
//! plus local name), attributes (as an unordered set), the child sequence and
//! text content. Two fragments parsed from identical markup are equal no matter
//! where they came from. Namespace prefixes, comments and processing
//! instructions are not part of the structure.
//!
//! Attributes in a namespace are keyed by their expanded name in `{uri}local`
//! form; attributes without a namespace use the bare local name.

use roxmltree::{Node, NodeType};
use serde::Serialize;
use std::collections::BTreeMap;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A node inside an owned XML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum XmlContent {
    Element(XmlElement),
    Text(String),
}

/// An owned XML element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct XmlElement {
    /// Local name.
    pub name: String,
    pub namespace: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<XmlContent>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            namespace: None,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, uri: impl Into<String>) -> Self {
        self.namespace = Some(uri.into());
        self
    }

    /// `name` is a local name or an expanded `{uri}local` name.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: XmlContent) -> Self {
        self.children.push(child);
        self
    }

    /// Copies an element and its whole subtree out of a parsed document.
    pub fn from_node(node: Node<'_, '_>) -> Self {
        let attributes = node
            .attributes()
            .map(|a| (expanded_name(a.namespace(), a.name()), a.value().to_string()))
            .collect();

        let mut children = Vec::new();
        for child in node.children() {
            match child.node_type() {
                NodeType::Element => children.push(XmlContent::Element(XmlElement::from_node(child))),
                NodeType::Text => {
                    let text = child.text().unwrap_or("");
                    // roxmltree already merges adjacent text and CDATA, but a
                    // skipped comment can still leave two runs side by side.
                    if let Some(XmlContent::Text(previous)) = children.last_mut() {
                        previous.push_str(text);
                    } else if !text.is_empty() {
                        children.push(XmlContent::Text(text.to_string()));
                    }
                }
                _ => {}
            }
        }

        XmlElement {
            name: node.tag_name().name().to_string(),
            namespace: node.tag_name().namespace().map(str::to_string),
            attributes,
            children,
        }
    }

    /// All descendant text in document order.
    pub fn inner_text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlContent::Text(text) => out.push_str(text),
                XmlContent::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Serializes the fragment back to XML markup.
    ///
    /// Attributes are written in name order, empty elements self-close.
    /// Element namespaces are declared as default namespaces where they
    /// change; namespaced attributes get generated `nsN` prefixes.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_xml(None, &mut out);
        out
    }

    fn write_xml(&self, default_namespace: Option<&str>, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        let namespace = self.namespace.as_deref();
        if namespace != default_namespace {
            out.push_str(" xmlns=\"");
            escape_into(namespace.unwrap_or(""), true, out);
            out.push('"');
        }

        let mut prefixes: Vec<&str> = Vec::new();
        for (key, value) in &self.attributes {
            out.push(' ');
            match split_expanded(key) {
                Some((XML_NAMESPACE, local)) => {
                    out.push_str("xml:");
                    out.push_str(local);
                }
                Some((uri, local)) => {
                    let index = match prefixes.iter().position(|known| *known == uri) {
                        Some(index) => index,
                        None => {
                            prefixes.push(uri);
                            out.push_str(&format!("xmlns:ns{}=\"", prefixes.len() - 1));
                            escape_into(uri, true, out);
                            out.push_str("\" ");
                            prefixes.len() - 1
                        }
                    };
                    out.push_str(&format!("ns{index}:{local}"));
                }
                None => out.push_str(key),
            }
            out.push_str("=\"");
            escape_into(value, true, out);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                XmlContent::Text(text) => escape_into(text, false, out),
                XmlContent::Element(element) => element.write_xml(namespace, out),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

fn expanded_name(namespace: Option<&str>, local: &str) -> String {
    match namespace {
        Some(uri) => format!("{{{uri}}}{local}"),
        None => local.to_string(),
    }
}

/// Splits a `{uri}local` key; `None` for a bare local name.
fn split_expanded(key: &str) -> Option<(&str, &str)> {
    key.strip_prefix('{')?.split_once('}')
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\n' if attribute => out.push_str("&#10;"),
            '\t' if attribute => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
}
