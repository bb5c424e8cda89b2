//! Double dispatch over the documentation model.
//!
//! Every node implements [`Accept`], which calls the [`DocVisitor`] method
//! matching the node's own kind. Visitors decide what a node turns into; the
//! model itself carries no rendering logic.

use super::member::{DocRoot, DocumentationFile, MemberElement, SectionElement, SeeAlsoElement};
use super::text::{
    CElement, CodeElement, ListElement, ParaElement, ParamRefElement, SeeElement, TextBlock,
    TextElement, TextNode, TypeParamRefElement, UnrecognizedElement,
};
use serde::Serialize;
use std::fmt;

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NodeKind {
    DocumentationFile,
    Member,
    Section,
    SeeAlso,
    TextBlock,
    Text,
    See,
    ParamRef,
    TypeParamRef,
    C,
    Code,
    Para,
    List,
    Unrecognized,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::DocumentationFile => "doc",
            NodeKind::Member => "member",
            NodeKind::Section => "section",
            NodeKind::SeeAlso => "seealso",
            NodeKind::TextBlock => "text block",
            NodeKind::Text => "text",
            NodeKind::See => "see",
            NodeKind::ParamRef => "paramref",
            NodeKind::TypeParamRef => "typeparamref",
            NodeKind::C => "c",
            NodeKind::Code => "code",
            NodeKind::Para => "para",
            NodeKind::List => "list",
            NodeKind::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

pub trait DocVisitor {
    type Output;

    fn visit_documentation_file(&mut self, file: &DocumentationFile) -> Self::Output;
    fn visit_member(&mut self, member: &MemberElement) -> Self::Output;
    fn visit_section(&mut self, section: &SectionElement) -> Self::Output;
    fn visit_see_also(&mut self, see_also: &SeeAlsoElement) -> Self::Output;
    fn visit_text_block(&mut self, block: &TextBlock) -> Self::Output;
    fn visit_text(&mut self, text: &TextElement) -> Self::Output;
    fn visit_see(&mut self, see: &SeeElement) -> Self::Output;
    fn visit_param_ref(&mut self, param_ref: &ParamRefElement) -> Self::Output;
    fn visit_type_param_ref(&mut self, type_param_ref: &TypeParamRefElement) -> Self::Output;
    fn visit_c(&mut self, c: &CElement) -> Self::Output;
    fn visit_code(&mut self, code: &CodeElement) -> Self::Output;
    fn visit_para(&mut self, para: &ParaElement) -> Self::Output;
    fn visit_list(&mut self, list: &ListElement) -> Self::Output;
    fn visit_unrecognized(&mut self, element: &UnrecognizedElement) -> Self::Output;
}

/// A node that can be handed to a [`DocVisitor`].
pub trait Accept {
    fn kind(&self) -> NodeKind;

    fn as_node(&self) -> NodeRef<'_>;

    fn accept<V: DocVisitor>(&self, visitor: &mut V) -> V::Output;
}

/// A borrowed view of any node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    DocumentationFile(&'a DocumentationFile),
    Member(&'a MemberElement),
    Section(&'a SectionElement),
    SeeAlso(&'a SeeAlsoElement),
    TextBlock(&'a TextBlock),
    Text(&'a TextElement),
    See(&'a SeeElement),
    ParamRef(&'a ParamRefElement),
    TypeParamRef(&'a TypeParamRefElement),
    C(&'a CElement),
    Code(&'a CodeElement),
    Para(&'a ParaElement),
    List(&'a ListElement),
    Unrecognized(&'a UnrecognizedElement),
}

impl Accept for NodeRef<'_> {
    fn kind(&self) -> NodeKind {
        match self {
            NodeRef::DocumentationFile(_) => NodeKind::DocumentationFile,
            NodeRef::Member(_) => NodeKind::Member,
            NodeRef::Section(_) => NodeKind::Section,
            NodeRef::SeeAlso(_) => NodeKind::SeeAlso,
            NodeRef::TextBlock(_) => NodeKind::TextBlock,
            NodeRef::Text(_) => NodeKind::Text,
            NodeRef::See(_) => NodeKind::See,
            NodeRef::ParamRef(_) => NodeKind::ParamRef,
            NodeRef::TypeParamRef(_) => NodeKind::TypeParamRef,
            NodeRef::C(_) => NodeKind::C,
            NodeRef::Code(_) => NodeKind::Code,
            NodeRef::Para(_) => NodeKind::Para,
            NodeRef::List(_) => NodeKind::List,
            NodeRef::Unrecognized(_) => NodeKind::Unrecognized,
        }
    }

    fn as_node(&self) -> NodeRef<'_> {
        *self
    }

    fn accept<V: DocVisitor>(&self, visitor: &mut V) -> V::Output {
        match *self {
            NodeRef::DocumentationFile(node) => visitor.visit_documentation_file(node),
            NodeRef::Member(node) => visitor.visit_member(node),
            NodeRef::Section(node) => visitor.visit_section(node),
            NodeRef::SeeAlso(node) => visitor.visit_see_also(node),
            NodeRef::TextBlock(node) => visitor.visit_text_block(node),
            NodeRef::Text(node) => visitor.visit_text(node),
            NodeRef::See(node) => visitor.visit_see(node),
            NodeRef::ParamRef(node) => visitor.visit_param_ref(node),
            NodeRef::TypeParamRef(node) => visitor.visit_type_param_ref(node),
            NodeRef::C(node) => visitor.visit_c(node),
            NodeRef::Code(node) => visitor.visit_code(node),
            NodeRef::Para(node) => visitor.visit_para(node),
            NodeRef::List(node) => visitor.visit_list(node),
            NodeRef::Unrecognized(node) => visitor.visit_unrecognized(node),
        }
    }
}

impl Accept for TextNode {
    fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }

    fn as_node(&self) -> NodeRef<'_> {
        match self {
            TextNode::Text(node) => NodeRef::Text(node),
            TextNode::See(node) => NodeRef::See(node),
            TextNode::ParamRef(node) => NodeRef::ParamRef(node),
            TextNode::TypeParamRef(node) => NodeRef::TypeParamRef(node),
            TextNode::C(node) => NodeRef::C(node),
            TextNode::Code(node) => NodeRef::Code(node),
            TextNode::Para(node) => NodeRef::Para(node),
            TextNode::List(node) => NodeRef::List(node),
            TextNode::Unrecognized(node) => NodeRef::Unrecognized(node),
        }
    }

    fn accept<V: DocVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            TextNode::Text(node) => visitor.visit_text(node),
            TextNode::See(node) => visitor.visit_see(node),
            TextNode::ParamRef(node) => visitor.visit_param_ref(node),
            TextNode::TypeParamRef(node) => visitor.visit_type_param_ref(node),
            TextNode::C(node) => visitor.visit_c(node),
            TextNode::Code(node) => visitor.visit_code(node),
            TextNode::Para(node) => visitor.visit_para(node),
            TextNode::List(node) => visitor.visit_list(node),
            TextNode::Unrecognized(node) => visitor.visit_unrecognized(node),
        }
    }
}

impl Accept for DocRoot {
    fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }

    fn as_node(&self) -> NodeRef<'_> {
        match self {
            DocRoot::File(file) => NodeRef::DocumentationFile(file),
            DocRoot::Member(member) => NodeRef::Member(member),
        }
    }

    fn accept<V: DocVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            DocRoot::File(file) => visitor.visit_documentation_file(file),
            DocRoot::Member(member) => visitor.visit_member(member),
        }
    }
}

macro_rules! impl_accept {
    ($($ty:ty => $variant:ident, $visit:ident;)*) => {
        $(
            impl Accept for $ty {
                fn kind(&self) -> NodeKind {
                    NodeKind::$variant
                }

                fn as_node(&self) -> NodeRef<'_> {
                    NodeRef::$variant(self)
                }

                fn accept<V: DocVisitor>(&self, visitor: &mut V) -> V::Output {
                    visitor.$visit(self)
                }
            }
        )*
    };
}

impl_accept! {
    DocumentationFile => DocumentationFile, visit_documentation_file;
    MemberElement => Member, visit_member;
    SectionElement => Section, visit_section;
    SeeAlsoElement => SeeAlso, visit_see_also;
    TextBlock => TextBlock, visit_text_block;
    TextElement => Text, visit_text;
    SeeElement => See, visit_see;
    ParamRefElement => ParamRef, visit_param_ref;
    TypeParamRefElement => TypeParamRef, visit_type_param_ref;
    CElement => C, visit_c;
    CodeElement => Code, visit_code;
    ParaElement => Para, visit_para;
    ListElement => List, visit_list;
    UnrecognizedElement => Unrecognized, visit_unrecognized;
}
