//! The documentation node model.
//!
//! A strict tree built by the [reader](crate::reader) and never mutated
//! afterwards. [`DocRoot`] is the top: either a whole documentation file or a
//! single member. Text content is a [`TextBlock`] of [`TextNode`]s.

pub mod member;
pub mod member_id;
pub mod text;
pub mod visitor;

pub use member::{
    DocRoot, DocumentationFile, MemberContent, MemberElement, SectionElement, SectionKind, SeeAlsoElement,
};
pub use member_id::{MemberId, MemberKind};
pub use text::{
    CElement, CodeElement, ListElement, ListItem, ListKind, ParaElement, ParamRefElement,
    SeeElement, SeeTarget, TextBlock, TextElement, TextNode, TypeParamRefElement,
    UnrecognizedElement,
};
pub use visitor::{Accept, DocVisitor, NodeKind, NodeRef};
