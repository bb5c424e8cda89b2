//! Member-level documentation: files, members and their sections.

use super::member_id::MemberId;
use super::text::{SeeTarget, TextBlock, UnrecognizedElement};
use serde::Serialize;

/// The root of a parsed documentation XML tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DocRoot {
    /// A whole `<doc>` file.
    File(DocumentationFile),
    /// A single `<member>` element.
    Member(MemberElement),
}

/// A documentation file as emitted for one assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentationFile {
    pub assembly_name: String,
    pub members: Vec<MemberElement>,
}

impl DocumentationFile {
    /// Looks a member up by its identifier, e.g. `T:Ns.Foo`.
    pub fn member(&self, id: &str) -> Option<&MemberElement> {
        self.members.iter().find(|m| m.id.as_str() == id)
    }
}

/// The documentation of one type or member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberElement {
    pub id: MemberId,
    /// Sections and unknown member-level elements in source order.
    pub content: Vec<MemberContent>,
    pub see_also: Vec<SeeAlsoElement>,
}

/// A direct child of a `<member>` other than `<seealso>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MemberContent {
    Section(SectionElement),
    /// A member-level element outside the known grammar.
    Unrecognized(UnrecognizedElement),
}

impl MemberElement {
    pub fn new(id: MemberId) -> Self {
        MemberElement {
            id,
            content: Vec::new(),
            see_also: Vec::new(),
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &SectionElement> {
        self.content.iter().filter_map(|child| match child {
            MemberContent::Section(section) => Some(section),
            MemberContent::Unrecognized(_) => None,
        })
    }

    pub fn unrecognized(&self) -> impl Iterator<Item = &UnrecognizedElement> {
        self.content.iter().filter_map(|child| match child {
            MemberContent::Unrecognized(element) => Some(element),
            MemberContent::Section(_) => None,
        })
    }

    pub fn summary(&self) -> Option<&SectionElement> {
        self.section(|kind| matches!(kind, SectionKind::Summary))
    }

    pub fn remarks(&self) -> Option<&SectionElement> {
        self.section(|kind| matches!(kind, SectionKind::Remarks))
    }

    pub fn returns(&self) -> Option<&SectionElement> {
        self.section(|kind| matches!(kind, SectionKind::Returns))
    }

    pub fn value(&self) -> Option<&SectionElement> {
        self.section(|kind| matches!(kind, SectionKind::Value))
    }

    pub fn example(&self) -> Option<&SectionElement> {
        self.section(|kind| matches!(kind, SectionKind::Example))
    }

    pub fn params(&self) -> impl Iterator<Item = &SectionElement> {
        self.sections()
            .filter(|s| matches!(s.kind, SectionKind::Param { .. }))
    }

    pub fn type_params(&self) -> impl Iterator<Item = &SectionElement> {
        self.sections()
            .filter(|s| matches!(s.kind, SectionKind::TypeParam { .. }))
    }

    pub fn exceptions(&self) -> impl Iterator<Item = &SectionElement> {
        self.sections()
            .filter(|s| matches!(s.kind, SectionKind::Exception { .. }))
    }

    fn section(&self, predicate: impl Fn(&SectionKind) -> bool) -> Option<&SectionElement> {
        self.sections().find(|s| predicate(&s.kind))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    Summary,
    Remarks,
    Returns,
    Value,
    Example,
    Param { name: String },
    TypeParam { name: String },
    Exception { cref: MemberId },
}

/// A named documentation section wrapping its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SectionElement {
    pub kind: SectionKind,
    pub content: TextBlock,
}

/// A member-level `<seealso>` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SeeAlsoElement {
    pub target: SeeTarget,
    pub text: Option<TextBlock>,
}
