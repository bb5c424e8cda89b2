//! Shared helpers for integration tests

use docmark_core::model::{DocRoot, DocumentationFile, MemberElement, SectionElement};
use docmark_core::read_str;

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
}

pub fn sample_file() -> DocumentationFile {
    match read_str(&fixture("sample.xml")).expect("sample.xml should read") {
        DocRoot::File(file) => file,
        DocRoot::Member(_) => panic!("sample.xml should be a <doc> file"),
    }
}

pub fn first_section(member: &MemberElement) -> &SectionElement {
    member.sections().next().expect("member should have a section")
}

pub fn read_member(xml: &str) -> MemberElement {
    match read_str(xml).expect("member should read") {
        DocRoot::Member(member) => member,
        DocRoot::File(_) => panic!("expected a bare <member>"),
    }
}
