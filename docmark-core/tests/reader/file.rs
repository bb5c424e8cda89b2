use crate::common::{read_member, sample_file};
use docmark_core::model::{
    Accept, ListKind, MemberId, MemberKind, NodeKind, SectionKind, SeeTarget, TextNode,
};

#[test]
fn test_sample_members_in_source_order() {
    let file = sample_file();

    assert_eq!(file.assembly_name, "Acme.Widgets");
    let ids: Vec<_> = file.members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "T:Acme.Widgets.Widget",
            "M:Acme.Widgets.Widget.Render(System.Int32)",
            "P:Acme.Widgets.Widget.Size",
        ]
    );
    assert_eq!(file.members[1].id.kind(), Some(MemberKind::Method));
    assert!(file.member("P:Acme.Widgets.Widget.Size").is_some());
    assert!(file.member("T:Missing").is_none());
}

#[test]
fn test_remarks_keep_para_para_list_order() {
    let file = sample_file();
    let remarks = file.members[0].remarks().expect("Widget has remarks");

    let kinds: Vec<NodeKind> = remarks
        .content
        .elements
        .iter()
        .map(|node| node.kind())
        .filter(|kind| *kind != NodeKind::Text)
        .collect();
    assert_eq!(kinds, vec![NodeKind::Para, NodeKind::Para, NodeKind::List]);
}

#[test]
fn test_summary_text_is_collapsed() {
    let file = sample_file();
    let summary = file.members[0].summary().expect("Widget has a summary");

    let TextNode::Text(first) = &summary.content.elements[0] else {
        panic!("summary should start with text");
    };
    assert_eq!(first.content, " A rectangular piece of UI. See ");

    let TextNode::See(see) = &summary.content.elements[1] else {
        panic!("second node should be a <see>");
    };
    assert_eq!(
        see.target,
        SeeTarget::Member(MemberId::parse("T:Acme.Widgets.Panel"))
    );
    assert!(see.text.is_none());
}

#[test]
fn test_method_sections() {
    let file = sample_file();
    let render = &file.members[1];

    let kinds: Vec<_> = render.sections().map(|s| s.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Summary,
            SectionKind::TypeParam {
                name: "T".to_string()
            },
            SectionKind::Param {
                name: "times".to_string()
            },
            SectionKind::Returns,
            SectionKind::Exception {
                cref: MemberId::parse("T:System.ArgumentOutOfRangeException")
            },
            SectionKind::Example,
        ]
    );

    let param = render.params().next().expect("one param");
    let keyword = param.content.elements.iter().find_map(|node| match node {
        TextNode::See(see) => Some(see.target.clone()),
        _ => None,
    });
    assert_eq!(keyword, Some(SeeTarget::Keyword("null".to_string())));
}

#[test]
fn test_code_is_dedented() {
    let file = sample_file();
    let example = file.members[1].example().expect("Render has an example");

    let code = example
        .content
        .elements
        .iter()
        .find_map(|node| match node {
            TextNode::Code(code) => Some(code),
            _ => None,
        })
        .expect("example holds a code block");
    assert_eq!(code.language.as_deref(), Some("csharp"));
    assert_eq!(code.content, "var w = new Widget();\nw.Render(2);");
}

#[test]
fn test_table_list_and_unrecognized_member_element() {
    let file = sample_file();
    let size = &file.members[2];

    let value = size.value().expect("Size has a value section");
    let list = value
        .content
        .elements
        .iter()
        .find_map(|node| match node {
            TextNode::List(list) => Some(list),
            _ => None,
        })
        .expect("value holds a list");
    assert_eq!(list.kind, ListKind::Table);
    assert!(list.header.is_some());
    assert_eq!(list.items.len(), 1);

    let unknown: Vec<_> = size.unrecognized().map(|e| e.name()).collect();
    assert_eq!(unknown, vec!["inheritdoc"]);
}

#[test]
fn test_see_also_targets() {
    let file = sample_file();
    let targets: Vec<_> = file.members[0]
        .see_also
        .iter()
        .map(|s| s.target.clone())
        .collect();
    assert_eq!(
        targets,
        vec![
            SeeTarget::Member(MemberId::parse("T:Acme.Widgets.Panel")),
            SeeTarget::Url("https://example.com/widgets".to_string()),
        ]
    );
}

#[test]
fn test_bare_member_root() {
    let member = read_member(r#"<member name="F:Acme.Limits.Max"><summary>Max.</summary></member>"#);
    assert_eq!(member.id.display_name(), "Limits.Max");
    assert_eq!(member.sections().count(), 1);
}
