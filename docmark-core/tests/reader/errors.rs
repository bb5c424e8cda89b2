use docmark_core::read_str;
use docmark_core::xml::Position;
use docmark_core::ReadError;

#[test]
fn test_param_without_name_reports_position() {
    let xml = "<doc>\n  <assembly><name>A</name></assembly>\n  <members>\n    <member name=\"M:A.B.C\">\n      <param>oops</param>\n    </member>\n  </members>\n</doc>";

    let err = read_str(xml).unwrap_err();
    assert_eq!(
        err,
        ReadError::MissingRequiredAttribute {
            element: "param".to_string(),
            attribute: "name".to_string(),
            position: Some(Position { line: 5, column: 7 }),
        }
    );
    assert!(err.to_string().contains("'name'"));
    assert!(err.to_string().ends_with("(at 5:7)"));
}

#[test]
fn test_see_without_target_is_missing_cref() {
    let err = read_str(r#"<member name="T:A"><summary>See <see/>.</summary></member>"#)
        .unwrap_err();
    assert!(matches!(
        err,
        ReadError::MissingRequiredAttribute { ref element, ref attribute, .. }
            if element == "see" && attribute == "cref"
    ));
}

#[test]
fn test_blank_cref_is_empty_value() {
    let err = read_str(r#"<member name="T:A"><summary><see cref=" "/></summary></member>"#)
        .unwrap_err();
    assert!(matches!(err, ReadError::EmptyValue { ref name, .. } if name == "cref"));
}

#[test]
fn test_unknown_list_type() {
    let err = read_str(r#"<member name="T:A"><remarks><list type="grid"/></remarks></member>"#)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected value 'grid' for attribute 'type' of element 'list' (at 1:29)"
    );
}

#[test]
fn test_missing_members_element() {
    let err = read_str("<doc>\n<assembly><name>A</name></assembly>\n</doc>").unwrap_err();
    assert_eq!(
        err,
        ReadError::MissingRequiredElement {
            parent: "doc".to_string(),
            child: "members".to_string(),
            position: Some(Position { line: 1, column: 1 }),
        }
    );
}

#[test]
fn test_empty_assembly_name() {
    let err = read_str("<doc><assembly><name>  </name></assembly><members/></doc>").unwrap_err();
    assert!(matches!(err, ReadError::EmptyValue { ref name, .. } if name == "name"));
}

#[test]
fn test_malformed_xml_keeps_parser_message() {
    let err = read_str("<doc><members></doc>").unwrap_err();
    let ReadError::Xml { message } = err else {
        panic!("expected an XML error");
    };
    assert!(message.contains("1:"), "message should carry a position: {message}");
}

#[test]
fn test_first_duplicate_required_element_wins() {
    let root = read_str(
        "<doc><assembly><name>First</name></assembly><assembly><name>Second</name></assembly><members/></doc>",
    )
    .unwrap();
    let docmark_core::DocRoot::File(file) = root else {
        panic!("expected a file");
    };
    assert_eq!(file.assembly_name, "First");
}
