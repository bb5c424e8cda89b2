use crate::common::{first_section, fixture, read_member, sample_file};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use docmark_core::{
    to_markdown, ConvertOptions, CrossRefStyle, MarkdownConverter, MdBlock, MdSpan,
};

fn text_converter() -> MarkdownConverter {
    MarkdownConverter::new(ConvertOptions {
        cross_references: CrossRefStyle::Text,
        ..ConvertOptions::default()
    })
}

fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options
}

/// Text of every heading, with its level, in document order.
fn headings<'a>(root: &'a AstNode<'a>) -> Vec<(u8, String)> {
    root.descendants()
        .filter_map(|node| match &node.data.borrow().value {
            NodeValue::Heading(heading) => Some((heading.level, collect_text(node))),
            _ => None,
        })
        .collect()
}

fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    node.descendants()
        .filter_map(|n| match &n.data.borrow().value {
            NodeValue::Text(text) => Some(text.clone()),
            NodeValue::Code(code) => Some(code.literal.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_summary_snapshot() {
    let member = read_member(r#"<member name="T:Foo"><summary>Hello world</summary></member>"#);
    let markdown = text_converter()
        .convert_to_markdown(first_section(&member))
        .unwrap();
    insta::assert_snapshot!(markdown, @r"
    ### Summary

    Hello world
    ");
}

#[test]
fn test_member_snapshot() {
    let member = read_member(
        r#"<member name="M:Acme.Foo.Run(System.Int32)">
             <summary>Runs <paramref name="count"/> times.</summary>
             <returns>Always <c>true</c>.</returns>
           </member>"#,
    );
    let markdown = text_converter().convert_to_markdown(&member).unwrap();
    insta::assert_snapshot!(markdown, @r"
    ## Foo.Run

    ### Summary

    Runs `count` times.

    ### Returns

    Always `true`.
    ");
}

#[test]
fn test_sample_headings() {
    let markdown = to_markdown(&fixture("sample.xml"), &text_converter()).unwrap();

    let arena = Arena::new();
    let root = parse_document(&arena, &markdown, &comrak_options());
    let found = headings(root);

    assert_eq!(found[0], (1, "Acme.Widgets".to_string()));
    assert_eq!(found[1], (2, "Widget".to_string()));
    assert!(found.contains(&(3, "See Also".to_string())));
    assert!(found.contains(&(2, "Widget.Render".to_string())));
    assert!(found.contains(&(3, "Parameter times".to_string())));
    assert!(found.contains(&(3, "Type Parameter T".to_string())));
    assert!(found.contains(&(3, "Exception ArgumentOutOfRangeException".to_string())));
    assert!(found.contains(&(2, "Widget.Size".to_string())));
}

#[test]
fn test_sample_blocks() {
    let markdown = to_markdown(&fixture("sample.xml"), &MarkdownConverter::default()).unwrap();

    let arena = Arena::new();
    let root = parse_document(&arena, &markdown, &comrak_options());

    let code = root
        .descendants()
        .find_map(|node| match &node.data.borrow().value {
            NodeValue::CodeBlock(block) => Some((block.info.clone(), block.literal.clone())),
            _ => None,
        })
        .expect("sample renders a code block");
    assert_eq!(code.0, "csharp");
    assert_eq!(code.1, "var w = new Widget();\nw.Render(2);\n");

    let table_count = root
        .descendants()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::Table(_)))
        .count();
    assert_eq!(table_count, 1);

    let links: Vec<String> = root
        .descendants()
        .filter_map(|node| match &node.data.borrow().value {
            NodeValue::Link(link) => Some(link.url.clone()),
            _ => None,
        })
        .collect();
    assert!(links.contains(&"#t-acme-widgets-panel".to_string()));
    assert!(links.contains(&"https://example.com/widgets".to_string()));
    assert!(links.contains(&"#m-acme-widgets-widget-render-system-int32".to_string()));
}

#[test]
fn test_list_items_render_term_and_description() {
    let markdown = to_markdown(&fixture("sample.xml"), &text_converter()).unwrap();
    assert!(markdown.contains("- Cheap to create\n"));
    assert!(markdown.contains("- **Thread safety**: None\n"));
}

#[test]
fn test_table_list() {
    let markdown = to_markdown(&fixture("sample.xml"), &text_converter()).unwrap();
    assert!(markdown.contains("| Unit | Meaning |"));
    assert!(markdown.contains("| px | Device pixels |"));
}

#[test]
fn test_unrecognized_member_element_falls_back_to_text() {
    let member = read_member(
        r#"<member name="T:Foo"><summary>S.</summary><note>Mind the gap</note></member>"#,
    );
    let markdown = text_converter().convert_to_markdown(&member).unwrap();
    assert!(markdown.ends_with("Mind the gap\n"));
}

#[test]
fn test_sample_file_model_converts_directly() {
    let file = sample_file();
    let block = MarkdownConverter::default().convert_to_block(&file).unwrap();
    assert!(block.blocks().len() > 10);
}

#[test]
fn test_unknown_member_element_stays_between_sections() {
    let member = read_member(
        r#"<member name="T:Foo"><summary>S.</summary><note>between</note><remarks>R.</remarks></member>"#,
    );
    let markdown = text_converter().convert_to_markdown(&member).unwrap();
    insta::assert_snapshot!(markdown, @r"
    ## Foo

    ### Summary

    S.

    between

    ### Remarks

    R.
    ");
}

#[test]
fn test_unknown_inline_element_keeps_surrounding_spaces() {
    let member = read_member(r#"<member name="T:Foo"><summary>a<b> x </b>c</summary></member>"#);
    let markdown = text_converter()
        .convert_to_markdown(&first_section(&member).content)
        .unwrap();
    assert_eq!(markdown, "a x c\n");
}

#[test]
fn test_reference_without_name_is_visible() {
    let member = read_member(r#"<member name="T:Foo"><summary>See <see cref="T:"/>.</summary></member>"#);
    let block = MarkdownConverter::default()
        .convert_to_block(&first_section(&member).content)
        .unwrap();
    assert_eq!(
        block,
        MdBlock::Paragraph(MdSpan::Composite(vec![
            MdSpan::text("See "),
            MdSpan::link(MdSpan::text("T:"), "#t"),
            MdSpan::text("."),
        ]))
    );
}
