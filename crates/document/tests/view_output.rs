//! Snapshot views and outline rendering of hand-built documents.

use quire_document::{
    Document, HyperlinkType, InlineView, ListInfo, ListType, ParagraphAlignment, TextFormat,
};
use serde_json::json;

fn sample_document() -> Document {
    let mut document = Document::new();
    let section = document.add_section();

    let heading = document.add_paragraph(section).unwrap();
    document.set_style(heading, "Heading1").unwrap();
    document.add_text(heading, "Title").unwrap();

    let body = document.add_paragraph(section).unwrap();
    document
        .update_paragraph(body, |p| p.format.alignment = Some(ParagraphAlignment::Center))
        .unwrap();
    document.add_text(body, "Hello ").unwrap();
    let bold = document.add_formatted_text(body, TextFormat::Bold).unwrap();
    document.add_text(bold, "World").unwrap();
    document.add_line_break(body).unwrap();
    let link = document
        .add_hyperlink(body, "https://example.com", HyperlinkType::Web)
        .unwrap();
    document.add_text(link, "site").unwrap();

    let item = document.add_paragraph(section).unwrap();
    document
        .update_paragraph(item, |p| {
            p.format.list_info = Some(ListInfo {
                list_type: ListType::BulletList1,
                continue_previous_list: false,
            })
        })
        .unwrap();

    document
}

#[test]
fn test_view_mirrors_tree() {
    let document = sample_document();
    let sections = document.view();
    assert_eq!(sections.len(), 1);

    let paragraphs = &sections[0].paragraphs;
    assert_eq!(paragraphs.len(), 3);
    assert_eq!(paragraphs[0].style.as_deref(), Some("Heading1"));
    assert_eq!(paragraphs[0].plain_text(), "Title");
    assert_eq!(paragraphs[1].alignment, Some(ParagraphAlignment::Center));
    assert_eq!(paragraphs[1].plain_text(), "Hello World\nsite");
    assert!(matches!(
        &paragraphs[1].content[1],
        InlineView::FormattedText { bold: Some(true), .. }
    ));
    assert!(paragraphs[2].content.is_empty());
}

#[test]
fn test_view_serializes_tagged_inlines() {
    let document = sample_document();
    let value = serde_json::to_value(document.view()).unwrap();

    let content = &value[0]["paragraphs"][1]["content"];
    assert_eq!(content[0], json!({ "type": "text", "text": "Hello " }));
    assert_eq!(content[1]["type"], "formatted_text");
    assert_eq!(content[1]["bold"], true);
    assert_eq!(content[2], json!({ "type": "line_break" }));
    assert_eq!(content[3]["kind"], "web");
    assert_eq!(value[0]["paragraphs"][1]["alignment"], "center");
    assert_eq!(
        value[0]["paragraphs"][2]["list_info"]["list_type"],
        "BulletList1"
    );
}

#[test]
fn test_outline_display() {
    let document = sample_document();
    let outline = document.to_string();

    assert!(outline.starts_with("section\n  paragraph [Heading1]\n    text \"Title\"\n"));
    assert!(outline.contains("  paragraph align=Center\n"));
    assert!(outline.contains("    formatted bold=true\n      text \"World\"\n"));
    assert!(outline.contains("    hyperlink Web \"https://example.com\"\n"));
    assert!(outline.contains("  paragraph list=BulletList1 continue=false\n"));
}
