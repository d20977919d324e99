use quire_document::{
    Document, DocumentError, HyperlinkType, InlineView, ListInfo, ListType, ObjectKind,
    ParagraphAlignment, ParagraphView, SectionId, TextFormat,
};
use quire_html::{
    Context, ConversionConfig, ConvertError, HtmlConverter, HtmlExt, Markup, convert_html, list,
};

fn convert(markup: &str) -> Vec<ParagraphView> {
    let mut document = Document::new();
    let section = document.add_section();
    document.add_html(section, markup).unwrap();
    paragraphs(&document, section)
}

fn paragraphs(document: &Document, section: SectionId) -> Vec<ParagraphView> {
    document
        .paragraphs(section)
        .unwrap()
        .into_iter()
        .map(|id| document.paragraph_view(id).unwrap())
        .collect()
}

fn text(value: &str) -> InlineView {
    InlineView::Text {
        text: value.to_string(),
    }
}

fn styles(paragraphs: &[ParagraphView]) -> Vec<Option<&str>> {
    paragraphs.iter().map(|p| p.style.as_deref()).collect()
}

#[test]
fn test_paragraph_with_bold_run() {
    let paragraphs = convert("<p>Hello <strong>World</strong></p>");

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(
        paragraphs[0].content,
        vec![
            text("Hello "),
            InlineView::FormattedText {
                bold: Some(true),
                italic: None,
                underline: None,
                style: None,
                content: vec![text("World")],
            },
        ]
    );
}

#[test]
fn test_nested_formatting_merges_into_one_run() {
    let paragraphs = convert("<p><strong><em>both</em></strong></p>");

    assert_eq!(
        paragraphs[0].content,
        vec![InlineView::FormattedText {
            bold: Some(true),
            italic: Some(true),
            underline: None,
            style: None,
            content: vec![text("both")],
        }]
    );
}

#[test]
fn test_unordered_list_is_bracketed_by_markers() {
    let paragraphs = convert("<ul><li>A</li><li>B</li></ul>");

    assert_eq!(
        styles(&paragraphs),
        vec![
            Some("ListStart"),
            Some("UnorderedList"),
            Some("UnorderedList"),
            Some("ListEnd"),
        ]
    );
    assert_eq!(
        paragraphs[1].list_info,
        Some(ListInfo {
            list_type: ListType::BulletList1,
            continue_previous_list: false,
        })
    );
    assert_eq!(
        paragraphs[2].list_info,
        Some(ListInfo {
            list_type: ListType::BulletList1,
            continue_previous_list: true,
        })
    );
    assert_eq!(paragraphs[1].plain_text(), "A");
    assert_eq!(paragraphs[2].plain_text(), "B");
    assert!(paragraphs[0].content.is_empty());
    assert!(paragraphs[3].content.is_empty());
}

#[test]
fn test_list_whitespace_between_items_is_ignored() {
    let paragraphs = convert("<ul>\n  <li>A</li>\n  <li>B</li>\n  <li>C</li>\n</ul>");

    assert_eq!(paragraphs.len(), 5);
    let continued: Vec<_> = paragraphs[1..4]
        .iter()
        .map(|p| p.list_info.map(|info| info.continue_previous_list))
        .collect();
    assert_eq!(continued, vec![Some(false), Some(true), Some(true)]);
}

#[test]
fn test_ordered_list_uses_numbering() {
    let paragraphs = convert("<ol><li>only</li></ol>");

    assert_eq!(
        styles(&paragraphs),
        vec![Some("ListStart"), Some("OrderedList"), Some("ListEnd")]
    );
    assert_eq!(
        paragraphs[1].list_info.map(|info| info.list_type),
        Some(ListType::NumberList1)
    );
}

#[test]
fn test_list_inside_paragraph_goes_to_owning_section() {
    let paragraphs = convert("<div>intro<br><ul><li>x</li></ul></div>");

    assert_eq!(
        styles(&paragraphs),
        vec![None, Some("ListStart"), Some("UnorderedList"), Some("ListEnd")]
    );
    // The break right before the list is dropped.
    assert_eq!(paragraphs[0].content, vec![text("intro")]);
}

#[test]
fn test_non_breaking_space_span_adds_nothing() {
    let mut document = Document::new();
    let section = document.add_section();
    document.add_html(section, "<span>&nbsp;</span>").unwrap();

    assert!(document.paragraphs(section).unwrap().is_empty());
}

#[test]
fn test_non_breaking_space_between_runs_is_kept() {
    let paragraphs = convert("<p><strong>a</strong>&nbsp;<em>b</em></p>");

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].plain_text(), "a\u{a0}b");
    assert_eq!(paragraphs[0].content[1], text("\u{a0}"));
}

#[test]
fn test_run_inside_hyperlink_stays_in_link() {
    let paragraphs = convert(r#"<a href="u"><strong>x</strong></a>"#);

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(
        paragraphs[0].content,
        vec![InlineView::Hyperlink {
            target: "u".to_string(),
            kind: HyperlinkType::Web,
            content: vec![InlineView::FormattedText {
                bold: Some(true),
                italic: None,
                underline: None,
                style: None,
                content: vec![text("x")],
            }],
        }]
    );
}

#[test]
fn test_span_inside_run_keeps_text_order() {
    let paragraphs = convert("<p><strong>a<span>b</span>c</strong></p>");

    assert_eq!(paragraphs[0].plain_text(), "abc");
    assert_eq!(
        paragraphs[0].content,
        vec![InlineView::FormattedText {
            bold: Some(true),
            italic: None,
            underline: None,
            style: None,
            content: vec![
                text("a"),
                InlineView::FormattedText {
                    bold: None,
                    italic: None,
                    underline: Some(false),
                    style: None,
                    content: vec![text("b")],
                },
                text("c"),
            ],
        }]
    );
}

#[test]
fn test_line_break_inside_hyperlink() {
    let paragraphs = convert(r#"<a href="u">x<br>y</a>"#);

    assert_eq!(
        paragraphs[0].content,
        vec![InlineView::Hyperlink {
            target: "u".to_string(),
            kind: HyperlinkType::Web,
            content: vec![text("x"), InlineView::LineBreak, text("y")],
        }]
    );
}

#[test]
fn test_hyperlink_inside_run() {
    let paragraphs = convert(r#"<p><em>see <a href="u">here</a> now</em></p>"#);

    assert_eq!(paragraphs[0].plain_text(), "see here now");
    let InlineView::FormattedText { content, .. } = &paragraphs[0].content[0] else {
        panic!("expected a run, got {:?}", paragraphs[0].content);
    };
    assert!(matches!(content[1], InlineView::Hyperlink { .. }));
}

#[test]
fn test_paragraph_alignment_from_style() {
    let paragraphs = convert(
        r#"<p style="color: red; text-align: center">a</p><div style="TEXT-ALIGN:Justify">b</div><p style="text-align: start">c</p>"#,
    );

    let alignments: Vec<_> = paragraphs.iter().map(|p| p.alignment).collect();
    assert_eq!(
        alignments,
        vec![
            Some(ParagraphAlignment::Center),
            Some(ParagraphAlignment::Justify),
            None,
        ]
    );
}

#[test]
fn test_headings_are_styled_by_level() {
    let paragraphs = convert("<h1>Title</h1><h3>Sub</h3>");

    assert_eq!(styles(&paragraphs), vec![Some("Heading1"), Some("Heading3")]);
    assert_eq!(paragraphs[0].plain_text(), "Title");
}

#[test]
fn test_horizontal_rule_paragraph() {
    let paragraphs = convert("<p>above</p><hr><p>below</p>");

    assert_eq!(styles(&paragraphs), vec![None, Some("HorizontalRule"), None]);
}

#[test]
fn test_line_breaks_inside_paragraph() {
    let paragraphs = convert("<p>a<br>b<br></p>");

    // The trailing break is dropped.
    assert_eq!(
        paragraphs[0].content,
        vec![text("a"), InlineView::LineBreak, text("b")]
    );
}

#[test]
fn test_line_break_inside_run() {
    let paragraphs = convert("<p><em>a<br>b</em></p>");

    assert_eq!(
        paragraphs[0].content,
        vec![InlineView::FormattedText {
            bold: None,
            italic: Some(true),
            underline: None,
            style: None,
            content: vec![text("a"), InlineView::LineBreak, text("b")],
        }]
    );
}

#[test]
fn test_section_level_breaks_collapse() {
    let paragraphs = convert("<p>a</p><br><br><p>b</p>");

    assert_eq!(paragraphs.len(), 3);
    assert_eq!(paragraphs[1].content, vec![InlineView::LineBreak]);
    assert_eq!(paragraphs[2].plain_text(), "b");
}

#[test]
fn test_loose_text_shares_one_paragraph() {
    let paragraphs = convert("Hello <em>there</em> friend");

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].plain_text(), "Hello there friend");
}

#[test]
fn test_whitespace_only_markup_adds_no_paragraphs() {
    assert!(convert("  \n\r\n ").is_empty());
}

#[test]
fn test_line_feeds_are_removed_from_text() {
    let paragraphs = convert("<p>one\ntwo\r\n</p>");

    assert_eq!(paragraphs[0].content, vec![text("onetwo")]);
}

#[test]
fn test_hyperlink_keeps_href() {
    let paragraphs = convert(r#"<p>see <a href="https://example.com/docs">the docs</a></p>"#);

    assert_eq!(
        paragraphs[0].content,
        vec![
            text("see "),
            InlineView::Hyperlink {
                target: "https://example.com/docs".to_string(),
                kind: HyperlinkType::Web,
                content: vec![text("the docs")],
            },
        ]
    );
}

#[test]
fn test_span_class_becomes_style() {
    let paragraphs = convert(
        r#"<p><span class="note">x</span><span class="style_color_0_0_0">y</span></p>"#,
    );

    let spans: Vec<_> = paragraphs[0]
        .content
        .iter()
        .map(|inline| match inline {
            InlineView::FormattedText {
                underline, style, ..
            } => (*underline, style.clone()),
            other => panic!("unexpected inline {other:?}"),
        })
        .collect();
    assert_eq!(
        spans,
        vec![
            (Some(false), Some("note".to_string())),
            (Some(false), None),
        ]
    );
}

#[test]
fn test_reserved_span_class_is_configurable() {
    let config = ConversionConfig::new().with_reserved_span_class(None);
    let converter = HtmlConverter::with_config(config);

    let mut document = Document::new();
    let section = document.add_section();
    converter
        .convert(r#"<p><span class="style_color_0_0_0">y</span></p>"#)
        .unwrap()
        .insert_into(&mut document, section)
        .unwrap();

    let paragraphs = paragraphs(&document, section);
    assert!(matches!(
        &paragraphs[0].content[0],
        InlineView::FormattedText { style: Some(style), .. } if style == "style_color_0_0_0"
    ));
}

#[test]
fn test_insert_into_existing_paragraph() {
    let mut document = Document::new();
    let section = document.add_section();
    let paragraph = document.add_paragraph(section).unwrap();
    document.add_text(paragraph, "Name: ").unwrap();

    convert_html("<u>Quire</u>", &mut document, paragraph).unwrap();

    assert_eq!(document.paragraphs(section).unwrap(), vec![paragraph]);
    let view = document.paragraph_view(paragraph).unwrap();
    assert_eq!(view.plain_text(), "Name: Quire");
}

#[test]
fn test_heading_requires_section() {
    let mut document = Document::new();
    let section = document.add_section();
    let paragraph = document.add_paragraph(section).unwrap();

    let err = document.add_html(paragraph, "<h2>Nope</h2>").unwrap_err();
    assert!(matches!(
        err,
        ConvertError::UnexpectedContext {
            ref tag,
            found: ObjectKind::Paragraph,
            ..
        } if tag == "h2"
    ));
}

#[test]
fn test_list_item_rejects_inline_context() {
    let markup = Markup::parse("<ul><li>x</li></ul>").unwrap();
    let item = markup
        .root()
        .children()
        .next()
        .and_then(|list| list.children().next())
        .unwrap();

    let mut document = Document::new();
    let section = document.add_section();
    let paragraph = document.add_paragraph(section).unwrap();
    let run = document
        .add_formatted_text(paragraph, TextFormat::Bold)
        .unwrap();

    let err = list::list_item(item, Context::FormattedText(run), &mut document).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::UnexpectedContext {
            found: ObjectKind::FormattedText,
            ..
        }
    ));
    assert_eq!(document.paragraphs(section).unwrap(), vec![paragraph]);
}

#[test]
fn test_nesting_limit() {
    let converter = HtmlConverter::with_config(ConversionConfig::new().with_max_depth(2));
    let mut document = Document::new();
    let section = document.add_section();

    let err = converter
        .convert("<div><div><div><div>deep</div></div></div></div>")
        .unwrap()
        .insert_into(&mut document, section)
        .unwrap_err();
    assert!(matches!(err, ConvertError::TooDeep { limit: 2 }));

    // Shallow markup still converts.
    converter
        .convert("<div>flat</div>")
        .unwrap()
        .insert_into(&mut document, section)
        .unwrap();
}

#[test]
fn test_empty_markup() {
    let mut document = Document::new();
    let section = document.add_section();
    let paragraph = document.add_paragraph(section).unwrap();

    // Nothing to do for a section.
    document.add_html(section, "").unwrap();
    assert_eq!(document.paragraphs(section).unwrap(), vec![paragraph]);

    let err = document.add_html(paragraph, "").unwrap_err();
    assert!(matches!(err, ConvertError::EmptyMarkup));
}

#[test]
fn test_target_from_another_document() {
    let mut other = Document::new();
    let _ = other.add_section();
    let foreign = other.add_section();

    let mut document = Document::new();
    let err = document.add_html(foreign, "<p>x</p>").unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Document(DocumentError::Missing {
            expected: ObjectKind::Section
        })
    ));
}

#[test]
fn test_target_of_wrong_kind() {
    let mut other = Document::new();
    let section = other.add_section();
    let paragraph = other.add_paragraph(section).unwrap();

    let mut document = Document::new();
    document.add_section();
    document.add_section();

    let err = document.add_html(paragraph, "x").unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Document(DocumentError::KindMismatch {
            expected: ObjectKind::Paragraph,
            found: ObjectKind::Section,
        })
    ));
}

#[test]
fn test_conversion_can_be_inserted_twice() {
    let converter = HtmlConverter::new();
    let conversion = converter.convert("<p>repeat</p>").unwrap();

    let mut document = Document::new();
    let first = document.add_section();
    let second = document.add_section();
    conversion.insert_into(&mut document, first).unwrap();
    conversion.insert_into(&mut document, second).unwrap();

    assert_eq!(paragraphs(&document, first), paragraphs(&document, second));
}
