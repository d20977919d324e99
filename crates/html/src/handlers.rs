//! Default node handlers.
//!
//! Each handler receives the node, the context it should attach content to
//! and the document, and returns the context its children are converted in.
//! Handlers are plain functions so custom registrations can reuse them.

use quire_document::{Document, HyperlinkType, TextFormat};

use crate::config::ConversionConfig;
use crate::context::{Context, inline_parent, nearest_section, obtain_paragraph};
use crate::error::{ConvertError, Result};
use crate::list;
use crate::markup::MarkupNode;
use crate::registry::{HandlerRegistry, handler};
use crate::style::text_alignment;
use crate::tag::TagKey;

pub const HORIZONTAL_RULE_STYLE: &str = "HorizontalRule";

const NON_BREAKING_SPACE: &str = "\u{a0}";

pub(crate) fn install_defaults(registry: &mut HandlerRegistry, config: &ConversionConfig) {
    // Block elements
    for level in 1..=6 {
        registry.install(TagKey::parsed(&format!("h{level}")), handler(heading));
    }
    registry.install(TagKey::parsed("p"), handler(paragraph));
    registry.install(TagKey::parsed("div"), handler(paragraph));
    registry.install(TagKey::parsed("hr"), handler(horizontal_rule));
    registry.install(TagKey::parsed("li"), handler(list::list_item));

    // Inline elements
    let formats = [
        ("strong", TextFormat::Bold),
        ("bold", TextFormat::Bold),
        ("i", TextFormat::Italic),
        ("em", TextFormat::Italic),
        ("u", TextFormat::Underline),
    ];
    for (tag, format) in formats {
        registry.install(
            TagKey::parsed(tag),
            handler(move |node, context, document| {
                formatted_text(node, context, document, format)
            }),
        );
    }
    registry.install(TagKey::parsed("a"), handler(hyperlink));

    let reserved_class = config.reserved_span_class.clone();
    registry.install(
        TagKey::parsed("span"),
        handler(move |node, context, document| {
            span(node, context, document, reserved_class.as_deref())
        }),
    );
    registry.install(TagKey::parsed("br"), handler(line_break));
    registry.install(TagKey::Text, handler(text));
}

/// `h1`..`h6`: a new heading paragraph. Only valid directly in a section.
pub fn heading(node: MarkupNode<'_>, context: Context, document: &mut Document) -> Result<Context> {
    let Context::Section(section) = context else {
        return Err(unexpected_context(node, "a section", context));
    };
    let name = node.tag_name().unwrap_or_default();
    let level = name.trim_start_matches(|c: char| !c.is_ascii_digit());
    if level.is_empty() {
        return Err(ConvertError::InvalidTag {
            tag: name.to_string(),
            reason: "heading tags must end in a level digit",
        });
    }

    let paragraph = document.add_paragraph(section)?;
    document.set_style(paragraph, format!("Heading{level}"))?;
    Ok(paragraph.into())
}

/// `p` and `div`: a new paragraph in the nearest section, aligned per its
/// inline style.
pub fn paragraph(
    node: MarkupNode<'_>,
    context: Context,
    document: &mut Document,
) -> Result<Context> {
    let section = nearest_section(document, context)?;
    let paragraph = document.add_paragraph(section)?;

    if let Some(alignment) = node.attr("style").and_then(text_alignment) {
        document.update_paragraph(paragraph, |p| p.format.alignment = Some(alignment))?;
    }
    Ok(paragraph.into())
}

/// Bold, italic and underline elements. An enclosing run picks up the flag;
/// anywhere else a new run is started, inside a hyperlink if there is one.
pub fn formatted_text(
    _node: MarkupNode<'_>,
    context: Context,
    document: &mut Document,
    format: TextFormat,
) -> Result<Context> {
    if let Context::FormattedText(run) = context {
        document.apply_format(run, format)?;
        return Ok(context);
    }

    let parent = inline_parent(document, context)?;
    Ok(document.add_formatted_text(parent, format)?.into())
}

pub fn hyperlink(
    node: MarkupNode<'_>,
    context: Context,
    document: &mut Document,
) -> Result<Context> {
    let parent = inline_parent(document, context)?;
    let target = node.attr("href").unwrap_or_default();
    Ok(document
        .add_hyperlink(parent, target, HyperlinkType::Web)?
        .into())
}

/// `span`: a run without underline, carrying the span's class as style.
/// Spacer spans are ignored.
pub fn span(
    node: MarkupNode<'_>,
    context: Context,
    document: &mut Document,
    reserved_class: Option<&str>,
) -> Result<Context> {
    if is_spacer_span(node) {
        return Ok(context);
    }

    let parent = inline_parent(document, context)?;
    let run = document.add_formatted_text(parent, TextFormat::NoUnderline)?;

    let class = node
        .attr("class")
        .filter(|class| !class.is_empty() && Some(*class) != reserved_class);
    if let Some(class) = class {
        document.update_formatted_text(run, |text| text.style = Some(class.to_string()))?;
    }
    Ok(run.into())
}

/// `hr`: a paragraph styled as a horizontal rule.
pub fn horizontal_rule(
    _node: MarkupNode<'_>,
    context: Context,
    document: &mut Document,
) -> Result<Context> {
    let section = nearest_section(document, context)?;
    let paragraph = document.add_paragraph(section)?;
    document.set_style(paragraph, HORIZONTAL_RULE_STYLE)?;
    Ok(paragraph.into())
}

/// `br`: a line break, unless it would only add trailing space.
pub fn line_break(
    node: MarkupNode<'_>,
    context: Context,
    document: &mut Document,
) -> Result<Context> {
    // Last in its parent, or directly before a list.
    let Some(next) = node.next_sibling() else {
        return Ok(context);
    };
    if next.is_element("ul") || next.is_element("ol") {
        return Ok(context);
    }

    match context {
        Context::FormattedText(run) => {
            document.add_line_break(run)?;
            Ok(context)
        }
        Context::Paragraph(paragraph) => {
            document.add_line_break(paragraph)?;
            Ok(context)
        }
        Context::Section(section) => {
            // Avoid doubled blank lines from consecutive breaks.
            if next.is_element("br") {
                return Ok(context);
            }
            let paragraph = document.add_paragraph(section)?;
            document.add_line_break(paragraph)?;
            Ok(paragraph.into())
        }
        Context::Hyperlink(link) => {
            document.add_line_break(link)?;
            Ok(context)
        }
    }
}

/// Text nodes. Line feeds and carriage returns are dropped; text that is
/// whitespace only adds nothing. Non-breaking spaces count as content.
pub fn text(node: MarkupNode<'_>, context: Context, document: &mut Document) -> Result<Context> {
    if node.parent().is_some_and(is_spacer_span) {
        return Ok(context);
    }

    let text: String = node
        .text()
        .unwrap_or_default()
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    if text.chars().all(is_blank) {
        return Ok(context);
    }

    match context {
        Context::FormattedText(run) => {
            document.add_text(run, text)?;
            Ok(context)
        }
        Context::Hyperlink(link) => {
            document.add_text(link, text)?;
            Ok(context)
        }
        Context::Section(_) | Context::Paragraph(_) => {
            let paragraph = obtain_paragraph(document, context)?;
            document.add_text(paragraph, text)?;
            Ok(paragraph.into())
        }
    }
}

/// A `span` whose only text is a non-breaking space.
fn is_spacer_span(node: MarkupNode<'_>) -> bool {
    node.is_element("span") && node.inner_text() == NON_BREAKING_SPACE
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() && c != '\u{a0}'
}

pub(crate) fn unexpected_context(
    node: MarkupNode<'_>,
    expected: &'static str,
    context: Context,
) -> ConvertError {
    ConvertError::UnexpectedContext {
        tag: node.key().map(|key| key.to_string()).unwrap_or_default(),
        expected,
        found: context.kind(),
    }
}
