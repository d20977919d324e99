//! Inline `style` attribute handling.

use once_cell::sync::Lazy;
use quire_document::ParagraphAlignment;
use regex::Regex;

static TEXT_ALIGN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)text-align:([^;]*)").expect("valid text-align pattern"));

/// Reads the `text-align` declaration of an inline style string.
///
/// Only the first declaration counts. Values other than left, center, right
/// and justify yield `None`, so the caller keeps whatever alignment the
/// paragraph already has.
pub fn text_alignment(style: &str) -> Option<ParagraphAlignment> {
    let value = TEXT_ALIGN.captures(style)?.get(1)?.as_str().trim();
    match value.to_ascii_lowercase().as_str() {
        "left" => Some(ParagraphAlignment::Left),
        "center" => Some(ParagraphAlignment::Center),
        "right" => Some(ParagraphAlignment::Right),
        "justify" => Some(ParagraphAlignment::Justify),
        _ => None,
    }
}
