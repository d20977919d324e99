//! Objects stored in the document tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A node value in the document arena.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentObject {
    /// The tree root. Owns sections.
    Document,
    Section(Section),
    Paragraph(Paragraph),
    FormattedText(FormattedText),
    Hyperlink(Hyperlink),
    LineBreak,
    Text(String),
}

impl DocumentObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            DocumentObject::Document => ObjectKind::Document,
            DocumentObject::Section(_) => ObjectKind::Section,
            DocumentObject::Paragraph(_) => ObjectKind::Paragraph,
            DocumentObject::FormattedText(_) => ObjectKind::FormattedText,
            DocumentObject::Hyperlink(_) => ObjectKind::Hyperlink,
            DocumentObject::LineBreak => ObjectKind::LineBreak,
            DocumentObject::Text(_) => ObjectKind::Text,
        }
    }
}

/// Discriminant of [`DocumentObject`], used in errors and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Document,
    Section,
    Paragraph,
    FormattedText,
    Hyperlink,
    LineBreak,
    Text,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Document => "document",
            ObjectKind::Section => "section",
            ObjectKind::Paragraph => "paragraph",
            ObjectKind::FormattedText => "formatted text",
            ObjectKind::Hyperlink => "hyperlink",
            ObjectKind::LineBreak => "line break",
            ObjectKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// Block-level container owning a sequence of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section;

/// Block container for inline content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Named style, resolved by the rendering layer.
    pub style: Option<String>,
    pub format: ParagraphFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParagraphFormat {
    /// `None` leaves alignment to the paragraph style.
    pub alignment: Option<ParagraphAlignment>,
    pub list_info: Option<ListInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

/// List metadata of a list item paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListInfo {
    pub list_type: ListType,
    /// Numbering or bulleting continues the preceding list paragraph.
    pub continue_previous_list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListType {
    BulletList1,
    BulletList2,
    BulletList3,
    NumberList1,
    NumberList2,
    NumberList3,
}

/// An inline run carrying format flags. Runs may nest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedText {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    /// Character style name.
    pub style: Option<String>,
}

impl FormattedText {
    pub fn with_format(format: TextFormat) -> Self {
        let mut text = Self::default();
        text.apply(format);
        text
    }

    /// Sets the flag described by `format`, keeping the others.
    pub fn apply(&mut self, format: TextFormat) {
        match format {
            TextFormat::Bold => self.bold = Some(true),
            TextFormat::NotBold => self.bold = Some(false),
            TextFormat::Italic => self.italic = Some(true),
            TextFormat::NotItalic => self.italic = Some(false),
            TextFormat::Underline => self.underline = Some(true),
            TextFormat::NoUnderline => self.underline = Some(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextFormat {
    Bold,
    NotBold,
    Italic,
    NotItalic,
    Underline,
    NoUnderline,
}

/// Inline container rendered as a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hyperlink {
    pub target: String,
    pub kind: HyperlinkType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HyperlinkType {
    /// Bookmark inside the same document.
    Local,
    Web,
    File,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_other_flags() {
        let mut text = FormattedText::with_format(TextFormat::Bold);
        text.apply(TextFormat::Italic);
        text.apply(TextFormat::NoUnderline);

        assert_eq!(text.bold, Some(true));
        assert_eq!(text.italic, Some(true));
        assert_eq!(text.underline, Some(false));
    }

    #[test]
    fn test_apply_overrides_same_flag() {
        let mut text = FormattedText::with_format(TextFormat::Underline);
        text.apply(TextFormat::NoUnderline);
        assert_eq!(text.underline, Some(false));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ObjectKind::FormattedText.to_string(), "formatted text");
        assert_eq!(
            DocumentObject::Text("x".to_string()).kind(),
            ObjectKind::Text
        );
    }
}
