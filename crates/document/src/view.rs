//! Read-only nested snapshots of a document.
//!
//! Views are what callers inspect and serialize; the arena itself stays
//! private to [`Document`].

use std::fmt;

use ego_tree::NodeRef;
use serde::Serialize;

use crate::document::Document;
use crate::error::{DocumentError, Result};
use crate::id::ParagraphId;
use crate::object::{DocumentObject, HyperlinkType, ListInfo, ParagraphAlignment};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub paragraphs: Vec<ParagraphView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphView {
    pub style: Option<String>,
    pub alignment: Option<ParagraphAlignment>,
    pub list_info: Option<ListInfo>,
    pub content: Vec<InlineView>,
}

impl ParagraphView {
    /// Concatenated text of the paragraph, line breaks as `\n`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for inline in &self.content {
            inline.push_plain_text(&mut out);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineView {
    Text {
        text: String,
    },
    LineBreak,
    FormattedText {
        bold: Option<bool>,
        italic: Option<bool>,
        underline: Option<bool>,
        style: Option<String>,
        content: Vec<InlineView>,
    },
    Hyperlink {
        target: String,
        kind: HyperlinkType,
        content: Vec<InlineView>,
    },
}

impl InlineView {
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            InlineView::Text { text } => out.push_str(text),
            InlineView::LineBreak => out.push('\n'),
            InlineView::FormattedText { content, .. } | InlineView::Hyperlink { content, .. } => {
                for inline in content {
                    inline.push_plain_text(out);
                }
            }
        }
    }
}

impl Document {
    /// Snapshot of every section in document order.
    pub fn view(&self) -> Vec<SectionView> {
        self.root()
            .children()
            .filter(|node| matches!(node.value(), DocumentObject::Section(_)))
            .map(|section| SectionView {
                paragraphs: section.children().filter_map(paragraph_view).collect(),
            })
            .collect()
    }

    pub fn paragraph_view(&self, id: ParagraphId) -> Result<ParagraphView> {
        let node = self.lookup(id.node_id(), ParagraphId::KIND)?;
        paragraph_view(node).ok_or(DocumentError::KindMismatch {
            expected: ParagraphId::KIND,
            found: node.value().kind(),
        })
    }
}

fn paragraph_view(node: NodeRef<'_, DocumentObject>) -> Option<ParagraphView> {
    let DocumentObject::Paragraph(paragraph) = node.value() else {
        return None;
    };
    Some(ParagraphView {
        style: paragraph.style.clone(),
        alignment: paragraph.format.alignment,
        list_info: paragraph.format.list_info,
        content: inline_views(node),
    })
}

fn inline_views(node: NodeRef<'_, DocumentObject>) -> Vec<InlineView> {
    node.children()
        .filter_map(|child| match child.value() {
            DocumentObject::Text(text) => Some(InlineView::Text { text: text.clone() }),
            DocumentObject::LineBreak => Some(InlineView::LineBreak),
            DocumentObject::FormattedText(format) => Some(InlineView::FormattedText {
                bold: format.bold,
                italic: format.italic,
                underline: format.underline,
                style: format.style.clone(),
                content: inline_views(child),
            }),
            DocumentObject::Hyperlink(link) => Some(InlineView::Hyperlink {
                target: link.target.clone(),
                kind: link.kind,
                content: inline_views(child),
            }),
            _ => None,
        })
        .collect()
}

/// Renders an indented outline, one object per line.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.view() {
            writeln!(f, "section")?;
            for paragraph in &section.paragraphs {
                write!(f, "  paragraph")?;
                if let Some(style) = &paragraph.style {
                    write!(f, " [{style}]")?;
                }
                if let Some(alignment) = paragraph.alignment {
                    write!(f, " align={alignment:?}")?;
                }
                if let Some(list) = paragraph.list_info {
                    write!(
                        f,
                        " list={:?} continue={}",
                        list.list_type, list.continue_previous_list
                    )?;
                }
                writeln!(f)?;
                write_inlines(f, &paragraph.content, 2)?;
            }
        }
        Ok(())
    }
}

fn write_inlines(f: &mut fmt::Formatter<'_>, inlines: &[InlineView], depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    for inline in inlines {
        match inline {
            InlineView::Text { text } => writeln!(f, "{indent}text {text:?}")?,
            InlineView::LineBreak => writeln!(f, "{indent}line-break")?,
            InlineView::FormattedText {
                bold,
                italic,
                underline,
                style,
                content,
            } => {
                write!(f, "{indent}formatted")?;
                let flags = [("bold", bold), ("italic", italic), ("underline", underline)];
                for (name, flag) in flags {
                    if let Some(flag) = flag {
                        write!(f, " {name}={flag}")?;
                    }
                }
                if let Some(style) = style {
                    write!(f, " [{style}]")?;
                }
                writeln!(f)?;
                write_inlines(f, content, depth + 1)?;
            }
            InlineView::Hyperlink {
                target,
                kind,
                content,
            } => {
                writeln!(f, "{indent}hyperlink {kind:?} {target:?}")?;
                write_inlines(f, content, depth + 1)?;
            }
        }
    }
    Ok(())
}
