//! The live insertion point of a conversion.

use quire_document::{
    Document, FormattedTextId, HyperlinkId, InlineParent, ObjectKind, ParagraphId, SectionId,
};

use crate::error::Result;

/// The document object new content currently attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Section(SectionId),
    Paragraph(ParagraphId),
    FormattedText(FormattedTextId),
    Hyperlink(HyperlinkId),
}

impl Context {
    pub fn kind(self) -> ObjectKind {
        match self {
            Context::Section(_) => ObjectKind::Section,
            Context::Paragraph(_) => ObjectKind::Paragraph,
            Context::FormattedText(_) => ObjectKind::FormattedText,
            Context::Hyperlink(_) => ObjectKind::Hyperlink,
        }
    }
}

impl From<SectionId> for Context {
    fn from(id: SectionId) -> Self {
        Context::Section(id)
    }
}

impl From<ParagraphId> for Context {
    fn from(id: ParagraphId) -> Self {
        Context::Paragraph(id)
    }
}

impl From<FormattedTextId> for Context {
    fn from(id: FormattedTextId) -> Self {
        Context::FormattedText(id)
    }
}

impl From<HyperlinkId> for Context {
    fn from(id: HyperlinkId) -> Self {
        Context::Hyperlink(id)
    }
}

/// The section that block content under `context` belongs to.
pub fn nearest_section(document: &Document, context: Context) -> Result<SectionId> {
    let paragraph = match context {
        Context::Section(section) => return Ok(section),
        Context::Paragraph(paragraph) => paragraph,
        Context::FormattedText(id) => document.paragraph_of(id)?,
        Context::Hyperlink(id) => document.paragraph_of(id)?,
    };
    Ok(document.section_of(paragraph)?)
}

/// The paragraph inline content under `context` belongs to. A section gets
/// a fresh paragraph appended.
pub fn obtain_paragraph(document: &mut Document, context: Context) -> Result<ParagraphId> {
    let paragraph = match context {
        Context::Section(section) => document.add_paragraph(section)?,
        Context::Paragraph(paragraph) => paragraph,
        Context::FormattedText(id) => document.paragraph_of(id)?,
        Context::Hyperlink(id) => document.paragraph_of(id)?,
    };
    Ok(paragraph)
}

/// The container new inline content under `context` goes into. Runs and
/// hyperlinks hold it themselves, so it stays in document order; a section
/// gets a fresh paragraph appended.
pub fn inline_parent(document: &mut Document, context: Context) -> Result<InlineParent> {
    let parent: InlineParent = match context {
        Context::Section(section) => document.add_paragraph(section)?.into(),
        Context::Paragraph(paragraph) => paragraph.into(),
        Context::FormattedText(id) => id.into(),
        Context::Hyperlink(id) => id.into(),
    };
    Ok(parent)
}
