//! Quire Document - the print-oriented document model HTML is converted into.
//!
//! A [`Document`] owns sections, sections own paragraphs and paragraphs own
//! inline content (text, line breaks, formatted runs and hyperlinks). Objects
//! live in an arena and are addressed through typed ids; rendering is left to
//! downstream layout code.

pub mod document;
pub mod error;
pub mod id;
pub mod object;
pub mod view;

pub use document::Document;
pub use error::{DocumentError, Result};
pub use id::{FormattedTextId, HyperlinkId, InlineParent, ParagraphId, SectionId};
pub use object::{
    DocumentObject, FormattedText, Hyperlink, HyperlinkType, ListInfo, ListType, ObjectKind,
    Paragraph, ParagraphAlignment, ParagraphFormat, Section, TextFormat,
};
pub use view::{InlineView, ParagraphView, SectionView};
