//! Typed handles into the document arena.
//!
//! Ids are only minted by [`Document`](crate::Document) when the object is
//! created, so a `ParagraphId` always named a paragraph in the document that
//! returned it. Using it with another document is caught at lookup time.

use ego_tree::NodeId;

use crate::object::ObjectKind;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) NodeId);

        impl $name {
            pub const KIND: ObjectKind = ObjectKind::$kind;

            pub(crate) fn node_id(self) -> NodeId {
                self.0
            }
        }
    };
}

typed_id!(
    /// Handle to a section.
    SectionId => Section
);
typed_id!(
    /// Handle to a paragraph.
    ParagraphId => Paragraph
);
typed_id!(
    /// Handle to an inline formatted run.
    FormattedTextId => FormattedText
);
typed_id!(
    /// Handle to a hyperlink.
    HyperlinkId => Hyperlink
);

/// Any object that may directly hold inline content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineParent {
    Paragraph(ParagraphId),
    FormattedText(FormattedTextId),
    Hyperlink(HyperlinkId),
}

impl InlineParent {
    pub fn kind(self) -> ObjectKind {
        match self {
            InlineParent::Paragraph(_) => ObjectKind::Paragraph,
            InlineParent::FormattedText(_) => ObjectKind::FormattedText,
            InlineParent::Hyperlink(_) => ObjectKind::Hyperlink,
        }
    }

    pub(crate) fn node_id(self) -> NodeId {
        match self {
            InlineParent::Paragraph(id) => id.node_id(),
            InlineParent::FormattedText(id) => id.node_id(),
            InlineParent::Hyperlink(id) => id.node_id(),
        }
    }
}

impl From<ParagraphId> for InlineParent {
    fn from(id: ParagraphId) -> Self {
        InlineParent::Paragraph(id)
    }
}

impl From<FormattedTextId> for InlineParent {
    fn from(id: FormattedTextId) -> Self {
        InlineParent::FormattedText(id)
    }
}

impl From<HyperlinkId> for InlineParent {
    fn from(id: HyperlinkId) -> Self {
        InlineParent::Hyperlink(id)
    }
}
