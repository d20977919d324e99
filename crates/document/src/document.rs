//! Arena-backed document tree.

use ego_tree::{NodeId, NodeMut, NodeRef, Tree};

use crate::error::{DocumentError, Result};
use crate::id::{FormattedTextId, HyperlinkId, InlineParent, ParagraphId, SectionId};
use crate::object::{
    DocumentObject, FormattedText, Hyperlink, HyperlinkType, ObjectKind, Paragraph, Section,
    TextFormat,
};

/// A document: an ordered list of sections, each owning paragraphs, each
/// owning inline content.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree<DocumentObject>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            tree: Tree::new(DocumentObject::Document),
        }
    }

    /// Appends an empty section at the end of the document.
    pub fn add_section(&mut self) -> SectionId {
        SectionId(
            self.tree
                .root_mut()
                .append(DocumentObject::Section(Section))
                .id(),
        )
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.tree
            .root()
            .children()
            .filter(|node| matches!(node.value(), DocumentObject::Section(_)))
            .map(|node| SectionId(node.id()))
    }

    pub fn section(&self, id: SectionId) -> Result<&Section> {
        match self.lookup(id.node_id(), SectionId::KIND)?.value() {
            DocumentObject::Section(section) => Ok(section),
            other => Err(mismatch(SectionId::KIND, other)),
        }
    }

    /// Paragraphs of a section in document order.
    pub fn paragraphs(&self, section: SectionId) -> Result<Vec<ParagraphId>> {
        let node = self.lookup(section.node_id(), SectionId::KIND)?;
        if !matches!(node.value(), DocumentObject::Section(_)) {
            return Err(mismatch(SectionId::KIND, node.value()));
        }
        Ok(node
            .children()
            .filter(|child| matches!(child.value(), DocumentObject::Paragraph(_)))
            .map(|child| ParagraphId(child.id()))
            .collect())
    }

    /// Appends an unstyled paragraph at the end of `section`.
    pub fn add_paragraph(&mut self, section: SectionId) -> Result<ParagraphId> {
        let mut node = self.container_mut(section.node_id(), SectionId::KIND)?;
        let id = node
            .append(DocumentObject::Paragraph(Paragraph::default()))
            .id();
        Ok(ParagraphId(id))
    }

    pub fn paragraph(&self, id: ParagraphId) -> Result<&Paragraph> {
        match self.lookup(id.node_id(), ParagraphId::KIND)?.value() {
            DocumentObject::Paragraph(paragraph) => Ok(paragraph),
            other => Err(mismatch(ParagraphId::KIND, other)),
        }
    }

    pub fn update_paragraph<R>(
        &mut self,
        id: ParagraphId,
        f: impl FnOnce(&mut Paragraph) -> R,
    ) -> Result<R> {
        let mut node = self
            .tree
            .get_mut(id.node_id())
            .ok_or(DocumentError::Missing {
                expected: ParagraphId::KIND,
            })?;
        match node.value() {
            DocumentObject::Paragraph(paragraph) => Ok(f(paragraph)),
            other => Err(mismatch(ParagraphId::KIND, other)),
        }
    }

    /// Sets the paragraph style. Returns the id again so calls can chain.
    pub fn set_style(&mut self, id: ParagraphId, style: impl Into<String>) -> Result<ParagraphId> {
        let style = style.into();
        if style.is_empty() {
            return Err(DocumentError::EmptyStyle);
        }
        self.update_paragraph(id, |paragraph| paragraph.style = Some(style))?;
        Ok(id)
    }

    /// The section that owns `paragraph`.
    pub fn section_of(&self, paragraph: ParagraphId) -> Result<SectionId> {
        let node = self.lookup(paragraph.node_id(), ParagraphId::KIND)?;
        if !matches!(node.value(), DocumentObject::Paragraph(_)) {
            return Err(mismatch(ParagraphId::KIND, node.value()));
        }
        node.parent()
            .filter(|parent| matches!(parent.value(), DocumentObject::Section(_)))
            .map(|parent| SectionId(parent.id()))
            .ok_or(DocumentError::Detached {
                kind: ObjectKind::Paragraph,
                expected: ObjectKind::Section,
            })
    }

    /// The paragraph that ultimately owns an inline parent.
    ///
    /// A paragraph resolves to itself.
    pub fn paragraph_of(&self, parent: impl Into<InlineParent>) -> Result<ParagraphId> {
        let parent = parent.into();
        let node = self.lookup(parent.node_id(), parent.kind())?;
        if node.value().kind() != parent.kind() {
            return Err(mismatch(parent.kind(), node.value()));
        }
        if let InlineParent::Paragraph(id) = parent {
            return Ok(id);
        }
        node.ancestors()
            .find(|ancestor| matches!(ancestor.value(), DocumentObject::Paragraph(_)))
            .map(|ancestor| ParagraphId(ancestor.id()))
            .ok_or(DocumentError::Detached {
                kind: parent.kind(),
                expected: ObjectKind::Paragraph,
            })
    }

    pub fn add_text(
        &mut self,
        parent: impl Into<InlineParent>,
        text: impl Into<String>,
    ) -> Result<()> {
        self.append_inline(parent.into(), DocumentObject::Text(text.into()))?;
        Ok(())
    }

    pub fn add_line_break(&mut self, parent: impl Into<InlineParent>) -> Result<()> {
        self.append_inline(parent.into(), DocumentObject::LineBreak)?;
        Ok(())
    }

    /// Appends a new inline run with `format` set.
    pub fn add_formatted_text(
        &mut self,
        parent: impl Into<InlineParent>,
        format: TextFormat,
    ) -> Result<FormattedTextId> {
        let id = self.append_inline(
            parent.into(),
            DocumentObject::FormattedText(FormattedText::with_format(format)),
        )?;
        Ok(FormattedTextId(id))
    }

    pub fn formatted_text(&self, id: FormattedTextId) -> Result<&FormattedText> {
        match self.lookup(id.node_id(), FormattedTextId::KIND)?.value() {
            DocumentObject::FormattedText(text) => Ok(text),
            other => Err(mismatch(FormattedTextId::KIND, other)),
        }
    }

    pub fn update_formatted_text<R>(
        &mut self,
        id: FormattedTextId,
        f: impl FnOnce(&mut FormattedText) -> R,
    ) -> Result<R> {
        let mut node = self
            .tree
            .get_mut(id.node_id())
            .ok_or(DocumentError::Missing {
                expected: FormattedTextId::KIND,
            })?;
        match node.value() {
            DocumentObject::FormattedText(text) => Ok(f(text)),
            other => Err(mismatch(FormattedTextId::KIND, other)),
        }
    }

    /// Adds a format flag to an existing run.
    pub fn apply_format(&mut self, id: FormattedTextId, format: TextFormat) -> Result<()> {
        self.update_formatted_text(id, |text| text.apply(format))
    }

    /// Appends a hyperlink to any inline parent, so links may sit inside
    /// formatted runs.
    pub fn add_hyperlink(
        &mut self,
        parent: impl Into<InlineParent>,
        target: impl Into<String>,
        kind: HyperlinkType,
    ) -> Result<HyperlinkId> {
        let id = self.append_inline(
            parent.into(),
            DocumentObject::Hyperlink(Hyperlink {
                target: target.into(),
                kind,
            }),
        )?;
        Ok(HyperlinkId(id))
    }

    pub fn hyperlink(&self, id: HyperlinkId) -> Result<&Hyperlink> {
        match self.lookup(id.node_id(), HyperlinkId::KIND)?.value() {
            DocumentObject::Hyperlink(link) => Ok(link),
            other => Err(mismatch(HyperlinkId::KIND, other)),
        }
    }

    pub(crate) fn root(&self) -> NodeRef<'_, DocumentObject> {
        self.tree.root()
    }

    pub(crate) fn lookup(
        &self,
        id: NodeId,
        expected: ObjectKind,
    ) -> Result<NodeRef<'_, DocumentObject>> {
        self.tree.get(id).ok_or(DocumentError::Missing { expected })
    }

    fn container_mut(
        &mut self,
        id: NodeId,
        expected: ObjectKind,
    ) -> Result<NodeMut<'_, DocumentObject>> {
        let mut node = self
            .tree
            .get_mut(id)
            .ok_or(DocumentError::Missing { expected })?;
        let found = node.value().kind();
        if found != expected {
            return Err(DocumentError::KindMismatch { expected, found });
        }
        Ok(node)
    }

    fn append_inline(&mut self, parent: InlineParent, value: DocumentObject) -> Result<NodeId> {
        let mut node = self.container_mut(parent.node_id(), parent.kind())?;
        Ok(node.append(value).id())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn mismatch(expected: ObjectKind, found: &DocumentObject) -> DocumentError {
    DocumentError::KindMismatch {
        expected,
        found: found.kind(),
    }
}
