//! Read-only view over a parsed markup fragment.
//!
//! Parsing is delegated to `scraper` (html5ever). Handlers only ever see
//! [`MarkupNode`], which exposes the tag, attributes, text and the sibling
//! and parent links the conversion rules look at.

use ego_tree::NodeRef;
use scraper::{Html, Node};

use crate::error::{ConvertError, Result};
use crate::tag::TagKey;

/// A parsed HTML fragment.
pub struct Markup {
    html: Html,
}

impl Markup {
    /// Parses `source` as a body fragment. Empty input is rejected.
    ///
    /// The parser recovers from malformed markup on its own; its complaints
    /// are only logged.
    pub fn parse(source: &str) -> Result<Self> {
        if source.is_empty() {
            return Err(ConvertError::EmptyMarkup);
        }

        let html = Html::parse_fragment(source);
        if !html.errors.is_empty() {
            tracing::debug!(
                errors = html.errors.len(),
                first = %html.errors[0],
                "Markup parsed with recoverable errors"
            );
        }
        Ok(Self { html })
    }

    /// The fragment container. Its children are the top-level nodes of the
    /// parsed markup.
    pub fn root(&self) -> MarkupNode<'_> {
        MarkupNode::new(*self.html.root_element())
    }
}

/// A node of the parsed markup tree.
#[derive(Debug, Clone, Copy)]
pub struct MarkupNode<'a> {
    node: NodeRef<'a, Node>,
}

impl<'a> MarkupNode<'a> {
    fn new(node: NodeRef<'a, Node>) -> Self {
        Self { node }
    }

    /// Registry key for this node. Comments, doctypes and processing
    /// instructions have none.
    pub fn key(self) -> Option<TagKey> {
        match self.node.value() {
            Node::Text(_) => Some(TagKey::Text),
            Node::Element(element) => Some(TagKey::parsed(element.name())),
            _ => None,
        }
    }

    /// Lowercase element name, `None` for non-element nodes.
    pub fn tag_name(self) -> Option<&'a str> {
        self.node.value().as_element().map(|element| element.name())
    }

    pub fn is_element(self, name: &str) -> bool {
        self.tag_name() == Some(name)
    }

    pub fn is_text(self) -> bool {
        self.node.value().is_text()
    }

    pub fn attr(self, name: &str) -> Option<&'a str> {
        self.node
            .value()
            .as_element()
            .and_then(|element| element.attr(name))
    }

    /// Decoded text of a text node.
    pub fn text(self) -> Option<&'a str> {
        self.node.value().as_text().map(|text| &**text)
    }

    /// Concatenated decoded text of every descendant text node.
    pub fn inner_text(self) -> String {
        self.node
            .descendants()
            .filter_map(|node| node.value().as_text())
            .map(|text| &**text)
            .collect()
    }

    pub fn parent(self) -> Option<MarkupNode<'a>> {
        self.node.parent().map(MarkupNode::new)
    }

    pub fn prev_sibling(self) -> Option<MarkupNode<'a>> {
        self.node.prev_sibling().map(MarkupNode::new)
    }

    pub fn next_sibling(self) -> Option<MarkupNode<'a>> {
        self.node.next_sibling().map(MarkupNode::new)
    }

    pub fn children(self) -> impl Iterator<Item = MarkupNode<'a>> {
        self.node.children().map(MarkupNode::new)
    }

    pub fn has_children(self) -> bool {
        self.node.has_children()
    }
}

/// Identity, not structural equality.
impl PartialEq for MarkupNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for MarkupNode<'_> {}
