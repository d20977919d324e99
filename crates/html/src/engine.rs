//! Recursive walk over the markup tree.

use quire_document::Document;

use crate::context::Context;
use crate::error::{ConvertError, Result};
use crate::markup::MarkupNode;
use crate::registry::HandlerRegistry;

/// History carried from one sibling to the next within a single walk.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    /// Context handlers attach to; `None` falls back to the target.
    current: Option<Context>,
    /// What the last handled sibling returned.
    previous: Option<Context>,
}

impl Cursor {
    fn new(current: Option<Context>) -> Self {
        Self {
            current,
            previous: None,
        }
    }

    /// Content following loose text stays in the paragraph that text went
    /// into instead of opening another one.
    fn continue_paragraph(&mut self, node: MarkupNode<'_>) {
        if !node.prev_sibling().is_some_and(MarkupNode::is_text) {
            return;
        }
        if let Some(Context::Paragraph(_)) = self.previous {
            self.current = self.previous;
        }
    }
}

/// Walks markup children in order, dispatching each node to its handler.
pub(crate) struct Walker<'r> {
    registry: &'r HandlerRegistry,
    target: Context,
    max_depth: usize,
}

impl<'r> Walker<'r> {
    pub(crate) fn new(registry: &'r HandlerRegistry, target: Context, max_depth: usize) -> Self {
        Self {
            registry,
            target,
            max_depth,
        }
    }

    /// Converts the children of `root` into `document`. Returns the number of
    /// nodes a handler was invoked for.
    pub(crate) fn run(&self, document: &mut Document, root: MarkupNode<'_>) -> Result<usize> {
        self.walk(document, root, None, 0)
    }

    fn walk(
        &self,
        document: &mut Document,
        parent: MarkupNode<'_>,
        current: Option<Context>,
        depth: usize,
    ) -> Result<usize> {
        if depth > self.max_depth {
            return Err(ConvertError::TooDeep {
                limit: self.max_depth,
            });
        }

        let mut cursor = Cursor::new(current);
        let mut handled = 0;
        for node in parent.children() {
            let entry = node
                .key()
                .and_then(|key| self.registry.get(&key).map(|handler| (key, handler)));
            let Some((key, handler)) = entry else {
                tracing::trace!(tag = ?node.tag_name(), depth, "Passing through node");
                if node.has_children() {
                    handled += self.walk(document, node, cursor.current, depth + 1)?;
                }
                continue;
            };

            cursor.continue_paragraph(node);
            let context = cursor.current.unwrap_or(self.target);
            let result = handler(node, context, document)?;
            handled += 1;
            tracing::trace!(
                tag = %key,
                depth,
                from = %context.kind(),
                to = %result.kind(),
                "Handled node"
            );

            if node.has_children() {
                handled += self.walk(document, node, Some(result), depth + 1)?;
            }
            cursor.previous = Some(result);
        }
        Ok(handled)
    }
}
