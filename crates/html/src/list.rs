//! List item conversion.
//!
//! No list state is kept between items. Each `li` works out from its
//! siblings whether it opens or closes its list, and the continuation flag
//! on the item paragraph tells the renderer how to number or bullet it.

use quire_document::{Document, ListInfo, ListType};

use crate::context::Context;
use crate::error::Result;
use crate::handlers::unexpected_context;
use crate::markup::MarkupNode;

pub const LIST_START_STYLE: &str = "ListStart";
pub const LIST_END_STYLE: &str = "ListEnd";
pub const UNORDERED_LIST_STYLE: &str = "UnorderedList";
pub const ORDERED_LIST_STYLE: &str = "OrderedList";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn style(self) -> &'static str {
        match self {
            ListKind::Ordered => ORDERED_LIST_STYLE,
            ListKind::Unordered => UNORDERED_LIST_STYLE,
        }
    }

    pub fn list_type(self) -> ListType {
        match self {
            ListKind::Ordered => ListType::NumberList1,
            ListKind::Unordered => ListType::BulletList1,
        }
    }
}

/// Where an item sits among the `li` children of its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPosition {
    pub kind: ListKind,
    pub is_first: bool,
    pub is_last: bool,
}

impl ItemPosition {
    pub fn of(item: MarkupNode<'_>) -> Self {
        let Some(list) = item.parent() else {
            return Self {
                kind: ListKind::Unordered,
                is_first: true,
                is_last: true,
            };
        };

        let kind = if list.is_element("ol") {
            ListKind::Ordered
        } else {
            ListKind::Unordered
        };
        let mut items = list.children().filter(|child| child.is_element("li"));
        let first = items.next();
        let last = items.last().or(first);

        Self {
            kind,
            is_first: first == Some(item),
            is_last: last == Some(item),
        }
    }
}

/// `li`: an item paragraph in the owning section, bracketed by list start
/// and end marker paragraphs at the edges of the list.
pub fn list_item(
    node: MarkupNode<'_>,
    context: Context,
    document: &mut Document,
) -> Result<Context> {
    let position = ItemPosition::of(node);
    let section = match context {
        Context::Section(section) => section,
        Context::Paragraph(paragraph) => document.section_of(paragraph)?,
        Context::FormattedText(_) | Context::Hyperlink(_) => {
            return Err(unexpected_context(node, "a section or paragraph", context));
        }
    };

    if position.is_first {
        let start = document.add_paragraph(section)?;
        document.set_style(start, LIST_START_STYLE)?;
    }

    let item = document.add_paragraph(section)?;
    document.set_style(item, position.kind.style())?;
    document.update_paragraph(item, |p| {
        p.format.list_info = Some(ListInfo {
            list_type: position.kind.list_type(),
            continue_previous_list: !position.is_first,
        });
    })?;

    if position.is_last {
        let end = document.add_paragraph(section)?;
        document.set_style(end, LIST_END_STYLE)?;
    }

    Ok(item.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Markup;

    fn positions(source: &str) -> Vec<ItemPosition> {
        let markup = Markup::parse(source).unwrap();
        let list = markup.root().children().next().unwrap();
        list.children()
            .filter(|child| child.is_element("li"))
            .map(ItemPosition::of)
            .collect()
    }

    #[test]
    fn test_positions_in_unordered_list() {
        let items = positions("<ul>\n<li>A</li>\n<li>B</li>\n<li>C</li>\n</ul>");

        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item.kind == ListKind::Unordered));
        assert_eq!(
            items
                .iter()
                .map(|item| (item.is_first, item.is_last))
                .collect::<Vec<_>>(),
            vec![(true, false), (false, false), (false, true)]
        );
    }

    #[test]
    fn test_single_item_is_first_and_last() {
        let items = positions("<ol><li>only</li></ol>");
        assert_eq!(
            items,
            vec![ItemPosition {
                kind: ListKind::Ordered,
                is_first: true,
                is_last: true,
            }]
        );
    }

    #[test]
    fn test_kind_styles() {
        assert_eq!(ListKind::Ordered.style(), "OrderedList");
        assert_eq!(ListKind::Unordered.list_type(), ListType::BulletList1);
    }
}
