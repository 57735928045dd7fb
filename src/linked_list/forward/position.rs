use core::num::NonZeroU32;

use super::node::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Anchor {
    /// The sentinel of the list with this tag.
    BeforeBegin(NonZeroU32),
    Node(NodeId),
    End,
}

/// A place in a [`ForwardList`](super::list::ForwardList).
///
/// A position is one of: the before-begin anchor, an element, or the end.
/// It is a plain `Copy` handle that does not borrow the list, so it can be
/// kept across mutations and passed back to `insert_after` / `erase_after`.
///
/// Two positions are equal when they denote the same node of the same list,
/// the before-begin anchor of the same list, or when both are the end.
/// Equality never looks at the stored values, so the first elements of a
/// list and of its clone are different positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub(crate) Anchor);

impl Position {
    pub(crate) const END: Self = Self(Anchor::End);

    pub(crate) fn from_link(next: Option<NodeId>) -> Self {
        match next {
            Some(id) => Self(Anchor::Node(id)),
            None => Self::END,
        }
    }

    /// Whether this is the anchor before the first element.
    pub fn is_before_begin(&self) -> bool {
        matches!(self.0, Anchor::BeforeBegin(_))
    }

    /// Whether this is the past-the-end position.
    pub fn is_end(&self) -> bool {
        matches!(self.0, Anchor::End)
    }
}
