use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    num::NonZeroU32,
};

use log::{debug, trace};

use super::{
    cursor::{Cursor, CursorMut},
    error::ListError,
    iter::{IntoIter, Iter, IterMut},
    node::{NodeArena, NodeId, Sentinel, next_tag},
    position::{Anchor, Position},
    traits::Link,
};

/// A singly linked list.
///
/// Elements are kept in an arena owned by the list and linked by slot id.
/// Front insertion and removal, and insertion or removal after a known
/// [`Position`], are O(1).
pub struct ForwardList<T> {
    // Identifies this list's sentinel; never changes, not even on swap.
    tag: NonZeroU32,
    head: Sentinel,
    nodes: NodeArena<T>,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self {
            tag: next_tag(),
            head: Sentinel::new(),
            nodes: NodeArena::new(),
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tag: next_tag(),
            head: Sentinel::new(),
            nodes: NodeArena::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Like [`reserve`](Self::reserve), but reports allocation failure.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ListError> {
        self.nodes.try_reserve(additional)?;
        Ok(())
    }

    pub fn front(&self) -> Option<&T> {
        self.head
            .next()
            .and_then(|id| self.nodes.get(id))
            .map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head
            .next()
            .and_then(|id| self.nodes.get_mut(id))
            .map(|node| &mut node.value)
    }

    /// Inserts `value` at the front of the list.
    pub fn push_front(&mut self, value: T) {
        self.insert_after(self.before_begin(), value);
    }

    /// Inserts `value` at the front of the list, reporting allocation failure
    /// instead of aborting. The list is unchanged on error.
    pub fn try_push_front(&mut self, value: T) -> Result<(), ListError> {
        self.try_insert_after(self.before_begin(), value)?;
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(self.before_begin())
            .ok()
            .map(|(value, _)| value)
    }

    /// Removes every element, front to back.
    ///
    /// Positions obtained before the call no longer refer to anything.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        trace!("clearing forward list of {} elements", self.len());
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists in O(1).
    ///
    /// Element positions follow their elements into the other list. Each
    /// list keeps its own before-begin position.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.nodes, &mut other.nodes);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head.next(), self.len())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len();
        IterMut::new(&mut self.nodes, self.head.next(), len)
    }

    /// The anchor before the first element.
    ///
    /// It can only be used as the anchor of `insert_after` / `erase_after` or
    /// advanced with [`next_position`](Self::next_position); it does not
    /// refer to an element.
    pub fn before_begin(&self) -> Position {
        Position(Anchor::BeforeBegin(self.tag))
    }

    /// The position of the first element, or [`end`](Self::end) if empty.
    pub fn begin(&self) -> Position {
        Position::from_link(self.head.next())
    }

    /// The past-the-end position.
    pub fn end(&self) -> Position {
        Position::END
    }

    /// The position following `pos`.
    ///
    /// Returns `None` for the end position and for positions that no longer
    /// refer to an element of the list.
    pub fn next_position(&self, pos: Position) -> Option<Position> {
        self.anchor(pos)
            .ok()
            .map(|anchor| Position::from_link(anchor.next()))
    }

    /// Whether `pos` can be used as an anchor for `insert_after`.
    pub fn is_valid(&self, pos: Position) -> bool {
        match pos.0 {
            Anchor::BeforeBegin(tag) => tag == self.tag,
            Anchor::Node(id) => self.nodes.contains(id),
            Anchor::End => false,
        }
    }

    /// The element at `pos`.
    ///
    /// Returns `None` for the before-begin and end positions, and for stale
    /// positions.
    pub fn get(&self, pos: Position) -> Option<&T> {
        match pos.0 {
            Anchor::Node(id) => self.nodes.get(id).map(|node| &node.value),
            Anchor::BeforeBegin(_) | Anchor::End => None,
        }
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        match pos.0 {
            Anchor::Node(id) => self.nodes.get_mut(id).map(|node| &mut node.value),
            Anchor::BeforeBegin(_) | Anchor::End => None,
        }
    }

    /// Inserts `value` right after `pos` and returns the new element's position.
    ///
    /// Inserting after [`before_begin`](Self::before_begin) inserts at the front.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position or no longer refers to an element.
    pub fn insert_after(&mut self, pos: Position, value: T) -> Position {
        let next = match self.anchor(pos) {
            Ok(anchor) => anchor.next(),
            Err(err) => panic!("insert_after: {err}"),
        };
        self.link_new(pos, value, next)
    }

    /// Checked [`insert_after`](Self::insert_after).
    ///
    /// The anchor is validated and storage for the new node secured before any
    /// link is touched, so on error the list is exactly as it was.
    pub fn try_insert_after(&mut self, pos: Position, value: T) -> Result<Position, ListError> {
        let next = self
            .anchor(pos)
            .inspect_err(|err| debug!("insert_after rejected {pos:?}: {err}"))?
            .next();
        self.nodes.try_reserve(1)?;
        Ok(self.link_new(pos, value, next))
    }

    /// Removes the element right after `pos` and returns the position of the
    /// element that now follows `pos` (or the end position).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position, is stale, or has no successor.
    pub fn erase_after(&mut self, pos: Position) -> Position {
        match self.unlink_after(pos) {
            Ok((_, next)) => next,
            Err(err) => panic!("erase_after: {err}"),
        }
    }

    /// Checked [`erase_after`](Self::erase_after).
    pub fn try_erase_after(&mut self, pos: Position) -> Result<Position, ListError> {
        self.unlink_after(pos)
            .map(|(_, next)| next)
            .inspect_err(|err| debug!("erase_after rejected {pos:?}: {err}"))
    }

    /// Removes the element right after `pos` and returns it.
    pub fn remove_after(&mut self, pos: Position) -> Result<T, ListError> {
        self.unlink_after(pos)
            .map(|(value, _)| value)
            .inspect_err(|err| debug!("remove_after rejected {pos:?}: {err}"))
    }

    /// A read-only cursor starting at `pos`.
    pub fn cursor(&self, pos: Position) -> Cursor<'_, T> {
        Cursor::new(self, pos)
    }

    /// A mutable cursor starting at `pos`.
    pub fn cursor_mut(&mut self, pos: Position) -> CursorMut<'_, T> {
        CursorMut::new(self, pos)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|elem| elem == value)
    }

    fn anchor(&self, pos: Position) -> Result<&dyn Link, ListError> {
        match pos.0 {
            Anchor::BeforeBegin(tag) if tag == self.tag => Ok(&self.head),
            Anchor::Node(id) if id.owner() == self.nodes.tag() => self
                .nodes
                .get(id)
                .map(|node| node as &dyn Link)
                .ok_or(ListError::StalePosition),
            Anchor::BeforeBegin(_) | Anchor::Node(_) => Err(ListError::ForeignPosition),
            Anchor::End => Err(ListError::PastTheEnd),
        }
    }

    fn anchor_mut(&mut self, pos: Position) -> Result<&mut dyn Link, ListError> {
        match pos.0 {
            Anchor::BeforeBegin(tag) if tag == self.tag => Ok(&mut self.head),
            Anchor::Node(id) if id.owner() == self.nodes.tag() => self
                .nodes
                .get_mut(id)
                .map(|node| node as &mut dyn Link)
                .ok_or(ListError::StalePosition),
            Anchor::BeforeBegin(_) | Anchor::Node(_) => Err(ListError::ForeignPosition),
            Anchor::End => Err(ListError::PastTheEnd),
        }
    }

    /// Allocate a node pointing at `next` and link it after the validated `pos`.
    fn link_new(&mut self, pos: Position, value: T, next: Option<NodeId>) -> Position {
        let id = self.nodes.alloc(value, next);
        match self.anchor_mut(pos) {
            Ok(anchor) => anchor.set_next(Some(id)),
            Err(_) => unreachable!("anchor was validated before allocation"),
        }
        Position::from_link(Some(id))
    }

    fn unlink_after(&mut self, pos: Position) -> Result<(T, Position), ListError> {
        let target = self.anchor(pos)?.next().ok_or(ListError::NoSuccessor)?;
        let node = match self.nodes.release(target) {
            Some(node) => node,
            None => unreachable!("linked node missing from the arena"),
        };
        let next = node.next();
        match self.anchor_mut(pos) {
            Ok(anchor) => anchor.set_next(next),
            Err(_) => unreachable!("anchor precedes the removed node"),
        }
        Ok((node.value, Position::from_link(next)))
    }
}

/// Exchanges the contents of two lists in O(1).
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs);
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Builds the full copy first and swaps it in afterwards, so `self` is left
    /// untouched if cloning an element panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        let mut tail = list.before_begin();
        for value in iter {
            tail = list.insert_after(tail, value);
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for elem in self {
            elem.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
