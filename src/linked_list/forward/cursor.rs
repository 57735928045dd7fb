//! Read-only and mutable views over a [`Position`].
//!
//! A [`Cursor`] and a [`CursorMut`] walk the list the same way; they differ
//! only in what they allow at the current position. A `CursorMut` converts
//! into a `Cursor`, never the other way round.
//!
//! Cursors compare by [`Position`], not by value: two cursors are equal when
//! they stand on the same node or anchor of the same list, or when both are
//! at the end.

use core::fmt;

use super::{list::ForwardList, position::Position};

/// A read-only cursor.
pub struct Cursor<'a, T> {
    list: &'a ForwardList<T>,
    pos: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a ForwardList<T>, pos: Position) -> Self {
        Self { list, pos }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// The element under the cursor, `None` at before-begin or end.
    pub fn current(&self) -> Option<&'a T> {
        self.list.get(self.pos)
    }

    /// The element after the cursor, without moving.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.list
            .next_position(self.pos)
            .and_then(|next| self.list.get(next))
    }

    /// Advances to the next position. At the end this does nothing.
    pub fn move_next(&mut self) {
        if let Some(next) = self.list.next_position(self.pos) {
            self.pos = next;
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<'a, T> PartialEq<CursorMut<'a, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'a, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("current", &self.current())
            .finish()
    }
}

/// A cursor that can modify the list around it.
pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    pos: Position,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut ForwardList<T>, pos: Position) -> Self {
        Self { list, pos }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn current(&self) -> Option<&T> {
        self.list.get(self.pos)
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.pos)
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.as_cursor().peek_next()
    }

    /// Advances to the next position. At the end this does nothing.
    pub fn move_next(&mut self) {
        if let Some(next) = self.list.next_position(self.pos) {
            self.pos = next;
        }
    }

    /// Inserts `value` after the cursor and returns its position. The cursor
    /// does not move.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end or its element has been removed.
    pub fn insert_after(&mut self, value: T) -> Position {
        self.list.insert_after(self.pos, value)
    }

    /// Removes and returns the element after the cursor, if there is one.
    pub fn erase_after(&mut self) -> Option<T> {
        self.list.remove_after(self.pos).ok()
    }

    /// A read-only view of this cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.pos)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor::new(cursor.list, cursor.pos)
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<'a, T> PartialEq<Cursor<'a, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'a, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.pos)
            .field("current", &self.current())
            .finish()
    }
}
