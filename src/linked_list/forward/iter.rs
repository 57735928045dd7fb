use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{
    list::ForwardList,
    node::{NodeArena, NodeId, Slot},
    traits::Link,
};

/// An iterator over shared references to the elements of a list.
pub struct Iter<'a, T> {
    nodes: &'a NodeArena<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a NodeArena<T>, head: Option<NodeId>, len: usize) -> Self {
        Self {
            nodes,
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.nodes.get(self.current?)?;
        self.current = node.next();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// An iterator over mutable references to the elements of a list.
pub struct IterMut<'a, T> {
    slots: NonNull<Slot<T>>,
    slot_count: usize,
    current: Option<NodeId>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(nodes: &'a mut NodeArena<T>, head: Option<NodeId>, len: usize) -> Self {
        let slots = nodes.slots_mut();
        Self {
            slot_count: slots.len(),
            slots: NonNull::from(slots).cast(),
            current: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let id = self.current?;
        debug_assert!(id.index() < self.slot_count);

        // SAFETY: ids reachable from the head are in bounds and the links are
        // acyclic, so every slot is visited at most once and no two returned
        // references alias. The arena stays mutably borrowed for `'a`.
        let slot = unsafe { &mut *self.slots.as_ptr().add(id.index()) };
        let node = slot.node_mut()?;
        self.current = node.next();
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator that pops elements off the front of a list.
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: ForwardList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
