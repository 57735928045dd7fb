use core::{
    mem,
    num::NonZeroU32,
    sync::atomic::{AtomicU32, Ordering},
};

use alloc::{collections::TryReserveError, vec::Vec};
use log::trace;

use super::traits::Link;

static NEXT_TAG: AtomicU32 = AtomicU32::new(1);

/// Hand out a process-wide tag identifying one list or one arena.
///
/// Tags repeat only after 2^32 - 1 allocations.
pub(crate) fn next_tag() -> NonZeroU32 {
    loop {
        if let Some(tag) = NonZeroU32::new(NEXT_TAG.fetch_add(1, Ordering::Relaxed)) {
            return tag;
        }
    }
}

/// Identifies one occupant of one slot of one arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    owner: NonZeroU32,
    index: usize,
    generation: u32,
}

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.index
    }

    pub(crate) fn owner(self) -> NonZeroU32 {
        self.owner
    }
}

/// A node holding one element of a forward list.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    next: Option<NodeId>,
}

impl<T> Link for Node<T> {
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

/// The link that precedes the first node. It never holds an element.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sentinel {
    next: Option<NodeId>,
}

impl Sentinel {
    pub(crate) const fn new() -> Self {
        Self { next: None }
    }
}

impl Link for Sentinel {
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

pub(crate) enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

pub(crate) struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

impl<T> Slot<T> {
    pub(crate) fn node(&self) -> Option<&Node<T>> {
        match &self.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<T>> {
        match &mut self.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }
}

/// Slot storage for the nodes of one list.
///
/// Vacated slots are chained into a free list and reused before the backing
/// vector grows. Every release bumps the slot's generation, so ids handed out
/// for an earlier occupant no longer resolve. A slot whose generation would
/// wrap is retired instead of reused.
///
/// Every arena has its own tag, carried by the ids it hands out, so ids from
/// another arena never resolve here.
pub(crate) struct NodeArena<T> {
    tag: NonZeroU32,
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
    retired: usize,
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            tag: next_tag(),
            slots: Vec::new(),
            free: None,
            len: 0,
            retired: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            tag: next_tag(),
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
            retired: 0,
        }
    }

    pub(crate) fn tag(&self) -> NonZeroU32 {
        self.tag
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of nodes the arena holds without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    fn vacant(&self) -> usize {
        self.slots.len() - self.len - self.retired
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        let vacant = self.vacant();
        if additional > vacant {
            trace!("reserving {} node slots", additional - vacant);
            self.slots.reserve(additional - vacant);
        }
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let vacant = self.vacant();
        if additional > vacant {
            trace!("reserving {} node slots", additional - vacant);
            self.slots.try_reserve(additional - vacant)?;
        }
        Ok(())
    }

    /// Store a new node and return its id.
    pub(crate) fn alloc(&mut self, value: T, next: Option<NodeId>) -> NodeId {
        let node = Node { value, next };
        self.len += 1;

        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index];
                let next_free = match slot.entry {
                    Entry::Vacant { next_free } => next_free,
                    Entry::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                slot.entry = Entry::Occupied(node);
                self.free = next_free;
                NodeId {
                    owner: self.tag,
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                if self.slots.len() == self.slots.capacity() {
                    trace!("node arena full at {} slots, growing", self.slots.len());
                }
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(node),
                });
                NodeId {
                    owner: self.tag,
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Vacate the slot of `id` and return its node.
    ///
    /// Returns `None` if `id` does not refer to a live node.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        if id.owner != self.tag {
            return None;
        }
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        slot.node()?;

        let entry = match slot.generation.checked_add(1) {
            Some(generation) => {
                slot.generation = generation;
                let entry = mem::replace(
                    &mut slot.entry,
                    Entry::Vacant {
                        next_free: self.free,
                    },
                );
                self.free = Some(id.index);
                entry
            }
            None => {
                trace!("retiring node slot {} after exhausting its generations", id.index);
                self.retired += 1;
                mem::replace(&mut slot.entry, Entry::Vacant { next_free: None })
            }
        };
        self.len -= 1;

        match entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| id.owner == self.tag && slot.generation == id.generation)
            .and_then(Slot::node)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        let tag = self.tag;
        self.slots
            .get_mut(id.index)
            .filter(|slot| id.owner == tag && slot.generation == id.generation)
            .and_then(Slot::node_mut)
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<T>] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::NodeArena;
    use crate::linked_list::forward::traits::Link;

    #[test]
    fn test_alloc_and_get() {
        let mut arena = NodeArena::new();
        let a = arena.alloc("a", None);
        let b = arena.alloc("b", Some(a));

        assert_eq!(arena.get(a).map(|n| n.value), Some("a"));
        assert_eq!(arena.get(b).map(|n| n.value), Some("b"));
        assert_eq!(arena.get(b).and_then(|n| n.next()), Some(a));
    }

    #[test]
    fn test_release_reuses_slot_with_new_generation() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1, None);
        let node = arena.release(a).unwrap();
        assert_eq!(node.value, 1);

        let b = arena.alloc(2, None);
        assert_eq!(a.index(), b.index());
        assert_ne!(a, b);
        assert!(!arena.contains(a));
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(b).map(|n| n.value), Some(2));
    }

    #[test]
    fn test_release_twice() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1, None);
        assert!(arena.release(a).is_some());
        assert!(arena.release(a).is_none());
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1, None);
        let b = arena.alloc(2, None);
        arena.release(a);
        arena.release(b);

        assert_eq!(arena.alloc(3, None).index(), b.index());
        assert_eq!(arena.alloc(4, None).index(), a.index());
    }

    #[test]
    fn test_reserve_counts_vacant_slots() {
        let mut arena = NodeArena::with_capacity(4);
        let ids: [_; 4] = core::array::from_fn(|i| arena.alloc(i, None));
        for id in ids {
            arena.release(id);
        }
        let capacity = arena.capacity();

        arena.reserve(4);
        assert_eq!(arena.capacity(), capacity);
        arena.try_reserve(4).unwrap();
        assert_eq!(arena.capacity(), capacity);

        arena.reserve(8);
        assert!(arena.capacity() >= 8);
    }

    #[test]
    fn test_ids_from_another_arena_do_not_resolve() {
        let mut first = NodeArena::new();
        let mut second = NodeArena::new();
        let a = first.alloc(1, None);
        let b = second.alloc(2, None);

        assert_eq!(a.index(), b.index());
        assert_ne!(a, b);
        assert_ne!(first.tag(), second.tag());
        assert!(!second.contains(a));
        assert!(second.get_mut(a).is_none());
        assert!(second.release(a).is_none());
        assert_eq!(second.get(b).map(|n| n.value), Some(2));
    }

    #[test]
    fn test_slot_retired_when_generation_exhausted() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1, None);
        arena.release(a);
        arena.slots[a.index()].generation = u32::MAX;

        let last = arena.alloc(2, None);
        assert_eq!(last.index(), a.index());
        assert_eq!(arena.release(last).map(|n| n.value), Some(2));

        // The slot is not handed out again, so `last` can never alias.
        let fresh = arena.alloc(3, None);
        assert_ne!(fresh.index(), last.index());
        assert!(arena.get(last).is_none());
        assert!(arena.release(last).is_none());
        assert_eq!(arena.get(fresh).map(|n| n.value), Some(3));
        assert_eq!(arena.len(), 1);

        // Retired slots do not count as room for new nodes.
        arena.reserve(1);
        assert!(arena.capacity() >= 3);
    }
}
