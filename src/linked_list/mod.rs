//! Linked list implementations.
//!
//! A forward list owns its nodes in an arena indexed by stable slot ids.
//! Elements are addressed through [`Position`](forward::position::Position)
//! handles, which stay valid across unrelated insertions and removals and are
//! used as anchors for `insert_after` / `erase_after`.
//!
//! # Examples
//!
//! ```
//! use mola_forward_list::ForwardList;
//!
//! let mut list = ForwardList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//! assert_eq!(list.len(), 3);
//!
//! // Insert after the first element.
//! let first = list.begin();
//! let inserted = list.insert_after(first, 10);
//! assert_eq!(list.get(inserted), Some(&10));
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 10, 2, 3]);
//!
//! // Erasing after `before_begin` removes the front.
//! list.erase_after(list.before_begin());
//! assert_eq!(list.front(), Some(&10));
//! ```
pub mod forward;
