//! # Forward List
//!
//! A singly linked list whose nodes are stored in an arena owned by the list.
//!
//! ## Core Components
//!
//! - `traits`: The `Link` trait shared by the sentinel and by real nodes.
//! - `node`: Nodes, the value-less sentinel and the slot arena.
//! - [`position`]: [`position::Position`], a copyable handle to a place in the list.
//! - [`list::ForwardList`]: The list itself.
//! - [`iter`]: Borrowing and owning iterators.
//! - [`cursor`]: Read-only and mutable views over a position.
//! - [`error`]: Errors reported by the checked operations.
//!
//! ## Invalidation
//!
//! A position that refers to a node stays usable until that node is erased,
//! the list is cleared, or the list is dropped. Slots carry a generation
//! counter, so a position to an erased node is detected as stale even after
//! its slot is reused.
//!
//! Positions carry the identity of the list they came from. A list's
//! before-begin position is tied to that list for its whole life, while
//! element positions follow their elements through `swap`. Handing a
//! position to a list it does not belong to is a caller error; the checked
//! operations report it as [`error::ListError::ForeignPosition`].

pub(crate) mod traits;
pub(crate) mod node;
pub mod position;
pub mod list;
pub mod iter;
pub mod cursor;
pub mod error;
