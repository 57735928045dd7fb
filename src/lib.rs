#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::forward::{
    cursor::{Cursor, CursorMut},
    error::ListError,
    iter::{IntoIter, Iter, IterMut},
    list::{ForwardList, swap},
    position::Position,
};
