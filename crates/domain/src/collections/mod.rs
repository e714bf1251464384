//! Hand-rolled containers backing domain aggregates.

mod linked_list;

pub use linked_list::{IndexOutOfRange, IntoIter, Iter, IterMut, LinkedList};
