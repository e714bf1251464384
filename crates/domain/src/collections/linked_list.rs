//! Singly-linked list
//!
//! Every node owns its successor through a `Box`, so the chain can never
//! form a cycle or share a node. The length is cached and updated by every
//! structural mutation; it is never recomputed by walking the chain.
//!
//! Indexed access walks from the head, so `get`, `set` and `remove` are
//! O(i) and `append` is O(n). Callers that need bounded size enforce it
//! themselves.

use std::fmt;

use thiserror::Error;

/// Positional access outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index {index} out of range for list of length {len}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly-linked sequence of owned values.
///
/// # Example
///
/// ```
/// use geomap_domain::collections::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.append("Nile");
/// list.append("Amazon");
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(1), Ok(&"Amazon"));
/// assert!(list.get(2).is_err());
/// ```
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Cached number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Link `value` after the current tail.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        let err = self.out_of_range(index);
        self.check(index)?;
        self.node(index).map(|node| &node.value).ok_or(err)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let err = self.out_of_range(index);
        self.check(index)?;
        self.node_mut(index).map(|node| &mut node.value).ok_or(err)
    }

    /// Replace the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Unlink the node at `index` and return its value.
    ///
    /// Only the removed node is touched; its successor is relinked to the
    /// predecessor (or becomes the new head when `index == 0`).
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        let err = self.out_of_range(index);
        self.check(index)?;

        let slot = if index == 0 {
            &mut self.head
        } else {
            &mut self.node_mut(index - 1).ok_or(err)?.next
        };
        let node = slot.take().ok_or(err)?;
        let Node { value, next } = *node;
        *slot = next;

        self.len -= 1;
        Ok(value)
    }

    /// Forward iterator over the stored values. Can be called any number of
    /// times; each call starts again from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Ordered snapshot of references to the stored values.
    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor?.next.as_deref();
        }
        cursor
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor?.next.as_deref_mut();
        }
        cursor
    }

    fn check(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> IndexOutOfRange {
        IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively; the default recursive drop of `Box` chains is
// bounded by stack depth.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Numbered listing, one item per entry starting at 1. Multi-line items
/// continue on lines indented by four spaces.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, item) in self.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            let rendered = item.to_string();
            let mut lines = rendered.lines();
            write!(f, "{}. {}", position + 1, lines.next().unwrap_or_default())?;
            for line in lines {
                write!(f, "\n    {}", line)?;
            }
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Links every value after the current tail, walking to the tail once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            let node = cursor.insert(Box::new(Node { value, next: None }));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Borrowing iterator returned by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`LinkedList::iter_mut`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        self.remaining = self.remaining.saturating_sub(1);
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Draining iterator returned by `LinkedList::into_iter`.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
