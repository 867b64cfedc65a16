use std::{fmt, sync::Arc};

/// An immutable singly-linked list with structural sharing.
///
/// Pushing returns a new list that shares its tail with the original, so a
/// [`Resolver`](crate::Resolver) can hand a longer scope chain to a recursive
/// call while its own chain stays untouched.
pub struct List<T> {
    head: Option<Arc<Node<T>>>,
    len: usize,
}

struct Node<T> {
    value: T,
    next: Option<Arc<Node<T>>>,
}

impl<T> List<T> {
    #[must_use]
    pub fn new() -> List<T> {
        List { head: None, len: 0 }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The most recently pushed value.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Return a new list with `value` in front.
    #[must_use]
    pub fn push_front(&self, value: T) -> List<T> {
        List {
            head: Some(Arc::new(Node {
                value,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Return the list without its head, or `None` if it is empty.
    #[must_use]
    pub fn tail(&self) -> Option<List<T>> {
        self.head.as_ref().map(|node| List {
            head: node.next.clone(),
            len: self.len - 1,
        })
    }

    /// Iterate from the most recently pushed value to the oldest one.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
