//! Doubly-linked list over index-linked nodes.
//!
//! Besides positional access, the list hands out [`NodeId`] handles so a
//! caller can hold a cursor on one node and step to its neighbours in O(1).

use crate::arena::Arena;
use crate::error::{CollectionError, Result};

/// Handle to a node of a [`List`].
///
/// A handle stays valid until its node is removed. Handles of removed nodes
/// resolve to `None`, though a later insertion may reuse the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct ListNode<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct List<T> {
    nodes: Arena<ListNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `value` after the current tail.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let index = self.nodes.insert(ListNode {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail) => tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        NodeId(index)
    }

    /// Removes the element at `index`, relinking its neighbours.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let slot = self.locate(index)?;
        self.unlink(slot)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self.locate(index)?;
        self.nodes
            .get(slot)
            .map(|node| &node.value)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self.locate(index)?;
        let len = self.len();
        self.nodes
            .get_mut(slot)
            .map(|node| &mut node.value)
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head.map(NodeId)
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail.map(NodeId)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.next.map(NodeId)
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.prev.map(NodeId)
    }

    pub fn node(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).map(|node| &node.value)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(|node| &mut node.value)
    }

    /// Zero-based position of `id`, counted from the head.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        let mut node = self.nodes.get(id.0)?;
        let mut position = 0;
        while let Some(prev) = node.prev {
            node = self.nodes.get(prev)?;
            position += 1;
        }
        Some(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.nodes.get(cursor?)?;
            cursor = node.next;
            Some(&node.value)
        })
    }

    fn locate(&self, index: usize) -> Result<usize> {
        let out_of_range = CollectionError::IndexOutOfRange {
            index,
            len: self.len(),
        };

        let mut cursor = self.head.ok_or(out_of_range)?;
        for _ in 0..index {
            cursor = self
                .nodes
                .get(cursor)
                .and_then(|node| node.next)
                .ok_or(out_of_range)?;
        }
        Ok(cursor)
    }

    fn unlink(&mut self, slot: usize) -> Option<T> {
        let node = self.nodes.remove(slot)?;

        match node.prev.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.nodes.get_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        Some(node.value)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &List<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    /// Walks tail to head and checks that it mirrors the forward order.
    fn assert_links_consistent(list: &List<i32>) {
        let mut backward = Vec::new();
        let mut cursor = list.tail();
        while let Some(id) = cursor {
            backward.push(*list.node(id).unwrap());
            cursor = list.prev(id);
        }
        backward.reverse();
        assert_eq!(backward, collect(list));
    }

    #[test]
    fn push_back_links_both_directions() {
        let list: List<_> = (1..=4).collect();
        assert_eq!(collect(&list), [1, 2, 3, 4]);
        assert_eq!(list.len(), 4);
        assert_links_consistent(&list);

        let head = list.head().unwrap();
        assert_eq!(list.prev(head), None);
        let second = list.next(head).unwrap();
        assert_eq!(list.node(second), Some(&2));
        assert_eq!(list.prev(second), Some(head));
        assert_eq!(list.next(list.tail().unwrap()), None);
    }

    #[test]
    fn remove_head_tail_and_interior() {
        let mut list: List<_> = (1..=5).collect();

        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(collect(&list), [2, 3, 4, 5]);
        assert_links_consistent(&list);

        assert_eq!(list.remove(3), Ok(5));
        assert_eq!(collect(&list), [2, 3, 4]);
        assert_links_consistent(&list);

        assert_eq!(list.remove(1), Ok(3));
        assert_eq!(collect(&list), [2, 4]);
        assert_links_consistent(&list);

        assert_eq!(list.remove(0), Ok(2));
        assert_eq!(list.remove(0), Ok(4));
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut list: List<_> = (1..=2).collect();
        assert_eq!(
            list.get(2),
            Err(CollectionError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(list.remove(7).is_err());
        assert_eq!(list.len(), 2);

        let mut empty: List<i32> = List::new();
        assert!(empty.remove(0).is_err());
    }

    #[test]
    fn positions_follow_links() {
        let mut list: List<_> = (10..15).collect();
        let tail = list.tail().unwrap();
        assert_eq!(list.position(tail), Some(4));

        list.remove(0).unwrap();
        assert_eq!(list.position(tail), Some(3));
        assert_eq!(list.get(0), Ok(&11));
    }

    #[test]
    fn push_after_remove_reuses_storage() {
        let mut list: List<_> = (1..=3).collect();
        list.remove(1).unwrap();
        list.push_back(9);
        assert_eq!(collect(&list), [1, 3, 9]);
        assert_links_consistent(&list);
    }
}
