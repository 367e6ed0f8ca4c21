//! FIFO queue over index-linked nodes.

use crate::arena::Arena;
use crate::error::{CollectionError, Result};

#[derive(Clone, Debug)]
struct QueueNode<T> {
    value: T,
    next: Option<usize>,
}

/// Singly-linked FIFO queue.
///
/// Nodes are kept in a slot arena and linked by index, which gives O(1)
/// `enqueue` at the rear and O(1) `dequeue` at the front without shared
/// ownership of the tail node.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    nodes: Arena<QueueNode<T>>,
    front: Option<usize>,
    rear: Option<usize>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            front: None,
            rear: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub fn enqueue(&mut self, value: T) {
        let index = self.nodes.insert(QueueNode { value, next: None });
        match self.rear.and_then(|rear| self.nodes.get_mut(rear)) {
            Some(rear) => rear.next = Some(index),
            None => self.front = Some(index),
        }
        self.rear = Some(index);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        let front = self.front.ok_or(CollectionError::EmptyContainer)?;
        let node = self
            .nodes
            .remove(front)
            .ok_or(CollectionError::EmptyContainer)?;

        self.front = node.next;
        if self.front.is_none() {
            self.rear = None;
        }
        Ok(node.value)
    }

    pub fn peek(&self) -> Result<&T> {
        self.front
            .and_then(|front| self.nodes.get(front))
            .map(|node| &node.value)
            .ok_or(CollectionError::EmptyContainer)
    }

    /// Iterates from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.front;
        std::iter::from_fn(move || {
            let node = self.nodes.get(cursor?)?;
            cursor = node.next;
            Some(&node.value)
        })
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for value in iter {
            queue.enqueue(value);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeue_is_fifo() {
        let mut queue: Queue<_> = ["goblin", "orc", "troll"].into_iter().collect();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Ok(&"goblin"));
        assert_eq!(queue.dequeue(), Ok("goblin"));
        assert_eq!(queue.dequeue(), Ok("orc"));
        assert_eq!(queue.dequeue(), Ok("troll"));
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(CollectionError::EmptyContainer));
        assert_eq!(queue.peek(), Err(CollectionError::EmptyContainer));
    }

    #[test]
    fn interleaved_operations_keep_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(3);
        queue.enqueue(4);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);

        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(4));

        // Emptied queue accepts new elements at the front again.
        queue.enqueue(5);
        assert_eq!(queue.peek(), Ok(&5));
        assert_eq!(queue.len(), 1);
    }
}
