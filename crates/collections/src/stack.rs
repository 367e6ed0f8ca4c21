//! LIFO stack over boxed singly-linked nodes.

use crate::error::{CollectionError, Result};

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    next: Link<T>,
}

#[derive(Clone, Debug)]
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
    }

    pub fn pop(&mut self) -> Result<T> {
        let node = self.top.take().ok_or(CollectionError::EmptyContainer)?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn peek(&self) -> Result<&T> {
        self.top
            .as_deref()
            .map(|node| &node.value)
            .ok_or(CollectionError::EmptyContainer)
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively; the derived drop would recurse once per node.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn underflow_is_reported() {
        let mut stack: Stack<u8> = Stack::new();
        assert_eq!(stack.pop(), Err(CollectionError::EmptyContainer));
        assert_eq!(stack.peek(), Err(CollectionError::EmptyContainer));
    }

    #[test]
    fn iterates_top_down() {
        let mut stack = Stack::new();
        for i in 0..4 {
            stack.push(i);
        }
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [3, 2, 1, 0]);
    }

    #[test]
    fn deep_stack_drops_without_overflow() {
        let mut stack = Stack::new();
        for i in 0..200_000 {
            stack.push(i);
        }
        drop(stack);
    }
}
