//! Growable array with explicit capacity management.

use crate::error::{CollectionError, Result};

/// Dynamic array that doubles its backing storage when full and halves it
/// once occupancy falls to a quarter of capacity.
///
/// # Invariants
///
/// - `slots[..len]` are all `Some`, `slots[len..]` are all `None`
/// - capacity is either 0 (never allocated) or at least [`Vector::MIN_CAPACITY`]
#[derive(Clone, Debug)]
pub struct Vector<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> Vector<T> {
    /// Smallest capacity the backing storage is ever shrunk to.
    pub const MIN_CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self {
            slots: Box::new([]),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut vector = Self::new();
        if capacity > 0 {
            vector.resize(capacity.max(Self::MIN_CAPACITY));
        }
        vector
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `value`, doubling the backing storage first if it is full.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            let grown = (self.capacity() * 2).max(Self::MIN_CAPACITY);
            self.resize(grown);
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the last element.
    ///
    /// Shrinks the backing storage to half when the remaining elements
    /// occupy a quarter of it or less.
    pub fn pop(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer);
        }
        let value = self.slots[self.len - 1]
            .take()
            .ok_or(CollectionError::EmptyContainer)?;
        self.len -= 1;

        let capacity = self.capacity();
        let halved = (capacity / 2).max(Self::MIN_CAPACITY);
        if self.len <= capacity / 4 && halved < capacity {
            self.resize(halved);
        }

        Ok(value)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.slots
            .get(index)
            .filter(|_| index < self.len)
            .and_then(Option::as_ref)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        self.slots[index]
            .as_mut()
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Drops every element and releases the backing storage.
    pub fn clear(&mut self) {
        self.slots = Box::new([]);
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots[..self.len].iter_mut().filter_map(Option::as_mut)
    }

    /// Moves the live elements into fresh storage of `capacity` slots.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut slots: Box<[Option<T>]> = (0..capacity).map(|_| None).collect();
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        for value in iter {
            vector.push(value);
        }
        vector
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Vector<T> {}
