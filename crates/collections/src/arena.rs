//! Slot storage with a free list, used by the index-linked containers.
//!
//! Nodes live in a [`Vector`] of entries and refer to each other by slot
//! index. Removed slots are threaded onto a free list and reused by the next
//! insertion, so insert and remove are O(1) and indices of live nodes never
//! move.

use crate::vector::Vector;

#[derive(Clone, Debug)]
enum Entry<N> {
    Occupied(N),
    Vacant { next_free: Option<usize> },
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<N> {
    entries: Vector<Entry<N>>,
    free_head: Option<usize>,
    len: usize,
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vector::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `node` and returns the slot it landed in.
    pub(crate) fn insert(&mut self, node: N) -> usize {
        self.len += 1;

        if let Some(index) = self.free_head
            && let Ok(entry) = self.entries.get_mut(index)
        {
            let previous = std::mem::replace(entry, Entry::Occupied(node));
            self.free_head = match previous {
                Entry::Vacant { next_free } => next_free,
                Entry::Occupied(_) => None,
            };
            return index;
        }

        self.free_head = None;
        self.entries.push(Entry::Occupied(node));
        self.entries.len() - 1
    }

    /// Takes the node out of `index`, leaving the slot on the free list.
    pub(crate) fn remove(&mut self, index: usize) -> Option<N> {
        let entry = self.entries.get_mut(index).ok()?;
        if matches!(entry, Entry::Vacant { .. }) {
            return None;
        }

        let vacant = Entry::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(entry, vacant) {
            Entry::Occupied(node) => {
                self.free_head = Some(index);
                self.len -= 1;
                Some(node)
            }
            Entry::Vacant { .. } => None,
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&N> {
        match self.entries.get(index).ok()? {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut N> {
        match self.entries.get_mut(index).ok()? {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        let c = arena.insert('c');
        assert_eq!(arena.len(), 3);

        assert_eq!(arena.remove(b), Some('b'));
        assert_eq!(arena.remove(b), None);
        assert_eq!(arena.get(b), None);

        let d = arena.insert('d');
        assert_eq!(d, b);
        assert_eq!(arena.get(a), Some(&'a'));
        assert_eq!(arena.get(c), Some(&'c'));
        assert_eq!(arena.get(d), Some(&'d'));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn free_list_is_lifo() {
        let mut arena = Arena::new();
        let slots: Vec<_> = (0..4).map(|i| arena.insert(i)).collect();
        arena.remove(slots[1]);
        arena.remove(slots[3]);

        assert_eq!(arena.insert(10), slots[3]);
        assert_eq!(arena.insert(11), slots[1]);
        assert_eq!(arena.insert(12), 4);
    }
}
