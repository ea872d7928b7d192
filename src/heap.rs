use crate::error::HeapError;
use core::fmt::{Debug, Formatter};

/// Location-table entry for a label that is not in the heap.
const NOT_PRESENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapItem<T> {
    pub value: T,
    pub label: usize,
}

/// A max-heap of `(value, label)` pairs that can remove any entry by its label.
///
/// Labels are dense integers in `0..=max_label`, fixed at construction. Each
/// label's heap position is kept in a flat location table, so `remove` finds
/// its target in O(1) and repairs the heap in O(log n).
///
/// The heap is 1-indexed: slot 0 of `items` is a placeholder and live entries
/// occupy `1..=len()`. Both buffers are allocated once in [`IndexedMaxHeap::new`]
/// and never grow.
pub struct IndexedMaxHeap<T> {
    items: Vec<HeapItem<T>>,
    location: Vec<usize>,
}

fn parent(child: usize) -> usize {
    child / 2
}

fn left(parent: usize) -> usize {
    parent * 2
}

impl<T> IndexedMaxHeap<T>
where
    T: Ord + Copy + Default,
{
    pub fn new(max_label: usize) -> Self {
        let mut items = Vec::with_capacity(max_label + 2);
        items.push(HeapItem::default());
        Self {
            items,
            location: vec![NOT_PRESENT; max_label + 1],
        }
    }

    pub fn max_label(&self) -> usize {
        self.location.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, label: usize) -> bool {
        matches!(self.location.get(label), Some(&pos) if pos != NOT_PRESENT)
    }

    /// Returns the value stored under `label`, if present.
    pub fn value_of(&self, label: usize) -> Option<T> {
        match self.location.get(label) {
            Some(&pos) if pos != NOT_PRESENT => Some(self.items[pos].value),
            _ => None,
        }
    }

    /// Adds `value` under `label`.
    pub fn insert(&mut self, value: T, label: usize) -> Result<(), HeapError> {
        self.check_label(label)?;
        if self.location[label] != NOT_PRESENT {
            return Err(HeapError::DuplicateLabel(label));
        }

        let hole = self.items.len();
        self.items.push(HeapItem { value, label });
        self.sift_up(hole);
        Ok(())
    }

    /// Removes the entry for `label` and returns its value.
    ///
    /// The last entry is moved into the vacated slot and sifted in exactly one
    /// direction: up if it now beats its parent, down otherwise.
    pub fn remove(&mut self, label: usize) -> Result<T, HeapError> {
        self.check_label(label)?;
        let position = self.location[label];
        if position == NOT_PRESENT {
            return Err(HeapError::LabelNotFound(label));
        }
        self.location[label] = NOT_PRESENT;

        let removed = self.items.swap_remove(position);
        if position < self.items.len() {
            let moved = self.items[position];
            self.location[moved.label] = position;
            if position > 1 && moved.value > self.items[parent(position)].value {
                self.sift_up(position);
            } else {
                self.sift_down(position);
            }
        }
        Ok(removed.value)
    }

    /// Returns the greatest value, or `T::default()` (ground level) when empty.
    pub fn peek_max(&self) -> T {
        self.max().unwrap_or_default()
    }

    pub fn max(&self) -> Option<T> {
        self.items.get(1).map(|item| item.value)
    }

    pub fn clear(&mut self) {
        for item in self.items.drain(1..) {
            self.location[item.label] = NOT_PRESENT;
        }
    }

    /// Iterates over `(value, label)` pairs in heap order.
    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.items[1..].iter().map(|item| (item.value, item.label))
    }

    fn check_label(&self, label: usize) -> Result<(), HeapError> {
        if label >= self.location.len() {
            return Err(HeapError::LabelOutOfRange {
                label,
                max_label: self.max_label(),
            });
        }
        Ok(())
    }

    fn place(&mut self, pos: usize, item: HeapItem<T>) {
        self.items[pos] = item;
        self.location[item.label] = pos;
    }

    fn sift_up(&mut self, mut hole: usize) {
        let item = self.items[hole];
        while hole > 1 && self.items[parent(hole)].value < item.value {
            let up = parent(hole);
            self.place(hole, self.items[up]);
            hole = up;
        }
        self.place(hole, item);
    }

    fn sift_down(&mut self, mut hole: usize) {
        let item = self.items[hole];
        let len = self.len();
        loop {
            let mut child = left(hole);
            if child > len {
                break;
            }
            // right child only wins if strictly greater
            if child < len && self.items[child + 1].value > self.items[child].value {
                child += 1;
            }
            if self.items[child].value <= item.value {
                break;
            }
            self.place(hole, self.items[child]);
            hole = child;
        }
        self.place(hole, item);
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        for pos in 2..self.items.len() {
            assert!(
                self.items[pos].value <= self.items[parent(pos)].value,
                "heap order violated at position {}",
                pos
            );
        }
        for (pos, item) in self.items.iter().enumerate().skip(1) {
            assert_eq!(self.location[item.label], pos);
        }
        let present = self.location.iter().filter(|&&pos| pos != NOT_PRESENT).count();
        assert_eq!(present, self.len());
    }
}

impl<T: Debug> Debug for IndexedMaxHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for item in self.items[1..].iter() {
            write!(f, "{:?}@{} ", item.value, item.label)?;
        }
        Ok(())
    }
}
