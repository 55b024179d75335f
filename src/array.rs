//! Array-backed binary heap
//!
//! A complete binary tree stored in a contiguous `Vec`, kept in heap order
//! with the usual sift-up / sift-down moves. This is the baseline variant
//! of the crate: it satisfies the whole [`PriorityQueue`] contract but
//! hands out no element handles.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `push`              | O(log n)   |
//! | `pop`               | O(log n)   |
//! | `peek`              | O(1)       |
//! | `update_priorities` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use reheap::array::ArrayHeap;
//!
//! let mut heap: ArrayHeap<i32> = ArrayHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), None);
//! ```

use std::fmt;
use std::iter::FromIterator;

use compare::{Compare, Natural};

use crate::traits::PriorityQueue;

/// An array-backed binary heap ordered by a comparator
///
/// The element at index 0 is always the most extreme one, where "most
/// extreme" means greatest under the comparator `C`. With the default
/// [`Natural`] comparator this is a max-heap over `Ord`; pass
/// `natural().rev()` to [`with_comparator`](ArrayHeap::with_comparator)
/// for a min-heap.
///
/// Unlike [`PairingForest`](crate::pairing::PairingForest), this variant
/// does not support addressing elements after insertion. If the effective
/// priorities of stored elements change through shared state, call
/// [`update_priorities`](ArrayHeap::update_priorities) to restore order.
#[derive(Clone)]
pub struct ArrayHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> ArrayHeap<T, C> {
    /// Creates an empty heap using the default comparator
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Builds a heap from a vector of elements in one O(n) pass
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_vec_and_comparator(vec, C::default())
    }
}

impl<T, C: Compare<T>> ArrayHeap<T, C> {
    /// Creates an empty heap ordered by the given comparator
    pub fn with_comparator(cmp: C) -> Self {
        ArrayHeap { data: Vec::new(), cmp }
    }

    /// Builds a heap from a vector and a comparator in one O(n) pass
    ///
    /// Equivalent to pushing every element and then calling
    /// [`update_priorities`](ArrayHeap::update_priorities) once.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> Self {
        let mut heap = ArrayHeap { data: vec, cmp };
        heap.update_priorities();
        heap
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts an element in O(log n)
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns a reference to the most extreme element, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the most extreme element, or `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let value = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        value
    }

    /// Restores heap order assuming every element's effective priority may
    /// have changed externally
    ///
    /// Bottom-up heapify: sift down every internal position starting from
    /// the last internal node, O(n) total. No assumption about the current
    /// order is relied on.
    pub fn update_priorities(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move the element at `index` up until its parent is at least as
    /// extreme
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.compares_gt(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` down, always descending toward the more
    /// extreme child, until neither child is strictly more extreme
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut winner = left;
            if right < len && self.cmp.compares_gt(&self.data[right], &self.data[left]) {
                winner = right;
            }

            if self.cmp.compares_gt(&self.data[winner], &self.data[index]) {
                self.data.swap(index, winner);
                index = winner;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for ArrayHeap<T, C> {
    fn is_empty(&self) -> bool {
        ArrayHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        ArrayHeap::len(self)
    }

    fn push(&mut self, value: T) {
        ArrayHeap::push(self, value)
    }

    fn peek(&self) -> Option<&T> {
        ArrayHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        ArrayHeap::pop(self)
    }

    fn update_priorities(&mut self) {
        ArrayHeap::update_priorities(self)
    }
}

impl<T, C: Compare<T> + Default> Default for ArrayHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for ArrayHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for ArrayHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeap").field("data", &self.data).finish()
    }
}
