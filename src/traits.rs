//! Common traits for the priority-queue variants
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: Base trait shared by every variant
//! - [`AddressableHeap`]: Extended trait adding handle-based `update_elt`
//!
//! Both variants order elements through a caller-supplied comparator (see
//! [`compare::Compare`]) fixed at construction time; "most extreme" means
//! greatest under that comparator. Changing the effective ordering of
//! elements mid-lifetime is only meaningful through
//! [`update_priorities`](PriorityQueue::update_priorities) or, for
//! addressable heaps, [`update_elt`](AddressableHeap::update_elt).

use std::fmt;

/// Error type for handle-based operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The replacement value is not strictly more extreme than the current one
    NotMoreExtreme,
    /// The handle is no longer valid (element was removed)
    StaleHandle,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::NotMoreExtreme => {
                write!(f, "new value is not strictly more extreme than current value")
            }
            QueueError::StaleHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// A handle to an element in an addressable heap
///
/// This is an opaque type that identifies a specific element. The exact
/// implementation varies by heap type; handles are always local to the
/// instance that produced them.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for the priority-queue variants
///
/// A conforming implementation always exposes the most extreme element,
/// as judged by its comparator, through `peek`, and removes elements in
/// order from most to least extreme through `pop`.
///
/// # Example
///
/// ```rust
/// use reheap::PriorityQueue;
/// use reheap::array::ArrayHeap;
/// use reheap::pairing::PairingForest;
///
/// fn drain<Q: PriorityQueue<i32>>(mut queue: Q) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Some(v) = queue.pop() {
///         out.push(v);
///     }
///     out
/// }
///
/// let array: ArrayHeap<i32> = [3, 4].into_iter().collect();
/// let forest: PairingForest<i32> = [3, 4].into_iter().collect();
///
/// assert_eq!(drain(array), vec![4, 3]);
/// assert_eq!(drain(forest), vec![4, 3]);
/// ```
pub trait PriorityQueue<T> {
    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for [`ArrayHeap`](crate::array::ArrayHeap), O(1) for
    /// [`PairingForest`](crate::pairing::PairingForest).
    fn push(&mut self, value: T);

    /// Returns a reference to the most extreme element without removing it,
    /// or `None` if the queue is empty
    ///
    /// Callers must not mutate the element (through interior mutability)
    /// in a way that changes its ordering while it stays in the queue.
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the most extreme element, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n), amortized for [`PairingForest`](crate::pairing::PairingForest).
    fn pop(&mut self) -> Option<T>;

    /// Restores ordering after the effective priority of any element may
    /// have changed externally
    ///
    /// No assumption about the current order is relied on; the whole
    /// structure is rebuilt. For addressable heaps every outstanding
    /// handle remains valid afterwards.
    ///
    /// # Time Complexity
    /// O(n) for all implementations
    fn update_priorities(&mut self);
}

/// Extended trait for heaps whose elements can be addressed by handle
///
/// `push_with_handle` returns a handle that stays valid (same identity,
/// never relocated) until the corresponding element is popped, no matter
/// how the structure reshapes internally. The handle can then be used with
/// `update_elt` to raise that element's priority in place.
///
/// # Example
///
/// ```rust
/// use reheap::{AddressableHeap, QueueError};
/// use reheap::pairing::PairingForest;
///
/// fn raise_to_front<Q: AddressableHeap<i32>>(queue: &mut Q, value: i32) -> Result<(), QueueError> {
///     let handle = queue.push_with_handle(value);
///     queue.update_elt(handle, value + 100)
/// }
///
/// let mut heap: PairingForest<i32> = PairingForest::new();
/// heap.push(25);
/// raise_to_front(&mut heap, 10).unwrap();
/// assert_eq!(heap.peek(), Some(&110));
/// ```
pub trait AddressableHeap<T>: PriorityQueue<T> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts an element, returning a handle to it
    fn push_with_handle(&mut self, value: T) -> Self::Handle;

    /// Replaces the element behind `handle` with `new_value`
    ///
    /// `new_value` must be strictly more extreme than the element's current
    /// value; the structure does not re-order downward.
    ///
    /// # Errors
    /// [`QueueError::NotMoreExtreme`] if the precondition is violated,
    /// [`QueueError::StaleHandle`] if the element was already popped.
    fn update_elt(&mut self, handle: Self::Handle, new_value: T) -> Result<(), QueueError>;
}
