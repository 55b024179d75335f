//! Priority-queue variants behind one contract
//!
//! This crate provides two interchangeable priority-queue implementations
//! conforming to a shared [`PriorityQueue`] trait:
//!
//! - [`ArrayHeap`](array::ArrayHeap): a binary heap over a contiguous
//!   `Vec`. O(log n) push and pop, no element handles. The simple
//!   baseline.
//! - [`PairingForest`](pairing::PairingForest): an addressable pairing
//!   heap. O(1) push, O(log n) amortized pop, and stable per-element
//!   handles supporting o(log n) amortized decrease-key
//!   ([`update_elt`](AddressableHeap::update_elt)).
//!
//! Both are ordered by a caller-supplied [`compare::Compare`] comparator
//! fixed at construction (defaulting to a max-queue over `Ord`), and both
//! support [`update_priorities`](PriorityQueue::update_priorities): an
//! O(n) rebuild for when element priorities have changed through shared
//! state behind the queue's back. For the pairing forest the rebuild
//! keeps every node alive, so outstanding handles stay valid.
//!
//! Neither structure is thread-safe; each instance assumes exclusive
//! single-owner access.
//!
//! # Example
//!
//! ```rust
//! use reheap::pairing::PairingForest;
//!
//! let mut queue: PairingForest<i32> = PairingForest::new();
//! queue.push(20);
//! queue.push(43);
//! let handle = queue.push_with_handle(6);
//!
//! assert_eq!(queue.peek(), Some(&43));
//! queue.update_elt(handle, 100).unwrap();
//! assert_eq!(queue.pop(), Some(100));
//! ```

pub mod array;
pub mod pairing;
pub mod traits;

pub use traits::{AddressableHeap, Handle, PriorityQueue, QueueError};
