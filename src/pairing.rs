//! Addressable pairing forest
//!
//! A pairing heap kept as a single multi-way tree of child/sibling/parent
//! linked nodes, with:
//! - O(1) insert via melding
//! - O(log n) amortized pop through multipass sibling coalescing
//! - o(log n) amortized handle-based `update_elt` (decrease-key)
//! - O(n) whole-forest `update_priorities` rebuild that keeps every node,
//!   and therefore every outstanding handle, alive
//!
//! Nodes live in a generational arena ([`slotmap`]), so a [`NodeHandle`]
//! is a stable `Copy` key: no internal reshaping ever relocates the node
//! it names, and a handle whose element has been popped is detected as
//! stale rather than dangling. Heap order is maintained only along
//! parent/child edges; the root always holds the most extreme element.
//!
//! # Example
//!
//! ```rust
//! use reheap::pairing::PairingForest;
//!
//! let mut heap: PairingForest<i32> = PairingForest::new();
//! heap.push(20);
//! heap.push(43);
//! heap.push(6);
//! let handle = heap.push_with_handle(100);
//!
//! assert_eq!(heap.peek(), Some(&100));
//! heap.update_elt(handle, 200).unwrap();
//! assert_eq!(heap.peek(), Some(&200));
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;

use compare::{Compare, Natural};
use slotmap::SlotMap;

use crate::traits::{AddressableHeap, Handle, PriorityQueue, QueueError};

slotmap::new_key_type! {
    /// Stable handle to a node in a [`PairingForest`]
    ///
    /// Valid from the `push_with_handle` that produced it until the
    /// corresponding element is popped. Handles are local to the forest
    /// that produced them; using one against another instance yields
    /// `StaleHandle`/`None`, never a different element's node.
    pub struct NodeHandle;
}

impl Handle for NodeHandle {}

/// One element plus its structural links
///
/// Each node is owned by the arena; `child` points at the eldest child,
/// `sibling` at the next node in the parent's child list, and `parent`
/// back at the structural parent. The parent link is only consulted when
/// `update_elt` has to splice a node out of its child list.
#[derive(Debug, Clone)]
struct Node<T> {
    elt: T,
    child: Option<NodeHandle>,
    sibling: Option<NodeHandle>,
    parent: Option<NodeHandle>,
}

impl<T> Node<T> {
    fn new(elt: T) -> Self {
        Node {
            elt,
            child: None,
            sibling: None,
            parent: None,
        }
    }
}

/// An addressable pairing heap ordered by a comparator
///
/// "Most extreme" means greatest under the comparator `C`; with the
/// default [`Natural`] comparator this is a max-heap over `Ord`, and
/// `natural().rev()` gives a min-heap.
///
/// Compared to [`ArrayHeap`](crate::array::ArrayHeap) this variant trades
/// a pointer-linked representation for O(1) insert and for handles:
/// [`push_with_handle`](PairingForest::push_with_handle) returns a
/// [`NodeHandle`] that stays valid across every later mutation of the
/// forest until its element is popped, and
/// [`update_elt`](PairingForest::update_elt) raises the priority of the
/// element behind a handle without disturbing the rest of the structure.
pub struct PairingForest<T, C: Compare<T> = Natural<T>> {
    nodes: SlotMap<NodeHandle, Node<T>>,
    root: Option<NodeHandle>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> PairingForest<T, C> {
    /// Creates an empty forest using the default comparator
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Builds a forest from a vector of elements
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_vec_and_comparator(vec, C::default())
    }
}

impl<T, C: Compare<T>> PairingForest<T, C> {
    /// Creates an empty forest ordered by the given comparator
    pub fn with_comparator(cmp: C) -> Self {
        PairingForest {
            nodes: SlotMap::with_key(),
            root: None,
            cmp,
        }
    }

    /// Builds a forest from a vector and a comparator
    ///
    /// Heap order holds after every insertion, so this is just n pushes.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> Self {
        let mut forest = Self::with_comparator(cmp);
        for value in vec {
            forest.push(value);
        }
        forest
    }

    /// Returns true if the forest is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of live elements
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts an element in O(1)
    pub fn push(&mut self, value: T) {
        self.push_with_handle(value);
    }

    /// Inserts an element in O(1), returning a stable handle to it
    ///
    /// The handle stays valid until the element is popped; no insertion,
    /// pop, `update_elt` or `update_priorities` elsewhere in the forest
    /// invalidates or relocates it.
    pub fn push_with_handle(&mut self, value: T) -> NodeHandle {
        let handle = self.nodes.insert(Node::new(value));
        self.root = Some(match self.root {
            Some(root) => self.meld(handle, root),
            None => handle,
        });
        handle
    }

    /// Returns a reference to the most extreme element, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].elt)
    }

    /// Returns a reference to the element behind `handle`, or `None` if it
    /// was already popped
    pub fn elt(&self, handle: NodeHandle) -> Option<&T> {
        self.nodes.get(handle).map(|node| &node.elt)
    }

    /// Removes and returns the most extreme element, or `None` if empty
    ///
    /// The root's child list is detached into independent subtrees which
    /// are then coalesced by multipass pairing: meld the two front trees,
    /// append the result at the back, repeat until one tree remains.
    /// Amortized O(log n); a single pop can cost O(n).
    pub fn pop(&mut self) -> Option<T> {
        let root = self.root.take()?;
        let first_child = self.nodes[root].child;
        let node = self.nodes.remove(root)?;

        let mut trees = VecDeque::new();
        let mut current = first_child;
        while let Some(key) = current {
            let subtree = &mut self.nodes[key];
            current = subtree.sibling.take();
            subtree.parent = None;
            trees.push_back(key);
        }

        while trees.len() > 1 {
            let (first, second) = match (trees.pop_front(), trees.pop_front()) {
                (Some(first), Some(second)) => (first, second),
                _ => break,
            };
            let melded = self.meld(first, second);
            trees.push_back(melded);
        }

        self.root = trees.pop_front();
        Some(node.elt)
    }

    /// Replaces the element behind `handle` with a strictly more extreme
    /// `new_value`
    ///
    /// If the node is not the root it is spliced out of its parent's child
    /// list (walking the singly-linked sibling chain) and melded back
    /// against the root; its own subtree rides along untouched, and the
    /// handle stays valid.
    ///
    /// # Errors
    /// [`QueueError::StaleHandle`] if the element was already popped,
    /// [`QueueError::NotMoreExtreme`] if `new_value` does not compare
    /// strictly above the current value.
    pub fn update_elt(&mut self, handle: NodeHandle, new_value: T) -> Result<(), QueueError> {
        let node = self.nodes.get(handle).ok_or(QueueError::StaleHandle)?;
        if !self.cmp.compares_gt(&new_value, &node.elt) {
            return Err(QueueError::NotMoreExtreme);
        }

        self.nodes[handle].elt = new_value;
        if self.root == Some(handle) {
            return Ok(());
        }

        self.detach(handle);
        self.root = Some(match self.root {
            Some(root) => self.meld(handle, root),
            None => handle,
        });
        Ok(())
    }

    /// Restores heap order assuming every element's effective priority may
    /// have changed externally
    ///
    /// Walks the whole forest breadth-first, detaches each visited node
    /// into an isolated tree and re-melds it into an accumulating root:
    /// n single-node melds, O(n) total. No node is destroyed or
    /// reallocated, so every outstanding handle remains valid afterwards.
    pub fn update_priorities(&mut self) {
        let Some(old_root) = self.root.take() else {
            return;
        };

        let mut pending = VecDeque::new();
        pending.push_back(old_root);
        let mut root: Option<NodeHandle> = None;

        while let Some(key) = pending.pop_front() {
            let node = &mut self.nodes[key];
            if let Some(child) = node.child.take() {
                pending.push_back(child);
            }
            if let Some(sibling) = node.sibling.take() {
                pending.push_back(sibling);
            }
            node.parent = None;

            root = Some(match root {
                Some(root) => self.meld(key, root),
                None => key,
            });
        }

        self.root = root;
    }

    /// Melds two disjoint trees rooted at `a` and `b`, returning the root
    /// of the combined tree
    ///
    /// The less extreme root becomes the new eldest child of the winner,
    /// its sibling link taking over the winner's previous child list.
    /// Ties go to `b`, which keeps insertion and coalescing deterministic.
    /// O(1): neither tree is traversed.
    fn meld(&mut self, a: NodeHandle, b: NodeHandle) -> NodeHandle {
        debug_assert!(a != b, "cannot meld a tree with itself");
        let a_wins = self
            .cmp
            .compares_gt(&self.nodes[a].elt, &self.nodes[b].elt);
        let (winner, loser) = if a_wins { (a, b) } else { (b, a) };

        let previous_child = std::mem::replace(&mut self.nodes[winner].child, Some(loser));
        let node = &mut self.nodes[loser];
        node.parent = Some(winner);
        node.sibling = previous_child;
        winner
    }

    /// Splices a non-root node out of its parent's child list, leaving it
    /// the isolated root of its own subtree
    ///
    /// Sibling lists are singly linked, so locating the node costs one
    /// walk over its older siblings.
    fn detach(&mut self, handle: NodeHandle) {
        let sibling = self.nodes[handle].sibling.take();
        let Some(parent) = self.nodes[handle].parent.take() else {
            return;
        };

        if self.nodes[parent].child == Some(handle) {
            self.nodes[parent].child = sibling;
            return;
        }

        let mut current = self.nodes[parent].child;
        while let Some(key) = current {
            if self.nodes[key].sibling == Some(handle) {
                self.nodes[key].sibling = sibling;
                return;
            }
            current = self.nodes[key].sibling;
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for PairingForest<T, C> {
    fn is_empty(&self) -> bool {
        PairingForest::is_empty(self)
    }

    fn len(&self) -> usize {
        PairingForest::len(self)
    }

    fn push(&mut self, value: T) {
        PairingForest::push(self, value)
    }

    fn peek(&self) -> Option<&T> {
        PairingForest::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        PairingForest::pop(self)
    }

    fn update_priorities(&mut self) {
        PairingForest::update_priorities(self)
    }
}

impl<T, C: Compare<T>> AddressableHeap<T> for PairingForest<T, C> {
    type Handle = NodeHandle;

    fn push_with_handle(&mut self, value: T) -> NodeHandle {
        PairingForest::push_with_handle(self, value)
    }

    fn update_elt(&mut self, handle: NodeHandle, new_value: T) -> Result<(), QueueError> {
        PairingForest::update_elt(self, handle, new_value)
    }
}

impl<T, C: Compare<T> + Default> Default for PairingForest<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PairingForest<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut forest = Self::new();
        for value in iter {
            forest.push(value);
        }
        forest
    }
}

/// Deep copy by traversal
///
/// The source forest is walked breadth-first (child and sibling of each
/// visited node enqueued in turn) and every element is re-pushed into a
/// fresh forest. The copy is fully independent: it shares no nodes, and
/// handles obtained from the source mean nothing against it.
impl<T: Clone, C: Compare<T> + Clone> Clone for PairingForest<T, C> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_comparator(self.cmp.clone());
        let mut pending = VecDeque::new();
        if let Some(root) = self.root {
            pending.push_back(root);
        }
        while let Some(key) = pending.pop_front() {
            let node = &self.nodes[key];
            if let Some(child) = node.child {
                pending.push_back(child);
            }
            if let Some(sibling) = node.sibling {
                pending.push_back(sibling);
            }
            copy.push(node.elt.clone());
        }
        copy
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for PairingForest<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingForest")
            .field("len", &self.len())
            .field("root", &self.root.map(|root| &self.nodes[root].elt))
            .finish()
    }
}
