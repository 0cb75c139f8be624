//! The heap itself and its public operations.

use crate::error::HeapError;
use crate::node::{Arena, Handle, Node, NodeId, NodeKey};

/// A mergeable, addressable min-priority queue with the amortized
/// complexities of a Fibonacci heap: O(1) insert, minimum, merge, and
/// decrease-key; O(log n) amortized extract-min and delete.
///
/// `insert` returns a [`Handle`] that stays valid — across consolidation,
/// across a `merge` of another heap into this one — until the element it
/// names is extracted or deleted.
pub struct FibonacciHeap<K, V> {
    pub(crate) arena: Arena<K, V>,
    pub(crate) min: Option<NodeId>,
    pub(crate) size: usize,
}

impl<K, V> FibonacciHeap<K, V>
where
    K: Ord + Copy,
{
    /// Creates an empty heap.
    pub fn new() -> Self {
        FibonacciHeap {
            arena: Arena::new(),
            min: None,
            size: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// `true` iff the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts `key`/`payload` as a new root and returns its handle. O(1):
    /// no consolidation, no ancestor work.
    pub fn insert(&mut self, key: K, payload: V) -> Result<Handle, HeapError> {
        let id = self
            .arena
            .insert_node(NodeKey::Value(key), payload)
            .ok_or(HeapError::AllocationFailure)?;

        match self.min {
            None => self.min = Some(id),
            Some(m) => {
                self.arena.splice_after(m, id);
                if self.arena.get(id).key < self.arena.get(m).key {
                    self.min = Some(id);
                }
            }
        }
        self.size += 1;
        Ok(Handle(id))
    }

    /// The handle of the minimum element, or `None` if the heap is empty.
    pub fn minimum(&self) -> Option<Handle> {
        self.min.map(Handle)
    }

    /// Removes and returns the minimum element's key and payload, or `None`
    /// if the heap is empty. Amortized O(log n): promotes the min's
    /// children to the root list in O(d), then consolidates.
    pub fn extract_min(&mut self) -> Option<(K, V)> {
        let node = self.extract_min_node()?;
        node.key.value().map(|k| (k, node.payload))
    }

    /// Same as `extract_min` but returns the raw node, including a possible
    /// `NegInfinity` key. Used by `delete` to verify the extracted node is
    /// the one it just forced to the minimum.
    pub(crate) fn extract_min_node(&mut self) -> Option<Node<K, V>> {
        let z = self.min?;

        if let Some(first_child) = self.arena.get(z).child {
            for c in self.arena.ring_ids(first_child) {
                self.arena.get_mut(c).parent = None;
                self.arena.get_mut(c).marked = false;
            }
            self.arena.concatenate_rings(z, first_child);
            self.arena.get_mut(z).child = None;
            self.arena.get_mut(z).degree = 0;
        }

        let z_right = self.arena.get(z).right;
        let was_sole_root = z_right == z;
        self.arena.unlink_from_ring(z);
        self.size -= 1;

        if was_sole_root {
            self.min = None;
        } else {
            self.min = Some(z_right);
            // An allocation failure here leaves the root list un-consolidated
            // but otherwise intact; extract-min still completes and returns
            // the extracted node, and the root list is simply left
            // unconsolidated until the next extract-min.
            let _ = self.consolidate();
        }

        Some(self.arena.remove(z))
    }

    /// Lowers `handle`'s key to `new_key`. Fails with `InvalidKey` if
    /// `new_key` is greater than the current key (`new_key == current` is a
    /// legal no-op); fails with `NodeNotFound` on a stale or foreign handle.
    pub fn decrease_key(&mut self, handle: Handle, new_key: K) -> Result<(), HeapError> {
        let x = handle.0;
        let current = self
            .arena
            .get_checked(x)
            .and_then(|n| n.key.value())
            .ok_or(HeapError::NodeNotFound)?;
        if new_key > current {
            return Err(HeapError::InvalidKey);
        }
        self.force_key(x, NodeKey::Value(new_key));
        Ok(())
    }

    /// Shared machinery for `decrease_key` and `delete`'s internal
    /// force-to-minimum path: lower `x`'s key, cut it free if that broke the
    /// min-heap property against its parent, and re-evaluate `min`.
    fn force_key(&mut self, x: NodeId, new_key: NodeKey<K>) {
        self.arena.get_mut(x).key = new_key;
        if let Some(y) = self.arena.get(x).parent {
            if self.arena.get(x).key < self.arena.get(y).key {
                self.cut(x, y);
                self.cascading_cut(y);
            }
        }
        let m = self.min.expect("force_key called on an empty heap");
        if self.arena.get(x).key < self.arena.get(m).key {
            self.min = Some(x);
        }
    }

    /// Removes `handle`'s element entirely, wherever it sits in the forest.
    /// Implemented as decrease-key to an internal minus-infinity sentinel
    /// (forcing the node to the root and then to the minimum) followed by
    /// extract-min; never exposes the sentinel through the public key type.
    pub fn delete(&mut self, handle: Handle) -> Result<(), HeapError> {
        let x = handle.0;
        if !self.arena.contains(x) {
            return Err(HeapError::NodeNotFound);
        }
        self.force_key(x, NodeKey::NegInfinity);
        match self.extract_min_node() {
            Some(node) if node.id == x => Ok(()),
            _ => Err(HeapError::Corruption),
        }
    }

    /// Absorbs `source` into `self`: `self` gains every element `source`
    /// held, and `source` becomes empty. O(1) — no consolidation runs here;
    /// the next extract-min on `self` pays for it. All handles issued by
    /// either heap remain valid against `self` afterward.
    pub fn merge(&mut self, source: &mut Self) {
        if source.is_empty() {
            return;
        }
        if self.is_empty() {
            std::mem::swap(self, source);
            return;
        }

        let a_min = self.min.expect("non-empty heap has a minimum");
        let b_min = source.min.expect("non-empty heap has a minimum");

        self.arena.absorb(&mut source.arena);
        self.arena.concatenate_rings(a_min, b_min);
        if self.arena.get(b_min).key < self.arena.get(a_min).key {
            self.min = Some(b_min);
        }
        self.size += source.size;

        source.min = None;
        source.size = 0;
    }

    /// The key of a live handle, or `None` if the handle is stale.
    pub fn key_of(&self, handle: Handle) -> Option<K> {
        self.arena.get_checked(handle.0).and_then(|n| n.key.value())
    }

    /// The payload of a live handle, or `None` if the handle is stale.
    pub fn payload_of(&self, handle: Handle) -> Option<&V> {
        self.arena.get_checked(handle.0).map(|n| &n.payload)
    }

    // ---- non-public traversal entry point, for diagnostics only -----

    pub(crate) fn root_ids(&self) -> Vec<NodeId> {
        match self.min {
            Some(m) => self.arena.ring_ids(m),
            None => Vec::new(),
        }
    }

    pub(crate) fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        match self.arena.get(id).child {
            Some(c) => self.arena.ring_ids(c),
            None => Vec::new(),
        }
    }

    pub(crate) fn degree_of(&self, id: NodeId) -> usize {
        self.arena.get(id).degree
    }

    pub(crate) fn marked_of(&self, id: NodeId) -> bool {
        self.arena.get(id).marked
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).parent
    }

    pub(crate) fn child_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).child
    }

    pub(crate) fn key_value_of(&self, id: NodeId) -> K {
        self.arena
            .get(id)
            .key
            .value()
            .expect("live forest node never carries the delete sentinel")
    }
}

impl<K, V> Default for FibonacciHeap<K, V>
where
    K: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
