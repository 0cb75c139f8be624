//! The arena backing one heap's forest, plus the id-addressed node type and
//! the circular-doubly-linked-list plumbing every higher layer is built on.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A globally unique, never-reused node identity. Handed out by one
/// process-wide counter so two heaps' id spaces never collide, even before
/// a merge has related them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u64);

impl NodeId {
    fn fresh() -> NodeId {
        NodeId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An opaque, stable identifier for a live element returned by
/// [`crate::FibonacciHeap::insert`]. Valid until the element is extracted
/// or deleted; a handle for a removed element is simply absent from every
/// heap's bookkeeping, so using one is diagnosed rather than undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) NodeId);

/// A node's key, widened with the internal minus-infinity sentinel that
/// `delete` uses to force a node to the root and then to the minimum.
/// `NegInfinity` is never reachable through the public API: decrease_key
/// takes a plain `K`, and the sentinel path lives entirely inside `delete`.
///
/// Declaration order matters here: derived `Ord` compares by variant first,
/// so `NegInfinity` sorts below every `Value(_)` without a hand-written impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum NodeKey<K> {
    NegInfinity,
    Value(K),
}

impl<K> NodeKey<K> {
    pub(crate) fn value(self) -> Option<K> {
        match self {
            NodeKey::Value(k) => Some(k),
            NodeKey::NegInfinity => None,
        }
    }
}

pub(crate) struct Node<K, V> {
    pub id: NodeId,
    pub key: NodeKey<K>,
    pub payload: V,
    pub parent: Option<NodeId>,
    pub child: Option<NodeId>,
    pub left: NodeId,
    pub right: NodeId,
    pub degree: usize,
    pub marked: bool,
}

/// Dense node storage for one heap, addressed by [`NodeId`] rather than by
/// `Vec` position. `positions` absorbs the index shifts that removal
/// (swap-to-end) and merge (append) cause; node identity never moves.
pub(crate) struct Arena<K, V> {
    nodes: Vec<Node<K, V>>,
    positions: HashMap<NodeId, usize>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Arena {
            nodes: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.positions.contains_key(&id)
    }

    fn pos(&self, id: NodeId) -> usize {
        *self
            .positions
            .get(&id)
            .expect("internal node id missing from arena position map")
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[self.pos(id)]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        let pos = self.pos(id);
        &mut self.nodes[pos]
    }

    pub(crate) fn get_checked(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.positions.get(&id).map(|&pos| &self.nodes[pos])
    }

    /// Allocates a singleton node (its own one-element ring) and returns its
    /// id. Fails without touching existing storage if the backing `Vec`
    /// cannot grow by one slot.
    pub(crate) fn insert_node(&mut self, key: NodeKey<K>, payload: V) -> Option<NodeId> {
        self.nodes.try_reserve(1).ok()?;
        let id = NodeId::fresh();
        let pos = self.nodes.len();
        self.nodes.push(Node {
            id,
            key,
            payload,
            parent: None,
            child: None,
            left: id,
            right: id,
            degree: 0,
            marked: false,
        });
        self.positions.insert(id, pos);
        Some(id)
    }

    /// Removes and returns the node for `id`. Backed by swap-to-end so the
    /// `Vec` never accumulates holes; the displaced node's position entry is
    /// fixed up in the same step.
    pub(crate) fn remove(&mut self, id: NodeId) -> Node<K, V> {
        let pos = self.positions.remove(&id).expect("remove of unknown id");
        let node = self.nodes.swap_remove(pos);
        if pos < self.nodes.len() {
            let moved_id = self.nodes[pos].id;
            self.positions.insert(moved_id, pos);
        }
        node
    }

    /// Moves every node owned by `other` into `self`, leaving `other` empty.
    /// Ids never collide and are never rewritten: this is a pure relocation
    /// of storage, not a renumbering.
    pub(crate) fn absorb(&mut self, other: &mut Arena<K, V>) {
        let offset = self.nodes.len();
        for (id, pos) in other.positions.drain() {
            self.positions.insert(id, pos + offset);
        }
        self.nodes.append(&mut other.nodes);
    }

    // ---- circular doubly-linked list plumbing -----------------------

    /// Makes `id` a one-element ring (its own left and right sibling).
    pub(crate) fn isolate(&mut self, id: NodeId) {
        let n = self.get_mut(id);
        n.left = id;
        n.right = id;
    }

    /// Removes `id` from whatever ring it currently sits in by splicing its
    /// neighbors together. Does not touch `id`'s own left/right fields —
    /// the caller immediately isolates or re-splices it elsewhere.
    pub(crate) fn unlink_from_ring(&mut self, id: NodeId) {
        let (left, right) = {
            let n = self.get(id);
            (n.left, n.right)
        };
        self.get_mut(left).right = right;
        self.get_mut(right).left = left;
    }

    /// Inserts `id` into `anchor`'s ring, immediately to `anchor`'s right.
    /// Overwrites `id`'s left/right outright, so `id` need not be isolated
    /// beforehand.
    pub(crate) fn splice_after(&mut self, anchor: NodeId, id: NodeId) {
        let anchor_right = self.get(anchor).right;
        self.get_mut(id).left = anchor;
        self.get_mut(id).right = anchor_right;
        self.get_mut(anchor_right).left = id;
        self.get_mut(anchor).right = id;
    }

    /// Merges the ring containing `a` with the ring containing `b` into one
    /// ring, in four pointer updates regardless of either ring's size.
    /// `a` and `b` must currently belong to two distinct rings.
    pub(crate) fn concatenate_rings(&mut self, a: NodeId, b: NodeId) {
        let a_right = self.get(a).right;
        let b_left = self.get(b).left;
        self.get_mut(a).right = b;
        self.get_mut(b).left = a;
        self.get_mut(b_left).right = a_right;
        self.get_mut(a_right).left = b_left;
    }

    /// Snapshots the ring starting at `start` into a `Vec`, walking `right`
    /// pointers until back to `start`. Needed wherever a walk mutates the
    /// very ring it is iterating (consolidate, destruction).
    pub(crate) fn ring_ids(&self, start: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut cur = start;
        loop {
            ids.push(cur);
            cur = self.get(cur).right;
            if cur == start {
                break;
            }
        }
        ids
    }
}
