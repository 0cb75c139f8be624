//! Structural validation, a pretty-printer, and derived statistics.
//!
//! Everything here consumes only [`FibonacciHeap`]'s public accessors plus
//! its non-public traversal entry points (root/child enumeration); nothing
//! in this module mutates the heap.

use std::fmt::Write as _;

use crate::heap::FibonacciHeap;
use crate::node::{Handle, NodeId};

/// A structural invariant violation found by [`validate`] (min-heap order,
/// ring consistency, degree, mark discipline, etc.).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A non-root's key is less than its parent's key.
    MinHeapViolation { parent: Handle, child: Handle },
    /// A node's child-pointer target does not list it as a parent, or a
    /// child's parent does not point back to it.
    ParentChildMismatch { parent: Handle, child: Handle },
    /// `parent.degree` does not match the number of nodes in its child ring.
    DegreeMismatch {
        node: Handle,
        expected: usize,
        actual: usize,
    },
    /// A root carries a mark, which only non-roots may do.
    MarkedRoot { node: Handle },
    /// The heap's `min` pointer does not identify the minimum-keyed root.
    MinPointerWrong,
    /// The reported size does not match a traversal's node count.
    SizeMismatch { reported: usize, counted: usize },
}

/// Walks the whole forest checking the min-heap property, sibling-ring
/// consistency, parent/child back-pointers, degree correctness, mark
/// discipline, the min pointer, and the reported size. Returns the first
/// violation found, or `Ok(())` if none.
pub fn validate<K, V>(heap: &FibonacciHeap<K, V>) -> Result<(), ValidationError>
where
    K: Ord + Copy,
{
    let roots = heap.root_ids();
    let mut counted = 0usize;
    let mut min_key: Option<K> = None;
    let mut min_id: Option<NodeId> = None;

    // Explicit-stack traversal: recursion depth would otherwise track tree
    // height, which this crate avoids wherever the depth is data-driven.
    let mut stack: Vec<(NodeId, Option<NodeId>)> = roots.iter().map(|&r| (r, None)).collect();

    for &root in &roots {
        let key = heap.key_value_of(root);
        let is_new_min = match min_key {
            None => true,
            Some(m) => key < m,
        };
        if is_new_min {
            min_key = Some(key);
            min_id = Some(root);
        }
        if heap.marked_of(root) {
            return Err(ValidationError::MarkedRoot {
                node: Handle(root),
            });
        }
    }

    while let Some((id, expected_parent)) = stack.pop() {
        counted += 1;

        if heap.parent_of(id) != expected_parent {
            let parent = expected_parent.unwrap_or(id);
            return Err(ValidationError::ParentChildMismatch {
                parent: Handle(parent),
                child: Handle(id),
            });
        }

        let children = heap.child_ids(id);
        if children.len() != heap.degree_of(id) {
            return Err(ValidationError::DegreeMismatch {
                node: Handle(id),
                expected: heap.degree_of(id),
                actual: children.len(),
            });
        }
        if children.is_empty() != heap.child_of(id).is_none() {
            return Err(ValidationError::DegreeMismatch {
                node: Handle(id),
                expected: heap.degree_of(id),
                actual: children.len(),
            });
        }

        let parent_key = heap.key_value_of(id);
        for &c in &children {
            if heap.key_value_of(c) < parent_key {
                return Err(ValidationError::MinHeapViolation {
                    parent: Handle(id),
                    child: Handle(c),
                });
            }
            stack.push((c, Some(id)));
        }
    }

    if heap.is_empty() {
        return Ok(());
    }

    match heap.minimum() {
        Some(m) if Some(m.0) == min_id => {}
        _ => return Err(ValidationError::MinPointerWrong),
    }

    if counted != heap.len() {
        return Err(ValidationError::SizeMismatch {
            reported: heap.len(),
            counted,
        });
    }

    Ok(())
}

/// Structural statistics derived by one pass over the whole forest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapStatistics {
    pub total_nodes: usize,
    pub marked_nodes: usize,
    pub root_nodes: usize,
    pub max_degree: usize,
    pub tree_count: usize,
    pub average_degree: f64,
}

/// Computes [`HeapStatistics`] for `heap`. Not cached: a fresh pass every
/// call.
pub fn statistics<K, V>(heap: &FibonacciHeap<K, V>) -> HeapStatistics
where
    K: Ord + Copy,
{
    let roots = heap.root_ids();
    let mut stack: Vec<NodeId> = roots.clone();

    let mut total_nodes = 0usize;
    let mut marked_nodes = 0usize;
    let mut max_degree = 0usize;
    let mut total_degree = 0usize;

    while let Some(id) = stack.pop() {
        total_nodes += 1;
        if heap.marked_of(id) {
            marked_nodes += 1;
        }
        let degree = heap.degree_of(id);
        max_degree = max_degree.max(degree);
        total_degree += degree;
        stack.extend(heap.child_ids(id));
    }

    HeapStatistics {
        total_nodes,
        marked_nodes,
        root_nodes: roots.len(),
        max_degree,
        tree_count: roots.len(),
        average_degree: if total_nodes == 0 {
            0.0
        } else {
            total_degree as f64 / total_nodes as f64
        },
    }
}

/// Renders the root list as a one-line-per-root dump: each root's key,
/// degree, and mark. Mirrors the shape of a debug print over the forest,
/// without walking below the root list.
pub fn format_structure<K, V>(heap: &FibonacciHeap<K, V>) -> String
where
    K: Ord + Copy + std::fmt::Display,
{
    if heap.is_empty() {
        return "empty heap\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "node count: {}", heap.len());
    let min_key = heap.key_of(heap.minimum().expect("non-empty heap has a minimum"));
    let _ = writeln!(out, "minimum key: {}", min_key.expect("live minimum handle"));
    let _ = write!(out, "root list:");
    for root in heap.root_ids() {
        let key = heap.key_value_of(root);
        let degree = heap.degree_of(root);
        let mark = if heap.marked_of(root) { ",m" } else { "" };
        let _ = write!(out, " {key}(d:{degree}{mark})");
    }
    out.push('\n');
    out
}
