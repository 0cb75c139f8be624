//! Consolidation: after extract-min, coalesce roots of equal degree until
//! every root has a distinct degree. Also houses `link`, consolidate's only
//! caller for the "make one root a child of another" primitive.

use crate::error::HeapError;
use crate::heap::FibonacciHeap;
use crate::node::{Arena, NodeId};

/// `(1 + sqrt(5)) / 2`. Its logarithm bounds the maximum degree a tree of
/// `n` nodes can reach, which is what sizes the degree table.
const PHI: f64 = 1.618_033_988_749_895;

/// `floor(log_phi(n))`, the safe upper bound on root degree from the mark
/// discipline's Fibonacci-number growth bound. A `+2` margin (one slot for
/// the bound's own off-by-one, one spare) is added by the caller.
pub(crate) fn max_degree_bound(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    ((n as f64).ln() / PHI.ln()).floor() as usize + 1
}

impl<K, V> Arena<K, V>
where
    K: Ord + Copy,
{
    /// Makes root `child` a child of root `parent`. Both must currently be
    /// roots of equal degree; the caller (consolidate) is responsible for
    /// that precondition.
    pub(crate) fn link(&mut self, child: NodeId, parent: NodeId) {
        self.unlink_from_ring(child);
        match self.get(parent).child {
            None => {
                self.isolate(child);
                self.get_mut(parent).child = Some(child);
            }
            Some(sibling) => {
                self.splice_after(sibling, child);
            }
        }
        self.get_mut(child).parent = Some(parent);
        self.get_mut(parent).degree += 1;
        self.get_mut(child).marked = false;
    }
}

impl<K, V> FibonacciHeap<K, V>
where
    K: Ord + Copy,
{
    /// Coalesces the root list down to one root per degree. Leaves the root
    /// list untouched (and returns an error) if the degree table cannot be
    /// allocated — extract-min still completes, just with an unconsolidated,
    /// temporarily less efficient root list.
    pub(crate) fn consolidate(&mut self) -> Result<(), HeapError> {
        let start = match self.min {
            Some(m) => m,
            None => return Ok(()),
        };

        let table_len = max_degree_bound(self.size) + 2;
        let mut table: Vec<Option<NodeId>> = Vec::new();
        table.try_reserve_exact(table_len).map_err(|_| HeapError::AllocationFailure)?;
        table.resize(table_len, None);

        let roots = self.arena.ring_ids(start);

        for root in roots {
            let mut x = root;
            loop {
                let d = self.arena.get(x).degree;
                if d >= table.len() {
                    table.resize(d + 1, None);
                }
                match table[d].take() {
                    None => {
                        table[d] = Some(x);
                        break;
                    }
                    Some(mut y) => {
                        if self.arena.get(x).key > self.arena.get(y).key {
                            std::mem::swap(&mut x, &mut y);
                        }
                        self.arena.link(y, x);
                    }
                }
            }
        }

        self.min = None;
        for slot in table.into_iter().flatten() {
            self.arena.isolate(slot);
            match self.min {
                None => self.min = Some(slot),
                Some(m) => {
                    self.arena.splice_after(m, slot);
                    if self.arena.get(slot).key < self.arena.get(m).key {
                        self.min = Some(slot);
                    }
                }
            }
        }

        Ok(())
    }
}
