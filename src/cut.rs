//! Cut and cascading-cut: the rebalancing that runs after decrease-key.

use crate::heap::FibonacciHeap;
use crate::node::NodeId;

impl<K, V> FibonacciHeap<K, V>
where
    K: Ord + Copy,
{
    /// Promotes child `x` of parent `y` back to the root list.
    pub(crate) fn cut(&mut self, x: NodeId, y: NodeId) {
        let x_right = self.arena.get(x).right;
        if self.arena.get(y).child == Some(x) {
            self.arena.get_mut(y).child = if x_right == x { None } else { Some(x_right) };
        }
        self.arena.unlink_from_ring(x);
        self.arena.get_mut(y).degree -= 1;

        self.arena.isolate(x);
        match self.min {
            None => self.min = Some(x),
            Some(m) => self.arena.splice_after(m, x),
        }
        self.arena.get_mut(x).parent = None;
        self.arena.get_mut(x).marked = false;
    }

    /// Walks ancestors starting at `y`: stops at a root, unmarks (and stops)
    /// on the first mark found, cuts and continues upward on a second mark.
    /// Iterative, not recursive: recursion depth would otherwise track tree
    /// height.
    pub(crate) fn cascading_cut(&mut self, mut y: NodeId) {
        loop {
            let parent = match self.arena.get(y).parent {
                Some(p) => p,
                None => return,
            };
            if !self.arena.get(y).marked {
                self.arena.get_mut(y).marked = true;
                return;
            }
            self.cut(y, parent);
            y = parent;
        }
    }
}
