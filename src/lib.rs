//! A mergeable, addressable min-priority queue with the amortized
//! complexities of a Fibonacci heap: O(1) insert, minimum, merge, and
//! decrease-key, with O(log n) amortized extract-min and delete.
//!
//! The forest is realized as an id-addressed arena ([`node`]) rather than a
//! raw pointer mesh, so the whole structure drops for free and a stale
//! [`Handle`] is detectable instead of undefined. [`FibonacciHeap`] exposes
//! the public operations; [`diagnostics`] offers an invariant validator, a
//! pretty-printer, and structural statistics on top of the same traversal
//! primitives, without mutating anything.

mod consolidate;
mod cut;
mod error;
mod heap;
mod node;

pub mod diagnostics;

pub use error::HeapError;
pub use heap::FibonacciHeap;
pub use node::Handle;
