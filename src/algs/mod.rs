//! Re-export public algorithms.

pub mod traversal;

pub use traversal::{Strategy, TraversalBuilder, TraversalOpts, traverse};
