//! Common bound aliases used across kernel and topology code.
//!
//! The trait has a blanket impl, so any type satisfying the underlying
//! bounds automatically implements it. It only reduces duplication in
//! `where` clauses.

/// Canonical bound set for digital points.
///
/// - `Copy` for cheap pass-by-value in traversal loops
/// - `Eq + Hash` for hash-set backed visited sets
/// - `Ord` for ordered digital sets and deterministic output
/// - `Debug` for diagnostics and error messages
pub trait PointLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> PointLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
