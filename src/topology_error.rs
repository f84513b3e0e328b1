//! TopologyError: Unified error type for dgtopo public APIs
//!
//! Digital-topology queries are value computations and do not fail; this
//! type covers the few fallible surfaces (checked construction of points,
//! domains and sets) and the invariant checks behind
//! [`DebugInvariants`](crate::debug_invariants::DebugInvariants).

use thiserror::Error;

/// Unified error type for dgtopo operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// A point was inserted into (or found in) a set whose domain does not contain it.
    #[error("point `{point}` lies outside the domain")]
    PointOutsideDomain { point: String },
    /// A domain was built with `lower > upper` on some axis.
    #[error("invalid domain: lower bound `{lower}` exceeds upper bound `{upper}`")]
    InvalidDomain { lower: String, upper: String },
    /// The cached connectedness disagrees with a fresh traversal.
    #[error("cached connectedness {cached} disagrees with computed {actual}")]
    ConnectednessMismatch { cached: String, actual: String },
    /// A coordinate slice had the wrong number of components.
    #[error("dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
