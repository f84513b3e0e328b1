#![cfg_attr(docsrs, feature(doc_cfg))]
//! # dgtopo
//!
//! dgtopo is a digital-topology library: digital points and rectangular
//! domains of `Z^D`, digital sets, adjacency relations paired into digital
//! topologies, and digital objects with their connectivity services.
//!
//! ## Features
//! - `Point<D>` / `HyperRectDomain<D>` kernel with serde support
//! - Ordered digital sets (`BTreeDigitalSet`, `VecDigitalSet`)
//! - Metric adjacencies (4/8 in 2D, 6/18/26 in 3D) and Jordan topologies
//! - `DigitalObject`: neighborhoods, border, connectedness, connected
//!   components, simple points, geodesic neighborhoods
//! - Optional `rayon` feature for parallel border extraction
//!
//! ## Sharing
//! A `DigitalObject` holds its topology and point set behind `Arc` handles.
//! Cloning an object is cheap; mutating the point set of a clone copies it
//! first, so other holders never observe the change. The connectedness cache
//! belongs to each instance.
//!
//! ## Example
//! ```rust
//! use dgtopo::prelude::*;
//!
//! let domain = z2i::Domain::cube(8);
//! let pts = [[0, 0], [1, 0], [0, 1], [5, 5]].map(Point::new);
//! let object = DigitalObject::new(z2i::dt4_8(), BTreeDigitalSet::from_points(domain, pts));
//!
//! assert_eq!(object.compute_connectedness(), Connectedness::Disconnected);
//! assert_eq!(object.components().len(), 2);
//! ```

pub mod algs;
pub mod base;
pub mod debug_invariants;
pub mod kernel;
pub mod topology;
pub mod topology_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::kernel::{
        BTreeDigitalSet, DigitalSet, Domain, HyperRectDomain, Point, PointLike, PointOf,
        VecDigitalSet,
    };
    pub use crate::topology::{
        Adjacency, Connectedness, DigitalObject, DigitalTopology, DigitalTopologyProperties,
        InvalidateCache, MetricAdjacency, SimplePointCounts, SmallObject, z2i, z3i,
    };
    pub use crate::topology_error::TopologyError;
}
