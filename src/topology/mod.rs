//! Digital topology: adjacency relations, (κ, λ) pairs and digital objects.
//!
//! This module provides:
//! - [`Adjacency`] and the metric adjacencies of `Z^D`
//! - [`DigitalTopology`], a foreground/background adjacency pair, with the
//!   standard 2D ([`z2i`]) and 3D ([`z3i`]) topologies
//! - [`DigitalObject`], the connectivity engine: neighborhoods, border,
//!   connected components and simple points
//!
//! Most users build a [`DigitalObject`] from one of the standard topologies
//! and a [`BTreeDigitalSet`](crate::kernel::BTreeDigitalSet).

pub mod adjacency;
pub mod cache;
pub mod connectedness;
pub mod digital_topology;
pub mod object;

pub use adjacency::{Adjacency, MetricAdjacency};
pub use cache::InvalidateCache;
pub use connectedness::{Connectedness, SimplePointCounts};
pub use digital_topology::{DigitalTopology, DigitalTopologyProperties, z2i, z3i};
pub use object::{
    ComplementObject, DigitalObject, SmallComplementObject, SmallObject, SmallSet,
};

#[cfg(test)]
mod tests;
