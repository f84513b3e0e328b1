//! Digital space kernel: points, rectangular domains and digital sets.
//!
//! These are the capabilities the connectivity engine in
//! [`crate::topology`] is written against:
//! - [`PointLike`]: bound alias for anything usable as a digital point
//! - [`Domain`]: bounded extent with membership and ordered iteration
//! - [`DigitalSet`]: ordered point set attached to a domain

pub mod bounds;
pub mod digital_set;
pub mod domain;
pub mod point;

pub use bounds::PointLike;
pub use digital_set::{BTreeDigitalSet, DigitalSet, PointOf, VecDigitalSet};
pub use domain::{Domain, HyperRectDomain};
pub use point::Point;
