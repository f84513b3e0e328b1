//! Adjacency relations between digital points.
//!
//! An [`Adjacency`] answers two questions: are two points adjacent, and
//! which points of a domain are adjacent to a given one. Relations are
//! reflexive (a point is adjacent to itself); the `proper_*` variants
//! exclude the point itself. Border and simple-point logic assume the
//! relation is symmetric, which is not checked.

use std::fmt;

use itertools::Itertools;

use crate::kernel::bounds::PointLike;
use crate::kernel::domain::Domain;
use crate::kernel::point::Point;

/// A (reflexive) adjacency relation over digital points.
pub trait Adjacency {
    /// Point type of the relation.
    type Point: PointLike;

    /// `true` if `p1` and `p2` are adjacent (always `true` when equal).
    fn is_adjacent_to(&self, p1: Self::Point, p2: Self::Point) -> bool;

    /// `true` if `p1` and `p2` are adjacent and distinct.
    fn is_properly_adjacent_to(&self, p1: Self::Point, p2: Self::Point) -> bool {
        p1 != p2 && self.is_adjacent_to(p1, p2)
    }

    /// Points of `domain` adjacent to `p`, including `p` when it lies in `domain`.
    fn neighbors<'a, Dm>(
        &'a self,
        domain: &'a Dm,
        p: Self::Point,
    ) -> Box<dyn Iterator<Item = Self::Point> + 'a>
    where
        Dm: Domain<Point = Self::Point>;

    /// Points of `domain` adjacent to `p`, excluding `p`.
    fn proper_neighbors<'a, Dm>(
        &'a self,
        domain: &'a Dm,
        p: Self::Point,
    ) -> Box<dyn Iterator<Item = Self::Point> + 'a>
    where
        Dm: Domain<Point = Self::Point>,
    {
        Box::new(self.neighbors(domain, p).filter(move |&q| q != p))
    }

    /// Number of geodesic steps used by [`DigitalObject::is_simple_geodesic`]
    /// for this relation: 1 for the full (max-norm) adjacency, 2 otherwise.
    ///
    /// [`DigitalObject::is_simple_geodesic`]: crate::topology::object::DigitalObject::is_simple_geodesic
    fn geodesic_order(&self) -> u32 {
        2
    }
}

/// The metric adjacency of `Z^D`: `p` and `q` are adjacent iff
/// `|q - p|_inf <= 1` and `|q - p|_1 <= MAX_NORM1`.
///
/// `MAX_NORM1 = 1` gives the 4-adjacency in 2D and the 6-adjacency in 3D;
/// `MAX_NORM1 = D` gives the 8- and 26-adjacencies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricAdjacency<const D: usize, const MAX_NORM1: usize> {
    /// Displacements to every neighbor (origin included), sorted.
    offsets: Vec<Point<D>>,
}

impl<const D: usize, const MAX_NORM1: usize> MetricAdjacency<D, MAX_NORM1> {
    pub fn new() -> Self {
        let offsets = (0..D)
            .map(|_| -1i64..=1)
            .multi_cartesian_product()
            .map(|c| Point::new(std::array::from_fn(|i| c[i])))
            .filter(|v| v.norm1() <= MAX_NORM1 as u64)
            .collect();
        Self { offsets }
    }

    /// Number of proper neighbors of a point far from the domain boundary.
    pub fn degree(&self) -> usize {
        self.offsets.len() - 1
    }
}

impl<const D: usize, const MAX_NORM1: usize> Default for MetricAdjacency<D, MAX_NORM1> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize, const MAX_NORM1: usize> Adjacency for MetricAdjacency<D, MAX_NORM1> {
    type Point = Point<D>;

    fn is_adjacent_to(&self, p1: Point<D>, p2: Point<D>) -> bool {
        p2.checked_sub(&p1)
            .is_some_and(|v| v.norm_infinity() <= 1 && v.norm1() <= MAX_NORM1 as u64)
    }

    fn neighbors<'a, Dm>(
        &'a self,
        domain: &'a Dm,
        p: Point<D>,
    ) -> Box<dyn Iterator<Item = Point<D>> + 'a>
    where
        Dm: Domain<Point = Point<D>>,
    {
        Box::new(
            self.offsets
                .iter()
                .filter_map(move |v| p.checked_add(v))
                .filter(move |q| domain.is_inside(q)),
        )
    }

    fn geodesic_order(&self) -> u32 {
        if MAX_NORM1 >= D { 1 } else { 2 }
    }
}

impl<const D: usize, const MAX_NORM1: usize> fmt::Display for MetricAdjacency<D, MAX_NORM1> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[MetricAdjacency Z{D} {}]", self.degree())
    }
}
