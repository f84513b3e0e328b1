//! Bounded domains of the digital space.
//!
//! A [`Domain`] is the ambient extent every digital set lives in.
//! Adjacencies only report neighbors inside it, so border and complement
//! tests never look past its bounds.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::kernel::bounds::PointLike;
use crate::kernel::point::Point;
use crate::topology_error::TopologyError;

/// Bounded extent of digital points.
pub trait Domain: Clone + fmt::Debug {
    /// Point type of the domain.
    type Point: PointLike;

    /// Smallest point of the domain (componentwise).
    fn lower_bound(&self) -> Self::Point;

    /// Largest point of the domain (componentwise).
    fn upper_bound(&self) -> Self::Point;

    /// Number of points along each axis, as a point.
    fn extent(&self) -> Self::Point;

    /// Membership test.
    fn is_inside(&self, p: &Self::Point) -> bool;

    /// Number of points in the domain.
    fn size(&self) -> usize;

    /// All points of the domain in increasing order.
    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Point> + 'a>;
}

/// The rectangular domain `[lower, upper]` of `Z^D` (both bounds included).
///
/// Deserialization goes through [`HyperRectDomain::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHyperRectDomain<D>")]
pub struct HyperRectDomain<const D: usize> {
    lower: Point<D>,
    upper: Point<D>,
}

/// Unchecked wire form of [`HyperRectDomain`].
#[derive(Deserialize)]
struct RawHyperRectDomain<const D: usize> {
    lower: Point<D>,
    upper: Point<D>,
}

impl<const D: usize> TryFrom<RawHyperRectDomain<D>> for HyperRectDomain<D> {
    type Error = TopologyError;

    fn try_from(raw: RawHyperRectDomain<D>) -> Result<Self, Self::Error> {
        Self::try_new(raw.lower, raw.upper)
    }
}

impl<const D: usize> HyperRectDomain<D> {
    /// The bounding box of `a` and `b`.
    pub fn new(a: Point<D>, b: Point<D>) -> Self {
        Self {
            lower: a.inf(&b),
            upper: a.sup(&b),
        }
    }

    /// The box `[lower, upper]`, rejecting bounds that are not ordered on every axis.
    pub fn try_new(lower: Point<D>, upper: Point<D>) -> Result<Self, TopologyError> {
        let domain = Self { lower, upper };
        domain.validate_invariants()?;
        Ok(domain)
    }

    /// The cube `[0, side - 1]^D`; `side` is clamped to at least one point.
    pub fn cube(side: i64) -> Self {
        Self::new(Point::zero(), Point::diagonal(side.max(1) - 1))
    }
}

impl<const D: usize> Domain for HyperRectDomain<D> {
    type Point = Point<D>;

    #[inline]
    fn lower_bound(&self) -> Point<D> {
        self.lower
    }

    #[inline]
    fn upper_bound(&self) -> Point<D> {
        self.upper
    }

    /// Saturates at `i64::MAX` on axes spanning more than that many points.
    fn extent(&self) -> Point<D> {
        Point::new(std::array::from_fn(|i| {
            self.upper[i].saturating_sub(self.lower[i]).saturating_add(1)
        }))
    }

    #[inline]
    fn is_inside(&self, p: &Point<D>) -> bool {
        self.lower.is_lower_or_equal(p) && p.is_lower_or_equal(&self.upper)
    }

    /// Saturates at `usize::MAX`.
    fn size(&self) -> usize {
        (0..D)
            .map(|i| {
                let len = i128::from(self.upper[i]) - i128::from(self.lower[i]) + 1;
                u128::try_from(len).unwrap_or(0)
            })
            .try_fold(1u128, |acc, len| acc.checked_mul(len))
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX)
    }

    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point<D>> + 'a> {
        Box::new(
            (0..D)
                .map(move |i| self.lower[i]..=self.upper[i])
                .multi_cartesian_product()
                .map(|c| Point::new(std::array::from_fn(|i| c[i]))),
        )
    }
}

impl<const D: usize> DebugInvariants for HyperRectDomain<D> {
    fn validate_invariants(&self) -> Result<(), TopologyError> {
        if self.lower.is_lower_or_equal(&self.upper) {
            Ok(())
        } else {
            Err(TopologyError::InvalidDomain {
                lower: self.lower.to_string(),
                upper: self.upper.to_string(),
            })
        }
    }
}

impl<const D: usize> fmt::Display for HyperRectDomain<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HyperRectDomain {} {}]", self.lower, self.upper)
    }
}
