//! `Point<D>`: a digital point of `Z^D`
//!
//! A point is a fixed-size array of `i64` coordinates behind a
//! `repr(transparent)` newtype. It is `Copy`, hashable and totally ordered
//! (lexicographically, first coordinate most significant), which is what
//! ordered digital sets and hash-based visited sets need.
//!
//! This module provides:
//! - Constructors and accessors, including a checked conversion from slices
//! - Componentwise arithmetic (`Add`, `Sub`, `Neg`) and the norms used by
//!   metric adjacencies
//! - `Debug`/`Display` formatting and serde support (a sequence of `D`
//!   integers)

use std::{
    fmt,
    ops::{Add, Index, Neg, Sub},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::topology_error::TopologyError;

/// A point of the digital space `Z^D`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Point<const D: usize>([i64; D]);

/// Points of the digital plane.
pub type Point2 = Point<2>;
/// Points of the digital 3-space.
pub type Point3 = Point<3>;

impl<const D: usize> Point<D> {
    /// Creates a point from its coordinates.
    ///
    /// ```rust
    /// # use dgtopo::kernel::Point;
    /// let p = Point::new([1, -2]);
    /// assert_eq!(p[1], -2);
    /// ```
    #[inline]
    pub const fn new(coords: [i64; D]) -> Self {
        Point(coords)
    }

    /// The origin of `Z^D`.
    #[inline]
    pub const fn zero() -> Self {
        Point([0; D])
    }

    /// A point with every coordinate equal to `value`.
    #[inline]
    pub const fn diagonal(value: i64) -> Self {
        Point([value; D])
    }

    /// Dimension of the ambient space.
    #[inline]
    pub const fn dimension(&self) -> usize {
        D
    }

    /// Coordinates as an array reference.
    #[inline]
    pub const fn coords(&self) -> &[i64; D] {
        &self.0
    }

    /// Sum of absolute coordinates.
    pub fn norm1(&self) -> u64 {
        self.0.iter().map(|c| c.unsigned_abs()).sum()
    }

    /// Largest absolute coordinate.
    pub fn norm_infinity(&self) -> u64 {
        self.0.iter().map(|c| c.unsigned_abs()).max().unwrap_or(0)
    }

    /// Componentwise minimum.
    pub fn inf(&self, other: &Self) -> Self {
        Point(std::array::from_fn(|i| self.0[i].min(other.0[i])))
    }

    /// Componentwise maximum.
    pub fn sup(&self, other: &Self) -> Self {
        Point(std::array::from_fn(|i| self.0[i].max(other.0[i])))
    }

    /// `true` when every coordinate of `self` is `<=` the matching one of `other`.
    pub fn is_lower_or_equal(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    /// `self + other`, or `None` if a coordinate overflows.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        let mut out = [0; D];
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.0[i].checked_add(other.0[i])?;
        }
        Some(Point(out))
    }

    /// `self - other`, or `None` if a coordinate overflows.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        let mut out = [0; D];
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.0[i].checked_sub(other.0[i])?;
        }
        Some(Point(out))
    }
}

impl<const D: usize> Default for Point<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize> From<[i64; D]> for Point<D> {
    #[inline]
    fn from(coords: [i64; D]) -> Self {
        Point(coords)
    }
}

impl<const D: usize> TryFrom<&[i64]> for Point<D> {
    type Error = TopologyError;

    fn try_from(coords: &[i64]) -> Result<Self, Self::Error> {
        let arr: [i64; D] = coords
            .try_into()
            .map_err(|_| TopologyError::DimensionMismatch {
                expected: D,
                found: coords.len(),
            })?;
        Ok(Point(arr))
    }
}

impl<const D: usize> Index<usize> for Point<D> {
    type Output = i64;

    #[inline]
    fn index(&self, i: usize) -> &i64 {
        &self.0[i]
    }
}

impl<const D: usize> Add for Point<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Point(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<const D: usize> Sub for Point<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Point(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<const D: usize> Neg for Point<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point(self.0.map(|c| -c))
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Displays as `Point(x, y, ...)`.
impl<const D: usize> fmt::Debug for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_tuple("Point");
        for c in &self.0 {
            t.field(c);
        }
        t.finish()
    }
}

/// Displays as `(x, y, ...)`.
impl<const D: usize> fmt::Display for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

// -----------------------------------------------------------------------------
// Serde: a plain sequence of D integers
// -----------------------------------------------------------------------------

impl<const D: usize> Serialize for Point<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de, const D: usize> Deserialize<'de> for Point<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let coords = Vec::<i64>::deserialize(deserializer)?;
        Point::try_from(coords.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `Point<D>` is laid out as `[i64; D]`.
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(Point<2>, [i64; 2]);
    assert_eq_size!(Point<3>, [i64; 3]);
    assert_eq_align!(Point<3>, i64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_norms() {
        let a = Point::new([1, -2, 3]);
        let b = Point::new([0, 1, 1]);
        assert_eq!(a + b, Point::new([1, -1, 4]));
        assert_eq!(a - b, Point::new([1, -3, 2]));
        assert_eq!(-a, Point::new([-1, 2, -3]));
        assert_eq!(a.norm1(), 6);
        assert_eq!(a.norm_infinity(), 3);
        assert_eq!(a.inf(&b), Point::new([0, -2, 1]));
        assert_eq!(a.sup(&b), Point::new([1, 1, 3]));
    }

    #[test]
    fn checked_arithmetic_at_the_edges() {
        let hi = Point::new([i64::MAX, 0]);
        let lo = Point::new([i64::MIN, 0]);
        let step = Point::new([1, 1]);
        assert_eq!(hi.checked_add(&step), None);
        assert_eq!(lo.checked_sub(&step), None);
        assert_eq!(hi.checked_sub(&step), Some(Point::new([i64::MAX - 1, -1])));
        assert_eq!(lo.checked_add(&step), Some(Point::new([i64::MIN + 1, 1])));
        assert_eq!(hi.checked_sub(&lo), None);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Point::new([0, 5]);
        let b = Point::new([1, 0]);
        let c = Point::new([1, 1]);
        assert!(a < b && b < c);
        assert!(a.is_lower_or_equal(&Point::new([0, 5])));
        assert!(!b.is_lower_or_equal(&a));
    }

    #[test]
    fn try_from_slice_checks_dimension() {
        let p: Point<2> = Point::try_from(&[3, 4][..]).unwrap();
        assert_eq!(p, Point::new([3, 4]));
        let err = Point::<3>::try_from(&[3, 4][..]).unwrap_err();
        assert_eq!(
            err,
            TopologyError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn debug_and_display() {
        let p = Point::new([7, -1]);
        assert_eq!(format!("{p:?}"), "Point(7, -1)");
        assert_eq!(format!("{p}"), "(7, -1)");
    }

    #[test]
    fn serde_as_sequence() {
        let p = Point::new([1, 2, 3]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Point<3> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Point<3>>("[1,2]").is_err());
    }
}
