//! Digital sets: ordered point collections attached to a domain.
//!
//! A [`DigitalSet`] owns its points and the [`Domain`] they live in. Two
//! containers are provided:
//! - [`BTreeDigitalSet`]: balanced tree, the general-purpose default
//! - [`VecDigitalSet`]: sorted vector, cheap to build and iterate, used for
//!   the small neighborhood sets produced by digital-object queries
//!
//! Both iterate in increasing point order.

use std::collections::BTreeSet;
use std::fmt;

use crate::debug_invariants::DebugInvariants;
use crate::kernel::domain::Domain;
use crate::topology_error::TopologyError;

/// Point type of a digital set.
pub type PointOf<S> = <<S as DigitalSet>::Domain as Domain>::Point;

/// Ordered set of digital points living in a domain.
///
/// Inserting a point outside the domain is a precondition violation,
/// checked with `debug_assert!`; use [`DigitalSet::try_insert`] for a
/// checked insert.
pub trait DigitalSet: Clone + fmt::Debug {
    /// Ambient domain type.
    type Domain: Domain;

    /// Empty set over `domain`.
    fn with_domain(domain: Self::Domain) -> Self;

    /// Ambient domain.
    fn domain(&self) -> &Self::Domain;

    /// Number of points.
    fn len(&self) -> usize;

    /// `true` when the set holds no point.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership test.
    fn contains(&self, p: &PointOf<Self>) -> bool;

    /// Inserts `p`; returns `false` if it was already present.
    fn insert(&mut self, p: PointOf<Self>) -> bool;

    /// Removes `p`; returns `false` if it was absent.
    fn remove(&mut self, p: &PointOf<Self>) -> bool;

    /// Removes every point, keeping the domain.
    fn clear(&mut self);

    /// Points in increasing order.
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = PointOf<Self>> + 'a>;

    /// Inserts `p` after checking it lies in the domain.
    fn try_insert(&mut self, p: PointOf<Self>) -> Result<bool, TopologyError> {
        if !self.domain().is_inside(&p) {
            return Err(TopologyError::PointOutsideDomain {
                point: format!("{p:?}"),
            });
        }
        Ok(self.insert(p))
    }

    /// Inserts every point of `points`.
    fn insert_all<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = PointOf<Self>>,
    {
        for p in points {
            self.insert(p);
        }
    }

    /// Set over `domain` holding `points`.
    fn from_points<I>(domain: Self::Domain, points: I) -> Self
    where
        I: IntoIterator<Item = PointOf<Self>>,
    {
        let mut set = Self::with_domain(domain);
        set.insert_all(points);
        set
    }
}

pub(crate) fn check_points_in_domain<S: DigitalSet>(set: &S) -> Result<(), TopologyError> {
    match set.iter().find(|p| !set.domain().is_inside(p)) {
        Some(p) => Err(TopologyError::PointOutsideDomain {
            point: format!("{p:?}"),
        }),
        None => Ok(()),
    }
}

// -----------------------------------------------------------------------------
// BTreeDigitalSet
// -----------------------------------------------------------------------------

/// Digital set backed by a `BTreeSet`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BTreeDigitalSet<Dm: Domain> {
    domain: Dm,
    points: BTreeSet<Dm::Point>,
}

impl<Dm: Domain> DigitalSet for BTreeDigitalSet<Dm> {
    type Domain = Dm;

    fn with_domain(domain: Dm) -> Self {
        Self {
            domain,
            points: BTreeSet::new(),
        }
    }

    #[inline]
    fn domain(&self) -> &Dm {
        &self.domain
    }

    #[inline]
    fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn contains(&self, p: &Dm::Point) -> bool {
        self.points.contains(p)
    }

    fn insert(&mut self, p: Dm::Point) -> bool {
        debug_assert!(self.domain.is_inside(&p), "{p:?} outside domain");
        self.points.insert(p)
    }

    fn remove(&mut self, p: &Dm::Point) -> bool {
        self.points.remove(p)
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = Dm::Point> + 'a> {
        Box::new(self.points.iter().copied())
    }
}

impl<Dm: Domain> DebugInvariants for BTreeDigitalSet<Dm> {
    fn validate_invariants(&self) -> Result<(), TopologyError> {
        check_points_in_domain(self)
    }
}

// -----------------------------------------------------------------------------
// VecDigitalSet
// -----------------------------------------------------------------------------

/// Digital set backed by a sorted, deduplicated `Vec`.
///
/// Membership is a binary search; insertion and removal shift the tail, so
/// this container suits small sets such as neighborhoods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecDigitalSet<Dm: Domain> {
    domain: Dm,
    points: Vec<Dm::Point>,
}

impl<Dm: Domain> VecDigitalSet<Dm> {
    /// Points as a sorted slice.
    pub fn as_slice(&self) -> &[Dm::Point] {
        &self.points
    }
}

impl<Dm: Domain> DigitalSet for VecDigitalSet<Dm> {
    type Domain = Dm;

    fn with_domain(domain: Dm) -> Self {
        Self {
            domain,
            points: Vec::new(),
        }
    }

    #[inline]
    fn domain(&self) -> &Dm {
        &self.domain
    }

    #[inline]
    fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn contains(&self, p: &Dm::Point) -> bool {
        self.points.binary_search(p).is_ok()
    }

    fn insert(&mut self, p: Dm::Point) -> bool {
        debug_assert!(self.domain.is_inside(&p), "{p:?} outside domain");
        match self.points.binary_search(&p) {
            Ok(_) => false,
            Err(pos) => {
                self.points.insert(pos, p);
                true
            }
        }
    }

    fn remove(&mut self, p: &Dm::Point) -> bool {
        match self.points.binary_search(p) {
            Ok(pos) => {
                self.points.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = Dm::Point> + 'a> {
        Box::new(self.points.iter().copied())
    }

    fn insert_all<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Dm::Point>,
    {
        for p in points {
            debug_assert!(self.domain.is_inside(&p), "{p:?} outside domain");
            self.points.push(p);
        }
        self.points.sort_unstable();
        self.points.dedup();
    }
}

impl<Dm: Domain> DebugInvariants for VecDigitalSet<Dm> {
    fn validate_invariants(&self) -> Result<(), TopologyError> {
        debug_assert!(
            self.points.windows(2).all(|w| w[0] < w[1]),
            "VecDigitalSet storage must stay sorted and deduplicated"
        );
        check_points_in_domain(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::domain::HyperRectDomain;
    use crate::kernel::point::Point;

    type D2 = HyperRectDomain<2>;

    fn p(x: i64, y: i64) -> Point<2> {
        Point::new([x, y])
    }

    fn exercise<S: DigitalSet<Domain = D2>>() {
        let mut s = S::with_domain(D2::cube(4));
        assert!(s.is_empty());
        assert!(s.insert(p(2, 1)));
        assert!(s.insert(p(0, 3)));
        assert!(!s.insert(p(2, 1)));
        assert_eq!(s.len(), 2);
        assert!(s.contains(&p(0, 3)));
        assert!(!s.contains(&p(3, 3)));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![p(0, 3), p(2, 1)]);
        assert!(s.remove(&p(0, 3)));
        assert!(!s.remove(&p(0, 3)));
        assert_eq!(s.len(), 1);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(*s.domain(), D2::cube(4));
    }

    #[test]
    fn btree_set_basic_ops() {
        exercise::<BTreeDigitalSet<D2>>();
    }

    #[test]
    fn vec_set_basic_ops() {
        exercise::<VecDigitalSet<D2>>();
    }

    #[test]
    fn try_insert_rejects_outside_points() {
        let mut s = BTreeDigitalSet::with_domain(D2::cube(2));
        assert_eq!(s.try_insert(p(1, 1)), Ok(true));
        let err = s.try_insert(p(2, 0)).unwrap_err();
        assert_eq!(
            err,
            TopologyError::PointOutsideDomain {
                point: "Point(2, 0)".into()
            }
        );
        assert!(s.is_valid());
    }

    #[test]
    fn vec_set_bulk_insert_sorts_and_dedups() {
        let s = VecDigitalSet::from_points(D2::cube(5), [p(3, 3), p(0, 1), p(3, 3), p(0, 0)]);
        assert_eq!(s.as_slice(), &[p(0, 0), p(0, 1), p(3, 3)]);
        assert!(s.is_valid());
    }
}
