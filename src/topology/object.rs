//! `DigitalObject`: a digital set equipped with a digital topology.
//!
//! A digital object couples a [`DigitalTopology`] (κ, λ) with a
//! [`DigitalSet`]. Both are held behind `Arc` handles: cloning an object is
//! cheap and shares storage, and the first mutation through
//! [`DigitalObject::point_set_mut`] gives the writer a private copy
//! (`Arc::make_mut`), never observed by other holders.
//!
//! Queries provided here:
//! - κ-neighborhoods, proper or not, as small objects or as counts
//! - the border (points λ-adjacent to the complement)
//! - connectedness, memoized per instance, and connected components
//! - simple-point classification and geodesic neighborhoods
//!
//! Every traversal goes through [`crate::algs::traversal::traverse`] with
//! a neighbor closure restricted to the set being explored.
//!
//! Query points must lie in the domain of the object (checked with
//! `debug_assert!`); they need not belong to the object.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashSet;
use once_cell::unsync::OnceCell;

use crate::algs::traversal::{TraversalBuilder, TraversalOpts, traverse};
use crate::debug_invariants::DebugInvariants;
use crate::kernel::digital_set::{DigitalSet, PointOf, VecDigitalSet, check_points_in_domain};
use crate::kernel::domain::Domain;
use crate::kernel::point::Point;
use crate::topology::adjacency::Adjacency;
use crate::topology::cache::InvalidateCache;
use crate::topology::connectedness::{Connectedness, SimplePointCounts};
use crate::topology::digital_topology::DigitalTopology;
use crate::topology_error::TopologyError;

/// Light set type used for neighborhoods of objects over `S`.
pub type SmallSet<S> = VecDigitalSet<<S as DigitalSet>::Domain>;
/// Object over the same topology with a light point set.
pub type SmallObject<F, B, S> = DigitalObject<F, B, SmallSet<S>>;
/// Object over the reversed topology (λ, κ).
pub type ComplementObject<F, B, S> = DigitalObject<B, F, S>;
/// Object over the reversed topology with a light point set.
pub type SmallComplementObject<F, B, S> = DigitalObject<B, F, SmallSet<S>>;

/// A point set with a foreground adjacency `F` and a background adjacency `B`.
///
/// The connectedness cache is per instance: clones copy its current value,
/// and resolving it on one instance never affects another. It is ignored
/// by `PartialEq`.
#[derive(Debug)]
pub struct DigitalObject<F, B, S> {
    topology: Arc<DigitalTopology<F, B>>,
    point_set: Arc<S>,
    connectedness: OnceCell<Connectedness>,
}

fn cache_for(cxn: Connectedness) -> OnceCell<Connectedness> {
    if cxn.is_known() {
        OnceCell::with_value(cxn)
    } else {
        OnceCell::new()
    }
}

impl<F, B, S> Clone for DigitalObject<F, B, S> {
    fn clone(&self) -> Self {
        Self {
            topology: Arc::clone(&self.topology),
            point_set: Arc::clone(&self.point_set),
            connectedness: self.connectedness.clone(),
        }
    }
}

impl<F, B, S> InvalidateCache for DigitalObject<F, B, S> {
    /// Forgets the cached connectedness.
    fn invalidate_cache(&mut self) {
        self.connectedness = OnceCell::new();
    }
}

// -----------------------------------------------------------------------------
// Construction and accessors
// -----------------------------------------------------------------------------

impl<F, B, S: DigitalSet> DigitalObject<F, B, S> {
    /// Object with the given topology owning `point_set`; connectedness unknown.
    pub fn new(topology: DigitalTopology<F, B>, point_set: S) -> Self {
        Self::with_connectedness(topology, point_set, Connectedness::Unknown)
    }

    /// Like [`Self::new`], trusting the caller about connectedness.
    pub fn with_connectedness(
        topology: DigitalTopology<F, B>,
        point_set: S,
        cxn: Connectedness,
    ) -> Self {
        crate::debug_invariants!(check_points_in_domain(&point_set), "DigitalObject::new");
        Self::from_shared(Arc::new(topology), Arc::new(point_set), cxn)
    }

    /// Object sharing an existing topology and point set.
    pub fn from_shared(
        topology: Arc<DigitalTopology<F, B>>,
        point_set: Arc<S>,
        cxn: Connectedness,
    ) -> Self {
        Self {
            topology,
            point_set,
            connectedness: cache_for(cxn),
        }
    }

    /// Empty object anchored to `domain`.
    pub fn empty(topology: DigitalTopology<F, B>, domain: S::Domain) -> Self {
        Self::new(topology, S::with_domain(domain))
    }

    /// Number of points.
    #[inline]
    pub fn size(&self) -> usize {
        self.point_set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_set.is_empty()
    }

    /// Domain of the point set.
    #[inline]
    pub fn domain(&self) -> &S::Domain {
        self.point_set.domain()
    }

    #[inline]
    pub fn point_set(&self) -> &S {
        &self.point_set
    }

    /// Mutable access to the point set.
    ///
    /// Copies the set first if it is shared, and forgets the cached
    /// connectedness.
    pub fn point_set_mut(&mut self) -> &mut S {
        self.invalidate_cache();
        Arc::make_mut(&mut self.point_set)
    }

    /// Replaces the point set; connectedness becomes unknown.
    pub fn set_point_set(&mut self, point_set: S) {
        self.invalidate_cache();
        self.point_set = Arc::new(point_set);
    }

    #[inline]
    pub fn topology(&self) -> &DigitalTopology<F, B> {
        &self.topology
    }

    /// Shared handle on the topology.
    #[inline]
    pub fn shared_topology(&self) -> &Arc<DigitalTopology<F, B>> {
        &self.topology
    }

    /// Foreground adjacency κ.
    #[inline]
    pub fn adjacency(&self) -> &F {
        self.topology.kappa()
    }

    /// Background adjacency λ.
    #[inline]
    pub fn background_adjacency(&self) -> &B {
        self.topology.lambda()
    }

    /// `true` when both objects use the same point-set storage.
    pub fn shares_point_set_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.point_set, &other.point_set)
    }

    /// Cached connectedness; never computes.
    #[inline]
    pub fn connectedness(&self) -> Connectedness {
        self.connectedness
            .get()
            .copied()
            .unwrap_or(Connectedness::Unknown)
    }

    /// Object sharing this topology over a light set holding `points`.
    fn small_object<I>(&self, points: I) -> SmallObject<F, B, S>
    where
        I: IntoIterator<Item = PointOf<S>>,
    {
        let set = VecDigitalSet::from_points(self.domain().clone(), points);
        DigitalObject::from_shared(Arc::clone(&self.topology), Arc::new(set), Connectedness::Unknown)
    }
}

// -----------------------------------------------------------------------------
// Topological queries
// -----------------------------------------------------------------------------

impl<F, B, S> DigitalObject<F, B, S>
where
    S: DigitalSet,
    F: Adjacency<Point = PointOf<S>>,
    B: Adjacency<Point = PointOf<S>>,
{
    /// The object intersected with the κ-neighborhood of `p` (`p` included
    /// when it belongs to the object).
    pub fn neighborhood(&self, p: PointOf<S>) -> SmallObject<F, B, S> {
        debug_assert!(self.domain().is_inside(&p), "{p:?} outside domain");
        let set = &*self.point_set;
        self.small_object(
            self.adjacency()
                .neighbors(set.domain(), p)
                .filter(|q| set.contains(q)),
        )
    }

    /// Cardinal of [`Self::neighborhood`], without building it.
    pub fn neighborhood_size(&self, p: PointOf<S>) -> usize {
        debug_assert!(self.domain().is_inside(&p), "{p:?} outside domain");
        let set = &*self.point_set;
        self.adjacency()
            .neighbors(set.domain(), p)
            .filter(|q| set.contains(q))
            .count()
    }

    /// The object intersected with the proper κ-neighborhood of `p`.
    pub fn proper_neighborhood(&self, p: PointOf<S>) -> SmallObject<F, B, S> {
        debug_assert!(self.domain().is_inside(&p), "{p:?} outside domain");
        let set = &*self.point_set;
        self.small_object(
            self.adjacency()
                .proper_neighbors(set.domain(), p)
                .filter(|q| set.contains(q)),
        )
    }

    /// Cardinal of [`Self::proper_neighborhood`], without building it.
    pub fn proper_neighborhood_size(&self, p: PointOf<S>) -> usize {
        debug_assert!(self.domain().is_inside(&p), "{p:?} outside domain");
        let set = &*self.point_set;
        self.adjacency()
            .proper_neighbors(set.domain(), p)
            .filter(|q| set.contains(q))
            .count()
    }

    /// Points of the object λ-adjacent to some domain point outside the object.
    pub fn border(&self) -> Self {
        let set = &*self.point_set;
        let lambda = self.background_adjacency();
        let border = S::from_points(
            set.domain().clone(),
            set.iter().filter(|&p| touches_complement(lambda, set, p)),
        );
        Self::from_shared(
            Arc::clone(&self.topology),
            Arc::new(border),
            Connectedness::Unknown,
        )
    }

    /// Resolves connectedness with a single κ-traversal, memoized in this instance.
    ///
    /// Returns `Connected` or `Disconnected`; once resolved, later calls are
    /// cache hits.
    pub fn compute_connectedness(&self) -> Connectedness {
        *self.connectedness.get_or_init(|| {
            let set = &*self.point_set;
            let Some(seed) = set.iter().next() else {
                return Connectedness::Connected;
            };
            let kappa = self.adjacency();
            let domain = set.domain();
            let reached = traverse(
                move |p| {
                    kappa
                        .proper_neighbors(domain, p)
                        .filter(move |q| set.contains(q))
                },
                [seed],
                TraversalOpts::default(),
            )
            .len();
            let cxn = if reached == set.len() {
                Connectedness::Connected
            } else {
                Connectedness::Disconnected
            };
            log::debug!("connectedness resolved: {reached}/{} points reached, {cxn}", set.len());
            cxn
        })
    }

    /// Emits every κ-connected component to `sink`, in order of their
    /// smallest point, and returns how many were emitted.
    ///
    /// Components share this topology, own a disjoint part of the point set
    /// and are marked `Connected`. Resolves this object's connectedness as a
    /// side effect.
    pub fn write_components<E>(&self, mut sink: E) -> usize
    where
        E: FnMut(Self),
    {
        let domain = self.domain();
        let count = for_each_component(self.adjacency(), &*self.point_set, |points| {
            let set = S::from_points(domain.clone(), points);
            sink(Self::from_shared(
                Arc::clone(&self.topology),
                Arc::new(set),
                Connectedness::Connected,
            ));
        });
        log::debug!(
            "decomposed {} points into {count} component(s)",
            self.size()
        );
        let cxn = if count <= 1 {
            Connectedness::Connected
        } else {
            Connectedness::Disconnected
        };
        if let Err(cxn) = self.connectedness.set(cxn) {
            let cached = self.connectedness();
            if cached != cxn {
                log::warn!("cached connectedness {cached} contradicts {count} component(s)");
            }
        }
        count
    }

    /// Connected components as an owned vector.
    pub fn components(&self) -> Vec<Self> {
        let mut out = Vec::new();
        self.write_components(|c| out.push(c));
        out
    }

    /// Number of κ-connected components, without building them.
    pub fn count_components(&self) -> usize {
        for_each_component(self.adjacency(), &*self.point_set, |_| {})
    }

    /// Component counts of the simple-point test at `v`: κ-components of
    /// the object in the proper κ-neighborhood of `v`, and λ-components of
    /// the complement (within the domain) in the proper λ-neighborhood of `v`.
    pub fn simple_point_counts(&self, v: PointOf<S>) -> SimplePointCounts {
        debug_assert!(self.domain().is_inside(&v), "{v:?} outside domain");
        let set = &*self.point_set;
        let domain = set.domain();
        let (kappa, lambda) = (self.adjacency(), self.background_adjacency());

        let fg = VecDigitalSet::from_points(
            domain.clone(),
            kappa.proper_neighbors(domain, v).filter(|q| set.contains(q)),
        );
        let bg = VecDigitalSet::from_points(
            domain.clone(),
            lambda.proper_neighbors(domain, v).filter(|q| !set.contains(q)),
        );
        let counts = SimplePointCounts {
            foreground: for_each_component(kappa, &fg, |_| {}),
            background: for_each_component(lambda, &bg, |_| {}),
        };
        log::trace!("simple point counts at {v:?}: {counts:?}");
        counts
    }

    /// `true` if `v` is simple: exactly one κ-component of the object in
    /// N*κ(v) and exactly one λ-component of the complement in N*λ(v).
    pub fn is_simple(&self, v: PointOf<S>) -> bool {
        self.simple_point_counts(v).is_simple()
    }

    /// Points of the object at most `k` `adj`-steps away from `p`, walking
    /// through the object only. `p` seeds the walk whether or not it belongs
    /// to the object, and is part of the result only if it does.
    pub fn geodesic_neighborhood<A>(&self, adj: &A, p: PointOf<S>, k: u32) -> SmallObject<F, B, S>
    where
        A: Adjacency<Point = PointOf<S>>,
    {
        debug_assert!(self.domain().is_inside(&p), "{p:?} outside domain");
        let set = &*self.point_set;
        let reached = geodesic_walk(adj, set.domain(), p, k, |q| set.contains(q));
        self.small_object(reached.into_iter().filter(|q| set.contains(q)))
    }

    /// Points of the complement (within the domain) at most `k` `adj`-steps
    /// away from `p`, walking through the complement only. The result uses
    /// the reversed topology.
    pub fn geodesic_neighborhood_in_complement<A>(
        &self,
        adj: &A,
        p: PointOf<S>,
        k: u32,
    ) -> SmallComplementObject<F, B, S>
    where
        A: Adjacency<Point = PointOf<S>>,
        F: Clone,
        B: Clone,
    {
        debug_assert!(self.domain().is_inside(&p), "{p:?} outside domain");
        let set = &*self.point_set;
        let reached = geodesic_walk(adj, set.domain(), p, k, |q| !set.contains(q));
        let points = VecDigitalSet::from_points(
            set.domain().clone(),
            reached.into_iter().filter(|q| !set.contains(q)),
        );
        DigitalObject::from_shared(
            Arc::new(self.topology.reverse_topology()),
            Arc::new(points),
            Connectedness::Unknown,
        )
    }

    /// Every unordered κ-adjacent pair `(p, q)` of the object with `p < q`,
    /// sorted.
    pub fn adjacency_edges(&self) -> Vec<(PointOf<S>, PointOf<S>)> {
        let set = &*self.point_set;
        let kappa = self.adjacency();
        let mut edges: Vec<_> = set
            .iter()
            .flat_map(move |p| {
                kappa
                    .proper_neighbors(set.domain(), p)
                    .filter(move |q| *q > p && set.contains(q))
                    .map(move |q| (p, q))
            })
            .collect();
        edges.sort_unstable();
        edges
    }
}

impl<F, B, S, const D: usize> DigitalObject<F, B, S>
where
    S: DigitalSet,
    S::Domain: Domain<Point = Point<D>>,
    F: Adjacency<Point = Point<D>>,
    B: Adjacency<Point = Point<D>>,
{
    /// Bertrand's characterization of simple points: `v` is simple iff the
    /// κ-geodesic neighborhood of `v` in the object and the λ-geodesic
    /// neighborhood of `v` in the complement each have exactly one component.
    ///
    /// Geodesic neighborhoods stay in the unit max-norm ball around `v`
    /// (`v` excluded) and have the order given by
    /// [`Adjacency::geodesic_order`]. Only meaningful for Jordan pairs in
    /// dimension 2 and 3.
    pub fn is_simple_geodesic(&self, v: Point<D>) -> bool {
        debug_assert!(self.domain().is_inside(&v), "{v:?} outside domain");
        let set = &*self.point_set;
        let domain = set.domain();
        let (kappa, lambda) = (self.adjacency(), self.background_adjacency());
        let in_ball = |q: &Point<D>| {
            *q != v && q.checked_sub(&v).is_some_and(|d| d.norm_infinity() <= 1)
        };

        let fg = geodesic_ball(kappa, domain, v, |q| in_ball(q) && set.contains(q));
        if for_each_component(kappa, &fg, |_| {}) != 1 {
            return false;
        }
        let bg = geodesic_ball(lambda, domain, v, |q| in_ball(q) && !set.contains(q));
        for_each_component(lambda, &bg, |_| {}) == 1
    }
}

#[cfg(feature = "rayon")]
impl<F, B, S> DigitalObject<F, B, S>
where
    S: DigitalSet + Sync,
    F: Adjacency<Point = PointOf<S>>,
    B: Adjacency<Point = PointOf<S>> + Sync,
    PointOf<S>: Send + Sync,
{
    /// [`Self::border`] with the per-point tests spread over the rayon pool.
    pub fn par_border(&self) -> Self {
        use rayon::prelude::*;

        let set = &*self.point_set;
        let lambda = self.background_adjacency();
        let points: Vec<_> = set.iter().collect();
        let kept: Vec<_> = points
            .par_iter()
            .copied()
            .filter(|&p| touches_complement(lambda, set, p))
            .collect();
        Self::from_shared(
            Arc::clone(&self.topology),
            Arc::new(S::from_points(set.domain().clone(), kept)),
            Connectedness::Unknown,
        )
    }
}

// -----------------------------------------------------------------------------
// Traversal helpers
// -----------------------------------------------------------------------------

/// `p` has a proper `adj`-neighbor in the domain of `set` that is not in `set`.
fn touches_complement<A, T>(adj: &A, set: &T, p: PointOf<T>) -> bool
where
    T: DigitalSet,
    A: Adjacency<Point = PointOf<T>>,
{
    adj.proper_neighbors(set.domain(), p)
        .any(|q| !set.contains(&q))
}

/// Splits `set` into `adj`-connected components, handing each to `emit`.
///
/// Seeds are taken in set order; a point already assigned to a component is
/// never expanded again. Returns the number of components.
fn for_each_component<A, T, E>(adj: &A, set: &T, mut emit: E) -> usize
where
    T: DigitalSet,
    A: Adjacency<Point = PointOf<T>>,
    E: FnMut(Vec<PointOf<T>>),
{
    let domain = set.domain();
    let mut assigned: HashSet<PointOf<T>> = HashSet::with_capacity(set.len());
    let mut count = 0;
    for seed in set.iter() {
        if assigned.contains(&seed) {
            continue;
        }
        let done = &assigned;
        let component = traverse(
            move |p| {
                adj.proper_neighbors(domain, p)
                    .filter(move |q| set.contains(q) && !done.contains(q))
            },
            [seed],
            TraversalOpts::default(),
        );
        assigned.extend(component.iter().copied());
        count += 1;
        emit(component);
    }
    count
}

/// Layered walk of depth `k` from `center` through the points accepted by
/// `keep`. The center is always part of the returned list.
fn geodesic_walk<A, Dm, K>(adj: &A, domain: &Dm, center: A::Point, k: u32, keep: K) -> Vec<A::Point>
where
    A: Adjacency,
    Dm: Domain<Point = A::Point>,
    K: Fn(&A::Point) -> bool,
{
    let keep = &keep;
    TraversalBuilder::new(move |p| {
        adj.proper_neighbors(domain, p)
            .filter(move |q| keep(q))
    })
    .seeds([center])
    .bfs()
    .max_depth(Some(k))
    .run()
}

/// Geodesic neighborhood of order `adj.geodesic_order()` around `v`,
/// excluding `v`, as a light set.
fn geodesic_ball<A, Dm, K>(adj: &A, domain: &Dm, v: A::Point, keep: K) -> VecDigitalSet<Dm>
where
    A: Adjacency,
    Dm: Domain<Point = A::Point>,
    K: Fn(&A::Point) -> bool,
{
    let reached = geodesic_walk(adj, domain, v, adj.geodesic_order(), keep);
    VecDigitalSet::from_points(domain.clone(), reached.into_iter().filter(|q| *q != v))
}

// -----------------------------------------------------------------------------
// Equality, display, invariants
// -----------------------------------------------------------------------------

impl<F, B, S> PartialEq for DigitalObject<F, B, S>
where
    S: PartialEq,
    DigitalTopology<F, B>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.point_set, &other.point_set) || self.point_set == other.point_set)
            && (Arc::ptr_eq(&self.topology, &other.topology) || self.topology == other.topology)
    }
}

impl<F, B, S: DigitalSet> fmt::Display for DigitalObject<F, B, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Object size={} connectedness={} domain={:?}]",
            self.size(),
            self.connectedness(),
            self.domain()
        )
    }
}

impl<F, B, S> DebugInvariants for DigitalObject<F, B, S>
where
    S: DigitalSet,
    F: Adjacency<Point = PointOf<S>>,
    B: Adjacency<Point = PointOf<S>>,
{
    /// Every point lies in the domain and a resolved connectedness matches
    /// a fresh decomposition.
    fn validate_invariants(&self) -> Result<(), TopologyError> {
        check_points_in_domain(&*self.point_set)?;
        let cached = self.connectedness();
        if cached.is_known() {
            let actual = if self.count_components() <= 1 {
                Connectedness::Connected
            } else {
                Connectedness::Disconnected
            };
            if actual != cached {
                return Err(TopologyError::ConnectednessMismatch {
                    cached: cached.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
        Ok(())
    }
}
