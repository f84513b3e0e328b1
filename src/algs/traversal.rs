//! DFS/BFS traversal over implicit neighbor relations.
//!
//! Digital adjacencies are never materialized as graphs: a traversal is
//! driven by a closure returning the neighbors of a point, already
//! restricted to whatever subset (object, complement, neighborhood) the
//! caller is exploring. Every connectivity query of
//! [`DigitalObject`](crate::topology::object::DigitalObject) goes through
//! [`traverse`].
//!
//! Guarantees:
//! - each point is discovered and expanded at most once (visited set);
//! - with [`Strategy::Bfs`] the output is in level order, so every point at
//!   depth `d` precedes every point at depth `d + 1`;
//! - seeds sit at depth 0 and points at depth `max_depth` are reported but
//!   not expanded.

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::kernel::bounds::PointLike;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    Dfs,
    #[default]
    Bfs,
}

/// Options for [`traverse`].
#[derive(Clone, Copy)]
pub struct TraversalOpts<'a, P> {
    pub strategy: Strategy,
    /// Depth past which points are no longer expanded (`None` = unbounded).
    pub max_depth: Option<u32>,
    /// Sort the output instead of returning discovery order.
    pub deterministic: bool,
    /// If returns true on a popped point, traversal stops after reporting it.
    pub early_stop: Option<&'a dyn Fn(P) -> bool>,
}

impl<P> Default for TraversalOpts<'_, P> {
    fn default() -> Self {
        Self {
            strategy: Strategy::Bfs,
            max_depth: None,
            deterministic: false,
            early_stop: None,
        }
    }
}

/// Runs a traversal from `seeds` and returns every discovered point.
///
/// `neighbors(p)` yields the points reachable from `p` in one step. Seeds are
/// deduplicated and always part of the output.
pub fn traverse<'a, P, F, I>(
    mut neighbors: F,
    seeds: impl IntoIterator<Item = P>,
    opts: TraversalOpts<'a, P>,
) -> Vec<P>
where
    P: PointLike,
    F: FnMut(P) -> I,
    I: IntoIterator<Item = P>,
{
    let TraversalOpts {
        strategy,
        max_depth,
        deterministic,
        early_stop,
    } = opts;
    let mut seen: HashSet<P> = HashSet::new();
    let mut order: Vec<P> = Vec::new();
    let mut frontier: VecDeque<(P, u32)> = VecDeque::new();
    for p in seeds {
        if seen.insert(p) {
            order.push(p);
            frontier.push_back((p, 0));
        }
    }

    loop {
        let next = match strategy {
            Strategy::Bfs => frontier.pop_front(),
            Strategy::Dfs => frontier.pop_back(),
        };
        let Some((p, d)) = next else { break };
        if let Some(f) = early_stop
            && f(p)
        {
            break;
        }
        if max_depth.is_some_and(|md| d >= md) {
            continue;
        }
        for q in neighbors(p) {
            if seen.insert(q) {
                order.push(q);
                frontier.push_back((q, d + 1));
            }
        }
    }

    if deterministic {
        order.sort_unstable();
    }
    order
}

/// Fluent front-end over [`traverse`].
pub struct TraversalBuilder<'a, P, F> {
    neighbors: F,
    seeds: Vec<P>,
    opts: TraversalOpts<'a, P>,
}

impl<'a, P, F, I> TraversalBuilder<'a, P, F>
where
    P: PointLike,
    F: FnMut(P) -> I,
    I: IntoIterator<Item = P>,
{
    pub fn new(neighbors: F) -> Self {
        Self {
            neighbors,
            seeds: Vec::new(),
            opts: TraversalOpts::default(),
        }
    }
    pub fn seeds<It: IntoIterator<Item = P>>(mut self, it: It) -> Self {
        self.seeds = it.into_iter().collect();
        self
    }
    pub fn dfs(mut self) -> Self {
        self.opts.strategy = Strategy::Dfs;
        self
    }
    pub fn bfs(mut self) -> Self {
        self.opts.strategy = Strategy::Bfs;
        self
    }
    pub fn max_depth(mut self, d: Option<u32>) -> Self {
        self.opts.max_depth = d;
        self
    }
    pub fn deterministic(mut self, yes: bool) -> Self {
        self.opts.deterministic = yes;
        self
    }
    pub fn early_stop(mut self, f: &'a dyn Fn(P) -> bool) -> Self {
        self.opts.early_stop = Some(f);
        self
    }

    pub fn run(self) -> Vec<P> {
        traverse(self.neighbors, self.seeds, self.opts)
    }
}
