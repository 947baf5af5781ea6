//! Uniform-cost (Dijkstra) search over a [`Grid`].

use std::collections::BinaryHeap;

use gridwalk_core::{Grid, Point};

use crate::distance::{DistanceMap, unwind};
use crate::options::{SearchDirection, SearchOptions};
use crate::path::Path;
use crate::rule::TraversalRule;

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// Reference into the flat cell arrays, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
struct NodeRef {
    idx: usize,
    cost: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first, and
        // among equal costs the smallest row-major index.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Per-query working state
// ---------------------------------------------------------------------------

/// Working state of one query. Created and dropped inside each call.
struct Run {
    /// Best known cost per cell; `None` means not reached yet.
    dist: Vec<Option<u32>>,
    /// Cell from which `dist` was achieved; `None` for seeds.
    parent: Vec<Option<usize>>,
    finalized: Vec<bool>,
    /// The cell that satisfied the stop condition, if any.
    stopped_at: Option<usize>,
}

impl Run {
    fn new(len: usize) -> Self {
        Self {
            dist: vec![None; len],
            parent: vec![None; len],
            finalized: vec![false; len],
            stopped_at: None,
        }
    }

    fn finalized_cost(&self, idx: usize) -> Option<u32> {
        if self.finalized[idx] {
            self.dist[idx]
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A shortest-path query builder over a borrowed grid.
///
/// `Search` keeps no state between calls: every query allocates its own
/// frontier and distance arrays, so one `Search` (and the grid it borrows)
/// can be shared freely between threads when `V` and `R` allow it.
///
/// ```
/// use gridwalk_core::{Adjacency, Grid, Point};
/// use gridwalk_paths::{Climb, Search};
///
/// let grid = Grid::from_rows(vec![vec![0, 1, 2], vec![5, 5, 3]], Adjacency::Cardinal).unwrap();
/// let search = Search::new(&grid, Climb::HEIGHT_MAP);
/// assert_eq!(search.distance(&[Point::new(0, 0)], Point::new(2, 1)), Some(3));
/// assert_eq!(search.distance(&[Point::new(0, 0)], Point::new(0, 1)), None);
/// ```
#[derive(Clone, Debug)]
pub struct Search<'g, V, R> {
    grid: &'g Grid<V>,
    rule: R,
    options: SearchOptions,
}

impl<'g, V, R: TraversalRule<V>> Search<'g, V, R> {
    /// A forward, unbounded search over `grid` using `rule`.
    pub fn new(grid: &'g Grid<V>, rule: R) -> Self {
        Self::with_options(grid, rule, SearchOptions::default())
    }

    pub fn with_options(grid: &'g Grid<V>, rule: R, options: SearchOptions) -> Self {
        Self {
            grid,
            rule,
            options,
        }
    }

    /// Run backwards: distances become the cost of walking *to* the seeds.
    pub fn reversed(mut self) -> Self {
        self.options.direction = SearchDirection::Reverse;
        self
    }

    /// Leave points farther than `max_cost` unreached.
    pub fn max_cost(mut self, max_cost: u32) -> Self {
        self.options.max_cost = Some(max_cost);
        self
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid<V> {
        self.grid
    }

    #[inline]
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Distances from the nearest of `sources` to every reachable point.
    ///
    /// # Panics
    ///
    /// If `sources` is empty or any source is out of bounds.
    pub fn distance_map(&self, sources: &[Point]) -> DistanceMap {
        let seeds = self.seed_indices(sources);
        let mut run = self.run(&seeds, |_| false);
        // The frontier drained, so every reached cell is finalized.
        for (d, done) in run.dist.iter_mut().zip(&run.finalized) {
            if !done {
                *d = None;
            }
        }
        DistanceMap {
            bounds: self.grid.bounds(),
            dist: run.dist,
            parent: run.parent,
            sources: sources.to_vec(),
            direction: self.options.direction,
        }
    }

    /// Cost from the nearest of `sources` to `target`, or `None` if no
    /// source can reach it.
    ///
    /// Stops as soon as `target` is finalized.
    ///
    /// # Panics
    ///
    /// If `sources` is empty or any source or the target is out of bounds.
    pub fn distance(&self, sources: &[Point], target: Point) -> Option<u32> {
        let t = self.expect_idx(target, "target");
        let seeds = self.seed_indices(sources);
        let run = self.run(&seeds, |i| i == t);
        run.finalized_cost(t)
    }

    /// A shortest path from `source` to `target`, in walking order.
    ///
    /// For a reversed search the roles swap: the path leads from `target`
    /// to `source`, since that is the direction the rule was checked in.
    ///
    /// # Panics
    ///
    /// If either point is out of bounds.
    pub fn path(&self, source: Point, target: Point) -> Option<Path> {
        let t = self.expect_idx(target, "target");
        let seeds = self.seed_indices(&[source]);
        let run = self.run(&seeds, |i| i == t);
        let cost = run.finalized_cost(t)?;
        let points = unwind(
            &run.parent,
            t,
            |i| self.grid.point_at(i),
            self.options.direction,
        );
        Some(Path::new(points, cost))
    }

    /// The first of `targets` to be finalized, with its cost.
    ///
    /// This is the target closest to any source; ties go to the smallest
    /// row-major position. Unreachable targets never win. Returns `None` if
    /// no target is reachable or `targets` is empty.
    ///
    /// # Panics
    ///
    /// If `sources` is empty or any source or target is out of bounds.
    pub fn nearest(&self, sources: &[Point], targets: &[Point]) -> Option<(Point, u32)> {
        let seeds = self.seed_indices(sources);
        let mut wanted = vec![false; self.grid.len()];
        for &t in targets {
            wanted[self.expect_idx(t, "target")] = true;
        }
        if targets.is_empty() {
            return None;
        }
        let run = self.run(&seeds, |i| wanted[i]);
        let hit = run.stopped_at?;
        run.finalized_cost(hit).map(|d| (self.grid.point_at(hit), d))
    }

    fn expect_idx(&self, p: Point, what: &str) -> usize {
        match self.grid.index_of(p) {
            Some(i) => i,
            None => panic!(
                "{what} {p} out of bounds for {}x{} grid",
                self.grid.width(),
                self.grid.height()
            ),
        }
    }

    /// Flat indices of `sources`, checked before any work is done.
    fn seed_indices(&self, sources: &[Point]) -> Vec<usize> {
        assert!(!sources.is_empty(), "search needs at least one source");
        sources
            .iter()
            .map(|&src| self.expect_idx(src, "source"))
            .collect()
    }

    /// Lazy-push Dijkstra from the `seeds` until the frontier drains or `stop`
    /// accepts a freshly finalized cell.
    fn run(&self, seeds: &[usize], mut stop: impl FnMut(usize) -> bool) -> Run {
        let grid = self.grid;
        let mut run = Run::new(grid.len());
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        for &si in seeds {
            if run.dist[si].is_some() {
                continue;
            }
            run.dist[si] = Some(0);
            open.push(NodeRef { idx: si, cost: 0 });
        }
        let seeded = open.len();

        let mut nbuf = Vec::with_capacity(grid.adjacency().max_neighbors());
        let mut finalized = 0usize;
        let mut stale = 0usize;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Lazy deletion: an improved cell is pushed again rather than
            // decreased in place, so the heap can hold several entries for it.
            // The first one popped carries its final cost; the rest are stale.
            if run.finalized[ci] {
                stale += 1;
                log::trace!("dijkstra: skip stale entry {} @ {}", grid.point_at(ci), current.cost);
                continue;
            }
            run.finalized[ci] = true;
            finalized += 1;

            if stop(ci) {
                run.stopped_at = Some(ci);
                break;
            }

            let cp = grid.point_at(ci);
            nbuf.clear();
            grid.neighbors_into(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index_of(np) else {
                    continue;
                };
                if run.finalized[ni] {
                    continue;
                }
                let (from, to) = match self.options.direction {
                    SearchDirection::Forward => (cp, np),
                    SearchDirection::Reverse => (np, cp),
                };
                if !self.rule.allows(grid, from, to) {
                    continue;
                }
                let Some(tentative) = current.cost.checked_add(self.rule.cost(grid, from, to))
                else {
                    continue;
                };
                if self.options.max_cost.is_some_and(|m| tentative > m) {
                    continue;
                }
                if run.dist[ni].is_some_and(|d| tentative >= d) {
                    continue;
                }

                run.dist[ni] = Some(tentative);
                run.parent[ni] = Some(ci);
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
            }
        }

        log::debug!(
            "dijkstra: {:?} search from {} seed(s) finalized {} of {} cells ({} stale, stopped early: {})",
            self.options.direction,
            seeded,
            finalized,
            grid.len(),
            stale,
            run.stopped_at.is_some(),
        );
        run
    }
}

/// Minimum cost from any of `candidates` to `end`, excluding candidates that
/// cannot reach it.
///
/// Runs a single reversed search seeded at `end`, so the cost is paid once
/// however many candidates there are. Returns `None` when no candidate can
/// reach `end`.
///
/// # Panics
///
/// If `end` or any candidate is out of bounds.
pub fn shortest_from_any<V, R: TraversalRule<V>>(
    grid: &Grid<V>,
    rule: R,
    candidates: &[Point],
    end: Point,
) -> Option<u32> {
    Search::new(grid, rule)
        .reversed()
        .nearest(&[end], candidates)
        .map(|(_, d)| d)
}
