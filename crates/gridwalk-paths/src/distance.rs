use gridwalk_core::{Point, Range};

use crate::options::SearchDirection;
use crate::path::Path;

/// Finalized distances from a completed search, with predecessors for path
/// reconstruction.
///
/// Only reached points have a distance. A point missing from the map is
/// unreachable from every seed (or lies beyond the search's `max_cost`).
#[derive(Debug, Clone)]
pub struct DistanceMap {
    pub(crate) bounds: Range,
    pub(crate) dist: Vec<Option<u32>>,
    pub(crate) parent: Vec<Option<usize>>,
    pub(crate) sources: Vec<Point>,
    pub(crate) direction: SearchDirection,
}

impl DistanceMap {
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index_of(p)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        self.bounds.point_at(idx)
    }

    /// Distance of `p`, or `None` if unreached or out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        self.idx(p).and_then(|i| self.dist[i])
    }

    #[inline]
    pub fn is_reached(&self, p: Point) -> bool {
        self.get(p).is_some()
    }

    /// Number of reached points.
    pub fn len(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }

    /// Whether nothing was reached. Never true after a search, since seeds
    /// are always reached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reached points and their distances, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (self.point(i), d)))
    }

    /// The reached point among `points` with the smallest distance.
    ///
    /// Unreached points are skipped; ties go to the earliest point. Returns
    /// `None` if none of `points` was reached.
    pub fn min_over(&self, points: impl IntoIterator<Item = Point>) -> Option<(Point, u32)> {
        points
            .into_iter()
            .filter_map(|p| self.get(p).map(|d| (p, d)))
            .min_by_key(|&(_, d)| d)
    }

    /// The seeds the search started from.
    pub fn sources(&self) -> &[Point] {
        &self.sources
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// Shortest path between `p` and its nearest seed.
    ///
    /// For a forward search the path runs from a seed to `p`. For a reversed
    /// search it runs from `p` to a seed, which is the direction the moves
    /// are legal in. Returns `None` if `p` was not reached.
    pub fn path_to(&self, p: Point) -> Option<Path> {
        let target = self.idx(p)?;
        let cost = self.dist[target]?;
        let points = unwind(&self.parent, target, |i| self.point(i), self.direction);
        Some(Path::new(points, cost))
    }
}

/// Follow predecessors from `from` back to a seed.
pub(crate) fn unwind(
    parent: &[Option<usize>],
    from: usize,
    point: impl Fn(usize) -> Point,
    direction: SearchDirection,
) -> Vec<Point> {
    let mut points = Vec::new();
    let mut cur = Some(from);
    while let Some(ci) = cur {
        points.push(point(ci));
        cur = parent[ci];
    }
    if direction == SearchDirection::Forward {
        points.reverse();
    }
    points
}
