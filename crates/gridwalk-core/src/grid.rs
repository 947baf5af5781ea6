//! The [`Grid`] type: a dense, rectangular, row-major map of values.
//!
//! A `Grid` owns its cells and is immutable once built, so it can be shared
//! by reference between any number of concurrent readers. Neighbor
//! generation follows the [`Adjacency`] fixed at construction.

use std::ops::Index;

use crate::adjacency::Adjacency;
use crate::error::GridError;
use crate::geom::{Direction, Point, Range};

/// A rectangular grid of `V` values addressed by [`Point`].
///
/// Valid points satisfy `0 <= x < width` and `0 <= y < height`. Indexing
/// with `grid[p]` panics outside that area; [`get`](Grid::get) does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<V> {
    cells: Vec<V>,
    width: i32,
    height: i32,
    adjacency: Adjacency,
}

impl<V> Grid<V> {
    /// Build a grid from rows of values.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<V>>, adjacency: Adjacency) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: r.len(),
            });
        }
        let (w, h) = dims(width, height)?;
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            cells,
            width: w,
            height: h,
            adjacency,
        })
    }

    /// Build a `width` × `height` grid by calling `f` for every point in
    /// row-major order.
    pub fn from_fn(
        width: i32,
        height: i32,
        adjacency: Adjacency,
        f: impl FnMut(Point) -> V,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let cells = Range::new(0, 0, width, height).iter().map(f).collect();
        Ok(Self {
            cells,
            width,
            height,
            adjacency,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The range `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The neighbor strategy chosen at construction.
    #[inline]
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.bounds().index_of(p)
    }

    /// Inverse of [`index_of`](Self::index_of).
    ///
    /// `idx` must be less than [`len`](Self::len).
    #[inline]
    pub fn point_at(&self, idx: usize) -> Point {
        self.bounds().point_at(idx)
    }

    /// The value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&V> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// In-bounds neighbors of `p` under this grid's adjacency.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(self.adjacency.max_neighbors());
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Append the in-bounds neighbors of `p` into `buf`.
    ///
    /// The caller clears `buf` before calling. The order is fixed for a given
    /// adjacency (clockwise from north).
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        let start = buf.len();
        self.adjacency.push_candidates(p, buf);
        let mut keep = start;
        for i in start..buf.len() {
            if self.contains(buf[i]) {
                buf[keep] = buf[i];
                keep += 1;
            }
        }
        buf.truncate(keep);
    }

    /// Every point of the grid in row-major order (y outer, x inner).
    #[inline]
    pub fn points(&self) -> crate::geom::RangeIter {
        self.bounds().iter()
    }

    /// Row-major iterator over `(Point, &V)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &V)> + '_ {
        self.points().zip(self.cells.iter())
    }

    /// The rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[V]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Every point whose value satisfies `pred`, in row-major order.
    pub fn positions(&self, mut pred: impl FnMut(&V) -> bool) -> Vec<Point> {
        self.iter()
            .filter_map(|(p, v)| pred(v).then_some(p))
            .collect()
    }

    /// The first point (row-major) whose value satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&V) -> bool) -> Option<Point> {
        self.iter().find_map(|(p, v)| pred(v).then_some(p))
    }

    /// A new grid of the same shape and adjacency with every value mapped.
    pub fn map<U>(&self, f: impl FnMut(&V) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
            adjacency: self.adjacency,
        }
    }

    /// Walk from `from` in direction `dir`, yielding each in-bounds point
    /// beyond `from` until the edge of the grid.
    pub fn ray(&self, from: Point, dir: Direction) -> Ray {
        Ray {
            bounds: self.bounds(),
            cur: from,
            delta: dir.delta(),
        }
    }
}

impl<V: Clone> Grid<V> {
    /// A `width` × `height` grid with every cell set to `value`.
    pub fn filled(
        width: i32,
        height: i32,
        adjacency: Adjacency,
        value: V,
    ) -> Result<Self, GridError> {
        Self::from_fn(width, height, adjacency, |_| value.clone())
    }
}

fn dims(width: usize, height: usize) -> Result<(i32, i32), GridError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(GridError::TooLarge { width, height }),
    }
}

impl<V> Index<Point> for Grid<V> {
    type Output = V;

    fn index(&self, p: Point) -> &V {
        match self.index_of(p) {
            Some(i) => &self.cells[i],
            None => panic!(
                "point {p} out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Ray
// ---------------------------------------------------------------------------

/// Iterator over the points along a straight line inside a grid.
///
/// Created by [`Grid::ray`]. The starting point is not yielded.
#[derive(Clone, Debug)]
pub struct Ray {
    bounds: Range,
    cur: Point,
    delta: Point,
}

impl Iterator for Ray {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        let next = self.cur + self.delta;
        if !self.bounds.contains(next) {
            return None;
        }
        self.cur = next;
        Some(next)
    }
}

impl std::iter::FusedIterator for Ray {}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct GridRef<'a, V> {
    adjacency: Adjacency,
    rows: Vec<&'a [V]>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridOwned<V> {
    adjacency: Adjacency,
    rows: Vec<Vec<V>>,
}

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Grid<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRef {
            adjacency: self.adjacency,
            rows: self.rows().collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<V> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = GridOwned::<V>::deserialize(deserializer)?;
        Grid::from_rows(raw.rows, raw.adjacency).map_err(serde::de::Error::custom)
    }
}
