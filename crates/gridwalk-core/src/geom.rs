//! Geometry primitives: [`Point`], [`Direction`] and [`Range`].
//!
//! Coordinates are unbounded `i32` pairs. X grows right and Y grows down, so
//! "north" is `y - 1`. Point arithmetic wraps on `i32` overflow, so every
//! operation is total.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    #[inline]
    pub const fn north(self) -> Self {
        self.shift(0, -1)
    }

    #[inline]
    pub const fn north_east(self) -> Self {
        self.shift(1, -1)
    }

    #[inline]
    pub const fn east(self) -> Self {
        self.shift(1, 0)
    }

    #[inline]
    pub const fn south_east(self) -> Self {
        self.shift(1, 1)
    }

    #[inline]
    pub const fn south(self) -> Self {
        self.shift(0, 1)
    }

    #[inline]
    pub const fn south_west(self) -> Self {
        self.shift(-1, 1)
    }

    #[inline]
    pub const fn west(self) -> Self {
        self.shift(-1, 0)
    }

    #[inline]
    pub const fn north_west(self) -> Self {
        self.shift(-1, -1)
    }

    /// One unit step in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.delta();
        self.shift(d.x, d.y)
    }

    /// The four cardinal neighbours (north, east, south, west).
    #[inline]
    pub const fn cardinal_neighbors(self) -> [Point; 4] {
        [self.north(), self.east(), self.south(), self.west()]
    }

    /// All eight neighbours, clockwise from north.
    #[inline]
    pub const fn all_neighbors(self) -> [Point; 8] {
        [
            self.north(),
            self.north_east(),
            self.east(),
            self.south_east(),
            self.south(),
            self.south_west(),
            self.west(),
            self.north_west(),
        ]
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        let (dx, dy) = self.abs_delta(other);
        dx.wrapping_add(dy)
    }

    /// Chebyshev (L∞) distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Point) -> i32 {
        let (dx, dy) = self.abs_delta(other);
        dx.max(dy)
    }

    #[inline]
    fn abs_delta(self, other: Point) -> (i32, i32) {
        (
            self.x.wrapping_sub(other.x).wrapping_abs(),
            self.y.wrapping_sub(other.y).wrapping_abs(),
        )
    }

    /// Every point at exactly Manhattan distance `d` from `self`.
    ///
    /// The points form a diamond and are each returned once: `4 * d` points
    /// for `d > 0`, `[self]` for `d == 0` and nothing for negative `d`.
    pub fn at_manhattan_distance(self, d: i32) -> Vec<Point> {
        if d < 0 {
            return Vec::new();
        }
        if d == 0 {
            return vec![self];
        }
        let mut out = Vec::with_capacity(4 * d as usize);
        // Walk each diamond edge half-open so corners appear once.
        for i in 0..d {
            let j = d - i;
            out.push(self.shift(i, -j));
            out.push(self.shift(j, i));
            out.push(self.shift(-i, j));
            out.push(self.shift(-j, -i));
        }
        out
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x.wrapping_mul(rhs), self.y.wrapping_mul(rhs))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight compass directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The four axis-aligned directions, clockwise from north.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit offset of this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::NorthEast => Point::new(1, -1),
            Direction::East => Point::new(1, 0),
            Direction::SouthEast => Point::new(1, 1),
            Direction::South => Point::new(0, 1),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::West => Point::new(-1, 0),
            Direction::NorthWest => Point::new(-1, -1),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Whether this is one of the four axis-aligned directions.
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Size as a `Point` (width = max.x - min.x, height = max.y - min.y).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.max.x - self.min.x, self.max.y - self.min.y)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major offset of `p` from `min`, or `None` if `p` is outside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let (dx, dy) = ((p.x - self.min.x) as usize, (p.y - self.min.y) as usize);
        Some(dy * self.width() as usize + dx)
    }

    /// Inverse of [`index_of`](Self::index_of). `idx` must be below
    /// [`len`](Self::len).
    #[inline]
    pub fn point_at(self, idx: usize) -> Point {
        debug_assert!(idx < self.len());
        let w = self.width() as usize;
        Point::new(
            self.min.x + (idx % w) as i32,
            self.min.y + (idx / w) as i32,
        )
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a * 3, Point::new(3, 6));
    }

    #[test]
    fn compass_steps() {
        let p = Point::new(5, 5);
        assert_eq!(p.north(), Point::new(5, 4));
        assert_eq!(p.south(), Point::new(5, 6));
        assert_eq!(p.east(), Point::new(6, 5));
        assert_eq!(p.west(), Point::new(4, 5));
        assert_eq!(p.north_east(), Point::new(6, 4));
        assert_eq!(p.south_west(), Point::new(4, 6));
        for dir in Direction::ALL {
            assert_eq!(p.step(dir).step(dir.opposite()), p);
        }
    }

    #[test]
    fn negative_coordinates_are_valid() {
        let p = Point::new(-3, -7);
        assert_eq!(p.west(), Point::new(-4, -7));
        assert_eq!(p.manhattan(Point::ZERO), 10);
    }

    #[test]
    fn neighbor_sets() {
        let p = Point::new(0, 0);
        let card: HashSet<_> = p.cardinal_neighbors().into_iter().collect();
        assert_eq!(card.len(), 4);
        assert!(card.iter().all(|n| n.manhattan(p) == 1));

        let all: HashSet<_> = p.all_neighbors().into_iter().collect();
        assert_eq!(all.len(), 8);
        assert!(all.is_superset(&card));
        assert!(all.iter().all(|n| n.chebyshev(p) == 1));
    }

    #[test]
    fn manhattan_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 5);
        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
        assert_eq!(a.chebyshev(b), 5);
    }

    #[test]
    fn manhattan_diamond() {
        let p = Point::new(0, 0);
        let pts = p.at_manhattan_distance(3);
        let set: HashSet<_> = pts.iter().copied().collect();
        assert_eq!(pts.len(), 12);
        assert_eq!(set.len(), 12);
        for q in [
            Point::new(0, 3),
            Point::new(1, 2),
            Point::new(2, 1),
            Point::new(3, 0),
            Point::new(0, -3),
            Point::new(-1, 2),
            Point::new(-2, -1),
            Point::new(-3, 0),
        ] {
            assert!(set.contains(&q), "missing {q}");
        }
        assert!(pts.iter().all(|q| q.manhattan(p) == 3));
    }

    #[test]
    fn manhattan_diamond_degenerate() {
        let p = Point::new(2, -1);
        assert_eq!(p.at_manhattan_distance(0), vec![p]);
        assert!(p.at_manhattan_distance(-2).is_empty());
    }

    #[test]
    fn arithmetic_wraps_at_extremes() {
        let top = Point::new(0, i32::MIN);
        assert_eq!(top.north(), Point::new(0, i32::MAX));
        assert_eq!(top.north().south(), top);
        assert_eq!(Point::new(i32::MAX, 0) + Point::new(1, 0), Point::new(i32::MIN, 0));
        assert_eq!(Point::new(i32::MIN, 0) - Point::new(1, 0), Point::new(i32::MAX, 0));
        assert_eq!(Point::new(i32::MAX, 0).manhattan(Point::new(i32::MAX - 2, 1)), 3);
        assert_eq!(Point::ZERO.chebyshev(Point::new(i32::MIN + 1, 4)), i32::MAX);
        // Distances from the far extremes wrap instead of panicking.
        let _ = Point::new(i32::MIN, i32::MIN).manhattan(Point::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn tuple_conversion() {
        assert_eq!(Point::from((3, -4)), Point::new(3, -4));
        let p: Point = (0, 7).into();
        assert_eq!(p.south(), Point::new(0, 8));
    }

    #[test]
    fn cardinal_directions() {
        assert!(Direction::CARDINAL.iter().all(|d| d.is_cardinal()));
        let diagonal: Vec<_> = Direction::ALL.into_iter().filter(|d| !d.is_cardinal()).collect();
        assert_eq!(
            diagonal,
            vec![
                Direction::NorthEast,
                Direction::SouthEast,
                Direction::SouthWest,
                Direction::NorthWest
            ]
        );
        for d in Direction::ALL {
            assert_eq!(d.is_cardinal(), d.delta().manhattan(Point::ZERO) == 1);
        }
    }

    #[test]
    fn point_order_is_row_major() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 1), Point::new(5, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(5, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!(r.size(), Point::new(3, 2));
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn range_index_round_trips_with_offset() {
        let r = Range::new(-2, 3, 1, 5);
        assert_eq!(r.index_of(Point::new(-2, 3)), Some(0));
        assert_eq!(r.index_of(Point::new(0, 3)), Some(2));
        assert_eq!(r.index_of(Point::new(-2, 4)), Some(3));
        assert_eq!(r.index_of(Point::new(1, 3)), None);
        assert_eq!(r.index_of(Point::new(-2, 5)), None);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index_of(p), Some(i));
            assert_eq!(r.point_at(i), p);
        }
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn range_iter_count() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(r.iter().len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[1], Point::new(1, 0));
        assert_eq!(pts[5], Point::new(2, 1));
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(0, 0, 0, 4);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(-4, 9);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn direction_round_trip() {
        let json = serde_json::to_string(&Direction::SouthWest).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::SouthWest);
    }
}
