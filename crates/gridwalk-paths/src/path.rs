use gridwalk_core::Point;

/// A reconstructed shortest path.
///
/// Points are listed in the order they are walked, so every consecutive pair
/// is a legal move under the rule that produced the path. A path always holds
/// at least one point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    cost: u32,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: u32) -> Self {
        debug_assert!(!points.is_empty());
        Self { points, cost }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First point walked.
    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last point walked.
    #[inline]
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of points, including both ends.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of moves (`len - 1`).
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Total cost; equal to [`steps`](Self::steps) under unit-cost rules.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
