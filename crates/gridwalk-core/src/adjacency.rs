//! Neighbor-generation strategies for [`Grid`](crate::Grid).

use crate::geom::Point;

/// Which points count as adjacent to a given point.
///
/// The strategy is chosen once when a grid is built. Candidates are not
/// bounds-checked here; [`Grid::neighbors`](crate::Grid::neighbors) filters
/// them to the grid's bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
    /// The four axis-aligned neighbors.
    #[default]
    Cardinal,
    /// Axis-aligned plus diagonal neighbors.
    CardinalAndDiagonal,
}

impl Adjacency {
    /// Maximum number of candidates this strategy yields for one point.
    #[inline]
    pub const fn max_neighbors(self) -> usize {
        match self {
            Adjacency::Cardinal => 4,
            Adjacency::CardinalAndDiagonal => 8,
        }
    }

    /// Append the unfiltered candidates of `p` into `buf`, clockwise from
    /// north.
    pub fn push_candidates(self, p: Point, buf: &mut Vec<Point>) {
        match self {
            Adjacency::Cardinal => buf.extend_from_slice(&p.cardinal_neighbors()),
            Adjacency::CardinalAndDiagonal => buf.extend_from_slice(&p.all_neighbors()),
        }
    }

    /// The unfiltered candidates of `p`.
    pub fn candidates(self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(self.max_neighbors());
        self.push_candidates(p, &mut buf);
        buf
    }
}
