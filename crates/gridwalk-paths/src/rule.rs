//! Traversal rules: which moves between adjacent cells are legal.

use gridwalk_core::{Grid, Point};

/// Decides whether a move between two adjacent points is legal, and what it
/// costs.
///
/// Rules are evaluated in the direction of travel: `from` is the cell being
/// left, `to` the cell being entered. A reversed search still asks the rule
/// about the real direction of travel (see
/// [`SearchDirection::Reverse`](crate::SearchDirection::Reverse)).
///
/// Any `Fn(&Grid<V>, Point, Point) -> bool` closure is a rule with unit cost.
pub trait TraversalRule<V> {
    /// Whether moving from `from` to the adjacent `to` is legal.
    fn allows(&self, grid: &Grid<V>, from: Point, to: Point) -> bool;

    /// Cost of the move from `from` to `to`. Only called for legal moves.
    ///
    /// Defaults to 1, which makes every distance an edge count.
    fn cost(&self, _grid: &Grid<V>, _from: Point, _to: Point) -> u32 {
        1
    }
}

impl<V, F> TraversalRule<V> for F
where
    F: Fn(&Grid<V>, Point, Point) -> bool,
{
    #[inline]
    fn allows(&self, grid: &Grid<V>, from: Point, to: Point) -> bool {
        self(grid, from, to)
    }
}

/// Height-map rule: step down any amount, step up by at most `max_rise`.
///
/// The height limit saturates, so extreme heights or rises never overflow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Climb {
    pub max_rise: i64,
}

impl Climb {
    /// The classic hill-climbing rule: climb at most one level per step.
    pub const HEIGHT_MAP: Climb = Climb { max_rise: 1 };

    pub const fn new(max_rise: i64) -> Self {
        Self { max_rise }
    }
}

impl<V: Copy + Into<i64>> TraversalRule<V> for Climb {
    #[inline]
    fn allows(&self, grid: &Grid<V>, from: Point, to: Point) -> bool {
        grid[to].into() <= grid[from].into().saturating_add(self.max_rise)
    }
}

/// A move is legal iff the destination cell satisfies the predicate.
#[derive(Copy, Clone, Debug)]
pub struct Passable<F>(pub F);

impl<V, F: Fn(&V) -> bool> TraversalRule<V> for Passable<F> {
    #[inline]
    fn allows(&self, grid: &Grid<V>, _from: Point, to: Point) -> bool {
        (self.0)(&grid[to])
    }
}

/// Every adjacent move is legal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Any;

impl<V> TraversalRule<V> for Any {
    #[inline]
    fn allows(&self, _grid: &Grid<V>, _from: Point, _to: Point) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::Adjacency;

    fn line(values: Vec<i32>) -> Grid<i32> {
        Grid::from_rows(vec![values], Adjacency::Cardinal).unwrap()
    }

    #[test]
    fn climb_allows_one_up_any_down() {
        let g = line(vec![0, 1, 3, 0]);
        let r = Climb::HEIGHT_MAP;
        assert!(r.allows(&g, Point::new(0, 0), Point::new(1, 0)));
        assert!(!r.allows(&g, Point::new(1, 0), Point::new(2, 0)));
        assert!(r.allows(&g, Point::new(2, 0), Point::new(3, 0)));
        assert!(r.allows(&g, Point::new(1, 0), Point::new(0, 0)));
    }

    #[test]
    fn climb_with_wider_rise() {
        let g = line(vec![0, 2]);
        assert!(!Climb::HEIGHT_MAP.allows(&g, Point::new(0, 0), Point::new(1, 0)));
        assert!(Climb::new(2).allows(&g, Point::new(0, 0), Point::new(1, 0)));
    }

    #[test]
    fn climb_on_bytes() {
        let g = Grid::from_rows(vec![vec![b'a', b'c']], Adjacency::Cardinal).unwrap();
        assert!(!Climb::HEIGHT_MAP.allows(&g, Point::new(0, 0), Point::new(1, 0)));
        assert!(Climb::HEIGHT_MAP.allows(&g, Point::new(1, 0), Point::new(0, 0)));
    }

    #[test]
    fn climb_saturates_at_extreme_heights() {
        let g = Grid::from_rows(vec![vec![i64::MAX, i64::MAX, i64::MIN]], Adjacency::Cardinal)
            .unwrap();
        let r = Climb::HEIGHT_MAP;
        assert!(r.allows(&g, Point::new(0, 0), Point::new(1, 0)));
        assert!(r.allows(&g, Point::new(1, 0), Point::new(2, 0)));
        assert!(!r.allows(&g, Point::new(2, 0), Point::new(1, 0)));
        assert!(Climb::new(i64::MAX).allows(&g, Point::new(1, 0), Point::new(0, 0)));
        assert!(!Climb::new(i64::MIN).allows(&g, Point::new(0, 0), Point::new(1, 0)));

        let search = crate::Search::new(&g, r);
        assert_eq!(search.distance(&[Point::new(0, 0)], Point::new(1, 0)), Some(1));
        assert_eq!(search.distance(&[Point::new(2, 0)], Point::new(0, 0)), None);
    }

    #[test]
    fn passable_checks_destination() {
        let g = Grid::from_rows(vec![vec!['.', '#']], Adjacency::Cardinal).unwrap();
        let r = Passable(|c: &char| *c != '#');
        assert!(!r.allows(&g, Point::new(0, 0), Point::new(1, 0)));
        assert!(r.allows(&g, Point::new(1, 0), Point::new(0, 0)));
    }

    #[test]
    fn closure_rule_has_unit_cost() {
        let g = line(vec![5, 5]);
        let r = |g: &Grid<i32>, a: Point, b: Point| g[a] == g[b];
        assert!(r.allows(&g, Point::new(0, 0), Point::new(1, 0)));
        assert_eq!(r.cost(&g, Point::new(0, 0), Point::new(1, 0)), 1);
        assert!(Any.allows(&g, Point::new(0, 0), Point::new(1, 0)));
    }
}
