//! Test-only height maps.

use gridwalk_core::{Adjacency, Grid, Point};

pub(crate) const HILL: &[&str] = &["Sabqponm", "abcryxxl", "accszExk", "acctuvwj", "abdefghi"];

/// Parse rows of `a`..`z` into elevations 0..=25. `S` marks the start
/// (elevation 0) and `E` the end (elevation 25).
pub(crate) fn height_map(rows: &[&str]) -> (Grid<i32>, Point, Point) {
    let mut start = None;
    let mut end = None;
    let cells: Vec<Vec<i32>> = rows
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.bytes()
                .enumerate()
                .map(|(x, b)| match b {
                    b'S' => {
                        start = Some(Point::new(x as i32, y as i32));
                        0
                    }
                    b'E' => {
                        end = Some(Point::new(x as i32, y as i32));
                        25
                    }
                    _ => (b - b'a') as i32,
                })
                .collect::<Vec<i32>>()
        })
        .collect();
    let grid = Grid::from_rows(cells, Adjacency::Cardinal).unwrap();
    (grid, start.unwrap(), end.unwrap())
}

#[test]
fn parses_markers() {
    let (grid, start, end) = height_map(HILL);
    assert_eq!(grid.size(), Point::new(8, 5));
    assert_eq!(start, Point::new(0, 0));
    assert_eq!(end, Point::new(5, 2));
    assert_eq!(grid[end], 25);
    assert!(grid.iter().all(|(_, &h)| (0..=25).contains(&h)));
}
