use std::fmt;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no cells.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A dimension does not fit in an `i32` coordinate.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected} (every row must be the same size)"
            ),
            Self::TooLarge { width, height } => {
                write!(f, "grid: {width}x{height} exceeds the coordinate range")
            }
        }
    }
}

impl std::error::Error for GridError {}
