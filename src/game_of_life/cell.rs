//! Cell coordinates and the Moore neighbourhood

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// A position on the unbounded plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

/// Every live cell of one generation
pub type Generation = HashSet<Cell>;

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offset this cell, wrapping at the `i64` limits
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

// Row-major, so sorted cells read like the rendered pattern.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i64, i64) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The 8 cells surrounding `cell`.
///
/// Coordinates wrap at the `i64` limits, so the result always holds 8
/// distinct cells, none equal to `cell`. Near the limits the plane behaves
/// like a torus; patterns are not expected to get there.
pub fn neighbours(cell: Cell) -> [Cell; 8] {
    let mut result = [cell; 8];
    let offsets = iproduct!(-1i64..=1, -1i64..=1).filter(|&(dy, dx)| dx != 0 || dy != 0);
    for (slot, (dy, dx)) in result.iter_mut().zip(offsets) {
        *slot = cell.offset(dx, dy);
    }
    result
}

/// [`neighbours`] collected into a set
pub fn neighbour_set(cell: Cell) -> HashSet<Cell> {
    neighbours(cell).into_iter().collect()
}

/// Build a generation from `(x, y)` pairs
pub fn generation_from<I: IntoIterator<Item = (i64, i64)>>(cells: I) -> Generation {
    cells.into_iter().map(Cell::from).collect()
}
