use crate::foundation::error::{HilbertError, HilbertResult};

/// Side length `n` of a square Hilbert grid; always a power of two `>= 1`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridOrder(u32);

impl GridOrder {
    /// Validate `n` as a grid order.
    pub fn new(n: u32) -> HilbertResult<Self> {
        if n == 0 || !n.is_power_of_two() {
            return Err(HilbertError::invalid_argument(format!(
                "grid order must be a power of two >= 1, got {n}"
            )));
        }
        Ok(Self(n))
    }

    /// Smallest order whose grid holds at least `len` cells.
    ///
    /// Starts at 1 and doubles, so an empty sequence yields a 1x1 grid.
    pub fn fitting(len: usize) -> HilbertResult<Self> {
        let len = len as u64;
        let mut n = 1u64;
        while n.checked_mul(n).is_some_and(|cells| cells < len) {
            n *= 2;
        }
        let n = u32::try_from(n).map_err(|_| {
            HilbertError::invalid_argument(format!("{len} values exceed the largest grid order"))
        })?;
        Ok(Self(n))
    }

    /// The raw side length.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Side length as an index type.
    pub fn side(self) -> usize {
        self.0 as usize
    }

    /// Number of cells, `n * n`.
    pub fn cells(self) -> u64 {
        u64::from(self.0) * u64::from(self.0)
    }

    /// Curve levels, `log2(n)`.
    pub fn levels(self) -> u32 {
        self.0.trailing_zeros()
    }
}

impl TryFrom<u32> for GridOrder {
    type Error = HilbertError;

    fn try_from(n: u32) -> HilbertResult<Self> {
        Self::new(n)
    }
}

impl From<GridOrder> for u32 {
    fn from(order: GridOrder) -> Self {
        order.0
    }
}

/// Curve coordinate produced by [`d2xy`](crate::d2xy).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    /// First curve coordinate.
    pub x: u32,
    /// Second curve coordinate.
    pub y: u32,
}

impl Point {
    /// Build a point from its coordinates.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance to `other`.
    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Row/column address of a grid cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridPos {
    /// Row index (outer index of [`Grid::to_rows`](crate::Grid::to_rows)).
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl GridPos {
    /// Build a position from row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance to `other`.
    pub fn chebyshev(self, other: Self) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

/// A curve point lands in row `x`, column `y`.
impl From<Point> for GridPos {
    fn from(p: Point) -> Self {
        Self {
            row: p.x as usize,
            col: p.y as usize,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
