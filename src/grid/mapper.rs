//! Placement of an ordered sequence onto a square grid along the Hilbert curve.

use crate::curve::indexer::d2xy_unchecked;
use crate::foundation::core::{GridOrder, GridPos};
use crate::foundation::error::{HilbertError, HilbertResult};

/// Square `n x n` grid stored flat in row-major order.
///
/// Each cell is `Some(value)` or `None`, the empty sentinel for cells the curve never
/// reached. Grids are built once by [`map_to_grid`] (or [`Grid::from_rows`]) and expose no
/// mutating API afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    order: GridOrder,
    cells: Vec<Option<T>>,
}

/// Place `values` along the Hilbert curve of an `n x n` grid.
///
/// Value `i` goes to the cell at curve distance `i`. With `n == None` the smallest power of
/// two with `n * n >= values.len()` is used. Values past `n * n` are dropped; cells past
/// `values.len()` stay empty.
///
/// The curve's `x` coordinate selects the row and `y` the column, so a point `(x, y)` is
/// read back with `grid.get(x, y)` rather than the `grid[y][x]` image convention.
///
/// ```
/// let grid = hilbertmap::map_to_grid(&[1, 2, 3, 4], None).unwrap();
/// assert_eq!(grid.to_rows(), vec![vec![Some(1), Some(2)], vec![Some(4), Some(3)]]);
/// ```
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn map_to_grid<T: Clone>(values: &[T], n: Option<u32>) -> HilbertResult<Grid<T>> {
    let order = match n {
        Some(n) => GridOrder::new(n)?,
        None => GridOrder::fitting(values.len())?,
    };
    map_onto(values, order)
}

pub(crate) fn map_onto<T: Clone>(values: &[T], order: GridOrder) -> HilbertResult<Grid<T>> {
    let capacity = cell_count(order)?;
    let side = order.side();
    let mut cells = Vec::new();
    cells.try_reserve_exact(capacity).map_err(|e| {
        HilbertError::invalid_argument(format!(
            "cannot allocate a grid of order {}: {e}",
            order.get()
        ))
    })?;
    cells.resize(capacity, None);

    let placed = values.len().min(capacity);
    for (d, value) in values[..placed].iter().enumerate() {
        let pos = GridPos::from(d2xy_unchecked(order, d as u64));
        cells[pos.row * side + pos.col] = Some(value.clone());
    }

    if values.len() > placed {
        tracing::debug!(
            order = order.get(),
            dropped = values.len() - placed,
            "values beyond grid capacity dropped"
        );
    }

    Ok(Grid { order, cells })
}

fn cell_count(order: GridOrder) -> HilbertResult<usize> {
    usize::try_from(order.cells()).map_err(|_| {
        HilbertError::invalid_argument(format!(
            "grid order {} does not fit in addressable memory",
            order.get()
        ))
    })
}

impl<T> Grid<T> {
    pub(crate) fn from_cells(order: GridOrder, cells: Vec<Option<T>>) -> Self {
        debug_assert_eq!(cells.len() as u64, order.cells());
        Self { order, cells }
    }

    /// Rebuild a grid from nested rows, e.g. a previously serialized grid.
    ///
    /// The row count must be a power of two and every row must have that many cells.
    pub fn from_rows(rows: Vec<Vec<Option<T>>>) -> HilbertResult<Self> {
        let side = rows.len();
        let order = u32::try_from(side)
            .map_err(|_| HilbertError::invalid_argument(format!("{side} rows is too many")))
            .and_then(GridOrder::new)?;

        let mut cells = Vec::with_capacity(side * side);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != side {
                return Err(HilbertError::invalid_argument(format!(
                    "row {i} has {} cells, expected {side}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Self { order, cells })
    }

    /// Grid order `n`.
    pub fn order(&self) -> GridOrder {
        self.order
    }

    /// Side length `n` as an index.
    pub fn side(&self) -> usize {
        self.order.side()
    }

    /// Value at `(row, col)`; `None` when the cell is empty or outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        let side = self.side();
        if row >= side || col >= side {
            return None;
        }
        self.cells[row * side + col].as_ref()
    }

    /// Value at `pos`; see [`Grid::get`].
    pub fn at(&self, pos: GridPos) -> Option<&T> {
        self.get(pos.row, pos.col)
    }

    /// Value stored at curve distance `d`.
    pub fn at_distance(&self, d: u64) -> HilbertResult<Option<&T>> {
        let pos = GridPos::from(self.order.point_at(d)?);
        Ok(self.at(pos))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Option<T>]> {
        self.cells.chunks_exact(self.side())
    }

    /// Iterate non-empty cells with their positions, row-major.
    pub fn iter_filled(&self) -> impl Iterator<Item = (GridPos, &T)> {
        let side = self.side();
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|value| (GridPos::new(i / side, i % side), value))
        })
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// `true` when no cell holds the empty sentinel.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Apply `f` to every value, keeping empty cells empty.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            order: self.order,
            cells: self.cells.iter().map(|c| c.as_ref().map(&mut f)).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Copy the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Option<T>>> {
        self.rows().map(<[Option<T>]>::to_vec).collect()
    }
}

impl<T: serde::Serialize> serde::Serialize for Grid<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<Vec<Option<T>>> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/mapper.rs"]
mod tests;
