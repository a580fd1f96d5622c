//! Traversal-order recovery for inspecting mapped grids.
//!
//! This is a diagnostic aid, not an inverse of [`map_to_grid`](crate::map_to_grid). It
//! assumes the non-empty values are pairwise distinct and totally ordered (for example the
//! indices `0..len` mapped as values). Duplicate values are not detected; their relative
//! order in the recovered path is unspecified.

use std::cmp::Ordering;

use crate::foundation::core::GridPos;
use crate::foundation::error::{HilbertError, HilbertResult};
use crate::grid::mapper::Grid;

/// Grid positions of the non-empty values, in ascending value order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TraversalPath {
    /// Positions in traversal order.
    pub positions: Vec<GridPos>,
}

/// Recover the traversal order of `grid` by sorting its values.
///
/// Fails with [`HilbertError::InvalidArgument`] when a value is not comparable with
/// itself (e.g. a NaN).
pub fn reconstruct_path<T: PartialOrd>(grid: &Grid<T>) -> HilbertResult<TraversalPath> {
    let mut filled: Vec<(GridPos, &T)> = grid.iter_filled().collect();

    if filled.iter().any(|(_, v)| v.partial_cmp(v).is_none()) {
        return Err(HilbertError::invalid_argument(
            "grid values are not totally ordered; path cannot be reconstructed",
        ));
    }
    filled.sort_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal));

    Ok(TraversalPath {
        positions: filled.into_iter().map(|(pos, _)| pos).collect(),
    })
}

impl TraversalPath {
    /// Number of positions in the path.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` when the grid held no values.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Chebyshev distance of every consecutive pair of positions.
    pub fn steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.windows(2).map(|w| w[0].chebyshev(w[1]))
    }

    /// Largest single step; `0` for paths shorter than two positions.
    pub fn max_step(&self) -> usize {
        self.steps().max().unwrap_or(0)
    }

    /// Mean step length; `0.0` for paths shorter than two positions.
    pub fn mean_step(&self) -> f64 {
        let n = self.positions.len().saturating_sub(1);
        if n == 0 {
            return 0.0;
        }
        self.steps().sum::<usize>() as f64 / n as f64
    }

    /// `true` when every step moves to an adjacent cell.
    pub fn is_contiguous(&self) -> bool {
        self.steps().all(|s| s == 1)
    }

    /// Summary counters for reporting.
    pub fn stats(&self) -> PathStats {
        PathStats {
            positions: self.len(),
            max_step: self.max_step(),
            mean_step: self.mean_step(),
            contiguous: self.is_contiguous(),
        }
    }
}

/// Aggregated step statistics of a [`TraversalPath`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PathStats {
    /// Number of positions.
    pub positions: usize,
    /// Largest Chebyshev step.
    pub max_step: usize,
    /// Mean Chebyshev step.
    pub mean_step: f64,
    /// All steps equal one.
    pub contiguous: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/diagnostic/path.rs"]
mod tests;
