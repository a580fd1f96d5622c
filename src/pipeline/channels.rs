//! Multi-channel `prep -> normalize -> map` pipeline.
//!
//! Each channel (amplitude, brightness, energy, ...) is an independent unit of work. In
//! parallel mode channels run on a dedicated rayon pool; results are always returned in
//! channel order and are identical to a sequential run.

use rayon::prelude::*;

use crate::foundation::core::GridOrder;
use crate::foundation::error::{HilbertError, HilbertResult};
use crate::grid::mapper::{Grid, map_to_grid};
use crate::prep::scale::normalize;
use crate::prep::truncate::prep_for_hilbert;

/// Options controlling how each channel is prepared and mapped.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChannelOpts {
    /// Lower bound of the normalized range.
    pub new_min: f64,
    /// Upper bound of the normalized range.
    pub new_max: f64,
    /// Keep at most this many normalized values per channel.
    pub max_len: Option<usize>,
    /// Explicit grid order. `None` infers it from the kept length.
    pub order: Option<u32>,
    /// Map channels on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for ChannelOpts {
    fn default() -> Self {
        Self {
            new_min: 0.0,
            new_max: 255.0,
            max_len: None,
            order: None,
            parallel: false,
            threads: None,
        }
    }
}

impl ChannelOpts {
    /// Parse options from JSON; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> HilbertResult<Self> {
        let opts: Self = serde_json::from_str(json).map_err(|e| {
            HilbertError::invalid_argument(format!("invalid channel options: {e}"))
        })?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check the options without running anything.
    pub fn validate(&self) -> HilbertResult<()> {
        if !self.new_min.is_finite() || !self.new_max.is_finite() {
            return Err(HilbertError::invalid_argument(
                "channel range bounds must be finite",
            ));
        }
        if self.max_len == Some(0) {
            return Err(HilbertError::invalid_argument(
                "channel 'max_len' must be >= 1 when set",
            ));
        }
        if let Some(n) = self.order {
            GridOrder::new(n)?;
        }
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(HilbertError::invalid_argument(
                "channel threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Run one channel through `prep_for_hilbert -> normalize -> truncate -> map_to_grid`.
pub fn map_channel(seq: &[f64], opts: &ChannelOpts) -> HilbertResult<Grid<f64>> {
    let prepped = prep_for_hilbert(seq)?;
    let scaled = normalize(prepped, opts.new_min, opts.new_max)?;
    let kept = match opts.max_len {
        Some(max) => &scaled[..max.min(scaled.len())],
        None => &scaled[..],
    };
    map_to_grid(kept, opts.order)
}

/// Map every channel and return the grids in channel order.
///
/// The first failing channel (by index) determines the returned error.
#[tracing::instrument(
    skip(channels, opts),
    fields(channels = channels.len(), parallel = opts.parallel)
)]
pub fn map_channels<C>(channels: &[C], opts: &ChannelOpts) -> HilbertResult<Vec<Grid<f64>>>
where
    C: AsRef<[f64]> + Sync,
{
    opts.validate()?;

    let run = |(idx, seq): (usize, &C)| -> HilbertResult<Grid<f64>> {
        let grid =
            map_channel(seq.as_ref(), opts).map_err(|e| e.context(format!("channel {idx}")))?;
        tracing::debug!(
            channel = idx,
            order = grid.order().get(),
            filled = grid.filled(),
            "channel mapped"
        );
        Ok(grid)
    };

    if !opts.parallel {
        return channels.iter().enumerate().map(run).collect();
    }

    let pool = build_thread_pool(opts.threads)?;
    let results: Vec<HilbertResult<Grid<f64>>> =
        pool.install(|| channels.par_iter().enumerate().map(run).collect());
    results.into_iter().collect()
}

/// Compose three channel grids into one RGB8 grid.
///
/// Values are rounded and clamped to `0..=255`. A stacked cell is empty when any of its
/// channel cells is empty.
pub fn stack_rgb8(r: &Grid<f64>, g: &Grid<f64>, b: &Grid<f64>) -> HilbertResult<Grid<[u8; 3]>> {
    let order = r.order();
    if g.order() != order || b.order() != order {
        return Err(HilbertError::invalid_argument(format!(
            "cannot stack grids of orders {}, {} and {}",
            order.get(),
            g.order().get(),
            b.order().get()
        )));
    }

    let cells = r
        .cells()
        .iter()
        .zip(g.cells())
        .zip(b.cells())
        .map(|((r, g), b)| match (r, g, b) {
            (Some(r), Some(g), Some(b)) => Some([to_u8(*r), to_u8(*g), to_u8(*b)]),
            _ => None,
        })
        .collect();
    Ok(Grid::from_cells(order, cells))
}

fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn build_thread_pool(threads: Option<usize>) -> HilbertResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        HilbertError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/channels.rs"]
mod tests;
