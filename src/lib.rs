//! hilbertmap lays one-dimensional sequences out on square grids along a Hilbert curve.
//!
//! Consecutive values of the input land in adjacent grid cells, so local structure in a
//! signal (an audio waveform, a brightness or energy track) stays visible as 2D texture.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: [`prep_for_hilbert`] trims a sequence to a power-of-four length and
//!    [`normalize`] rescales it into a target range.
//! 2. **Map**: [`map_to_grid`] places value `i` at curve distance `i` using [`d2xy`].
//! 3. **Consume**: the returned [`Grid`] is handed to whatever renders it.
//!
//! [`map_channels`] runs that pipeline over several independent channels, optionally on a
//! rayon pool, and [`stack_rgb8`] composes three channel grids into one RGB grid.
//! [`reconstruct_path`] is a diagnostic that recovers traversal order from a grid of
//! distinct values.
//!
//! All computations are pure and deterministic.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod curve;
mod diagnostic;
mod foundation;
mod grid;
mod pipeline;
mod prep;

pub use curve::indexer::{d2xy, rotate, xy2d};
pub use diagnostic::path::{PathStats, TraversalPath, reconstruct_path};
pub use foundation::core::{GridOrder, GridPos, Point};
pub use foundation::error::{HilbertError, HilbertResult};
pub use grid::mapper::{Grid, map_to_grid};
pub use pipeline::channels::{ChannelOpts, map_channel, map_channels, stack_rgb8};
pub use prep::scale::{normalize, resample_linear};
pub use prep::truncate::prep_for_hilbert;
