//! Sequence preparation ahead of curve mapping.

pub(crate) mod scale;
pub(crate) mod truncate;
