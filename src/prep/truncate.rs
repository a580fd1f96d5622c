use crate::foundation::error::{HilbertError, HilbertResult};

/// Longest prefix of `seq` whose length is a power of four.
///
/// A `4^k` prefix exactly tiles a `2^k x 2^k` grid, so the mapped grid has no empty cells.
/// An empty sequence has no such prefix and is rejected.
pub fn prep_for_hilbert<T>(seq: &[T]) -> HilbertResult<&[T]> {
    if seq.is_empty() {
        return Err(HilbertError::invalid_argument(
            "cannot prepare an empty sequence for a Hilbert grid",
        ));
    }
    let len = largest_power_of_four_at_most(seq.len());
    if len < seq.len() {
        tracing::debug!(from = seq.len(), to = len, "sequence truncated to a power of four");
    }
    Ok(&seq[..len])
}

fn largest_power_of_four_at_most(n: usize) -> usize {
    let mut p = 1usize;
    while let Some(next) = p.checked_mul(4)
        && next <= n
    {
        p = next;
    }
    p
}

#[cfg(test)]
#[path = "../../tests/unit/prep/truncate.rs"]
mod tests;
