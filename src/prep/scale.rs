//! Linear value rescaling and resampling.

use crate::foundation::error::{HilbertError, HilbertResult};

/// Rescale `arr` linearly from its own `[min, max]` onto `[new_min, new_max]`.
///
/// A constant input has no range to stretch and maps to `new_min` everywhere. Non-finite
/// values or bounds are rejected. An empty input yields an empty output.
pub fn normalize(arr: &[f64], new_min: f64, new_max: f64) -> HilbertResult<Vec<f64>> {
    if !new_min.is_finite() || !new_max.is_finite() {
        return Err(HilbertError::invalid_argument(format!(
            "normalize bounds must be finite, got [{new_min}, {new_max}]"
        )));
    }
    if let Some(i) = arr.iter().position(|v| !v.is_finite()) {
        return Err(HilbertError::invalid_argument(format!(
            "normalize input has non-finite value {} at index {i}",
            arr[i]
        )));
    }

    let Some((old_min, old_max)) = min_max(arr) else {
        return Ok(Vec::new());
    };
    if old_min == old_max {
        return Ok(vec![new_min; arr.len()]);
    }

    let span = old_max - old_min;
    let new_span = new_max - new_min;
    let scaled = if span.is_finite() {
        arr.iter().map(|&x| (x - old_min) / span).collect::<Vec<_>>()
    } else {
        // Range wider than f64::MAX; halving keeps every difference finite.
        let half_span = old_max / 2.0 - old_min / 2.0;
        arr.iter()
            .map(|&x| (x / 2.0 - old_min / 2.0) / half_span)
            .collect()
    };
    Ok(scaled
        .into_iter()
        .map(|t| {
            if new_span.is_finite() {
                t * new_span + new_min
            } else {
                new_min * (1.0 - t) + new_max * t
            }
        })
        .collect())
}

fn min_max(arr: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = arr.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Resample `src` to `len` points by linear interpolation.
///
/// Sample positions are spread evenly over `[0, src.len()]`; positions past the last
/// sample hold its value. This stretches a short feature track (one value per analysis
/// frame) to the length of the signal it was computed from.
pub fn resample_linear(src: &[f64], len: usize) -> HilbertResult<Vec<f64>> {
    let Some(&last) = src.last() else {
        return Err(HilbertError::invalid_argument(
            "cannot resample an empty sequence",
        ));
    };
    if len == 0 {
        return Ok(Vec::new());
    }
    if len == 1 {
        return Ok(vec![src[0]]);
    }

    let step = src.len() as f64 / (len - 1) as f64;
    let last_idx = src.len() - 1;
    Ok((0..len)
        .map(|i| {
            let pos = i as f64 * step;
            let i0 = pos.floor() as usize;
            if i0 >= last_idx {
                return last;
            }
            let frac = pos - i0 as f64;
            src[i0] + (src[i0 + 1] - src[i0]) * frac
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/prep/scale.rs"]
mod tests;
