//! Hilbert curve index math: distance to coordinate and back.
//!
//! Both directions walk the curve one quadrant level at a time. At each level two bits of
//! the distance select a quadrant, and [`rotate`] re-orients the partial point so the
//! sub-curve connects to its neighbours.

use crate::foundation::core::{GridOrder, Point};
use crate::foundation::error::{HilbertError, HilbertResult};

/// Apply the Hilbert quadrant rotation rule for a sub-square of side `scale`.
///
/// With `ry == 0` the point is reflected about the sub-square when `rx == 1`, then `x` and
/// `y` are swapped. With `ry == 1` the point is returned unchanged.
///
/// Reflection uses wrapping arithmetic, so a point outside the sub-square (which happens in
/// [`xy2d`]) stays consistent modulo `2^32` instead of underflowing.
#[inline]
pub fn rotate(scale: u32, rx: u32, ry: u32, point: Point) -> Point {
    if ry != 0 {
        return point;
    }
    let Point { mut x, mut y } = point;
    if rx == 1 {
        let last = scale.wrapping_sub(1);
        x = last.wrapping_sub(x);
        y = last.wrapping_sub(y);
    }
    Point::new(y, x)
}

/// Convert a curve distance `d` to its coordinate on an `n x n` grid.
///
/// Fails with [`HilbertError::InvalidArgument`] when `n` is not a power of two and with
/// [`HilbertError::OutOfRange`] when `d >= n * n`.
pub fn d2xy(n: u32, d: u64) -> HilbertResult<Point> {
    GridOrder::new(n)?.point_at(d)
}

/// Convert a coordinate on an `n x n` grid back to its curve distance.
pub fn xy2d(n: u32, x: u32, y: u32) -> HilbertResult<u64> {
    GridOrder::new(n)?.distance_of(Point::new(x, y))
}

impl GridOrder {
    /// Coordinate of curve distance `d` on this grid.
    pub fn point_at(self, d: u64) -> HilbertResult<Point> {
        if d >= self.cells() {
            return Err(HilbertError::out_of_range(format!(
                "curve distance {d} outside [0, {}) for grid order {}",
                self.cells(),
                self.get()
            )));
        }
        Ok(d2xy_unchecked(self, d))
    }

    /// Curve distance of `point` on this grid.
    pub fn distance_of(self, point: Point) -> HilbertResult<u64> {
        let n = self.get();
        if point.x >= n || point.y >= n {
            return Err(HilbertError::out_of_range(format!(
                "point ({}, {}) outside a {n}x{n} grid",
                point.x, point.y
            )));
        }
        Ok(xy2d_unchecked(self, point))
    }
}

/// `d2xy` for a distance already known to be in range.
#[inline]
pub(crate) fn d2xy_unchecked(order: GridOrder, d: u64) -> Point {
    let n = order.get();
    let mut point = Point::default();
    let mut s = 1u32;
    let mut t = d;

    while s < n {
        let rx = ((t >> 1) & 1) as u32;
        let ry = ((t ^ u64::from(rx)) & 1) as u32;
        point = rotate(s, rx, ry, point);
        point.x += s * rx;
        point.y += s * ry;
        t >>= 2;
        s <<= 1;
    }

    point
}

#[inline]
fn xy2d_unchecked(order: GridOrder, point: Point) -> u64 {
    let mut point = point;
    let mut d = 0u64;
    let mut s = order.get() / 2;

    while s > 0 {
        let rx = u32::from((point.x & s) > 0);
        let ry = u32::from((point.y & s) > 0);
        d += u64::from(s) * u64::from(s) * u64::from((3 * rx) ^ ry);
        point = rotate(s, rx, ry, point);
        s /= 2;
    }

    d
}

#[cfg(test)]
#[path = "../../tests/unit/curve/indexer.rs"]
mod tests;
