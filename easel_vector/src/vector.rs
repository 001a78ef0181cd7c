// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Index, IndexMut};

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Per-coordinate tolerance used by [`Vector::is_equal`] and [`is_equal`].
pub const EPSILON: f64 = 1e-10;

/// Returns `true` if `lhs` and `rhs` differ by less than [`EPSILON`].
#[inline]
#[must_use]
pub fn is_equal(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() < EPSILON
}

/// Mutable, fixed-length numeric vector.
///
/// Arithmetic is applied **in place** and returns `&mut Self` so calls can be
/// chained. Callers that need to keep the original value call `.clone()` first:
///
/// ```
/// use easel_vector::Vector;
///
/// let v = Vector::from([1.0, 2.0]);
/// let w = Vector::from([3.0, 4.0]);
///
/// let mut sum = v.clone();
/// sum.add(&w);
/// assert_eq!(sum.as_slice(), &[4.0, 6.0]);
/// // `v` is untouched.
/// assert_eq!(v.as_slice(), &[1.0, 2.0]);
/// ```
///
/// The length only changes through [`Vector::set`] with a source of a
/// different length.
///
/// # Panics
///
/// Binary operations panic if the operand has fewer coordinates than `self`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    coords: SmallVec<[f64; 4]>,
}

impl Vector {
    /// Creates a vector from a coordinate slice.
    #[must_use]
    pub fn new(coords: &[f64]) -> Self {
        Self {
            coords: SmallVec::from_slice(coords),
        }
    }

    /// Creates a vector of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            coords: SmallVec::from_elem(0.0, len),
        }
    }

    /// Number of coordinates.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` for a zero-length vector.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Iterates over the coordinates.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.coords.iter()
    }

    /// First coordinate, or `NaN` if the vector is empty.
    #[inline]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.first().copied().unwrap_or(f64::NAN)
    }

    /// Second coordinate, or `NaN` if the vector has fewer than two.
    #[inline]
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.get(1).copied().unwrap_or(f64::NAN)
    }

    /// Euclidean length.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.abs2().sqrt()
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn abs2(&self) -> f64 {
        self.coords.iter().map(|c| c * c).sum()
    }

    /// Adds `other` coordinate-wise.
    pub fn add(&mut self, other: impl AsRef<[f64]>) -> &mut Self {
        self.zip_apply(other.as_ref(), |a, b| *a += b)
    }

    /// Subtracts `other` coordinate-wise.
    pub fn sub(&mut self, other: impl AsRef<[f64]>) -> &mut Self {
        self.zip_apply(other.as_ref(), |a, b| *a -= b)
    }

    /// Multiplies every coordinate by `factor`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for c in &mut self.coords {
            *c *= factor;
        }
        self
    }

    /// Divides every coordinate by `divisor`.
    pub fn divide(&mut self, divisor: f64) -> &mut Self {
        for c in &mut self.coords {
            *c /= divisor;
        }
        self
    }

    /// Multiplies coordinate-wise by `other`.
    pub fn mul_coords(&mut self, other: impl AsRef<[f64]>) -> &mut Self {
        self.zip_apply(other.as_ref(), |a, b| *a *= b)
    }

    /// Divides coordinate-wise by `other`.
    pub fn div_coords(&mut self, other: impl AsRef<[f64]>) -> &mut Self {
        self.zip_apply(other.as_ref(), |a, b| *a /= b)
    }

    /// Negates every coordinate.
    pub fn negate(&mut self) -> &mut Self {
        for c in &mut self.coords {
            *c = -*c;
        }
        self
    }

    /// Sets every coordinate to zero.
    pub fn zero(&mut self) -> &mut Self {
        for c in &mut self.coords {
            *c = 0.0;
        }
        self
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: impl AsRef<[f64]>) -> f64 {
        let other = other.as_ref();
        assert!(other.len() >= self.len(), "vector length mismatch");
        self.coords.iter().zip(other).map(|(a, b)| a * b).sum()
    }

    /// Signed area of the parallelogram spanned by the first two coordinates.
    #[must_use]
    pub fn cross_2d(&self, other: impl AsRef<[f64]>) -> f64 {
        let other = other.as_ref();
        self.coords[0] * other[1] - other[0] * self.coords[1]
    }

    /// 3D cross product. Returns a new vector.
    #[must_use]
    pub fn cross_3d(&self, other: impl AsRef<[f64]>) -> Self {
        let o = other.as_ref();
        let s = &self.coords;
        Self::from([
            s[1] * o[2] - s[2] * o[1],
            s[2] * o[0] - s[0] * o[2],
            s[0] * o[1] - s[1] * o[0],
        ])
    }

    /// Rotates the first two coordinates by `angle` radians, counter-clockwise.
    pub fn rotate_2d(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let x = self.coords[0] * cos - self.coords[1] * sin;
        let y = self.coords[0] * sin + self.coords[1] * cos;
        self.coords[0] = x;
        self.coords[1] = y;
        self
    }

    /// Scales to unit length. A zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.abs();
        if len == 0.0 {
            return self;
        }
        self.divide(len)
    }

    /// Unsigned angle between `self` and `other`, in radians.
    ///
    /// Returns `0.0` when either vector has zero length.
    #[must_use]
    pub fn angle_with(&self, other: impl AsRef<[f64]>) -> f64 {
        let other = Self::new(other.as_ref());
        let cos = self.dot(&other) / (self.abs() * other.abs());
        // Rounding can push `cos` slightly outside [-1, 1].
        let angle = cos.clamp(-1.0, 1.0).acos();
        if angle.is_nan() { 0.0 } else { angle }
    }

    /// Coordinate-wise equality within [`EPSILON`].
    #[must_use]
    pub fn is_equal(&self, other: impl AsRef<[f64]>) -> bool {
        let other = other.as_ref();
        other.len() >= self.len()
            && self
                .coords
                .iter()
                .zip(other)
                .all(|(a, b)| is_equal(*a, *b))
    }

    /// Returns `true` if the length is 1 within [`EPSILON`].
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        is_equal(self.abs(), 1.0)
    }

    /// Returns `true` if any coordinate is `NaN`.
    #[must_use]
    pub fn has_nan(&self) -> bool {
        self.coords.iter().any(|c| c.is_nan())
    }

    /// Copies `values` into `self`, resizing if the lengths differ.
    pub fn set(&mut self, values: impl AsRef<[f64]>) -> &mut Self {
        let values = values.as_ref();
        self.coords.clear();
        self.coords.extend_from_slice(values);
        self
    }

    /// The first two coordinates as a point.
    #[must_use]
    pub fn to_point(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    /// The first two coordinates as a displacement.
    #[must_use]
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    fn zip_apply(&mut self, other: &[f64], f: impl Fn(&mut f64, f64)) -> &mut Self {
        assert!(other.len() >= self.len(), "vector length mismatch");
        for (a, b) in self.coords.iter_mut().zip(other) {
            f(a, *b);
        }
        self
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.coords
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coords[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.coords[index]
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(coords: [f64; N]) -> Self {
        Self::new(&coords)
    }
}

impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        Self::from([p.x, p.y])
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self::from([v.x, v.y])
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn add_then_sub_restores_original() {
        let samples = [
            ([1.0, 2.0], [3.0, -4.0]),
            ([0.0, 0.0], [1e6, -1e-6]),
            ([-7.5, 0.25], [0.1, 0.2]),
        ];
        for (v, w) in samples {
            let v = Vector::from(v);
            assert!(v.clone().add(w).sub(w).is_equal(&v));
        }
    }

    #[test]
    fn operations_mutate_in_place_and_chain() {
        let mut v = Vector::from([1.0, 2.0, 3.0]);
        v.scale(2.0).add([1.0, 1.0, 1.0]).divide(3.0);
        assert!(v.is_equal([1.0, 5.0 / 3.0, 7.0 / 3.0]));

        v.negate();
        assert!(v.is_equal([-1.0, -5.0 / 3.0, -7.0 / 3.0]));
        v.zero();
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn coordinate_wise_products() {
        let mut v = Vector::from([2.0, 9.0]);
        v.mul_coords([3.0, 0.5]);
        assert_eq!(v.as_slice(), &[6.0, 4.5]);
        v.div_coords([2.0, 4.5]);
        assert_eq!(v.as_slice(), &[3.0, 1.0]);
    }

    #[test]
    fn normalize_gives_unit_length() {
        for v in [[3.0, 4.0], [-1.0, 0.0], [1e-3, 7.0]] {
            let mut v = Vector::from(v);
            v.normalize();
            assert!((v.abs() - 1.0).abs() < 1e-9);
            assert!(v.is_normalized());
        }
    }

    #[test]
    fn normalize_zero_vector_is_noop() {
        let mut v = Vector::zeros(2);
        v.normalize();
        assert_eq!(v.as_slice(), &[0.0, 0.0]);
        assert!(!v.has_nan());
    }

    #[test]
    fn angle_with_self_is_zero() {
        for v in [[1.0, 0.0], [3.0, -4.0], [0.1, 0.2]] {
            let v = Vector::from(v);
            assert!(v.angle_with(&v).abs() < 1e-6);
        }
    }

    #[test]
    fn angle_with_zero_vector_is_zero() {
        let v = Vector::from([1.0, 1.0]);
        assert_eq!(v.angle_with([0.0, 0.0]), 0.0);
    }

    #[test]
    fn angle_between_axes() {
        let x = Vector::from([1.0, 0.0]);
        assert!((x.angle_with([0.0, 2.0]) - FRAC_PI_2).abs() < 1e-9);
        assert!((x.angle_with([-1.0, 0.0]) - PI).abs() < 1e-9);
    }

    #[test]
    fn products() {
        let a = Vector::from([1.0, 0.0, 0.0]);
        let b = Vector::from([0.0, 1.0, 0.0]);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross_2d(&b), 1.0);
        assert_eq!(a.cross_3d(&b).as_slice(), &[0.0, 0.0, 1.0]);
        assert_eq!(Vector::from([1.0, 2.0]).dot([3.0, 4.0]), 11.0);
    }

    #[test]
    fn rotate_quarter_turn() {
        let mut v = Vector::from([1.0, 0.0]);
        v.rotate_2d(FRAC_PI_2);
        assert!(v.is_equal([0.0, 1.0]));
    }

    #[test]
    fn set_resizes() {
        let mut v = Vector::from([1.0, 2.0]);
        v.set([4.0, 5.0, 6.0]);
        assert_eq!(v.len(), 3);
        assert_eq!(v[2], 6.0);
        v.set([9.0]);
        assert_eq!(v.as_slice(), &[9.0]);
    }

    #[test]
    fn nan_detection() {
        assert!(Vector::from([0.0, f64::NAN]).has_nan());
        assert!(!Vector::from([0.0, 1.0]).has_nan());
    }

    #[test]
    fn is_equal_tolerates_rounding() {
        let v = Vector::from([0.1 + 0.2, 1.0]);
        assert!(v.is_equal([0.3, 1.0]));
        assert!(!v.is_equal([0.3, 1.001]));
        assert!(!v.is_equal([0.3]));
    }

    #[test]
    fn kurbo_conversions() {
        let v = Vector::from(Point::new(1.5, -2.0));
        assert_eq!(v.to_point(), Point::new(1.5, -2.0));
        assert_eq!(v.to_vec2(), Vec2::new(1.5, -2.0));
    }

    #[test]
    #[should_panic(expected = "vector length mismatch")]
    fn mismatched_lengths_panic() {
        let mut v = Vector::from([1.0, 2.0, 3.0]);
        v.add([1.0]);
    }
}
