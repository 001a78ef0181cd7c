// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds, centers and simple statistics over point sets.
//!
//! Functions that work on points read the first two coordinates of each
//! [`Vector`]; empty inputs yield a two-dimensional zero vector unless noted.

use core::cmp::Ordering;

use kurbo::Rect;

use crate::Vector;

/// Sum of all vectors.
///
/// The result is at least two-dimensional and as wide as the widest input;
/// shorter inputs contribute zeros for their missing coordinates.
#[must_use]
pub fn vector_sum(vectors: &[Vector]) -> Vector {
    let len = vectors.iter().map(Vector::len).max().unwrap_or(0).max(2);
    let mut acc = Vector::zeros(len);
    for v in vectors {
        for (i, c) in v.iter().enumerate() {
            acc[i] += c;
        }
    }
    acc
}

/// Mean of `scalars`, or `0.0` if empty.
#[must_use]
pub fn average_scalar(scalars: &[f64]) -> f64 {
    if scalars.is_empty() {
        return 0.0;
    }
    scalars.iter().sum::<f64>() / scalars.len() as f64
}

/// Mean of `vectors`, or `[0, 0]` if empty.
#[must_use]
pub fn average_vector(vectors: &[Vector]) -> Vector {
    if vectors.is_empty() {
        return Vector::zeros(2);
    }
    let mut sum = vector_sum(vectors);
    sum.divide(vectors.len() as f64);
    sum
}

/// Median of `scalars`; the mean of the two middle values for even counts.
#[must_use]
pub fn median_scalar(scalars: &[f64]) -> f64 {
    if scalars.is_empty() {
        return 0.0;
    }
    let mut sorted = scalars.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        average_scalar(&sorted[mid - 1..=mid])
    } else {
        sorted[mid]
    }
}

/// Median vector when ordered by angle with the positive X axis.
///
/// For even counts the two middle vectors are averaged.
#[must_use]
pub fn median_vector_by_angle(vectors: &[Vector]) -> Vector {
    if vectors.is_empty() {
        return Vector::zeros(2);
    }
    let base = Vector::from([1.0, 0.0]);
    let mut sorted = vectors.to_vec();
    sorted.sort_by(|a, b| {
        a.angle_with(&base)
            .partial_cmp(&b.angle_with(&base))
            .unwrap_or(Ordering::Equal)
    });
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        average_vector(&sorted[mid - 1..=mid])
    } else {
        sorted.swap_remove(mid)
    }
}

/// Arithmetic center of `points`.
///
/// Unlike [`average_vector`], an empty input yields `NaN` coordinates.
#[must_use]
pub fn points_center(points: &[Vector]) -> Vector {
    let mut sum = vector_sum(points);
    sum.divide(points.len() as f64);
    sum
}

/// Axis-aligned bounds of `points` as `(min, max)` corners.
///
/// An empty input yields `([+inf, +inf], [-inf, -inf])`.
#[must_use]
pub fn points_bounds(points: &[Vector]) -> (Vector, Vector) {
    let mut min = Vector::from([f64::INFINITY, f64::INFINITY]);
    let mut max = Vector::from([f64::NEG_INFINITY, f64::NEG_INFINITY]);
    for p in points {
        min[0] = min[0].min(p.x());
        min[1] = min[1].min(p.y());
        max[0] = max[0].max(p.x());
        max[1] = max[1].max(p.y());
    }
    (min, max)
}

/// Bounds of `points` as a [`Rect`], or `None` for an empty set.
#[must_use]
pub fn points_rect(points: &[Vector]) -> Option<Rect> {
    if points.is_empty() {
        return None;
    }
    let (min, max) = points_bounds(points);
    Some(Rect::new(min.x(), min.y(), max.x(), max.y()))
}
