// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure conversions between logical and surface coordinates.
//!
//! Both functions work per axis: `forward` maps a logical point onto the
//! surface, `backward` is its exact inverse for any non-zero scale.

use kurbo::{Point, Vec2};

/// Scale that leaves coordinates unchanged; the default when none is given.
pub const IDENTITY_SCALE: Vec2 = Vec2::new(1.0, 1.0);

/// Surface coordinates of a logical point: `logical * scale + offset`.
#[inline]
#[must_use]
pub fn forward(logical: Point, offset: Vec2, scale: Vec2) -> Point {
    Point::new(
        logical.x * scale.x + offset.x,
        logical.y * scale.y + offset.y,
    )
}

/// Logical coordinates of a surface point: `(surface - offset) / scale`.
#[inline]
#[must_use]
pub fn backward(surface: Point, offset: Vec2, scale: Vec2) -> Point {
    Point::new(
        (surface.x - offset.x) / scale.x,
        (surface.y - offset.y) / scale.y,
    )
}
