// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::transform::{IDENTITY_SCALE, backward, forward};

/// Current pan/zoom state of a surface.
///
/// `offset` is expressed in surface pixels and `scale` is a per-axis zoom
/// factor. A logical point `p` is painted at `p * scale + offset`.
///
/// The struct is plain data: the surface that owns it passes it by reference
/// to every draw call and input handler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Translation in surface pixels.
    pub offset: Vec2,
    /// Per-axis zoom factor.
    pub scale: Vec2,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: IDENTITY_SCALE,
        }
    }
}

impl ViewConfig {
    /// Creates a view with the given offset and scale.
    #[must_use]
    pub const fn new(offset: Vec2, scale: Vec2) -> Self {
        Self { offset, scale }
    }

    /// Converts a logical point into surface coordinates.
    #[must_use]
    pub fn to_surface(&self, logical: Point) -> Point {
        forward(logical, self.offset, self.scale)
    }

    /// Converts a surface point into logical coordinates.
    #[must_use]
    pub fn to_logical(&self, surface: Point) -> Point {
        backward(surface, self.offset, self.scale)
    }

    /// The combined transform applied to the drawing context before painting.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }

    /// Pans by a delta in surface pixels.
    ///
    /// Since the offset itself lives in surface space, the same pixel delta
    /// moves content by the same on-screen distance at any zoom level.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Sets a uniform scale on both axes, keeping the logical point under
    /// `anchor` (in surface coordinates) fixed on screen.
    ///
    /// Callers are expected to clamp `scale` (see [`ZoomLimits::clamp`]).
    pub fn zoom_about(&mut self, anchor: Point, scale: f64) {
        let before = self.to_logical(anchor);
        self.scale = Vec2::new(scale, scale);
        let after = self.to_logical(anchor);
        self.offset = forward((after - before).to_point(), self.offset, self.scale).to_vec2();
    }

    /// Moves the view so that `logical` maps to the center of a surface of
    /// size `frame`, keeping the current scale.
    pub fn center_on(&mut self, logical: Point, frame: Size) {
        let center = backward(frame.to_rect().center(), Vec2::ZERO, self.scale);
        let delta = center - logical;
        self.offset = forward(delta.to_point(), Vec2::ZERO, self.scale).to_vec2();
    }

    /// The logical rectangle currently covered by a surface of size `frame`.
    #[must_use]
    pub fn visible_rect(&self, frame: Size) -> Rect {
        let top_left = self.to_logical(Point::ORIGIN);
        let bottom_right = self.to_logical(Point::new(frame.width, frame.height));
        Rect::from_points(top_left, bottom_right)
    }
}

/// Allowed range for the zoom factor.
///
/// The default range is `[0.05, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.05,
            max: 100.0,
        }
    }
}

impl ZoomLimits {
    /// Creates a range, swapping the bounds if `min > max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { min, max }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn default_is_identity() {
        let view = ViewConfig::default();
        let p = Point::new(12.0, -3.0);
        assert_eq!(view.to_surface(p), p);
        assert_eq!(view.affine(), Affine::IDENTITY);
    }

    #[test]
    fn affine_matches_forward() {
        let view = ViewConfig::new(Vec2::new(30.0, -12.0), Vec2::new(2.0, 0.5));
        let p = Point::new(7.0, 9.0);
        assert!(close(view.affine() * p, view.to_surface(p)));
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut view = ViewConfig::new(Vec2::new(40.0, 25.0), Vec2::new(1.5, 1.5));
        let limits = ZoomLimits::default();
        for (anchor, target) in [
            (Point::new(400.0, 300.0), 3.0),
            (Point::new(0.0, 0.0), 0.2),
            (Point::new(17.0, 512.0), 250.0),
        ] {
            let before = view.to_logical(anchor);
            view.zoom_about(anchor, limits.clamp(target));
            let after = view.to_logical(anchor);
            assert!(close(before, after));
        }
        assert_eq!(view.scale, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn center_on_maps_point_to_frame_center() {
        let frame = Size::new(800.0, 600.0);
        let mut view = ViewConfig::new(Vec2::new(-50.0, 80.0), Vec2::new(2.0, 2.0));
        let target = Point::new(120.0, -40.0);
        view.center_on(target, frame);
        assert!(close(view.to_surface(target), Point::new(400.0, 300.0)));
        assert_eq!(view.scale, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn visible_rect_follows_pan_and_zoom() {
        let frame = Size::new(200.0, 100.0);
        let mut view = ViewConfig::default();
        assert_eq!(view.visible_rect(frame), Rect::new(0.0, 0.0, 200.0, 100.0));

        view.pan_by(Vec2::new(20.0, 10.0));
        view.scale = Vec2::new(2.0, 2.0);
        assert_eq!(view.visible_rect(frame), Rect::new(-10.0, -5.0, 90.0, 45.0));
    }

    #[test]
    fn zoom_limits_normalize_and_clamp() {
        let limits = ZoomLimits::new(10.0, 0.5);
        assert_eq!(limits.min(), 0.5);
        assert_eq!(limits.max(), 10.0);
        assert_eq!(limits.clamp(0.1), 0.5);
        assert_eq!(limits.clamp(3.0), 3.0);
        assert_eq!(ZoomLimits::default().clamp(1e6), 100.0);
    }
}
