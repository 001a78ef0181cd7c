// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_imaging::{DrawContext, DrawContextExt};
use kurbo::{Point, Vec2};

use crate::{Drawable, Frame};

/// Ordered children painted under a shared translation and opacity.
///
/// A group whose `position.x` is NaN is skipped entirely for the frame; this
/// happens when a domain object has not been positioned yet.
#[derive(Debug, Default)]
pub struct Group {
    /// Translation applied before painting the children.
    pub position: Vec2,
    /// Global alpha applied to the children.
    pub opacity: Option<f32>,
    /// Children, painted in order.
    pub children: Vec<Box<dyn Drawable>>,
}

impl Group {
    /// Creates an opaque group.
    #[must_use]
    pub fn new(position: Vec2, children: Vec<Box<dyn Drawable>>) -> Self {
        Self {
            position,
            opacity: None,
            children,
        }
    }

    /// Sets the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Drawable + 'static) {
        self.children.push(Box::new(child));
    }
}

impl Drawable for Group {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        if self.position.x.is_nan() {
            return;
        }
        ctx.with_saved(|ctx| {
            ctx.translate(self.position);
            if let Some(alpha) = self.opacity {
                ctx.set_global_alpha(alpha);
            }
            for child in &self.children {
                child.draw(ctx, frame);
            }
        });
    }
}

/// Paints its content at a fixed pixel size regardless of zoom.
///
/// The content is still positioned in logical space: only the scale is
/// cancelled, so `NonScalable` is typically placed inside a translated
/// [`Group`].
#[derive(Debug)]
pub struct NonScalable<D> {
    inner: D,
}

impl<D: Drawable> NonScalable<D> {
    /// Wraps `inner`.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: Drawable> Drawable for NonScalable<D> {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        ctx.with_saved(|ctx| {
            ctx.scale(frame.inverse_scale());
            self.inner.draw(ctx, frame);
        });
    }
}

/// Pins its content to the bottom-right corner of the surface at a fixed
/// pixel size.
///
/// The content's origin is the corner itself, so overlays use negative
/// coordinates to extend back into the visible area.
#[derive(Debug)]
pub struct BottomRightFixed<D> {
    inner: D,
}

impl<D: Drawable> BottomRightFixed<D> {
    /// Wraps `inner`.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// The logical position of the surface's bottom-right corner in `frame`.
    #[must_use]
    pub fn anchor(frame: &Frame) -> Point {
        frame
            .view
            .to_logical(Point::new(frame.size.width, frame.size.height))
    }
}

impl<D: Drawable> Drawable for BottomRightFixed<D> {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        let anchor = Self::anchor(frame);
        ctx.with_saved(|ctx| {
            ctx.translate(anchor.to_vec2());
            ctx.scale(frame.inverse_scale());
            self.inner.draw(ctx, frame);
        });
    }
}

#[cfg(test)]
mod tests {
    use easel_imaging::Rgb;
    use easel_imaging::record::{CanvasOp, RecordingCanvas};
    use easel_view2d::ViewConfig;
    use kurbo::Size;

    use super::*;
    use crate::{Dot, Rectangle};

    fn frame() -> Frame {
        Frame::new(
            ViewConfig::new(Vec2::new(100.0, 50.0), Vec2::new(2.0, 4.0)),
            Size::new(800.0, 600.0),
        )
    }

    #[test]
    fn nan_position_skips_subtree() {
        let group = Group::new(
            Vec2::new(f64::NAN, 0.0),
            vec![Box::new(Dot::new(Point::ORIGIN, 1.0, Rgb::RED))],
        );
        let mut canvas = RecordingCanvas::new(Size::new(10.0, 10.0));
        group.draw(&mut canvas, &frame());
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn nested_groups_balance_save_and_restore() {
        let mut inner = Group::new(Vec2::new(1.0, 1.0), Vec::new()).with_opacity(0.5);
        inner.push(Dot::new(Point::ORIGIN, 1.0, Rgb::RED));
        inner.push(Group::new(Vec2::new(f64::NAN, 0.0), Vec::new()));

        let mut outer = Group::new(Vec2::new(5.0, 6.0), Vec::new());
        outer.push(inner);
        outer.push(NonScalable::new(Dot::new(Point::ORIGIN, 1.0, Rgb::GREEN)));

        let mut canvas = RecordingCanvas::new(Size::new(10.0, 10.0));
        outer.draw(&mut canvas, &frame());
        assert!(canvas.is_balanced());

        let ops = canvas.ops();
        assert!(matches!(ops[0], CanvasOp::Save));
        assert!(matches!(ops[1], CanvasOp::Translate(v) if v == Vec2::new(5.0, 6.0)));
        assert!(ops.iter().any(|op| matches!(op, CanvasOp::GlobalAlpha(a) if *a == 0.5)));
    }

    #[test]
    fn opacity_is_only_set_when_present() {
        let group = Group::new(Vec2::ZERO, Vec::new());
        let mut canvas = RecordingCanvas::new(Size::new(10.0, 10.0));
        group.draw(&mut canvas, &frame());
        assert!(
            !canvas
                .ops()
                .iter()
                .any(|op| matches!(op, CanvasOp::GlobalAlpha(_)))
        );
    }

    #[test]
    fn non_scalable_cancels_zoom() {
        let wrapped = NonScalable::new(Dot::new(Point::ORIGIN, 1.0, Rgb::GREEN));
        let mut canvas = RecordingCanvas::new(Size::new(10.0, 10.0));
        wrapped.draw(&mut canvas, &frame());
        assert!(matches!(canvas.ops()[1], CanvasOp::Scale(s) if s == Vec2::new(0.5, 0.25)));
        assert!(canvas.is_balanced());
    }

    #[test]
    fn bottom_right_fixed_anchors_to_corner() {
        let frame = frame();
        let anchor = BottomRightFixed::<Rectangle>::anchor(&frame);
        assert_eq!(anchor, Point::new(350.0, 137.5));
        // The corner maps back onto the surface corner.
        assert_eq!(frame.view.to_surface(anchor), Point::new(800.0, 600.0));

        let overlay = BottomRightFixed::new(Rectangle::new(
            Point::new(-10.0, -10.0),
            Size::new(10.0, 10.0),
            Rgb::WHITE,
        ));
        let mut canvas = RecordingCanvas::new(frame.size);
        overlay.draw(&mut canvas, &frame);
        let ops = canvas.ops();
        assert!(matches!(ops[1], CanvasOp::Translate(v) if v == Vec2::new(350.0, 137.5)));
        assert!(matches!(ops[2], CanvasOp::Scale(s) if s == Vec2::new(0.5, 0.25)));
        assert!(canvas.is_balanced());
    }
}
