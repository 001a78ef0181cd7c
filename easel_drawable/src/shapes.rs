// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;
use std::f64::consts::TAU;

use easel_imaging::{DrawContext, Rgb};
use kurbo::{Point, Rect, Size, Vec2};

use crate::{Drawable, Frame};

/// Font family used by [`Text`] when none is set.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Axis-aligned rectangle, stroked by default.
#[derive(Clone, Debug)]
pub struct Rectangle {
    /// Top-left corner.
    pub origin: Point,
    /// Extent along X and Y.
    pub size: Size,
    /// Paint color.
    pub color: Rgb,
    /// Fill instead of stroke.
    pub fill: bool,
    /// Optional opacity in `0.0..=1.0`.
    pub opacity: Option<f32>,
}

impl Rectangle {
    /// A stroked, opaque rectangle.
    #[must_use]
    pub fn new(origin: Point, size: Size, color: Rgb) -> Self {
        Self {
            origin,
            size,
            color,
            fill: false,
            opacity: None,
        }
    }

    /// Switches to filling.
    #[must_use]
    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    /// Sets the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

impl Drawable for Rectangle {
    fn draw(&self, ctx: &mut dyn DrawContext, _frame: &Frame) {
        let color = self.color.with_opacity(self.opacity);
        ctx.begin_path();
        ctx.rect(Rect::from_origin_size(self.origin, self.size));
        if self.fill {
            ctx.set_fill_color(color);
            ctx.fill();
        } else {
            ctx.set_stroke_color(color);
            ctx.stroke();
        }
        ctx.close_path();
    }
}

/// Stroked circle outline.
#[derive(Clone, Debug)]
pub struct Circle {
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Stroke color.
    pub color: Rgb,
    /// Optional opacity in `0.0..=1.0`.
    pub opacity: Option<f32>,
}

impl Circle {
    /// An opaque circle outline.
    #[must_use]
    pub fn new(center: Point, radius: f64, color: Rgb) -> Self {
        Self {
            center,
            radius,
            color,
            opacity: None,
        }
    }
}

impl Drawable for Circle {
    fn draw(&self, ctx: &mut dyn DrawContext, _frame: &Frame) {
        ctx.begin_path();
        ctx.set_stroke_color(self.color.with_opacity(self.opacity));
        ctx.ellipse(self.center, Vec2::new(self.radius, self.radius), 0.0, TAU);
        ctx.stroke();
        ctx.close_path();
    }
}

/// A point marker: a filled circle.
#[doc(alias = "Point")]
#[derive(Clone, Debug)]
pub struct Dot {
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill color.
    pub color: Rgb,
    /// Optional opacity in `0.0..=1.0`.
    pub opacity: Option<f32>,
}

impl Dot {
    /// An opaque filled dot.
    #[must_use]
    pub fn new(center: Point, radius: f64, color: Rgb) -> Self {
        Self {
            center,
            radius,
            color,
            opacity: None,
        }
    }
}

impl Drawable for Dot {
    fn draw(&self, ctx: &mut dyn DrawContext, _frame: &Frame) {
        ctx.begin_path();
        ctx.set_fill_color(self.color.with_opacity(self.opacity));
        ctx.ellipse(self.center, Vec2::new(self.radius, self.radius), 0.0, TAU);
        ctx.fill();
        ctx.close_path();
    }
}

/// Straight stroked segment.
#[derive(Clone, Debug)]
pub struct Line {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke width in logical units, or in pixels when `const_width` is set.
    pub width: f64,
    /// Stroke color.
    pub color: Rgb,
    /// Keep the stroke width constant on screen regardless of zoom.
    pub const_width: bool,
    /// Optional opacity in `0.0..=1.0`.
    pub opacity: Option<f32>,
}

impl Line {
    /// An opaque line whose width scales with the view.
    #[must_use]
    pub fn new(from: Point, to: Point, width: f64, color: Rgb) -> Self {
        Self {
            from,
            to,
            width,
            color,
            const_width: false,
            opacity: None,
        }
    }

    /// Keeps the stroke width constant on screen.
    #[must_use]
    pub fn const_width(mut self) -> Self {
        self.const_width = true;
        self
    }

    /// Sets the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// The width passed to the context for `frame`.
    ///
    /// Constant-width lines compensate using the horizontal zoom only.
    #[must_use]
    pub fn effective_width(&self, frame: &Frame) -> f64 {
        if self.const_width {
            self.width / frame.view.scale.x
        } else {
            self.width
        }
    }
}

impl Drawable for Line {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        ctx.begin_path();
        ctx.set_stroke_color(self.color.with_opacity(self.opacity));
        ctx.set_line_width(self.effective_width(frame));
        ctx.move_to(self.from);
        ctx.line_to(self.to);
        ctx.stroke();
        ctx.close_path();
    }
}

/// Filled triangle.
#[derive(Clone, Debug)]
pub struct Triangle {
    /// Corners, in path order.
    pub points: [Point; 3],
    /// Fill color.
    pub color: Rgb,
    /// Optional opacity in `0.0..=1.0`.
    pub opacity: Option<f32>,
}

impl Triangle {
    /// An opaque filled triangle.
    #[must_use]
    pub fn new(points: [Point; 3], color: Rgb) -> Self {
        Self {
            points,
            color,
            opacity: None,
        }
    }
}

impl Drawable for Triangle {
    fn draw(&self, ctx: &mut dyn DrawContext, _frame: &Frame) {
        let [a, b, c] = self.points;
        ctx.begin_path();
        ctx.move_to(a);
        ctx.line_to(b);
        ctx.line_to(c);
        ctx.close_path();
        ctx.set_fill_color(self.color.with_opacity(self.opacity));
        ctx.fill();
    }
}

/// Filled circular sector ("pie slice") opening around a direction.
#[derive(Clone, Debug)]
pub struct Sector {
    /// Apex.
    pub center: Point,
    /// Direction the sector opens towards.
    pub direction: Vec2,
    /// Half opening angle in radians.
    pub max_angle: f64,
    /// Radius.
    pub radius: f64,
    /// Fill color.
    pub color: Rgb,
    /// Optional opacity in `0.0..=1.0`.
    pub opacity: Option<f32>,
}

impl Drawable for Sector {
    fn draw(&self, ctx: &mut dyn DrawContext, _frame: &Frame) {
        let heading = self.direction.atan2();
        ctx.begin_path();
        ctx.set_fill_color(self.color.with_opacity(self.opacity));
        ctx.arc(
            self.center,
            self.radius,
            heading - self.max_angle,
            heading + self.max_angle,
        );
        ctx.line_to(self.center);
        ctx.fill();
        ctx.close_path();
    }
}

/// Single line of filled text.
#[derive(Clone, Debug)]
pub struct Text {
    /// Baseline origin.
    pub origin: Point,
    /// Content.
    pub text: String,
    /// Fill color.
    pub color: Rgb,
    /// Font size in pixels.
    pub size: f64,
    /// Font family; [`DEFAULT_FONT_FAMILY`] when `None`.
    pub family: Option<Cow<'static, str>>,
    /// Optional opacity in `0.0..=1.0`.
    pub opacity: Option<f32>,
}

impl Text {
    /// Opaque text in the default family.
    #[must_use]
    pub fn new(origin: Point, text: impl Into<String>, size: f64, color: Rgb) -> Self {
        Self {
            origin,
            text: text.into(),
            color,
            size,
            family: None,
            opacity: None,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<Cow<'static, str>>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// CSS font shorthand, e.g. `"16px Arial"`.
    #[must_use]
    pub fn font(&self) -> String {
        let family = self.family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY);
        format!("{}px {family}", self.size)
    }
}

impl Drawable for Text {
    fn draw(&self, ctx: &mut dyn DrawContext, _frame: &Frame) {
        ctx.begin_path();
        ctx.set_font(&self.font());
        ctx.set_fill_color(self.color.with_opacity(self.opacity));
        ctx.fill_text(&self.text, self.origin);
        ctx.close_path();
    }
}

#[cfg(test)]
mod tests {
    use easel_imaging::record::{CanvasOp, RecordingCanvas};
    use easel_view2d::ViewConfig;

    use super::*;

    fn frame_with_scale(sx: f64, sy: f64) -> Frame {
        Frame::new(
            ViewConfig::new(Vec2::ZERO, Vec2::new(sx, sy)),
            Size::new(100.0, 100.0),
        )
    }

    fn paint(drawable: &dyn Drawable, frame: &Frame) -> Vec<CanvasOp> {
        let mut canvas = RecordingCanvas::new(frame.size);
        drawable.draw(&mut canvas, frame);
        canvas.take_ops()
    }

    #[test]
    fn const_width_line_divides_by_horizontal_scale_only() {
        let line = Line::new(Point::ORIGIN, Point::new(10.0, 0.0), 4.0, Rgb::WHITE).const_width();
        let ops = paint(&line, &frame_with_scale(2.0, 8.0));
        assert!(ops.iter().any(|op| matches!(op, CanvasOp::LineWidth(w) if *w == 2.0)));

        let scaled = Line::new(Point::ORIGIN, Point::new(10.0, 0.0), 4.0, Rgb::WHITE);
        let ops = paint(&scaled, &frame_with_scale(2.0, 8.0));
        assert!(ops.iter().any(|op| matches!(op, CanvasOp::LineWidth(w) if *w == 4.0)));
    }

    #[test]
    fn rectangle_fills_or_strokes() {
        let frame = frame_with_scale(1.0, 1.0);
        let rect = Rectangle::new(Point::new(1.0, 2.0), Size::new(3.0, 4.0), Rgb::RED);

        let stroked = paint(&rect, &frame);
        assert!(matches!(stroked[1], CanvasOp::Rect(r) if r == Rect::new(1.0, 2.0, 4.0, 6.0)));
        assert!(stroked.iter().any(|op| matches!(op, CanvasOp::Stroke)));
        assert!(!stroked.iter().any(|op| matches!(op, CanvasOp::Fill)));

        let filled = paint(&rect.filled(), &frame);
        assert!(filled.iter().any(|op| matches!(op, CanvasOp::Fill)));
        assert!(!filled.iter().any(|op| matches!(op, CanvasOp::Stroke)));
    }

    #[test]
    fn dot_fills_and_circle_strokes() {
        let frame = frame_with_scale(1.0, 1.0);
        let dot = paint(&Dot::new(Point::ORIGIN, 3.0, Rgb::GREEN), &frame);
        assert!(dot.iter().any(|op| matches!(op, CanvasOp::Fill)));
        let circle = paint(&Circle::new(Point::ORIGIN, 3.0, Rgb::GREEN), &frame);
        assert!(circle.iter().any(|op| matches!(op, CanvasOp::Stroke)));
        assert!(circle.iter().any(|op| matches!(
            op,
            CanvasOp::Ellipse { radii, end_angle, .. } if *radii == Vec2::new(3.0, 3.0) && *end_angle == TAU
        )));
    }

    #[test]
    fn sector_spans_direction_and_closes_to_center() {
        let sector = Sector {
            center: Point::new(5.0, 5.0),
            direction: Vec2::new(0.0, 1.0),
            max_angle: 0.5,
            radius: 10.0,
            color: Rgb::CYAN,
            opacity: None,
        };
        let ops = paint(&sector, &frame_with_scale(1.0, 1.0));
        let heading = core::f64::consts::FRAC_PI_2;
        assert!(ops.iter().any(|op| matches!(
            op,
            CanvasOp::Arc { start_angle, end_angle, .. }
                if (*start_angle - (heading - 0.5)).abs() < 1e-12
                    && (*end_angle - (heading + 0.5)).abs() < 1e-12
        )));
        assert!(ops.iter().any(|op| matches!(op, CanvasOp::LineTo(p) if *p == Point::new(5.0, 5.0))));
    }

    #[test]
    fn text_uses_size_and_default_family() {
        let text = Text::new(Point::new(0.0, 20.0), "7", 20.0, Rgb::WHITE);
        assert_eq!(text.font(), "20px Arial");
        assert_eq!(text.clone().with_family("serif").font(), "20px serif");

        let ops = paint(&text, &frame_with_scale(1.0, 1.0));
        assert!(ops.iter().any(|op| matches!(op, CanvasOp::Font(f) if f == "20px Arial")));
        assert!(ops.iter().any(|op| matches!(op, CanvasOp::FillText { text, .. } if text == "7")));
    }

    #[test]
    fn triangle_is_closed_before_fill() {
        let tri = Triangle::new(
            [Point::ORIGIN, Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            Rgb::YELLOW,
        );
        let ops = paint(&tri, &frame_with_scale(1.0, 1.0));
        let close = ops.iter().position(|op| matches!(op, CanvasOp::ClosePath));
        let fill = ops.iter().position(|op| matches!(op, CanvasOp::Fill));
        assert!(close.is_some() && close < fill);
    }
}
