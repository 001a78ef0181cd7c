// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless canvas that records drawing calls.
//!
//! [`RecordingCanvas`] implements [`Canvas`] without rasterizing anything.
//! Every call is appended to an op list that tests can inspect, which makes
//! it the reference backend for drawable and renderer tests.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use peniko::Color;

use crate::{Canvas, DrawContext};

/// One recorded [`DrawContext`] call.
#[derive(Clone, Debug)]
pub enum CanvasOp {
    /// [`DrawContext::save`].
    Save,
    /// [`DrawContext::restore`].
    Restore,
    /// [`DrawContext::translate`].
    Translate(Vec2),
    /// [`DrawContext::scale`].
    Scale(Vec2),
    /// [`DrawContext::transform`].
    Transform(Affine),
    /// [`DrawContext::set_global_alpha`].
    GlobalAlpha(f32),
    /// [`DrawContext::set_fill_color`].
    FillColor(Color),
    /// [`DrawContext::set_stroke_color`].
    StrokeColor(Color),
    /// [`DrawContext::set_line_width`].
    LineWidth(f64),
    /// [`DrawContext::set_font`].
    Font(String),
    /// [`DrawContext::begin_path`].
    BeginPath,
    /// [`DrawContext::close_path`].
    ClosePath,
    /// [`DrawContext::move_to`].
    MoveTo(Point),
    /// [`DrawContext::line_to`].
    LineTo(Point),
    /// [`DrawContext::rect`].
    Rect(Rect),
    /// [`DrawContext::ellipse`].
    Ellipse {
        /// Ellipse center.
        center: Point,
        /// Radii along X and Y.
        radii: Vec2,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
    },
    /// [`DrawContext::arc`].
    Arc {
        /// Arc center.
        center: Point,
        /// Arc radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
    },
    /// [`DrawContext::fill`].
    Fill,
    /// [`DrawContext::stroke`].
    Stroke,
    /// [`DrawContext::fill_text`].
    FillText {
        /// Painted text.
        text: String,
        /// Baseline origin.
        origin: Point,
    },
}

/// A [`Canvas`] that records calls instead of painting.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    client_size: Size,
    backing_size: Size,
}

impl RecordingCanvas {
    /// Creates a canvas displayed at `client_size` with an empty backing buffer.
    #[must_use]
    pub fn new(client_size: Size) -> Self {
        Self {
            ops: Vec::new(),
            client_size,
            backing_size: Size::ZERO,
        }
    }

    /// Simulates the host resizing the displayed surface.
    pub fn set_client_size(&mut self, size: Size) {
        self.client_size = size;
    }

    /// Calls recorded so far.
    #[must_use]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Removes and returns the calls recorded so far.
    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        core::mem::take(&mut self.ops)
    }

    /// Returns `true` if every `Save` is matched by a later `Restore` and no
    /// `Restore` pops an empty stack.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.ops)
    }

    /// Texts passed to [`DrawContext::fill_text`], in call order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            CanvasOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, op: CanvasOp) {
        self.ops.push(op);
    }
}

/// Returns `true` if `ops` contains properly nested save/restore pairs.
#[must_use]
pub fn is_balanced(ops: &[CanvasOp]) -> bool {
    let mut depth = 0_usize;
    for op in ops {
        match op {
            CanvasOp::Save => depth += 1,
            CanvasOp::Restore => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

impl DrawContext for RecordingCanvas {
    fn save(&mut self) {
        self.push(CanvasOp::Save);
    }

    fn restore(&mut self) {
        self.push(CanvasOp::Restore);
    }

    fn translate(&mut self, delta: Vec2) {
        self.push(CanvasOp::Translate(delta));
    }

    fn scale(&mut self, factor: Vec2) {
        self.push(CanvasOp::Scale(factor));
    }

    fn transform(&mut self, affine: Affine) {
        self.push(CanvasOp::Transform(affine));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.push(CanvasOp::GlobalAlpha(alpha));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.push(CanvasOp::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.push(CanvasOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(CanvasOp::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.push(CanvasOp::Font(font.into()));
    }

    fn begin_path(&mut self) {
        self.push(CanvasOp::BeginPath);
    }

    fn close_path(&mut self) {
        self.push(CanvasOp::ClosePath);
    }

    fn move_to(&mut self, point: Point) {
        self.push(CanvasOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.push(CanvasOp::LineTo(point));
    }

    fn rect(&mut self, rect: Rect) {
        self.push(CanvasOp::Rect(rect));
    }

    fn ellipse(&mut self, center: Point, radii: Vec2, start_angle: f64, end_angle: f64) {
        self.push(CanvasOp::Ellipse {
            center,
            radii,
            start_angle,
            end_angle,
        });
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.push(CanvasOp::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self) {
        self.push(CanvasOp::Fill);
    }

    fn stroke(&mut self) {
        self.push(CanvasOp::Stroke);
    }

    fn fill_text(&mut self, text: &str, origin: Point) {
        self.push(CanvasOp::FillText {
            text: text.into(),
            origin,
        });
    }
}

impl Canvas for RecordingCanvas {
    fn client_size(&self) -> Size {
        self.client_size
    }

    fn backing_size(&self) -> Size {
        self.backing_size
    }

    fn set_backing_size(&mut self, size: Size) {
        self.backing_size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrawContextExt;

    #[test]
    fn records_calls_in_order() {
        let mut canvas = RecordingCanvas::new(Size::new(100.0, 100.0));
        canvas.begin_path();
        canvas.move_to(Point::new(1.0, 2.0));
        canvas.line_to(Point::new(3.0, 4.0));
        canvas.stroke();

        let ops = canvas.take_ops();
        assert_eq!(ops.len(), 4);
        assert!(matches!(ops[1], CanvasOp::MoveTo(p) if p == Point::new(1.0, 2.0)));
        assert!(matches!(ops[3], CanvasOp::Stroke));
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn with_saved_pairs_save_and_restore() {
        let mut canvas = RecordingCanvas::new(Size::new(10.0, 10.0));
        let value = canvas.with_saved(|ctx| {
            ctx.with_saved(|inner| inner.translate(Vec2::new(1.0, 1.0)));
            42
        });
        assert_eq!(value, 42);
        assert!(canvas.is_balanced());
        assert_eq!(canvas.ops().len(), 5);
    }

    #[test]
    fn unbalanced_sequences_are_detected() {
        assert!(!is_balanced(&[CanvasOp::Restore, CanvasOp::Save]));
        assert!(!is_balanced(&[CanvasOp::Save]));
        assert!(is_balanced(&[]));
    }

    #[test]
    fn backing_size_starts_empty() {
        let mut canvas = RecordingCanvas::new(Size::new(640.0, 480.0));
        assert_eq!(canvas.backing_size(), Size::ZERO);
        canvas.set_backing_size(canvas.client_size());
        assert_eq!(canvas.backing_size(), Size::new(640.0, 480.0));
    }

    #[test]
    fn texts_lists_painted_strings() {
        let mut canvas = RecordingCanvas::new(Size::new(10.0, 10.0));
        canvas.fill_text("a", Point::ORIGIN);
        canvas.fill();
        canvas.fill_text("b", Point::ORIGIN);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
