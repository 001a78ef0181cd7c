// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Imaging: the immediate-mode drawing contract used by Easel drawables.
//!
//! This crate sits between the drawable tree and a concrete rendering
//! surface. It defines:
//!
//! - [`DrawContext`]: a small immediate-mode 2D context (state stack,
//!   transforms, paths, fills, strokes and text), modeled on the HTML
//!   canvas 2D API that Easel's primary backend targets.
//! - [`Canvas`]: a [`DrawContext`] bound to a sized surface whose backing
//!   pixel size can be re-synchronized with its displayed size.
//! - [`Rgb`] colors and a deterministic [`ColorCycle`] palette.
//! - [`record::RecordingCanvas`]: a headless canvas that records every call,
//!   used to test drawables and renderers without a real surface.
//!
//! Backends implement [`DrawContext`] and [`Canvas`]; `easel_imaging_web_canvas`
//! does so over `web_sys::CanvasRenderingContext2d`.
//!
//! # Example
//!
//! ```
//! use easel_imaging::{DrawContext, DrawContextExt, Rgb};
//! use easel_imaging::record::{CanvasOp, RecordingCanvas};
//! use kurbo::{Rect, Size, Vec2};
//!
//! let mut canvas = RecordingCanvas::new(Size::new(320.0, 240.0));
//! canvas.with_saved(|ctx| {
//!     ctx.translate(Vec2::new(10.0, 10.0));
//!     ctx.begin_path();
//!     ctx.rect(Rect::new(0.0, 0.0, 50.0, 20.0));
//!     ctx.set_fill_color(Rgb::RED.with_opacity(None));
//!     ctx.fill();
//! });
//! assert!(matches!(canvas.ops().first(), Some(CanvasOp::Save)));
//! assert!(canvas.is_balanced());
//! ```

use kurbo::{Affine, Point, Rect, Size, Vec2};
pub use peniko::Color;

mod color;
pub mod record;

pub use color::{ColorCycle, Rgb};

/// Immediate-mode 2D drawing context.
///
/// Coordinates are interpreted under the current transform, which starts as
/// the identity for every frame and is modified by [`DrawContext::translate`],
/// [`DrawContext::scale`] and [`DrawContext::transform`]. State changes
/// (transform, alpha, colors, line width, font) are scoped by
/// [`DrawContext::save`] / [`DrawContext::restore`].
pub trait DrawContext {
    /// Push the current state.
    fn save(&mut self);

    /// Pop the most recently saved state.
    fn restore(&mut self);

    /// Pre-multiply the current transform by a translation.
    fn translate(&mut self, delta: Vec2);

    /// Pre-multiply the current transform by a per-axis scale.
    fn scale(&mut self, factor: Vec2);

    /// Pre-multiply the current transform by `affine`.
    fn transform(&mut self, affine: Affine);

    /// Set the alpha applied to everything painted afterwards.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Set the color used by [`DrawContext::fill`] and [`DrawContext::fill_text`].
    fn set_fill_color(&mut self, color: Color);

    /// Set the color used by [`DrawContext::stroke`].
    fn set_stroke_color(&mut self, color: Color);

    /// Set the stroke width in current user-space units.
    fn set_line_width(&mut self, width: f64);

    /// Set the font as a CSS font shorthand, for example `"16px Arial"`.
    fn set_font(&mut self, font: &str);

    /// Start a new path.
    fn begin_path(&mut self);

    /// Close the current subpath.
    fn close_path(&mut self);

    /// Begin a subpath at `point`.
    fn move_to(&mut self, point: Point);

    /// Add a straight segment to `point`.
    fn line_to(&mut self, point: Point);

    /// Add a closed rectangle subpath.
    fn rect(&mut self, rect: Rect);

    /// Add an axis-aligned elliptical arc around `center`.
    fn ellipse(&mut self, center: Point, radii: Vec2, start_angle: f64, end_angle: f64);

    /// Add a circular arc around `center`, connected to the current point.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    /// Fill the current path with the fill color.
    fn fill(&mut self);

    /// Stroke the current path with the stroke color and line width.
    fn stroke(&mut self);

    /// Paint `text` with its baseline origin at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point);
}

/// Scoped helpers on top of [`DrawContext`].
pub trait DrawContextExt: DrawContext {
    /// Run `f` between a paired [`DrawContext::save`] and [`DrawContext::restore`].
    ///
    /// Note: if `f` panics, the state will not be restored.
    #[inline]
    fn with_saved<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let out = f(self);
        self.restore();
        out
    }
}

impl<C: DrawContext + ?Sized> DrawContextExt for C {}

/// A [`DrawContext`] bound to a rendering surface.
///
/// Surfaces have two sizes: the *client* size at which they are displayed
/// and the *backing* size of their pixel buffer. Renderers keep the two in
/// sync through [`Canvas::set_backing_size`] when notified of a resize.
pub trait Canvas: DrawContext {
    /// Displayed size in surface pixels.
    fn client_size(&self) -> Size;

    /// Size of the backing pixel buffer.
    fn backing_size(&self) -> Size;

    /// Resize the backing pixel buffer. Backends may reset context state.
    fn set_backing_size(&mut self, size: Size);
}
