// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Drawable: the primitive tree painted by an Easel surface.
//!
//! A [`Drawable`] knows how to paint itself into an
//! [`easel_imaging::DrawContext`] given the [`Frame`] being rendered (the
//! current [`ViewConfig`] and the surface size). Trees are rebuilt from
//! domain data every frame and never mutated in place, so every node is an
//! immutable configuration plus a `draw` method.
//!
//! Primitives:
//! - [`Rectangle`], [`Circle`], [`Dot`], [`Line`], [`Triangle`], [`Sector`],
//!   [`Text`]: single shapes with an [`Rgb`] color and optional opacity.
//! - [`Arrow`]: a line plus a triangular head.
//! - [`Group`]: translated, optionally faded, ordered children.
//! - [`NonScalable`] and [`BottomRightFixed`]: wrappers that undo the view
//!   zoom so their content keeps a fixed pixel size, the latter also pinning
//!   it to the bottom-right corner of the surface.
//!
//! Every node that touches transform or alpha state brackets its work in a
//! save/restore pair, so painting a tree leaves the context as it found it.
//!
//! ```
//! use easel_drawable::{Drawable, Frame, Group, Line, Rectangle};
//! use easel_imaging::Rgb;
//! use easel_imaging::record::RecordingCanvas;
//! use easel_view2d::ViewConfig;
//! use kurbo::{Point, Size, Vec2};
//!
//! let tree = Group::new(
//!     Vec2::new(10.0, 10.0),
//!     vec![
//!         Box::new(Rectangle::new(Point::ORIGIN, Size::new(40.0, 20.0), Rgb::RED).filled()),
//!         Box::new(Line::new(Point::ORIGIN, Point::new(40.0, 20.0), 2.0, Rgb::WHITE)),
//!     ],
//! );
//!
//! let frame = Frame::new(ViewConfig::default(), Size::new(320.0, 240.0));
//! let mut canvas = RecordingCanvas::new(frame.size);
//! tree.draw(&mut canvas, &frame);
//! assert!(canvas.is_balanced());
//! ```

use core::fmt::Debug;

use easel_imaging::DrawContext;
use easel_view2d::ViewConfig;
use kurbo::{Size, Vec2};

mod arrow;
mod group;
mod shapes;

pub use arrow::{ARROW_HEAD_LENGTH, ARROW_HEAD_WIDTH, Arrow};
pub use easel_imaging::Rgb;
pub use group::{BottomRightFixed, Group, NonScalable};
pub use shapes::{Circle, DEFAULT_FONT_FAMILY, Dot, Line, Rectangle, Sector, Text, Triangle};

/// Per-frame rendering state handed to every [`Drawable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Pan/zoom in effect for this frame.
    pub view: ViewConfig,
    /// Displayed surface size in surface pixels.
    pub size: Size,
}

impl Frame {
    /// Bundles a view and a surface size.
    #[must_use]
    pub const fn new(view: ViewConfig, size: Size) -> Self {
        Self { view, size }
    }

    /// Scale factor that cancels the view zoom on both axes.
    #[must_use]
    pub fn inverse_scale(&self) -> Vec2 {
        Vec2::new(1.0 / self.view.scale.x, 1.0 / self.view.scale.y)
    }
}

/// A node of the drawable tree.
pub trait Drawable: Debug {
    /// Paint into `ctx`, whose current transform already maps logical
    /// coordinates to surface pixels for `frame.view`.
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame);
}

impl<D: Drawable + ?Sized> Drawable for Box<D> {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        (**self).draw(ctx, frame);
    }
}

impl<D: Drawable + ?Sized> Drawable for &D {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        (**self).draw(ctx, frame);
    }
}
