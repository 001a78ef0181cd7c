// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawables for the domain objects Easel ships with.

use easel_boxes::{BoxGroup, BoxModel, Source};
use easel_drawable::{BottomRightFixed, Drawable, Frame, Group, Rectangle, Rgb, Text};
use easel_imaging::DrawContext;
use kurbo::{Point, Size, Vec2};

use crate::{AdaptError, Adapter, Visual};

/// Padding between a group's tight bounds and its synthesized total box.
pub const GROUP_INSET: f64 = 2.0;

/// Outline color for a box of the given side.
#[must_use]
pub const fn source_color(source: Source) -> Rgb {
    match source {
        Source::Left => Rgb::RED,
        Source::Right => Rgb::GREEN,
        Source::Total => Rgb::WHITE,
    }
}

/// A box outlined in its side's color.
#[derive(Debug)]
pub struct DrawableBox(Rectangle);

impl DrawableBox {
    /// Builds the outline for `model`.
    #[must_use]
    pub fn new(model: &BoxModel) -> Self {
        Self(Rectangle::new(
            model.position,
            model.size,
            source_color(model.source),
        ))
    }
}

impl Drawable for DrawableBox {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        self.0.draw(ctx, frame);
    }
}

/// A box group: its members, a total box around them and an id label.
#[derive(Debug)]
pub struct DrawableBoxGroup(Group);

impl DrawableBoxGroup {
    /// Builds the group drawable, adapting members and the synthesized total
    /// box through `adapter`.
    pub fn new(group: &BoxGroup<'_>, adapter: &dyn Adapter) -> Result<Self, AdaptError> {
        let bounds = group.bounds();
        let mut children = Vec::with_capacity(group.boxes.len() + 2);
        for member in &group.boxes {
            children.push(adapter.to_drawable(Visual::Box(member))?);
        }

        let outer = bounds.inflate(GROUP_INSET, GROUP_INSET);
        let total = BoxModel::new(0, Source::Total, outer.origin(), outer.size());
        children.push(adapter.to_drawable(Visual::Box(&total))?);
        children.push(Box::new(Text::new(
            bounds.origin(),
            group.id.to_string(),
            20.0,
            Rgb::WHITE,
        )));

        Ok(Self(Group::new(Vec2::ZERO, children)))
    }
}

impl Drawable for DrawableBoxGroup {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        self.0.draw(ctx, frame);
    }
}

/// Offset of the readout panel from the bottom-right corner, in pixels.
pub const READOUT_OFFSET: Vec2 = Vec2::new(-265.0, -50.0);

/// Size of the readout panel, in pixels.
pub const READOUT_SIZE: Size = Size::new(250.0, 30.0);

/// A panel in the bottom-right corner showing the pointer's logical position.
#[derive(Debug)]
pub struct DrawablePointerReadout(Group);

impl DrawablePointerReadout {
    /// Builds the readout for `coords`.
    #[must_use]
    pub fn new(coords: Point) -> Self {
        let panel = Rectangle::new(Point::ORIGIN, READOUT_SIZE, Rgb::WHITE)
            .filled()
            .with_opacity(0.7);
        let label = Text::new(Point::new(10.0, 20.0), readout_text(coords), 16.0, Rgb::BLACK);
        let placed = Group::new(READOUT_OFFSET, vec![Box::new(panel), Box::new(label)]);
        Self(Group::new(
            Vec2::ZERO,
            vec![Box::new(BottomRightFixed::new(placed))],
        ))
    }
}

impl Drawable for DrawablePointerReadout {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        self.0.draw(ctx, frame);
    }
}

fn readout_text(coords: Point) -> String {
    format!("Pointer: [ {}, {} ]", coords.x, coords.y)
}
