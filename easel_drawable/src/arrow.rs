// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::f64::consts::FRAC_PI_6;

use easel_imaging::DrawContext;
use kurbo::{Point, Vec2};

use crate::{Drawable, Frame, Group, Line, Triangle};

/// Distance from the tip to the back corners of an arrow head.
pub const ARROW_HEAD_LENGTH: f64 = 15.0;

/// Signed width of an arrow head; each back corner is shifted by half of it
/// along the perpendicular of its edge.
pub const ARROW_HEAD_WIDTH: f64 = -5.0;

/// A [`Line`] ending in a filled triangular head at `to`.
#[derive(Debug)]
pub struct Arrow {
    head: [Point; 3],
    body: Group,
}

impl Arrow {
    /// Builds an arrow from a line; the head shares its color and opacity.
    #[must_use]
    pub fn new(line: Line) -> Self {
        let head = head_points(line.from, line.to);
        let mut triangle = Triangle::new(head, line.color);
        triangle.opacity = line.opacity;
        let body = Group::new(Vec2::ZERO, vec![Box::new(line), Box::new(triangle)]);
        Self { head, body }
    }

    /// Tip followed by the two back corners.
    #[must_use]
    pub fn head(&self) -> [Point; 3] {
        self.head
    }
}

impl Drawable for Arrow {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: &Frame) {
        self.body.draw(ctx, frame);
    }
}

fn head_points(from: Point, to: Point) -> [Point; 3] {
    let angle = (to - from).atan2();
    let half_width = ARROW_HEAD_WIDTH / 2.0;

    let (sin_a, cos_a) = (angle - FRAC_PI_6).sin_cos();
    let left = Point::new(
        to.x - ARROW_HEAD_LENGTH * cos_a - half_width * sin_a,
        to.y - ARROW_HEAD_LENGTH * sin_a + half_width * cos_a,
    );

    let (sin_b, cos_b) = (angle + FRAC_PI_6).sin_cos();
    let right = Point::new(
        to.x - ARROW_HEAD_LENGTH * cos_b + half_width * sin_b,
        to.y - ARROW_HEAD_LENGTH * sin_b - half_width * cos_b,
    );

    [to, left, right]
}
