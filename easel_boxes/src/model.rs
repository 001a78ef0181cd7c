// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use easel_vector::Vector;
use easel_vector::geometry::points_rect;
use kurbo::{Point, Rect, Size};

/// Which side a box belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// Left-hand set.
    Left,
    /// Right-hand set.
    Right,
    /// Synthesized bounding box of a group.
    Total,
}

impl Source {
    /// Lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Total => "total",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A side tag that is not `left`, `right` or `total`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown box source `{0}`")]
pub struct ParseSourceError(pub String);

impl FromStr for Source {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "total" => Ok(Self::Total),
            other => Err(ParseSourceError(other.to_owned())),
        }
    }
}

/// A labeled axis-aligned box.
///
/// `position` is the top-left corner; callers may move it between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxModel {
    /// Caller-assigned identifier.
    pub id: u32,
    /// Side tag.
    pub source: Source,
    /// Top-left corner in logical coordinates.
    pub position: Point,
    /// Extent.
    pub size: Size,
}

impl BoxModel {
    /// Creates a box.
    #[must_use]
    pub const fn new(id: u32, source: Source, position: Point, size: Size) -> Self {
        Self {
            id,
            source,
            position,
            size,
        }
    }

    /// The box as a rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Euclidean distance between the positions of two boxes.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let mut delta = Vector::from(self.position);
        delta.sub(Vector::from(other.position));
        delta.abs()
    }
}

/// A set of boxes identified by a group id.
///
/// Bounds are derived from the member boxes on every call, so they follow
/// boxes that moved since the group was formed.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxGroup<'a> {
    /// Group identifier.
    pub id: u32,
    /// Members, in pairing order.
    pub boxes: Vec<&'a BoxModel>,
}

impl<'a> BoxGroup<'a> {
    /// Creates a group.
    #[must_use]
    pub fn new(id: u32, boxes: impl IntoIterator<Item = &'a BoxModel>) -> Self {
        Self {
            id,
            boxes: boxes.into_iter().collect(),
        }
    }

    /// Smallest rectangle containing every member, or [`Rect::ZERO`] for an
    /// empty group.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let corners: Vec<Vector> = self
            .boxes
            .iter()
            .flat_map(|b| {
                let rect = b.rect();
                [Vector::from(rect.origin()), Vector::from(Point::new(rect.x1, rect.y1))]
            })
            .collect();
        points_rect(&corners).unwrap_or(Rect::ZERO)
    }

    /// Area of [`BoxGroup::bounds`].
    #[must_use]
    pub fn bounds_area(&self) -> f64 {
        self.bounds().area()
    }
}
