// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::any::{Any, type_name};
use core::fmt;

use easel_boxes::{BoxGroup, BoxModel};
use easel_drawable::Drawable;
use kurbo::Point;

/// Anything the visualization can be asked to show.
///
/// Domain objects are borrowed for the duration of the conversion only; the
/// adapter produces owned drawables.
pub enum Visual<'a> {
    /// An already-built drawable, passed through unchanged.
    Drawable(Box<dyn Drawable>),
    /// A single labeled box.
    Box(&'a BoxModel),
    /// A group of boxes with its derived bounds.
    BoxGroup(&'a BoxGroup<'a>),
    /// The pointer position readout.
    PointerReadout(Point),
    /// A value of a type the adapter may or may not know.
    Custom {
        /// The value.
        value: &'a dyn Any,
        /// Its type name, for diagnostics.
        type_name: &'static str,
    },
}

impl<'a> Visual<'a> {
    /// Wraps an arbitrary value for adapters that recognize its type.
    pub fn custom<T: Any>(value: &'a T) -> Self {
        Self::Custom {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Wraps a drawable.
    pub fn drawable(drawable: impl Drawable + 'static) -> Self {
        Self::Drawable(Box::new(drawable))
    }

    /// Short name of the variant or custom type, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Drawable(_) => "drawable",
            Self::Box(_) => "box",
            Self::BoxGroup(_) => "box group",
            Self::PointerReadout(_) => "pointer readout",
            Self::Custom { type_name, .. } => type_name,
        }
    }
}

impl fmt::Debug for Visual<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drawable(d) => f.debug_tuple("Drawable").field(d).finish(),
            Self::Box(b) => f.debug_tuple("Box").field(b).finish(),
            Self::BoxGroup(g) => f.debug_tuple("BoxGroup").field(g).finish(),
            Self::PointerReadout(p) => f.debug_tuple("PointerReadout").field(p).finish(),
            Self::Custom { type_name, .. } => f
                .debug_struct("Custom")
                .field("type_name", type_name)
                .finish_non_exhaustive(),
        }
    }
}

impl<'a> From<&'a BoxModel> for Visual<'a> {
    fn from(value: &'a BoxModel) -> Self {
        Self::Box(value)
    }
}

impl<'a> From<&'a BoxGroup<'a>> for Visual<'a> {
    fn from(value: &'a BoxGroup<'a>) -> Self {
        Self::BoxGroup(value)
    }
}

impl From<Box<dyn Drawable>> for Visual<'_> {
    fn from(value: Box<dyn Drawable>) -> Self {
        Self::Drawable(value)
    }
}
