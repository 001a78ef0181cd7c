// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

bitflags::bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control key.
        const CTRL  = 0b0000_0001;
        /// Shift key.
        const SHIFT = 0b0000_0010;
    }
}

/// A pointer event in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Position relative to the surface's top-left corner.
    pub position: Point,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl PointerInput {
    /// An event at `position` with no modifiers.
    #[must_use]
    pub const fn at(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::empty(),
        }
    }

    /// Sets the held modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A wheel event in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Pointer position relative to the surface's top-left corner.
    pub position: Point,
    /// Vertical wheel delta; positive when scrolling down.
    pub delta_y: f64,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl WheelInput {
    /// A wheel event at `position` with no modifiers.
    #[must_use]
    pub const fn new(position: Point, delta_y: f64) -> Self {
        Self {
            position,
            delta_y,
            modifiers: Modifiers::empty(),
        }
    }

    /// Sets the held modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
