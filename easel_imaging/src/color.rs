// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// An opaque 8-bit sRGB color triple.
///
/// Drawables carry colors as `Rgb` plus an optional opacity and convert to a
/// [`Color`] at paint time via [`Rgb::with_opacity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Pure green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Cyan.
    pub const CYAN: Self = Self::new(0, 255, 255);
    /// Yellow.
    pub const YELLOW: Self = Self::new(255, 255, 0);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to a [`Color`] with the given opacity (`None` is opaque).
    #[must_use]
    pub fn with_opacity(self, opacity: Option<f32>) -> Color {
        Color::from_rgb8(self.r, self.g, self.b).with_alpha(opacity.unwrap_or(1.0))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Deterministic palette that hands out colors in a fixed rotation.
#[derive(Clone, Debug)]
pub struct ColorCycle {
    colors: &'static [Rgb],
    next: usize,
}

impl ColorCycle {
    /// The rotation used by [`ColorCycle::default`].
    pub const DEFAULT_PALETTE: &'static [Rgb] = &[Rgb::RED, Rgb::GREEN, Rgb::CYAN, Rgb::YELLOW];

    /// Creates a cycle over `colors`.
    ///
    /// An empty palette yields white forever.
    #[must_use]
    pub fn new(colors: &'static [Rgb]) -> Self {
        Self { colors, next: 0 }
    }

    /// Returns the next color, wrapping around at the end of the palette.
    pub fn next_color(&mut self) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::WHITE;
        }
        let color = self.colors[self.next % self.colors.len()];
        self.next = self.next.wrapping_add(1);
        color
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PALETTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_maps_to_alpha() {
        let opaque = Rgb::new(10, 20, 30).with_opacity(None).to_rgba8();
        assert_eq!((opaque.r, opaque.g, opaque.b, opaque.a), (10, 20, 30, 255));

        let faded = Rgb::WHITE.with_opacity(Some(0.0)).to_rgba8();
        assert_eq!(faded.a, 0);
    }

    #[test]
    fn cycle_wraps_around() {
        let mut cycle = ColorCycle::default();
        let seen: Vec<Rgb> = (0..5).map(|_| cycle.next_color()).collect();
        assert_eq!(
            seen,
            vec![Rgb::RED, Rgb::GREEN, Rgb::CYAN, Rgb::YELLOW, Rgb::RED]
        );
    }

    #[test]
    fn empty_palette_yields_white() {
        let mut cycle = ColorCycle::new(&[]);
        assert_eq!(cycle.next_color(), Rgb::WHITE);
    }
}
