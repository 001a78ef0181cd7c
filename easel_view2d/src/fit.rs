// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Extent used for a degenerate (single point) target by
/// [`scale_multiplier_to_crop`].
pub const DEFAULT_BOUND_DIAMETER: f64 = 500.0;

/// Returns the largest uniform scale at which `target` still fits inside
/// `initial`, preserving aspect ratio.
///
/// A target with zero width borrows its height (and vice versa) so a flat
/// set of points still produces a finite factor; a target that collapses to
/// a single point is treated as a `default_diameter` square.
#[must_use]
pub fn scale_multiplier_to_crop(initial: Rect, target: Rect, default_diameter: f64) -> f64 {
    let available = initial.size();
    let mut needed = target.size();

    let flat_x = needed.width.abs() < f64::EPSILON;
    let flat_y = needed.height.abs() < f64::EPSILON;
    match (flat_x, flat_y) {
        (true, true) => needed = Size::new(default_diameter, default_diameter),
        (true, false) => needed.width = needed.height,
        (false, true) => needed.height = needed.width,
        (false, false) => {}
    }

    (available.width / needed.width).min(available.height / needed.height)
}
