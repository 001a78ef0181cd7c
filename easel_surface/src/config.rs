// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use easel_event_state::DEFAULT_GRAB_PERIOD;
use easel_imaging::Rgb;
use easel_view2d::ZoomLimits;

/// Wheel delta to zoom factor ratio used by [`SurfaceConfig::default`].
pub const DEFAULT_WHEEL_ZOOM_SPEED: f64 = 0.002;

/// Tunables for a [`Surface`](crate::Surface).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Range the wheel zoom is clamped into.
    pub zoom_limits: ZoomLimits,
    /// Zoom change per unit of wheel delta.
    pub wheel_zoom_speed: f64,
    /// Period of the grab-repeat timer.
    pub grab_period: Duration,
    /// Color the surface is cleared to.
    pub background: Rgb,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            wheel_zoom_speed: DEFAULT_WHEEL_ZOOM_SPEED,
            grab_period: DEFAULT_GRAB_PERIOD,
            background: Rgb::BLACK,
        }
    }
}
