// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel View 2D: pan/zoom state and coordinate conversion for a drawing surface.
//!
//! This crate is the headless math behind Easel's interactive surface:
//! - [`transform::forward`] / [`transform::backward`] map between logical
//!   (world) coordinates and surface pixels for a given offset and per-axis
//!   scale.
//! - [`ViewConfig`] bundles that offset and scale and adds the operations the
//!   surface needs: anchored zoom, centering, panning and visible bounds.
//! - [`ZoomLimits`] keeps the zoom factor in a sane range.
//! - [`scale_multiplier_to_crop`] computes a fit-to-view zoom for a set of bounds.
//!
//! It does **not** own a drawing context or process input; `easel_surface`
//! wires pointer and wheel events into these operations.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use easel_view2d::{ViewConfig, ZoomLimits};
//!
//! let mut view = ViewConfig::new(Vec2::new(100.0, 50.0), Vec2::new(1.0, 1.0));
//!
//! // Pointer position in surface pixels.
//! let cursor = Point::new(400.0, 300.0);
//! let under_cursor = view.to_logical(cursor);
//!
//! // Zoom in around the cursor; the logical point under it stays put.
//! view.zoom_about(cursor, ZoomLimits::default().clamp(2.0));
//! let after = view.to_logical(cursor);
//! assert!((after.x - under_cursor.x).abs() < 1e-9);
//! assert!((after.y - under_cursor.y).abs() < 1e-9);
//! ```

mod fit;
pub mod transform;
mod view;

pub use fit::{DEFAULT_BOUND_DIAMETER, scale_multiplier_to_crop};
pub use view::{ViewConfig, ZoomLimits};
