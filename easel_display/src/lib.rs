// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Display: from domain objects to painted frames.
//!
//! - [`Visual`] names everything that can be shown: ready-made drawables,
//!   boxes, box groups, the pointer readout, and custom values.
//! - An [`Adapter`] turns a [`Visual`] into an owned drawable. The
//!   [`DefaultAdapter`] covers the built-in variants and rejects custom values
//!   with [`AdaptError::Unadaptable`]; wrap it to teach it new types.
//! - [`VisualizationManager`] double-buffers adapted drawables: `add` queues,
//!   `flush` publishes (with a pointer readout appended), and each due `tick`
//!   repaints the published list on its [`Surface`](easel_surface::Surface).
//!
//! ```
//! use core::time::Duration;
//! use easel_boxes::{BoxGrouping, BoxModel, Source};
//! use easel_display::{ManagerConfig, Visual, VisualizationManager};
//! use easel_imaging::record::RecordingCanvas;
//! use easel_surface::{Surface, SurfaceConfig};
//! use easel_view2d::ViewConfig;
//! use kurbo::{Point, Size};
//!
//! let surface = Surface::new(
//!     RecordingCanvas::new(Size::new(800.0, 600.0)),
//!     ViewConfig::default(),
//!     SurfaceConfig::default(),
//! );
//! let mut manager = VisualizationManager::new(surface, ManagerConfig::default());
//!
//! let grouping = BoxGrouping::new([
//!     BoxModel::new(1, Source::Left, Point::new(0.0, 0.0), Size::new(40.0, 40.0)),
//!     BoxModel::new(2, Source::Right, Point::new(60.0, 0.0), Size::new(40.0, 40.0)),
//! ])?;
//! if let Some(group) = grouping.smallest_group() {
//!     manager.add([Visual::BoxGroup(&group)])?;
//! }
//! manager.flush()?;
//!
//! manager.start(Duration::ZERO);
//! assert!(manager.tick(Duration::from_millis(20)));
//! assert!(manager.surface().canvas().is_balanced());
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```

mod adapter;
pub mod custom;
mod manager;
mod visual;

pub use adapter::{AdaptError, Adapter, DefaultAdapter};
pub use manager::{ManagerConfig, VisualizationManager};
pub use visual::Visual;
