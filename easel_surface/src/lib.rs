// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Surface: an interactive pan/zoom drawing surface.
//!
//! [`Surface`] ties together a [`Canvas`](easel_imaging::Canvas), the
//! current [`ViewConfig`](easel_view2d::ViewConfig) and the gesture
//! [`Dispatcher`](easel_event_state::Dispatcher):
//!
//! - `draw(list)` clears the canvas and paints a drawable list under the view
//!   transform inside one save/restore pair.
//! - Pointer input is converted to logical coordinates and dispatched; a held
//!   button pans by the raw pixel delta between moves.
//! - Ctrl+wheel zooms around the pointer (anchored zoom), Shift+wheel pans
//!   horizontally and a plain wheel pans vertically.
//! - Resize notifications re-synchronize the canvas backing size.
//!
//! Time is supplied by the host: pass a monotonic `now` to
//! [`Surface::pointer_down`] and [`Surface::tick`] to drive the grab-repeat
//! timer.
//!
//! ```
//! use core::time::Duration;
//! use easel_drawable::{Dot, Rgb};
//! use easel_imaging::record::RecordingCanvas;
//! use easel_surface::{Modifiers, PointerInput, Surface, SurfaceConfig, WheelInput};
//! use easel_view2d::ViewConfig;
//! use kurbo::{Point, Size, Vec2};
//!
//! let canvas = RecordingCanvas::new(Size::new(640.0, 480.0));
//! let mut surface = Surface::new(canvas, ViewConfig::default(), SurfaceConfig::default());
//!
//! surface.events().on_click(|event| {
//!     assert_eq!(event.coords, Point::new(20.0, 10.0));
//!     Ok(())
//! });
//! surface.click(PointerInput::at(Point::new(20.0, 10.0))).unwrap();
//!
//! // Drag by (15, 5) pixels.
//! surface.pointer_down(PointerInput::at(Point::new(0.0, 0.0)), Duration::ZERO).unwrap();
//! surface.pointer_move(PointerInput::at(Point::new(15.0, 5.0))).unwrap();
//! surface.pointer_up(PointerInput::at(Point::new(15.0, 5.0))).unwrap();
//! assert_eq!(surface.view().offset, Vec2::new(15.0, 5.0));
//!
//! // Zoom in around the pointer.
//! surface.wheel(WheelInput::new(Point::new(320.0, 240.0), -100.0).with_modifiers(Modifiers::CTRL));
//! assert!(surface.view().scale.x > 1.0);
//!
//! surface.draw(&[Dot::new(Point::ORIGIN, 2.0, Rgb::WHITE)]);
//! assert!(surface.canvas().is_balanced());
//! ```

mod config;
mod input;
mod surface;

pub use config::{DEFAULT_WHEEL_ZOOM_SPEED, SurfaceConfig};
pub use input::{Modifiers, PointerInput, WheelInput};
pub use surface::Surface;
