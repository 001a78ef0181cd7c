// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Event State: gesture channels and the state behind them.
//!
//! - [`dispatcher`]: per-channel listener lists, propagate/isolate dispatch
//!   and the synthetic grab-repeat timer.
//! - [`drag`]: incremental pointer deltas while a button is held.
//! - [`keys`]: the numeric key (1–9) currently held, attached to events.
//!
//! The crate does not read raw platform events. `easel_surface` converts
//! host input into logical coordinates and drives these state machines.
//!
//! ## Listener errors
//!
//! Listeners return `Result<(), ListenerError>`. A normal dispatch
//! ([`DispatchMode::Propagate`]) stops at the first error and returns it to
//! the caller; the grab-repeat tick uses [`DispatchMode::Isolate`], which logs
//! the error and keeps going so one failing listener cannot stall the repeat.
//!
//! ```
//! use core::time::Duration;
//! use easel_event_state::{Dispatcher, ListenerError, MouseEventData};
//! use kurbo::Point;
//!
//! let mut events = Dispatcher::default();
//! events
//!     .on_pointer_down(|_| Ok(()))
//!     .on_grab(|event| {
//!         if event.coords.x < 0.0 {
//!             return Err(ListenerError::new("left of origin"));
//!         }
//!         Ok(())
//!     });
//!
//! let down = MouseEventData::new(Point::new(-4.0, 2.0));
//! events.trigger_pointer_down(down, Duration::ZERO).unwrap();
//!
//! // The repeat tick re-sends the last point; the failure is only logged.
//! assert!(events.tick(Duration::from_millis(30)));
//! assert!(events.tick(Duration::from_millis(60)));
//! ```

pub mod dispatcher;
pub mod drag;
pub mod keys;

pub use dispatcher::{
    Channel, DEFAULT_GRAB_PERIOD, DispatchError, DispatchMode, Dispatcher, Listener, ListenerError,
    MouseEventData,
};
