// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture dispatcher: ordered listeners per channel plus the grab-repeat timer.
//!
//! ## Protocol
//!
//! - [`Dispatcher::trigger_pointer_down`] (re)starts the grab-repeat timer and
//!   then dispatches [`Channel::PointerDown`].
//! - [`Dispatcher::tick`] fires [`Channel::Grab`] with the last known point
//!   whenever the timer is due, even if the pointer has not moved.
//! - [`Dispatcher::trigger_pointer_up`] stops the timer and then dispatches
//!   [`Channel::PointerUp`].
//!
//! Every dispatch records the event coordinates as the last known point before
//! any listener runs.

use core::fmt;
use core::time::Duration;
use std::borrow::Cow;

use easel_timing::Interval;
use hashbrown::HashMap;
use kurbo::Point;

/// Period of the grab-repeat timer used by [`Dispatcher::default`].
pub const DEFAULT_GRAB_PERIOD: Duration = Duration::from_millis(30);

/// Gesture channels listeners can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// A completed click.
    Click,
    /// A button went down over the surface.
    PointerDown,
    /// The pointer moved over the surface.
    PointerMove,
    /// Continuous drag, re-emitted on a timer while a button is held.
    Grab,
    /// The button was released or the pointer left the surface.
    PointerUp,
}

impl Channel {
    /// Every channel, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Click,
        Self::PointerDown,
        Self::PointerMove,
        Self::Grab,
        Self::PointerUp,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::PointerDown => "pointer-down",
            Self::PointerMove => "pointer-move",
            Self::Grab => "grab",
            Self::PointerUp => "pointer-up",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How listener errors are handled during a dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchMode {
    /// The first error aborts the remaining listeners and is returned.
    #[default]
    Propagate,
    /// Errors are logged and the remaining listeners still run.
    Isolate,
}

/// Snapshot handed to listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEventData {
    /// Pointer position in logical coordinates.
    pub coords: Point,
    /// Numeric key (1–9) held while the event happened.
    pub extra_key: Option<u8>,
    /// Whether the control key was held.
    pub ctrl_key: bool,
}

impl MouseEventData {
    /// An event at `coords` with no modifiers.
    #[must_use]
    pub const fn new(coords: Point) -> Self {
        Self {
            coords,
            extra_key: None,
            ctrl_key: false,
        }
    }

    /// Sets the held numeric key.
    #[must_use]
    pub const fn with_extra_key(mut self, key: Option<u8>) -> Self {
        self.extra_key = key;
        self
    }

    /// Sets the control-key flag.
    #[must_use]
    pub const fn with_ctrl(mut self, ctrl_key: bool) -> Self {
        self.ctrl_key = ctrl_key;
        self
    }
}

/// Error returned by a listener.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ListenerError {
    message: Cow<'static, str>,
}

impl ListenerError {
    /// Creates an error with a human-readable message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message passed to [`ListenerError::new`].
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A listener failed during a [`DispatchMode::Propagate`] dispatch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{channel} listener failed")]
pub struct DispatchError {
    /// Channel being dispatched.
    pub channel: Channel,
    /// The listener's error.
    #[source]
    pub source: ListenerError,
}

/// A subscribed callback.
pub type Listener = Box<dyn FnMut(&MouseEventData) -> Result<(), ListenerError>>;

/// Ordered listener lists per [`Channel`] and the grab-repeat timer.
pub struct Dispatcher {
    listeners: HashMap<Channel, Vec<Listener>>,
    last_point: Option<Point>,
    grab_timer: Interval,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(Channel, usize)> = Channel::ALL
            .iter()
            .map(|&channel| (channel, self.listener_count(channel)))
            .collect();
        f.debug_struct("Dispatcher")
            .field("listeners", &counts)
            .field("last_point", &self.last_point)
            .field("grab_timer", &self.grab_timer)
            .finish()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_GRAB_PERIOD)
    }
}

impl Dispatcher {
    /// Creates a dispatcher whose grab-repeat timer fires every `grab_period`.
    #[must_use]
    pub fn new(grab_period: Duration) -> Self {
        Self {
            listeners: HashMap::new(),
            last_point: None,
            grab_timer: Interval::new(grab_period),
        }
    }

    /// Appends a listener to `channel`. Returns `self` for chaining.
    pub fn on(
        &mut self,
        channel: Channel,
        listener: impl FnMut(&MouseEventData) -> Result<(), ListenerError> + 'static,
    ) -> &mut Self {
        self.listeners
            .entry(channel)
            .or_default()
            .push(Box::new(listener));
        self
    }

    /// Subscribes to [`Channel::Click`].
    pub fn on_click(
        &mut self,
        listener: impl FnMut(&MouseEventData) -> Result<(), ListenerError> + 'static,
    ) -> &mut Self {
        self.on(Channel::Click, listener)
    }

    /// Subscribes to [`Channel::PointerDown`].
    pub fn on_pointer_down(
        &mut self,
        listener: impl FnMut(&MouseEventData) -> Result<(), ListenerError> + 'static,
    ) -> &mut Self {
        self.on(Channel::PointerDown, listener)
    }

    /// Subscribes to [`Channel::PointerMove`].
    pub fn on_pointer_move(
        &mut self,
        listener: impl FnMut(&MouseEventData) -> Result<(), ListenerError> + 'static,
    ) -> &mut Self {
        self.on(Channel::PointerMove, listener)
    }

    /// Subscribes to [`Channel::Grab`].
    pub fn on_grab(
        &mut self,
        listener: impl FnMut(&MouseEventData) -> Result<(), ListenerError> + 'static,
    ) -> &mut Self {
        self.on(Channel::Grab, listener)
    }

    /// Subscribes to [`Channel::PointerUp`].
    pub fn on_pointer_up(
        &mut self,
        listener: impl FnMut(&MouseEventData) -> Result<(), ListenerError> + 'static,
    ) -> &mut Self {
        self.on(Channel::PointerUp, listener)
    }

    /// Number of listeners subscribed to `channel`.
    #[must_use]
    pub fn listener_count(&self, channel: Channel) -> usize {
        self.listeners.get(&channel).map_or(0, Vec::len)
    }

    /// Coordinates of the most recent dispatch, if any.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    /// Whether the grab-repeat timer is running.
    #[must_use]
    pub fn is_grab_repeating(&self) -> bool {
        self.grab_timer.is_running()
    }

    /// Records `event.coords` as the last known point and runs the listeners
    /// of `channel` in subscription order.
    ///
    /// In [`DispatchMode::Isolate`] this never returns an error.
    pub fn trigger(
        &mut self,
        channel: Channel,
        event: MouseEventData,
        mode: DispatchMode,
    ) -> Result<(), DispatchError> {
        self.last_point = Some(event.coords);
        let Some(listeners) = self.listeners.get_mut(&channel) else {
            return Ok(());
        };
        for listener in listeners.iter_mut() {
            if let Err(source) = listener(&event) {
                match mode {
                    DispatchMode::Propagate => return Err(DispatchError { channel, source }),
                    DispatchMode::Isolate => {
                        log::warn!("{channel} listener failed: {source}");
                    }
                }
            }
        }
        Ok(())
    }

    /// Dispatches [`Channel::Click`].
    pub fn trigger_click(&mut self, event: MouseEventData) -> Result<(), DispatchError> {
        self.trigger(Channel::Click, event, DispatchMode::Propagate)
    }

    /// Restarts the grab-repeat timer from `now`, then dispatches
    /// [`Channel::PointerDown`].
    ///
    /// The timer keeps running even if a listener fails; the matching
    /// [`Dispatcher::trigger_pointer_up`] stops it.
    pub fn trigger_pointer_down(
        &mut self,
        event: MouseEventData,
        now: Duration,
    ) -> Result<(), DispatchError> {
        self.grab_timer.restart(now);
        log::debug!("grab repeat started");
        self.trigger(Channel::PointerDown, event, DispatchMode::Propagate)
    }

    /// Dispatches [`Channel::PointerMove`].
    pub fn trigger_pointer_move(&mut self, event: MouseEventData) -> Result<(), DispatchError> {
        self.trigger(Channel::PointerMove, event, DispatchMode::Propagate)
    }

    /// Dispatches [`Channel::Grab`] for real pointer movement.
    pub fn trigger_grab(&mut self, event: MouseEventData) -> Result<(), DispatchError> {
        self.trigger(Channel::Grab, event, DispatchMode::Propagate)
    }

    /// Stops the grab-repeat timer, then dispatches [`Channel::PointerUp`].
    pub fn trigger_pointer_up(&mut self, event: MouseEventData) -> Result<(), DispatchError> {
        self.stop_grab_repeat();
        self.trigger(Channel::PointerUp, event, DispatchMode::Propagate)
    }

    /// Stops the grab-repeat timer. Safe to call when it is not running.
    pub fn stop_grab_repeat(&mut self) {
        if self.grab_timer.stop() {
            log::debug!("grab repeat stopped");
        }
    }

    /// Advances the grab-repeat timer to `now`.
    ///
    /// When due, re-dispatches [`Channel::Grab`] in [`DispatchMode::Isolate`]
    /// with the last known point and no modifiers. Returns `true` if a grab was
    /// dispatched; nothing is sent before any point has been recorded.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.grab_timer.poll(now) {
            return false;
        }
        let Some(coords) = self.last_point else {
            return false;
        };
        self.trigger(Channel::Grab, MouseEventData::new(coords), DispatchMode::Isolate)
            .is_ok()
    }
}
