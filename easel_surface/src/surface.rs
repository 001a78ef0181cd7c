// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use easel_drawable::{Drawable, Frame};
use easel_event_state::drag::DragState;
use easel_event_state::keys::KeyState;
use easel_event_state::{DispatchError, Dispatcher, MouseEventData};
use easel_imaging::{Canvas, DrawContextExt};
use easel_view2d::ViewConfig;
use kurbo::{Point, Rect, Size};

use crate::{Modifiers, PointerInput, SurfaceConfig, WheelInput};

/// An interactive drawing surface.
///
/// Owns the canvas, the current [`ViewConfig`] and the gesture
/// [`Dispatcher`]. The host forwards raw input to the `key_*`, `click`,
/// `pointer_*` and `wheel` handlers, calls [`Surface::on_resize`] when the
/// displayed size changes and [`Surface::tick`] from its frame loop.
#[derive(Debug)]
pub struct Surface<C> {
    canvas: C,
    view: ViewConfig,
    config: SurfaceConfig,
    events: Dispatcher,
    drag: DragState,
    keys: KeyState,
    pointer_coords: Point,
}

impl<C: Canvas> Surface<C> {
    /// Binds a surface to `canvas` and synchronizes its backing size.
    pub fn new(canvas: C, view: ViewConfig, config: SurfaceConfig) -> Self {
        let mut surface = Self {
            canvas,
            view,
            config,
            events: Dispatcher::new(config.grab_period),
            drag: DragState::default(),
            keys: KeyState::default(),
            pointer_coords: Point::ORIGIN,
        };
        surface.refresh();
        surface
    }

    /// The underlying canvas.
    #[must_use]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Mutable access to the underlying canvas.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Current pan/zoom.
    #[must_use]
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Mutable pan/zoom.
    pub fn view_mut(&mut self) -> &mut ViewConfig {
        &mut self.view
    }

    /// Surface tunables.
    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Gesture channels, for subscribing listeners.
    pub fn events(&mut self) -> &mut Dispatcher {
        &mut self.events
    }

    /// Displayed size in surface pixels.
    #[must_use]
    pub fn frame_size(&self) -> Size {
        self.canvas.client_size()
    }

    /// The rendering state drawables receive this frame.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::new(self.view, self.frame_size())
    }

    /// Logical rectangle currently visible.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.view.visible_rect(self.frame_size())
    }

    /// Last pointer position seen by [`Surface::pointer_move`], in logical
    /// coordinates.
    #[must_use]
    pub fn pointer_coords(&self) -> Point {
        self.pointer_coords
    }

    /// Whether a pan drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Clears the surface and paints `list` in order under the view transform.
    pub fn draw<D: Drawable>(&mut self, list: &[D]) {
        self.clear();
        let frame = self.frame();
        self.canvas.with_saved(|ctx| {
            ctx.transform(frame.view.affine());
            for drawable in list {
                drawable.draw(ctx, &frame);
            }
        });
        log::trace!("painted {} drawables", list.len());
    }

    /// Fills the whole surface with the background color.
    pub fn clear(&mut self) {
        let area = self.frame_size().to_rect();
        self.canvas.begin_path();
        self.canvas
            .set_fill_color(self.config.background.with_opacity(None));
        self.canvas.rect(area);
        self.canvas.fill();
    }

    /// Pans so that `logical` sits at the center of the surface.
    pub fn center_on(&mut self, logical: Point) {
        let size = self.frame_size();
        self.view.center_on(logical, size);
    }

    /// Re-synchronizes the backing size with the displayed size, then clears.
    pub fn refresh(&mut self) {
        let client = self.canvas.client_size();
        if self.canvas.backing_size() != client {
            self.canvas.set_backing_size(client);
            log::debug!(
                "surface backing resized to {}x{}",
                client.width,
                client.height
            );
        }
        self.clear();
    }

    /// Resize notification from the host.
    pub fn on_resize(&mut self) {
        self.refresh();
    }

    /// Key-down with the platform key name.
    pub fn key_down(&mut self, key: &str) {
        self.keys.key_down(key);
    }

    /// Any key-up.
    pub fn key_up(&mut self) {
        self.keys.key_up();
    }

    /// A click; dispatches [`Channel::Click`](easel_event_state::Channel::Click).
    pub fn click(&mut self, input: PointerInput) -> Result<(), DispatchError> {
        let event = self.event_at(input);
        self.events.trigger_click(event)
    }

    /// A button went down.
    ///
    /// Starts the grab-repeat timer and dispatches pointer-down; panning only
    /// begins if every listener succeeded.
    pub fn pointer_down(&mut self, input: PointerInput, now: Duration) -> Result<(), DispatchError> {
        let event = self.event_at(input);
        self.events.trigger_pointer_down(event, now)?;
        self.drag.start(input.position);
        Ok(())
    }

    /// The pointer moved.
    ///
    /// Dispatches pointer-move; while dragging, also dispatches grab and pans
    /// by the pixel delta since the previous move.
    pub fn pointer_move(&mut self, input: PointerInput) -> Result<(), DispatchError> {
        let event = self.event_at(input);
        self.pointer_coords = event.coords;
        self.events.trigger_pointer_move(event)?;
        if !self.drag.is_dragging() {
            return Ok(());
        }
        self.events.trigger_grab(event)?;
        if let Some(delta) = self.drag.update(input.position) {
            self.view.pan_by(delta);
        }
        Ok(())
    }

    /// The button was released.
    pub fn pointer_up(&mut self, input: PointerInput) -> Result<(), DispatchError> {
        self.drag.end();
        let event = self.event_at(input);
        self.events.trigger_pointer_up(event)
    }

    /// The pointer left the surface; handled like a release.
    pub fn pointer_leave(&mut self, input: PointerInput) -> Result<(), DispatchError> {
        self.pointer_up(input)
    }

    /// Wheel input: control zooms around the pointer, shift pans horizontally,
    /// otherwise pans vertically.
    pub fn wheel(&mut self, input: WheelInput) {
        if input.modifiers.contains(Modifiers::CTRL) {
            let target = self.view.scale.x - input.delta_y * self.config.wheel_zoom_speed;
            let scale = self.config.zoom_limits.clamp(target);
            self.view.zoom_about(input.position, scale);
        } else if input.modifiers.contains(Modifiers::SHIFT) {
            self.view.offset.x -= input.delta_y;
        } else {
            self.view.offset.y -= input.delta_y;
        }
    }

    /// Advances the grab-repeat timer. Returns `true` if a grab was dispatched.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.events.tick(now)
    }

    fn event_at(&self, input: PointerInput) -> MouseEventData {
        MouseEventData::new(self.view.to_logical(input.position))
            .with_extra_key(self.keys.digit())
            .with_ctrl(input.modifiers.contains(Modifiers::CTRL))
    }
}
