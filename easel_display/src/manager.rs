// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::mem;
use core::time::Duration;

use easel_drawable::Drawable;
use easel_imaging::Canvas;
use easel_surface::Surface;
use easel_timing::Interval;

use crate::{AdaptError, Adapter, DefaultAdapter, Visual};

/// Redraw cadence of a [`VisualizationManager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Time between redraws.
    pub period: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_nanos(1_000_000_000 / 60),
        }
    }
}

/// Double-buffers adapted drawables and repaints a [`Surface`] on a timer.
///
/// Callers [`add`](Self::add) visuals for the next frame and
/// [`flush`](Self::flush) to publish them. Every due [`tick`](Self::tick)
/// paints whatever was last published.
pub struct VisualizationManager<C, A = DefaultAdapter> {
    surface: Surface<C>,
    adapter: A,
    timer: Interval,
    pending: Vec<Box<dyn Drawable>>,
    committed: Vec<Box<dyn Drawable>>,
}

impl<C, A> core::fmt::Debug for VisualizationManager<C, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisualizationManager")
            .field("timer", &self.timer)
            .field("pending", &self.pending.len())
            .field("committed", &self.committed.len())
            .finish_non_exhaustive()
    }
}

impl<C: Canvas> VisualizationManager<C, DefaultAdapter> {
    /// Creates a stopped manager using the built-in adapter.
    pub fn new(surface: Surface<C>, config: ManagerConfig) -> Self {
        Self::with_adapter(surface, DefaultAdapter, config)
    }
}

impl<C: Canvas, A: Adapter> VisualizationManager<C, A> {
    /// Creates a stopped manager with a custom adapter.
    pub fn with_adapter(surface: Surface<C>, adapter: A, config: ManagerConfig) -> Self {
        Self {
            surface,
            adapter,
            timer: Interval::new(config.period),
            pending: Vec::new(),
            committed: Vec::new(),
        }
    }

    /// The surface being painted.
    #[must_use]
    pub fn surface(&self) -> &Surface<C> {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to forward input.
    pub fn surface_mut(&mut self) -> &mut Surface<C> {
        &mut self.surface
    }

    /// The adapter in use.
    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Adapts `visuals` and queues them for the next [`flush`](Self::flush).
    ///
    /// Either every visual is queued or, on the first failure, none are.
    pub fn add<'v>(&mut self, visuals: impl IntoIterator<Item = Visual<'v>>) -> Result<(), AdaptError> {
        let adapted = visuals
            .into_iter()
            .map(|visual| self.adapter.to_drawable(visual))
            .collect::<Result<Vec<_>, _>>()?;
        self.pending.extend(adapted);
        Ok(())
    }

    /// Appends the pointer readout and publishes the pending list.
    ///
    /// The previous committed list is dropped; the pending list starts empty.
    pub fn flush(&mut self) -> Result<(), AdaptError> {
        let readout = Visual::PointerReadout(self.surface.pointer_coords());
        self.pending.push(self.adapter.to_drawable(readout)?);
        self.committed = mem::take(&mut self.pending);
        Ok(())
    }

    /// The list the next tick will paint.
    #[must_use]
    pub fn committed(&self) -> &[Box<dyn Drawable>] {
        &self.committed
    }

    /// Number of drawables waiting for the next flush.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Starts the redraw timer. Does nothing if it is already running.
    pub fn start(&mut self, now: Duration) {
        if self.timer.start(now) {
            log::debug!("visualization started, period {:?}", self.timer.period());
        }
    }

    /// Stops the redraw timer. Safe to call when stopped.
    pub fn stop(&mut self) {
        if self.timer.stop() {
            log::debug!("visualization stopped");
        }
    }

    /// Whether the redraw timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Changes the redraw period, keeping the current run state.
    pub fn set_period(&mut self, period: Duration) {
        self.timer.set_period(period);
    }

    /// Advances the redraw timer and the surface's grab-repeat timer.
    ///
    /// Returns `true` if a frame was painted.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.surface.tick(now);
        if !self.timer.poll(now) {
            return false;
        }
        self.redraw();
        true
    }

    /// Paints the committed list immediately.
    pub fn redraw(&mut self) {
        self.surface.draw(self.committed.as_slice());
    }
}

#[cfg(test)]
mod tests {
    use easel_boxes::{BoxGroup, BoxGrouping, BoxModel, Source};
    use easel_drawable::{Dot, Rgb};
    use easel_imaging::record::{CanvasOp, RecordingCanvas};
    use easel_surface::{PointerInput, SurfaceConfig};
    use easel_view2d::ViewConfig;
    use kurbo::{Point, Size};

    use super::*;

    const PERIOD: Duration = Duration::from_millis(10);

    fn manager() -> VisualizationManager<RecordingCanvas> {
        let surface = Surface::new(
            RecordingCanvas::new(Size::new(400.0, 300.0)),
            ViewConfig::default(),
            SurfaceConfig::default(),
        );
        VisualizationManager::new(surface, ManagerConfig { period: PERIOD })
    }

    fn dot(x: f64) -> Visual<'static> {
        Visual::drawable(Dot::new(Point::new(x, 0.0), 1.0, Rgb::RED))
    }

    fn painted_texts(manager: &VisualizationManager<RecordingCanvas>) -> Vec<String> {
        manager
            .surface()
            .canvas()
            .texts()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn flush_commits_everything_plus_one_readout() {
        let mut manager = manager();
        manager.add([dot(1.0)]).unwrap();
        manager.add([dot(2.0), dot(3.0)]).unwrap();
        assert_eq!(manager.pending_len(), 3);

        manager.flush().unwrap();
        assert_eq!(manager.committed().len(), 4);
        assert_eq!(manager.pending_len(), 0);
    }

    #[test]
    fn adds_after_flush_wait_for_the_next_flush() {
        let mut manager = manager();
        manager.add([dot(1.0)]).unwrap();
        manager.flush().unwrap();
        manager.start(Duration::ZERO);

        manager.add([dot(2.0), dot(3.0)]).unwrap();
        manager.surface_mut().canvas_mut().take_ops();
        assert!(manager.tick(PERIOD));

        let dots = manager
            .surface()
            .canvas()
            .ops()
            .iter()
            .filter(|op| matches!(op, CanvasOp::Ellipse { .. }))
            .count();
        assert_eq!(dots, 1);
        assert_eq!(manager.committed().len(), 2);
    }

    #[test]
    fn ticks_without_flush_repaint_previous_list() {
        let mut manager = manager();
        manager.flush().unwrap();
        manager.start(Duration::ZERO);

        assert!(manager.tick(PERIOD));
        let first = painted_texts(&manager);
        manager.surface_mut().canvas_mut().take_ops();
        assert!(manager.tick(PERIOD * 2));
        assert_eq!(painted_texts(&manager), first);
        assert_eq!(first, vec!["Pointer: [ 0, 0 ]"]);
    }

    #[test]
    fn readout_shows_last_pointer_position() {
        let mut manager = manager();
        manager
            .surface_mut()
            .pointer_move(PointerInput::at(Point::new(12.0, 34.0)))
            .unwrap();
        manager.flush().unwrap();
        manager.redraw();
        assert_eq!(painted_texts(&manager), vec!["Pointer: [ 12, 34 ]"]);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut manager = manager();
        manager.stop();
        assert!(!manager.is_running());

        manager.start(Duration::ZERO);
        manager.start(Duration::from_millis(7));
        assert!(manager.is_running());
        assert!(manager.tick(PERIOD));
        assert!(!manager.tick(PERIOD + Duration::from_millis(5)));

        manager.stop();
        manager.stop();
        assert!(!manager.tick(PERIOD * 5));
    }

    #[test]
    fn failed_add_queues_nothing() {
        let mut manager = manager();
        let err = manager
            .add([dot(1.0), Visual::custom(&42_u32), dot(2.0)])
            .unwrap_err();
        assert_eq!(err, AdaptError::Unadaptable { type_name: "u32" });
        assert_eq!(manager.pending_len(), 0);
    }

    #[test]
    fn box_groups_render_through_the_manager() {
        let grouping = BoxGrouping::new([
            BoxModel::new(1, Source::Left, Point::new(0.0, 0.0), Size::new(10.0, 10.0)),
            BoxModel::new(2, Source::Right, Point::new(20.0, 0.0), Size::new(10.0, 10.0)),
        ])
        .unwrap();
        let groups = grouping.groups();

        let mut manager = manager();
        manager
            .add(grouping.left().iter().chain(grouping.right()).map(Visual::from))
            .unwrap();
        manager.add(groups.iter().map(|g| Visual::BoxGroup(g))).unwrap();
        manager.flush().unwrap();
        manager.surface_mut().canvas_mut().take_ops();
        manager.redraw();

        assert_eq!(painted_texts(&manager), vec!["1", "Pointer: [ 0, 0 ]"]);
        assert!(manager.surface().canvas().is_balanced());
    }

    #[test]
    fn locally_built_group_is_adapted_on_add() {
        let mut manager = manager();
        {
            let left = BoxModel::new(1, Source::Left, Point::new(0.0, 0.0), Size::new(10.0, 10.0));
            let right = BoxModel::new(2, Source::Right, Point::new(30.0, 0.0), Size::new(10.0, 10.0));
            let group = BoxGroup::new(7, [&left, &right]);
            manager.add([Visual::BoxGroup(&group)]).unwrap();
        }
        manager.flush().unwrap();
        manager.surface_mut().canvas_mut().take_ops();
        manager.redraw();

        let rects = manager
            .surface()
            .canvas()
            .ops()
            .iter()
            .filter(|op| matches!(op, CanvasOp::Rect(_)))
            .count();
        // Background, two members, the total box and the readout panel.
        assert_eq!(rects, 5);
        assert_eq!(painted_texts(&manager), vec!["7", "Pointer: [ 0, 0 ]"]);
    }
}
