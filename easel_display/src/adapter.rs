// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_drawable::Drawable;

use crate::Visual;
use crate::custom::{DrawableBox, DrawableBoxGroup, DrawablePointerReadout};

/// A value could not be converted into a drawable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdaptError {
    /// No conversion exists for this kind of value.
    #[error("unadaptable object of type `{type_name}`")]
    Unadaptable {
        /// Type or variant name of the rejected value.
        type_name: &'static str,
    },
}

/// Converts visuals into drawables.
///
/// Implementations must be reentrant: composite visuals such as box groups
/// adapt their parts through the same adapter.
pub trait Adapter {
    /// Converts one visual.
    fn to_drawable(&self, visual: Visual<'_>) -> Result<Box<dyn Drawable>, AdaptError>;
}

impl<A: Adapter + ?Sized> Adapter for &A {
    fn to_drawable(&self, visual: Visual<'_>) -> Result<Box<dyn Drawable>, AdaptError> {
        (**self).to_drawable(visual)
    }
}

/// Handles every built-in [`Visual`] variant and rejects custom values.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultAdapter;

impl Adapter for DefaultAdapter {
    fn to_drawable(&self, visual: Visual<'_>) -> Result<Box<dyn Drawable>, AdaptError> {
        match visual {
            Visual::Drawable(drawable) => Ok(drawable),
            Visual::Box(model) => Ok(Box::new(DrawableBox::new(model))),
            Visual::BoxGroup(group) => Ok(Box::new(DrawableBoxGroup::new(group, self)?)),
            Visual::PointerReadout(coords) => Ok(Box::new(DrawablePointerReadout::new(coords))),
            Visual::Custom { type_name, .. } => {
                log::error!("cannot adapt object of type `{type_name}`");
                Err(AdaptError::Unadaptable { type_name })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use easel_boxes::{BoxGroup, BoxModel, Source};
    use easel_drawable::{Dot, Frame, Rgb};
    use easel_imaging::DrawContext;
    use easel_imaging::record::{CanvasOp, RecordingCanvas};
    use easel_view2d::ViewConfig;
    use kurbo::{Point, Size};

    use super::*;

    #[derive(Debug)]
    struct Marker;

    #[derive(Debug)]
    struct MarkerDrawable;

    impl Drawable for MarkerDrawable {
        fn draw(&self, ctx: &mut dyn DrawContext, _frame: &Frame) {
            ctx.fill_text("marker", Point::ORIGIN);
        }
    }

    /// Knows `Marker` and counts calls, deferring everything else.
    #[derive(Default)]
    struct CountingAdapter {
        calls: Cell<usize>,
    }

    impl Adapter for CountingAdapter {
        fn to_drawable(&self, visual: Visual<'_>) -> Result<Box<dyn Drawable>, AdaptError> {
            self.calls.set(self.calls.get() + 1);
            match visual {
                Visual::Custom { value, .. } if value.is::<Marker>() => Ok(Box::new(MarkerDrawable)),
                Visual::BoxGroup(group) => Ok(Box::new(DrawableBoxGroup::new(group, self)?)),
                other => DefaultAdapter.to_drawable(other),
            }
        }
    }

    fn paint(drawable: &dyn Drawable) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new(Size::new(320.0, 240.0));
        let frame = Frame::new(ViewConfig::default(), Size::new(320.0, 240.0));
        drawable.draw(&mut canvas, &frame);
        canvas
    }

    #[test]
    fn drawables_pass_through() {
        let drawable = DefaultAdapter
            .to_drawable(Visual::drawable(Dot::new(Point::ORIGIN, 3.0, Rgb::RED)))
            .unwrap();
        assert!(
            paint(&*drawable)
                .ops()
                .iter()
                .any(|op| matches!(op, CanvasOp::Ellipse { .. }))
        );
    }

    #[test]
    fn unknown_values_are_unadaptable() {
        let err = DefaultAdapter
            .to_drawable(Visual::custom(&Marker))
            .unwrap_err();
        assert!(matches!(err, AdaptError::Unadaptable { type_name } if type_name.ends_with("Marker")));
        assert!(err.to_string().starts_with("unadaptable object of type"));
    }

    #[test]
    fn extended_adapter_handles_its_own_types() {
        let adapter = CountingAdapter::default();
        let drawable = adapter.to_drawable(Visual::custom(&Marker)).unwrap();
        assert_eq!(paint(&*drawable).texts().collect::<Vec<_>>(), vec!["marker"]);
    }

    #[test]
    fn group_adaptation_reenters_the_adapter() {
        let a = BoxModel::new(1, Source::Left, Point::ORIGIN, Size::new(5.0, 5.0));
        let b = BoxModel::new(2, Source::Right, Point::new(9.0, 0.0), Size::new(5.0, 5.0));
        let group = BoxGroup::new(1, [&a, &b]);

        let adapter = CountingAdapter::default();
        adapter.to_drawable(Visual::from(&group)).unwrap();
        // The group itself, two members and the total box.
        assert_eq!(adapter.calls.get(), 4);
    }
}
