// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Boxes: labeled boxes and nearest-neighbor pairing.
//!
//! A [`BoxGrouping`] splits a set of [`BoxModel`]s into left and right sides
//! and pairs every left box with the right box whose position is closest.
//! Each pair is a [`BoxGroup`] whose bounds are derived from its members on
//! demand. [`smallest_group`] picks the group with the least bounding area.
//!
//! ```
//! use easel_boxes::{BoxGrouping, BoxModel, Source};
//! use kurbo::{Point, Size};
//!
//! let size = Size::new(20.0, 20.0);
//! let grouping = BoxGrouping::new([
//!     BoxModel::new(1, Source::Left, Point::new(0.0, 0.0), size),
//!     BoxModel::new(2, Source::Left, Point::new(100.0, 0.0), size),
//!     BoxModel::new(3, Source::Right, Point::new(90.0, 10.0), size),
//! ])?;
//!
//! let groups = grouping.groups();
//! assert_eq!(groups.len(), 2);
//! let smallest = grouping.smallest_group().unwrap();
//! assert_eq!(smallest.boxes[0].id, 2);
//! # Ok::<(), easel_boxes::GroupingError>(())
//! ```

mod grouping;
mod model;

pub use grouping::{BoxGrouping, GroupingError, smallest_group};
pub use model::{BoxGroup, BoxModel, ParseSourceError, Source};
