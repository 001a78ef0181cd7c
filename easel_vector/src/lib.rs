// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Vector: mutable numeric vectors and point-set statistics.
//!
//! [`Vector`] is a small, fixed-length sequence of `f64` with in-place
//! algebra (add/sub/scale/divide, dot and cross products, 2D rotation,
//! normalization). The [`geometry`] module computes bounds, centers and
//! simple statistics over collections of vectors.
//!
//! Two-dimensional geometry elsewhere in Easel uses `kurbo` types; `Vector`
//! converts to and from [`kurbo::Point`] and [`kurbo::Vec2`].
//!
//! ```
//! use easel_vector::Vector;
//!
//! let mut v = Vector::from([3.0, 4.0]);
//! assert_eq!(v.abs(), 5.0);
//! v.normalize();
//! assert!(v.is_normalized());
//! ```

pub mod geometry;
mod vector;

pub use vector::{EPSILON, Vector, is_equal};
