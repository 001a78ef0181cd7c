// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{BoxGroup, BoxModel, Source};

/// A box set could not be split into left and right sides.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GroupingError {
    /// A box carried a tag other than `left` or `right`.
    #[error("box {id} has unexpected source `{tag}`")]
    UnexpectedSource {
        /// Offending box id.
        id: u32,
        /// Its tag.
        tag: Source,
    },
}

/// Boxes split by side, paired by nearest position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxGrouping {
    left: Vec<BoxModel>,
    right: Vec<BoxModel>,
}

impl BoxGrouping {
    /// Splits `boxes` into left and right sides, keeping input order.
    ///
    /// Any box tagged [`Source::Total`] is rejected.
    pub fn new(boxes: impl IntoIterator<Item = BoxModel>) -> Result<Self, GroupingError> {
        let mut grouping = Self::default();
        for b in boxes {
            match b.source {
                Source::Left => grouping.left.push(b),
                Source::Right => grouping.right.push(b),
                tag @ Source::Total => {
                    return Err(GroupingError::UnexpectedSource { id: b.id, tag });
                }
            }
        }
        Ok(grouping)
    }

    /// Left-side boxes.
    #[must_use]
    pub fn left(&self) -> &[BoxModel] {
        &self.left
    }

    /// Right-side boxes.
    #[must_use]
    pub fn right(&self) -> &[BoxModel] {
        &self.right
    }

    /// Mutable left-side boxes, e.g. to move them between frames.
    pub fn left_mut(&mut self) -> &mut [BoxModel] {
        &mut self.left
    }

    /// Mutable right-side boxes.
    pub fn right_mut(&mut self) -> &mut [BoxModel] {
        &mut self.right
    }

    /// Pairs each left box with its nearest right box.
    ///
    /// Groups are numbered from 1 in left input order. Ties go to the right
    /// box that comes first. A right box at a NaN distance is never picked,
    /// and a left box with no remaining candidate forms no group. The result is recomputed from current positions on each call.
    #[must_use]
    pub fn groups(&self) -> Vec<BoxGroup<'_>> {
        let mut groups = Vec::with_capacity(self.left.len());
        let mut next_id = 1;
        for lhs in &self.left {
            let mut best = None;
            let mut min = f64::INFINITY;
            for rhs in &self.right {
                let dist = lhs.distance_to(rhs);
                if dist < min {
                    min = dist;
                    best = Some(rhs);
                }
            }
            if let Some(rhs) = best {
                groups.push(BoxGroup::new(next_id, [lhs, rhs]));
                next_id += 1;
            }
        }
        groups
    }

    /// The current group with the smallest bounding area.
    #[must_use]
    pub fn smallest_group(&self) -> Option<BoxGroup<'_>> {
        let groups = self.groups();
        let index = smallest_group_index(&groups)?;
        groups.into_iter().nth(index)
    }
}

/// The group with the smallest bounding area; ties go to the first.
#[must_use]
pub fn smallest_group<'g, 'a>(groups: &'g [BoxGroup<'a>]) -> Option<&'g BoxGroup<'a>> {
    smallest_group_index(groups).map(|i| &groups[i])
}

fn smallest_group_index(groups: &[BoxGroup<'_>]) -> Option<usize> {
    let mut best = None;
    let mut min = f64::INFINITY;
    for (index, group) in groups.iter().enumerate() {
        let area = group.bounds_area();
        if area < min {
            min = area;
            best = Some(index);
        }
    }
    best
}
