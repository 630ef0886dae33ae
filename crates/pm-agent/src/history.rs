//! Bounded trail of recent screen positions.

use std::collections::VecDeque;

use pm_core::ScreenPoint;

/// The last [`PathHistory::CAPACITY`] rendered positions of one agent, oldest
/// first.  Pushing onto a full history drops the oldest entry.
///
/// Only the renderer's hover trail reads this; the kinematics never do.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathHistory {
    points: VecDeque<ScreenPoint>,
}

impl PathHistory {
    pub const CAPACITY: usize = 20;

    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Append `point`, evicting the oldest entry once at capacity.
    pub fn push(&mut self, point: ScreenPoint) {
        if self.points.len() == Self::CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent position, if any.
    #[inline]
    pub fn latest(&self) -> Option<ScreenPoint> {
        self.points.back().copied()
    }

    /// Oldest-first iterator.
    pub fn iter(&self) -> impl Iterator<Item = &ScreenPoint> + '_ {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<ScreenPoint> {
        self.points.iter().copied().collect()
    }
}
