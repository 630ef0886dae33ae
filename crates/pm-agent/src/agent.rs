//! The simulated pedestrian.

use pm_core::AgentId;

use crate::{AgentKind, PathHistory};

/// Travel direction along the path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward increasing progress (left to right on screen).
    Forward,
    /// Toward decreasing progress.
    Reverse,
}

impl Direction {
    /// `+1.0` or `-1.0`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    /// Map a random sign draw to a direction.
    #[inline]
    pub fn from_sign(sign: f64) -> Self {
        if sign < 0.0 { Direction::Reverse } else { Direction::Forward }
    }
}

/// Motion parameters drawn once at creation and fixed for the agent's life.
///
/// Members of one social group share `base_speed` and `direction` (and, for
/// families, `wave_offset`) so they travel in lockstep; `base_lane` is what
/// spreads them out side by side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    /// Progress units advanced per tick.  Always positive.
    pub base_speed: f64,
    pub direction: Direction,
    /// Home lateral offset from the centerline; its sign picks the side.
    pub base_lane: f64,
    /// Amplitude of the sinusoidal lateral wander.  Zero walks straight.
    pub waviness: f64,
    /// Wander phase in `[0, 2π)`.
    pub wave_offset: f64,
}

impl Kinematics {
    /// Signed progress delta per tick.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.base_speed * self.direction.sign()
    }

    #[inline]
    pub fn meanders(&self) -> bool {
        self.waviness > 0.0
    }
}

/// One pedestrian: identity, fixed motion parameters, and the mutable state
/// the kinematics engine rewrites every tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    pub kind: AgentKind,
    pub kinematics: Kinematics,
    /// Position along the path in `[0, PATH_SPAN)`.
    pub progress: f64,
    /// Lateral offset computed on the last tick.
    pub lane: f64,
    pub history: PathHistory,
}

impl Agent {
    /// A freshly generated agent: standing on its home lane with no trail.
    pub fn new(id: AgentId, kind: AgentKind, kinematics: Kinematics, start_progress: f64) -> Self {
        Self {
            id,
            kind,
            kinematics,
            progress: start_progress,
            lane: kinematics.base_lane,
            history: PathHistory::new(),
        }
    }
}
