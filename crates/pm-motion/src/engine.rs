//! The per-tick kinematics engine.

use pm_agent::Agent;
use pm_core::{PATH_SPAN, PathGeometry};

use crate::lateral_offset;

/// Where a reverse walker reappears after passing progress 0: the largest
/// `f64` below `PATH_SPAN`, which keeps progress inside `[0, PATH_SPAN)`.
pub const PROGRESS_END: f64 = f64::from_bits(PATH_SPAN.to_bits() - 1);

/// Reset progress that ran off either end of the path.
///
/// Forward walkers restart at 0 and reverse walkers at the far end; nothing
/// carries over, so a walker at 99.97 moving 0.05 lands on exactly 0.
#[inline]
pub fn wrap_progress(progress: f64) -> f64 {
    if progress >= PATH_SPAN {
        0.0
    } else if progress < 0.0 {
        PROGRESS_END
    } else {
        progress
    }
}

/// Advances agents one tick at a time.
///
/// Holds only the screen mapping used for trail points; the lane policy is
/// fixed.  The engine is `Sync` and stateless between calls.
#[derive(Clone, Debug, Default)]
pub struct MotionEngine {
    pub geometry: PathGeometry,
}

impl MotionEngine {
    pub fn new(geometry: PathGeometry) -> Self {
        Self { geometry }
    }

    /// The state of `agent` one tick later.  Pure: reads nothing but `agent`.
    pub fn step(&self, agent: &Agent) -> Agent {
        let k = &agent.kinematics;

        // The lane policy sees progress before wraparound.
        let advanced = agent.progress + k.velocity();
        let lane = lateral_offset(k, advanced);
        let progress = wrap_progress(advanced);

        let mut history = agent.history.clone();
        history.push(self.geometry.position(progress, lane));

        Agent {
            id: agent.id,
            kind: agent.kind,
            kinematics: agent.kinematics,
            progress,
            lane,
            history,
        }
    }

    /// Step every agent and return the new population in the same order.
    ///
    /// With the `parallel` feature the steps run on the current Rayon pool.
    pub fn advance(&self, agents: &[Agent]) -> Vec<Agent> {
        #[cfg(not(feature = "parallel"))]
        {
            agents.iter().map(|a| self.step(a)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            agents.par_iter().map(|a| self.step(a)).collect()
        }
    }

    /// Current screen position of `agent`.
    #[inline]
    pub fn position_of(&self, agent: &Agent) -> pm_core::ScreenPoint {
        self.geometry.position(agent.progress, agent.lane)
    }
}
