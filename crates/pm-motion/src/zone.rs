//! Lateral lane policy.
//!
//! The path has a choke point (the metro entrance) between progress 70 and
//! 85.  Approaching it, personal lanes collapse onto two shared through-lanes
//! at `±STREAM_LANE`; past it, agents blend back to their own lane over the
//! recovery stretch that ends at 95.
//!
//! ```text
//!  0 ──── free ──── 70 ── merge ── 85 ── recovery ── 95 ── free ── 100
//! ```
//!
//! Intervals: merge is `(70, 85)`, recovery is `[85, 95)`, everything else is
//! free.

use pm_agent::Kinematics;

pub const MERGE_START: f64 = 70.0;
pub const RECOVERY_START: f64 = 85.0;
pub const RECOVERY_END: f64 = 95.0;

/// Lateral offset of the two shared stream lanes.
pub const STREAM_LANE: f64 = 0.8;

/// Wander amplitude multiplier while merged.
pub const MERGED_WAVE_SCALE: f64 = 0.5;

/// Progress units per radian of wander phase.
pub const WAVE_LENGTH: f64 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Free,
    Merge,
    Recovery,
}

impl Zone {
    /// Zone containing `progress` (taken before wraparound).
    pub fn at(progress: f64) -> Zone {
        if progress > MERGE_START && progress < RECOVERY_START {
            Zone::Merge
        } else if (RECOVERY_START..RECOVERY_END).contains(&progress) {
            Zone::Recovery
        } else {
            Zone::Free
        }
    }
}

/// Sinusoidal wander at `progress`; zero for straight walkers.
#[inline]
pub fn wander(k: &Kinematics, progress: f64) -> f64 {
    if k.meanders() {
        (progress / WAVE_LENGTH + k.wave_offset).sin() * k.waviness
    } else {
        0.0
    }
}

/// The lane an agent occupies at `progress`.
///
/// - free: `base_lane + wander`
/// - merge: the stream lane on the agent's side plus half the wander,
///   regardless of `base_lane` magnitude or waviness
/// - recovery: linear blend from `base_lane` (at 85) to the free lane (at 95)
pub fn lateral_offset(k: &Kinematics, progress: f64) -> f64 {
    let free = k.base_lane + wander(k, progress);

    match Zone::at(progress) {
        Zone::Free => free,
        Zone::Merge => {
            let stream = if k.base_lane > 0.0 { STREAM_LANE } else { -STREAM_LANE };
            stream + wander(k, progress) * MERGED_WAVE_SCALE
        }
        Zone::Recovery => {
            let remaining = (RECOVERY_END - progress) / (RECOVERY_END - RECOVERY_START);
            k.base_lane * remaining + free * (1.0 - remaining)
        }
    }
}
