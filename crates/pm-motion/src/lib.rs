//! `pm-motion` — the kinematics updater.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`zone`]   | `Zone` and the lateral policy: wander, merge, recover           |
//! | [`engine`] | `MotionEngine` — one pure step per agent, whole-population advance |
//!
//! # Movement model
//!
//! Each tick, for every agent independently:
//!
//! 1. `progress += base_speed * direction`.
//! 2. The lane is recomputed from scratch from `base_lane`, the agent's
//!    wander sinusoid and the zone the new progress falls in
//!    (see [`zone::lateral_offset`]).
//! 3. Progress wraps at the path ends.
//! 4. The mapped screen position is appended to the agent's trail.
//!
//! No agent reads another agent's state, so the step is a pure function of
//! one agent and the population can be advanced in any order, or in parallel
//! with the `parallel` feature, and committed as a whole.

pub mod engine;
pub mod zone;


pub use engine::{MotionEngine, PROGRESS_END, wrap_progress};
pub use zone::{Zone, lateral_offset, wander};
