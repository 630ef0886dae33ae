//! `pm-core` — foundational types for the promenade pedestrian simulation.
//!
//! This crate is a dependency of every other `pm-*` crate.  It has no `pm-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                                 |
//! | [`range`]   | `UniformRange` — validated half-open sampling interval    |
//! | [`rng`]     | `SimRng` (seeded, explicit randomness source)             |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`geo`]     | `ScreenPoint`, `PathGeometry` (progress/lane → x/y)       |
//! | [`error`]   | `ConfigError`, `ConfigResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod range;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use geo::{PATH_SPAN, PathGeometry, ScreenPoint};
pub use ids::AgentId;
pub use range::UniformRange;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
