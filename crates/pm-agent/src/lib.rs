//! `pm-agent` — agent model and population generation for the promenade
//! simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`kind`]      | `AgentKind` (tagged single/couple/family payload), `Gender`, `Role` |
//! | [`agent`]     | `Agent`, `Kinematics`, `Direction`                         |
//! | [`history`]   | `PathHistory` — fixed-capacity trail of screen positions   |
//! | [`config`]    | `PopulationConfig` and its per-kind sections               |
//! | [`generator`] | `generate_population` — groups built then flattened        |
//! | [`stats`]     | `PopulationStats` — read-only projection of a population   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on agent state types.     |

pub mod agent;
pub mod config;
pub mod generator;
pub mod history;
pub mod kind;
pub mod stats;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Direction, Kinematics};
pub use config::{CouplePolicy, CoupleConfig, FamilyConfig, MeanderConfig, PopulationConfig, SingleConfig};
pub use generator::generate_population;
pub use history::PathHistory;
pub use kind::{AgentKind, Gender, KindTag, Role};
pub use stats::PopulationStats;
