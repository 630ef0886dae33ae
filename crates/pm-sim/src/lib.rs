//! `pm-sim` — the simulation object that owns the population and drives the
//! tick loop.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① on_tick_start   — observer hook
//!   ② Step            — MotionEngine::advance over the committed population
//!                       (parallel with the `parallel` feature)
//!   ③ Commit          — the new population becomes one immutable Snapshot,
//!                       swapped in for the sim and every SnapshotReader
//!   ④ on_tick_end / on_snapshot
//! ```
//!
//! Readers only ever see whole snapshots: a tick builds its population off
//! to the side and publishes it with a single pointer swap.
//!
//! # Lifecycle
//!
//! `SimBuilder::build` → `Sim::run` / `run_ticks` / `advance` for batch use,
//! or `Sim::spawn` → `RunHandle::stop` for a live, paced run on a background
//! thread.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the kinematics step on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pm_core::SimConfig;
//! use pm_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! println!("{}", sim.stats());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod runner;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use runner::RunHandle;
pub use sim::Sim;
pub use snapshot::{Snapshot, SnapshotReader};
