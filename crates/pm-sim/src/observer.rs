//! Simulation observer trait for progress reporting and data collection.

use pm_core::Tick;

use crate::Snapshot;

/// Callbacks invoked by the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, snapshot: &Snapshot) {
///         if snapshot.tick.0 % self.interval == 0 {
///             println!("{}: {}", snapshot.tick, snapshot.stats());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before tick `tick` is computed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every tick with the freshly committed snapshot.
    fn on_tick_end(&mut self, _snapshot: &Snapshot) {}

    /// Called every `config.output_interval_ticks` ticks, after `on_tick_end`.
    ///
    /// Output writers hook in here so the sim needs no knowledge of any
    /// specific output format.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called once when a run finishes or a live run is stopped.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
