//! Live, paced execution on a background thread.
//!
//! A renderer wants the population to move in real time: one tick every
//! `tick_duration_ms`.  [`Sim::spawn`] moves the sim onto its own thread and
//! hands back a [`RunHandle`]; the caller polls snapshots through
//! [`RunHandle::reader`] and calls [`RunHandle::stop`] when done.  Stopping
//! only prevents the next tick from being scheduled; a tick in progress
//! always completes and commits.  The wait between ticks is cut short by a
//! stop, so `stop` returns after at most one tick's worth of work.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::{Sim, SimError, SimObserver, SimResult, SnapshotReader};

/// Handle to a sim running on a background thread.
///
/// Dropping the handle without calling [`stop`](Self::stop) also ends the
/// run, after the current tick.
pub struct RunHandle<O> {
    stop:   Sender<()>,
    reader: SnapshotReader,
    thread: JoinHandle<(Sim, O)>,
}

impl<O> RunHandle<O> {
    /// Read access to the live population.
    pub fn reader(&self) -> SnapshotReader {
        self.reader.clone()
    }

    /// Stop scheduling ticks, wait for the thread, and hand back the sim and
    /// observer.
    ///
    /// [`SimError::RunnerPanicked`] is only seen in builds that unwind; with
    /// `panic = "abort"` (the release profile) a panicking tick ends the
    /// process instead.
    pub fn stop(self) -> SimResult<(Sim, O)> {
        // The thread has already gone if the send fails; join reports why.
        let _ = self.stop.send(());
        self.thread.join().map_err(|_| SimError::RunnerPanicked)
    }
}

impl Sim {
    /// Run ticks on a background thread, one per `config.tick_duration_ms`,
    /// until [`RunHandle::stop`] is called.
    ///
    /// `config.total_ticks` is not consulted: a live run goes on until it is
    /// stopped.  If a tick takes longer than the cadence, the next one starts
    /// immediately rather than trying to catch up.
    pub fn spawn<O>(self, observer: O) -> RunHandle<O>
    where
        O: SimObserver + Send + 'static,
    {
        let (stop, stopped) = mpsc::channel::<()>();
        let reader = self.reader();

        let thread = thread::spawn(move || {
            let mut sim = self;
            let mut observer = observer;
            let cadence = sim.clock.tick_duration();
            info!(tick_ms = sim.config.tick_duration_ms, at = %sim.clock, "live run started");

            loop {
                let started = Instant::now();
                sim.tick(&mut observer);
                let spent = started.elapsed();
                let rest = cadence.checked_sub(spent).unwrap_or_else(|| {
                    debug!(?spent, "tick overran its cadence");
                    Duration::ZERO
                });
                // A stop message or a dropped handle ends the run.
                match stopped.recv_timeout(rest) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            observer.on_sim_end(sim.clock.current_tick);
            info!(at = %sim.clock, "live run stopped");
            (sim, observer)
        });

        RunHandle { stop, reader, thread }
    }
}
