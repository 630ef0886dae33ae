//! The `Sim` struct and its tick loop.

use std::sync::Arc;

use pm_agent::{Agent, PopulationStats};
use pm_core::{SimClock, SimConfig};
use pm_motion::MotionEngine;
use tracing::debug;

use crate::{SimObserver, SimResult, Snapshot, SnapshotReader};

/// The simulation runner.
///
/// Owns the committed population and is its only writer.  Each tick steps
/// every agent from the previous snapshot, then publishes the result as a
/// new [`Snapshot`], to itself and to every [`SnapshotReader`], in one
/// swap.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (tick length, total ticks, seed, …).
    pub config: SimConfig,

    /// Tracks the current tick.  Always equal to `snapshot().tick`.
    pub clock: SimClock,

    /// The kinematics step.
    pub engine: MotionEngine,

    current: Arc<Snapshot>,
    published: SnapshotReader,

    /// Dedicated pool when `config.num_threads` is set; otherwise Rayon's
    /// global pool is used.
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, engine: MotionEngine, agents: Vec<Agent>) -> SimResult<Self> {
        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };

        let current = Arc::new(Snapshot::initial(agents));
        Ok(Self {
            clock: config.make_clock(),
            config,
            engine,
            published: SnapshotReader::new(Arc::clone(&current)),
            current,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// The latest committed snapshot.  Cheap: clones an `Arc`.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// The committed population.
    pub fn agents(&self) -> &[Agent] {
        &self.current.agents
    }

    /// A handle other threads can poll for the latest snapshot.
    pub fn reader(&self) -> SnapshotReader {
        self.published.clone()
    }

    pub fn stats(&self) -> PopulationStats {
        self.current.stats()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Apply exactly one tick and return the committed snapshot.
    pub fn advance(&mut self) -> Arc<Snapshot> {
        let agents = self.step_agents();
        self.clock.advance();

        let next = Arc::new(Snapshot {
            tick: self.clock.current_tick,
            agents,
        });
        self.current = Arc::clone(&next);
        self.published.publish(Arc::clone(&next));
        next
    }

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary and `on_sim_end` once at
    /// the end.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_tick();
        debug!(from = %self.clock.current_tick, to = %end, "run started");
        while self.clock.current_tick < end {
            self.tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        debug!(at = %self.clock, "run finished");
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// One tick with observer hooks.
    pub(crate) fn tick<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.clock.current_tick);
        let snapshot = self.advance();
        observer.on_tick_end(&snapshot);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && snapshot.tick.0.is_multiple_of(interval) {
            observer.on_snapshot(&snapshot);
        }
    }

    fn step_agents(&self) -> Vec<Agent> {
        let engine = &self.engine;
        let agents = self.current.agents.as_slice();

        #[cfg(feature = "parallel")]
        {
            if let Some(pool) = &self.pool {
                return pool.install(|| engine.advance(agents));
            }
        }

        engine.advance(agents)
    }
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("clock", &self.clock)
            .field("agents", &self.current.len())
            .finish()
    }
}

