//! Immutable population snapshots and the shared slot readers poll.

use std::sync::{Arc, PoisonError, RwLock};

use pm_agent::{Agent, PopulationStats};
use pm_core::{AgentId, Tick};

/// The whole population as committed at the end of `tick`.
///
/// Never mutated after construction; the next tick produces a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Number of ticks applied to produce this population.
    pub tick: Tick,
    pub agents: Vec<Agent>,
}

impl Snapshot {
    pub fn initial(agents: Vec<Agent>) -> Self {
        Self { tick: Tick::ZERO, agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// O(1) lookup: ids are sequential, so the id is the index.
    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Counts by kind, role and gender for this snapshot.
    pub fn stats(&self) -> PopulationStats {
        PopulationStats::from_agents(&self.agents)
    }
}

/// Cloneable read handle onto the latest committed snapshot.
///
/// Safe to move to other threads.  `latest` holds the lock only long enough
/// to clone an `Arc`, so readers never block the tick loop for longer than a
/// pointer copy and never observe a population mid-update.
#[derive(Clone, Debug)]
pub struct SnapshotReader {
    slot: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotReader {
    pub(crate) fn new(initial: Arc<Snapshot>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(initial)),
        }
    }

    /// The most recently committed snapshot.
    pub fn latest(&self) -> Arc<Snapshot> {
        // The lock only ever guards an Arc swap, so a poisoned lock still
        // holds a complete snapshot.
        let guard = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Tick of the most recently committed snapshot.
    pub fn tick(&self) -> Tick {
        self.latest().tick
    }

    pub(crate) fn publish(&self, snapshot: Arc<Snapshot>) {
        let mut guard = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot;
    }
}
