//! Plain data rows written by output backends.

use pm_agent::{Agent, Gender, KindTag, PopulationStats, Role};
use pm_core::{PathGeometry, Tick};

/// One agent at one committed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentFrameRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub kind:     KindTag,
    /// Only families have roles.
    pub role:     Option<Role>,
    /// `None` for couples generated without gender assignment.
    pub gender:   Option<Gender>,
    pub progress: f64,
    pub lane:     f64,
    pub x:        f64,
    pub y:        f64,
}

impl AgentFrameRow {
    pub fn new(tick: Tick, agent: &Agent, geometry: &PathGeometry) -> Self {
        let p = geometry.position(agent.progress, agent.lane);
        Self {
            tick:     tick.0,
            agent_id: agent.id.0,
            kind:     agent.kind.tag(),
            role:     agent.kind.role(),
            gender:   agent.kind.gender(),
            progress: agent.progress,
            lane:     agent.lane,
            x:        p.x,
            y:        p.y,
        }
    }
}

/// Population counts for one committed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    pub elapsed_ms: u64,
    pub agents:     u64,
    pub singles:    u64,
    pub couples:    u64,
    pub families:   u64,
    pub parents:    u64,
    pub children:   u64,
}

impl TickSummaryRow {
    pub fn new(tick: Tick, elapsed_ms: u64, stats: &PopulationStats) -> Self {
        Self {
            tick: tick.0,
            elapsed_ms,
            agents:   stats.agents as u64,
            singles:  stats.single_agents as u64,
            couples:  stats.couples() as u64,
            families: stats.families() as u64,
            parents:  stats.parents as u64,
            children: stats.children as u64,
        }
    }
}
