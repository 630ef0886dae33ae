//! Fluent builder for constructing a [`Sim`].

use pm_agent::{Agent, PopulationConfig, generate_population};
use pm_core::{AgentId, PATH_SPAN, PathGeometry, SimConfig, SimRng};
use pm_motion::MotionEngine;
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick length, total ticks, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                      |
/// |-------------------------|----------------------------------------------|
/// | `.population_config(c)` | `PopulationConfig::default()`                |
/// | `.geometry(g)`          | `PathGeometry::REFERENCE`                    |
/// | `.agents(v)`            | generated from the population config and `config.seed` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .population_config(population)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    population: PopulationConfig,
    geometry:   PathGeometry,
    agents:     Option<Vec<Agent>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            population: PopulationConfig::default(),
            geometry:   PathGeometry::REFERENCE,
            agents:     None,
        }
    }

    /// Recipe for the generated population.  Ignored if [`agents`](Self::agents)
    /// is also called.
    pub fn population_config(mut self, population: PopulationConfig) -> Self {
        self.population = population;
        self
    }

    /// Screen mapping used for trail points.
    pub fn geometry(mut self, geometry: PathGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Start from a hand-built population instead of generating one.
    ///
    /// Ids must run `0, 1, 2, …` in order and every agent must have a
    /// positive speed and progress inside the path.
    pub fn agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Validate inputs, generate the population if needed, and return a
    /// ready-to-run [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let agents = match self.agents {
            Some(agents) => {
                check_agents(&agents)?;
                agents
            }
            None => {
                let mut rng = SimRng::new(self.config.seed);
                generate_population(&self.population, &mut rng)?
            }
        };

        let sim = Sim::new(self.config, MotionEngine::new(self.geometry), agents)?;
        info!(
            seed = sim.config.seed,
            tick_ms = sim.config.tick_duration_ms,
            "built simulation: {}",
            sim.stats()
        );
        Ok(sim)
    }
}

fn check_agents(agents: &[Agent]) -> SimResult<()> {
    for (index, agent) in agents.iter().enumerate() {
        if agent.id.index() != index {
            return Err(SimError::AgentIdMismatch { index, found: agent.id });
        }
        let id: AgentId = agent.id;
        let k = &agent.kinematics;
        if !(k.base_speed.is_finite() && k.base_speed > 0.0) {
            return Err(SimError::InvalidAgent { id, reason: "base speed must be positive and finite" });
        }
        if !(k.base_lane.is_finite() && k.wave_offset.is_finite()) {
            return Err(SimError::InvalidAgent { id, reason: "lane and phase must be finite" });
        }
        if !(k.waviness.is_finite() && k.waviness >= 0.0) {
            return Err(SimError::InvalidAgent { id, reason: "waviness must be non-negative" });
        }
        if !(0.0..PATH_SPAN).contains(&agent.progress) {
            return Err(SimError::InvalidAgent { id, reason: "progress outside the path" });
        }
    }
    Ok(())
}
