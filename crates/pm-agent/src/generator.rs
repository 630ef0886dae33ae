//! Population generator.
//!
//! Agents are generated in social groups (couples, singles, families) and
//! then flattened.  Members of one group share speed, direction and start
//! progress, so they move in lockstep for the whole run without any
//! group-following logic in the kinematics; only their `base_lane` differs.
//!
//! Ids are sequential in generation order: couples first, then singles, then
//! families.  Within a couple the two members are adjacent (`2k`, `2k + 1`).

use pm_core::{AgentId, ConfigError, ConfigResult, SimRng};

use crate::{
    Agent, AgentKind, CouplePolicy, Direction, Gender, Kinematics, PopulationConfig, Role,
};

/// Generate the full initial population.
///
/// Validates `config` first; no random draws happen for an invalid config.
///
/// ```rust
/// use pm_agent::{generate_population, PopulationConfig};
/// use pm_core::SimRng;
///
/// let agents = generate_population(&PopulationConfig::default(), &mut SimRng::new(7)).unwrap();
/// assert!(agents.len() >= 79);
/// ```
pub fn generate_population(config: &PopulationConfig, rng: &mut SimRng) -> ConfigResult<Vec<Agent>> {
    config.validate()?;

    let (_, max) = config.agent_count_bounds();
    let mut generator = Generator {
        config,
        rng,
        next_id: Some(AgentId(0)),
        agents: Vec::with_capacity(max),
    };

    generator.couples()?;
    generator.singles()?;
    generator.families()?;

    Ok(generator.agents)
}

/// Parameters shared by every member of one group.
struct GroupMotion {
    base_speed:     f64,
    direction:      Direction,
    start_progress: f64,
    lane:           f64,
    waviness:       f64,
}

struct Generator<'a> {
    config:  &'a PopulationConfig,
    rng:     &'a mut SimRng,
    /// `None` once every `u32` id has been handed out.
    next_id: Option<AgentId>,
    agents:  Vec<Agent>,
}

impl Generator<'_> {
    fn push(&mut self, kind: AgentKind, kinematics: Kinematics, start_progress: f64) -> ConfigResult<()> {
        let id = self
            .next_id
            .ok_or_else(|| ConfigError::Invalid("population exhausts the agent id space".to_owned()))?;
        self.next_id = id.next();
        self.agents.push(Agent::new(id, kind, kinematics, start_progress));
        Ok(())
    }

    fn random_gender(&mut self, male_ratio: f64) -> Gender {
        if self.rng.gen_bool(male_ratio) { Gender::Male } else { Gender::Female }
    }

    fn couples(&mut self) -> ConfigResult<()> {
        let config = self.config;
        let cfg = &config.couples;
        for _ in 0..cfg.groups {
            let group = GroupMotion {
                base_speed:     cfg.speed.sample(self.rng),
                direction:      Direction::from_sign(self.rng.sign()),
                start_progress: config.start_progress.sample(self.rng),
                lane:           self.rng.sign() * cfg.lane_magnitude,
                waviness:       if self.rng.gen_bool(cfg.meander.probability) {
                    cfg.meander.amplitude.sample(self.rng)
                } else {
                    0.0
                },
            };

            for (member, offset) in [-cfg.member_offset, cfg.member_offset].into_iter().enumerate() {
                let gender = match cfg.gender {
                    CouplePolicy::Unassigned => None,
                    CouplePolicy::Random => Some(self.random_gender(0.5)),
                    CouplePolicy::MixedPair if member == 0 => Some(Gender::Male),
                    CouplePolicy::MixedPair => Some(Gender::Female),
                };
                // Each partner wanders with its own phase.
                let kinematics = Kinematics {
                    base_speed:  group.base_speed,
                    direction:   group.direction,
                    base_lane:   group.lane + offset,
                    waviness:    group.waviness,
                    wave_offset: self.rng.phase(),
                };
                self.push(AgentKind::Couple { gender }, kinematics, group.start_progress)?;
            }
        }
        Ok(())
    }

    fn singles(&mut self) -> ConfigResult<()> {
        let config = self.config;
        let cfg = &config.singles;
        for _ in 0..cfg.count {
            let waviness = if self.rng.gen_bool(cfg.meander.probability) {
                cfg.meander.amplitude.sample(self.rng)
            } else {
                0.0
            };
            let gender = self.random_gender(cfg.male_ratio);
            let kinematics = Kinematics {
                base_speed:  cfg.speed.sample(self.rng),
                direction:   Direction::from_sign(self.rng.sign()),
                base_lane:   self.rng.sign() * cfg.lane_magnitude.sample(self.rng),
                waviness,
                wave_offset: self.rng.phase(),
            };
            let start = config.start_progress.sample(self.rng);
            self.push(AgentKind::Single { gender }, kinematics, start)?;
        }
        Ok(())
    }

    fn families(&mut self) -> ConfigResult<()> {
        let config = self.config;
        let cfg = &config.families;
        for _ in 0..cfg.groups {
            let group = GroupMotion {
                base_speed:     cfg.speed.sample(self.rng),
                direction:      Direction::from_sign(self.rng.sign()),
                start_progress: config.start_progress.sample(self.rng),
                lane:           self.rng.sign() * cfg.lane_magnitude,
                waviness:       if self.rng.gen_bool(cfg.meander.probability) {
                    cfg.meander.amplitude.sample(self.rng)
                } else {
                    0.0
                },
            };
            // The whole family wanders as one.
            let wave_offset = self.rng.phase();
            let member = |base_lane: f64| Kinematics {
                base_speed: group.base_speed,
                direction: group.direction,
                base_lane,
                waviness: group.waviness,
                wave_offset,
            };

            let parents = [
                (Gender::Male, -cfg.parent_offset),
                (Gender::Female, cfg.parent_offset),
            ];
            for (gender, offset) in parents {
                let kind = AgentKind::Family { role: Role::Parent, gender };
                self.push(kind, member(group.lane + offset), group.start_progress)?;
            }

            let children = if self.rng.gen_bool(cfg.two_children_probability) { 2 } else { 1 };
            for offset in [-cfg.child_offset, cfg.child_offset].into_iter().take(children) {
                let gender = self.random_gender(cfg.child_male_ratio);
                let kind = AgentKind::Family { role: Role::Child, gender };
                self.push(kind, member(group.lane + offset), group.start_progress)?;
            }
        }
        Ok(())
    }
}
