//! Aggregate population statistics.
//!
//! A read-only projection recomputed from any committed population.  Group
//! counts are derived from member counts: two agents per couple, two parents
//! per family.

use std::fmt;

use crate::{Agent, AgentKind, Gender, KindTag, Role};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationStats {
    pub agents: usize,

    pub single_agents: usize,
    pub couple_agents: usize,
    pub family_agents: usize,

    pub parents:  usize,
    pub children: usize,

    pub male:       usize,
    pub female:     usize,
    pub unassigned: usize,
}

impl PopulationStats {
    pub fn from_agents(agents: &[Agent]) -> Self {
        agents.iter().fold(Self::default(), |mut s, agent| {
            s.agents += 1;
            match agent.kind {
                AgentKind::Single { .. } => s.single_agents += 1,
                AgentKind::Couple { .. } => s.couple_agents += 1,
                AgentKind::Family { role, .. } => {
                    s.family_agents += 1;
                    match role {
                        Role::Parent => s.parents += 1,
                        Role::Child => s.children += 1,
                    }
                }
            }
            match agent.kind.gender() {
                Some(Gender::Male) => s.male += 1,
                Some(Gender::Female) => s.female += 1,
                None => s.unassigned += 1,
            }
            s
        })
    }

    /// Number of couples (groups, not agents).
    #[inline]
    pub fn couples(&self) -> usize {
        self.couple_agents / 2
    }

    /// Number of families (groups, not agents).
    #[inline]
    pub fn families(&self) -> usize {
        self.parents / 2
    }

    pub fn count(&self, kind: KindTag) -> usize {
        match kind {
            KindTag::Single => self.single_agents,
            KindTag::Couple => self.couple_agents,
            KindTag::Family => self.family_agents,
        }
    }

    /// Fraction of all agents belonging to `kind`; `0.0` for an empty
    /// population.
    pub fn share(&self, kind: KindTag) -> f64 {
        ratio(self.count(kind), self.agents)
    }

    /// Fraction of gendered agents that are male.
    pub fn male_ratio(&self) -> f64 {
        ratio(self.male, self.male + self.female)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 }
}

impl fmt::Display for PopulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} agents: {} singles, {} couples, {} families ({} parents, {} children)",
            self.agents,
            self.single_agents,
            self.couples(),
            self.families(),
            self.parents,
            self.children,
        )
    }
}
