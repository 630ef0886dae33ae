//! Population composition parameters.
//!
//! Every field defaults to the reference promenade mix (20 couples,
//! 15 singles, 8 families) so a JSON file only needs to name what it changes:
//!
//! ```json
//! { "singles": { "count": 30, "male_ratio": 0.5, "meander": { "probability": 0.9 } } }
//! ```
//!
//! A `meander` block may also be partial; missing fields keep that kind's
//! defaults.  Ranges are always written whole, as `{ "min": .., "max": .. }`.

use serde::{Deserialize, Deserializer, Serialize};

use pm_core::{ConfigError, ConfigResult, PATH_SPAN, UniformRange};

/// Chance that a group meanders, and how strongly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeanderConfig {
    /// Probability that a group (or single) gets a non-zero waviness.
    pub probability: f64,
    /// Waviness drawn when it does.
    pub amplitude: UniformRange,
}

impl MeanderConfig {
    /// Read a possibly partial `meander` block on top of `base`.
    fn overlay<'de, D: Deserializer<'de>>(deserializer: D, base: MeanderConfig) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Partial {
            probability: Option<f64>,
            amplitude:   Option<UniformRange>,
        }

        let partial = Partial::deserialize(deserializer)?;
        Ok(MeanderConfig {
            probability: partial.probability.unwrap_or(base.probability),
            amplitude:   partial.amplitude.unwrap_or(base.amplitude),
        })
    }

    fn validate(&self, what_p: &'static str, what_amp: &'static str) -> ConfigResult<()> {
        ConfigError::check_probability(what_p, self.probability)?;
        self.amplitude.validate_non_negative(what_amp)
    }
}

/// How couple members are assigned a gender.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouplePolicy {
    /// Couple members carry no gender.
    Unassigned,
    /// Each member draws a gender independently, 50/50.
    Random,
    /// First member male, second female.
    #[default]
    MixedPair,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoupleConfig {
    pub groups: u32,
    pub speed: UniformRange,
    /// Magnitude of the shared couple lane; the sign is drawn per couple.
    pub lane_magnitude: f64,
    /// Members sit at `lane - offset` and `lane + offset`.
    pub member_offset: f64,
    #[serde(deserialize_with = "couple_meander")]
    pub meander: MeanderConfig,
    pub gender: CouplePolicy,
}

impl Default for CoupleConfig {
    fn default() -> Self {
        Self {
            groups:         20,
            speed:          UniformRange::new(0.04, 0.05),
            lane_magnitude: 0.5,
            member_offset:  0.1,
            meander: MeanderConfig {
                probability: 0.3,
                amplitude:   UniformRange::new(0.15, 0.25),
            },
            gender: CouplePolicy::MixedPair,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleConfig {
    pub count: u32,
    /// Probability that a single is male.
    pub male_ratio: f64,
    pub speed: UniformRange,
    /// Lane magnitude range; the sign is drawn per single.
    pub lane_magnitude: UniformRange,
    #[serde(deserialize_with = "single_meander")]
    pub meander: MeanderConfig,
}

impl Default for SingleConfig {
    fn default() -> Self {
        Self {
            count:          15,
            male_ratio:     0.65,
            speed:          UniformRange::new(0.04, 0.05),
            lane_magnitude: UniformRange::new(0.3, 0.7),
            meander: MeanderConfig {
                probability: 0.4,
                amplitude:   UniformRange::new(0.2, 0.35),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyConfig {
    pub groups: u32,
    pub speed: UniformRange,
    pub lane_magnitude: f64,
    /// Parents sit at `lane - offset` and `lane + offset`.
    pub parent_offset: f64,
    /// First child at `lane - offset`, second at `lane + offset`.
    pub child_offset: f64,
    /// Probability of two children rather than one.
    pub two_children_probability: f64,
    /// Probability that a child is male.
    pub child_male_ratio: f64,
    #[serde(deserialize_with = "family_meander")]
    pub meander: MeanderConfig,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            groups:                   8,
            speed:                    UniformRange::new(0.035, 0.045),
            lane_magnitude:           0.5,
            parent_offset:            0.15,
            child_offset:             0.05,
            two_children_probability: 0.5,
            child_male_ratio:         0.5,
            meander: MeanderConfig {
                probability: 0.2,
                amplitude:   UniformRange::new(0.1, 0.15),
            },
        }
    }
}

fn couple_meander<'de, D: Deserializer<'de>>(d: D) -> Result<MeanderConfig, D::Error> {
    MeanderConfig::overlay(d, CoupleConfig::default().meander)
}

fn single_meander<'de, D: Deserializer<'de>>(d: D) -> Result<MeanderConfig, D::Error> {
    MeanderConfig::overlay(d, SingleConfig::default().meander)
}

fn family_meander<'de, D: Deserializer<'de>>(d: D) -> Result<MeanderConfig, D::Error> {
    MeanderConfig::overlay(d, FamilyConfig::default().meander)
}

/// Full population recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub couples: CoupleConfig,
    pub singles: SingleConfig,
    pub families: FamilyConfig,
    /// Where groups start along the path.
    pub start_progress: UniformRange,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            couples:        CoupleConfig::default(),
            singles:        SingleConfig::default(),
            families:       FamilyConfig::default(),
            start_progress: UniformRange::new(0.0, PATH_SPAN),
        }
    }
}

impl PopulationConfig {
    /// Check every range and probability.  Called by the generator before any
    /// draw, so a bad config fails before the first agent exists.
    pub fn validate(&self) -> ConfigResult<()> {
        let c = &self.couples;
        c.speed.validate_positive("couples.speed")?;
        ConfigError::check_non_negative("couples.lane_magnitude", c.lane_magnitude)?;
        ConfigError::check_non_negative("couples.member_offset", c.member_offset)?;
        c.meander.validate("couples.meander.probability", "couples.meander.amplitude")?;

        let s = &self.singles;
        ConfigError::check_probability("singles.male_ratio", s.male_ratio)?;
        s.speed.validate_positive("singles.speed")?;
        s.lane_magnitude.validate_non_negative("singles.lane_magnitude")?;
        s.meander.validate("singles.meander.probability", "singles.meander.amplitude")?;

        let f = &self.families;
        f.speed.validate_positive("families.speed")?;
        ConfigError::check_non_negative("families.lane_magnitude", f.lane_magnitude)?;
        ConfigError::check_non_negative("families.parent_offset", f.parent_offset)?;
        ConfigError::check_non_negative("families.child_offset", f.child_offset)?;
        ConfigError::check_probability("families.two_children_probability", f.two_children_probability)?;
        ConfigError::check_probability("families.child_male_ratio", f.child_male_ratio)?;
        f.meander.validate("families.meander.probability", "families.meander.amplitude")?;

        // Ids are `u32`; every agent needs its own.
        let most = self.couples.groups as u64 * 2 + self.singles.count as u64 + self.families.groups as u64 * 4;
        if most > u32::MAX as u64 {
            return Err(ConfigError::Invalid(format!(
                "population of up to {most} agents exceeds the {} available agent ids",
                u32::MAX
            )));
        }

        self.start_progress.validate_non_negative("start_progress")?;
        if self.start_progress.max > PATH_SPAN {
            return Err(ConfigError::Invalid(format!(
                "start_progress: upper bound {} exceeds path span {PATH_SPAN}",
                self.start_progress.max
            )));
        }
        Ok(())
    }

    /// Inclusive `(min, max)` number of agents this config can produce; the
    /// spread comes from families having one or two children.
    pub fn agent_count_bounds(&self) -> (usize, usize) {
        let fixed = (self.couples.groups as usize)
            .saturating_mul(2)
            .saturating_add(self.singles.count as usize);
        let families = self.families.groups as usize;
        (
            fixed.saturating_add(families.saturating_mul(3)),
            fixed.saturating_add(families.saturating_mul(4)),
        )
    }
}
