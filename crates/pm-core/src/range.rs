//! Half-open sampling interval used throughout the population config.

use crate::{ConfigError, ConfigResult, SimRng};

/// A uniform distribution over `[min, max)`.
///
/// Construction does not validate; call [`validate`](Self::validate) once at
/// config load time so sampling never sees an empty range (`rand` panics on
/// one).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformRange {
    pub min: f64,
    pub max: f64,
}

impl UniformRange {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Fail unless both bounds are finite and `min < max`.
    pub fn validate(&self, what: &'static str) -> ConfigResult<()> {
        for value in [self.min, self.max] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { what, value });
            }
        }
        if self.min >= self.max {
            return Err(ConfigError::EmptyRange { what, min: self.min, max: self.max });
        }
        Ok(())
    }

    /// Like [`validate`](Self::validate), but additionally requires `min > 0`.
    pub fn validate_positive(&self, what: &'static str) -> ConfigResult<()> {
        self.validate(what)?;
        if self.min <= 0.0 {
            return Err(ConfigError::NotPositive { what, value: self.min });
        }
        Ok(())
    }

    /// Like [`validate`](Self::validate), but additionally requires `min >= 0`.
    pub fn validate_non_negative(&self, what: &'static str) -> ConfigResult<()> {
        self.validate(what)?;
        ConfigError::check_non_negative(what, self.min)
    }

    /// `true` if `value` lies in `[min, max)`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..self.max).contains(&value)
    }

    /// Draw one value.  The range must have passed `validate`.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        rng.gen_range(self.min..self.max)
    }
}
