//! Configuration error type.
//!
//! Simulation steps themselves are total; the only thing that can go wrong is
//! a malformed configuration, and that is caught before the first tick.

use thiserror::Error;

/// A configuration value failed validation.
///
/// `what` names the offending field (e.g. `"couples.speed"`) so the message
/// points straight at the JSON key to fix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{what}: empty range [{min}, {max})")]
    EmptyRange {
        what: &'static str,
        min:  f64,
        max:  f64,
    },

    #[error("{what}: non-finite value {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what}: probability {p} is outside [0, 1]")]
    Probability { what: &'static str, p: f64 },

    #[error("{what}: must be positive, got {value}")]
    NotPositive { what: &'static str, value: f64 },

    #[error("{what}: must be non-negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Invalid(String),
}

/// Shorthand result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Check that `p` is a usable probability.
    pub fn check_probability(what: &'static str, p: f64) -> ConfigResult<()> {
        if !p.is_finite() {
            return Err(ConfigError::NonFinite { what, value: p });
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Probability { what, p });
        }
        Ok(())
    }

    /// Check that `value` is finite and `>= 0`.
    pub fn check_non_negative(what: &'static str, value: f64) -> ConfigResult<()> {
        if !value.is_finite() {
            return Err(ConfigError::NonFinite { what, value });
        }
        if value < 0.0 {
            return Err(ConfigError::Negative { what, value });
        }
        Ok(())
    }
}
