//! Dashboard configuration types and builder

pub use crate::error::ConfigError;
use crate::timer::Millis;

/// What happens when the dashboard becomes visible more than once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RearmPolicy {
    /// Arm the timed updates on every enter (duplicates the appended notification)
    #[default]
    OnEveryEnter,
    /// Arm the timed updates only the first time the dashboard is shown
    OncePerProcess,
}

/// Runtime configuration for the dashboard
///
/// Use [`ConfigBuilder`] (via [`PulseConfig::builder`]) to create a validated config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseConfig {
    /// Length of one scheduling time unit in milliseconds
    pub time_unit_ms: u32,
    /// Length of animated transitions in milliseconds (0 = instant)
    pub animation_ms: u32,
    /// Timer re-arm behaviour on repeated dashboard visibility
    pub rearm_policy: RearmPolicy,
}

impl PulseConfig {
    /// One second per time unit
    pub const DEFAULT_TIME_UNIT_MS: u32 = 1000;
    /// Roughly a platform default ease-in-out
    pub const DEFAULT_ANIMATION_MS: u32 = 350;

    /// Start building a config from defaults
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Convert a number of time units into milliseconds
    pub fn units_to_ms(&self, units: u32) -> Millis {
        units as Millis * self.time_unit_ms as Millis
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: Self::DEFAULT_TIME_UNIT_MS,
            animation_ms: Self::DEFAULT_ANIMATION_MS,
            rearm_policy: RearmPolicy::default(),
        }
    }
}

/// Builder for [`PulseConfig`]
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    time_unit_ms: u32,
    animation_ms: u32,
    rearm_policy: RearmPolicy,
}

impl ConfigBuilder {
    /// Create a builder pre-filled with defaults
    pub fn new() -> Self {
        let defaults = PulseConfig::default();
        Self {
            time_unit_ms: defaults.time_unit_ms,
            animation_ms: defaults.animation_ms,
            rearm_policy: defaults.rearm_policy,
        }
    }

    /// Set the time unit length
    pub fn time_unit_ms(mut self, ms: u32) -> Self {
        self.time_unit_ms = ms;
        self
    }

    /// Set the transition length
    pub fn animation_ms(mut self, ms: u32) -> Self {
        self.animation_ms = ms;
        self
    }

    /// Set the re-arm policy
    pub fn rearm_policy(mut self, policy: RearmPolicy) -> Self {
        self.rearm_policy = policy;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroTimeUnit`] if the time unit is 0
    /// - [`ConfigError::AnimationTooLong`] if the animation outlasts one time unit
    pub fn build(self) -> Result<PulseConfig, ConfigError> {
        if self.time_unit_ms == 0 {
            return Err(ConfigError::ZeroTimeUnit);
        }
        if self.animation_ms > self.time_unit_ms {
            return Err(ConfigError::AnimationTooLong {
                animation_ms: self.animation_ms,
                time_unit_ms: self.time_unit_ms,
            });
        }
        Ok(PulseConfig {
            time_unit_ms: self.time_unit_ms,
            animation_ms: self.animation_ms,
            rearm_policy: self.rearm_policy,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
