//! Error types for dashboard configuration.
//!
//! Nothing on the dashboard itself can fail: state updates are infallible
//! and rendering propagates the draw target's own error type. The only
//! validated input is [`PulseConfig`](crate::config::PulseConfig), built
//! through [`ConfigBuilder`](crate::config::ConfigBuilder).
//!
//! ## Example
//!
//! ```
//! use pulse_ui::{ConfigError, PulseConfig};
//!
//! let result = PulseConfig::builder().time_unit_ms(0).build();
//! assert!(matches!(result, Err(ConfigError::ZeroTimeUnit)));
//! ```

/// Errors that can occur when building a [`PulseConfig`](crate::config::PulseConfig)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A time unit of zero milliseconds would fire every update at once
    ZeroTimeUnit,
    /// Transitions must settle before the next timed update fires
    AnimationTooLong {
        /// Requested animation length in milliseconds
        animation_ms: u32,
        /// Configured time unit in milliseconds
        time_unit_ms: u32,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTimeUnit => write!(f, "Time unit must be at least 1ms"),
            ConfigError::AnimationTooLong {
                animation_ms,
                time_unit_ms,
            } => write!(
                f,
                "Animation of {animation_ms}ms exceeds the {time_unit_ms}ms time unit"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
