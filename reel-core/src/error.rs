//! Configuration errors

use thiserror::Error;

/// Rejected carousel configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Item width is not a positive finite number.
    #[error("item width must be a finite number greater than zero, got {0}")]
    InvalidItemWidth(f32),

    /// `step_items` is zero.
    #[error("step size must be at least one item")]
    ZeroStep,

    /// Spacing is negative or not finite.
    #[error("space between items must be a finite non-negative number, got {0}")]
    InvalidSpacing(f32),
}

/// Result of validating a configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;
