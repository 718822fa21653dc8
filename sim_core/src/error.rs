use thiserror::Error;

/// Reasons a `Config` is rejected before any ball is created
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("bounds on axis {axis} are inverted or not finite: min {min}, max {max}")]
    InvertedBounds { axis: char, min: f64, max: f64 },
    #[error("restitution must be in (0, 1], got {0}")]
    Restitution(f64),
    #[error("time step must be finite and positive, got {0}")]
    TimeStep(f64),
    #[error("gravity must be finite, got {0}")]
    Gravity(f64),
}
