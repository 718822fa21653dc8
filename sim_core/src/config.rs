use crate::{Bounds, ConfigError, Params};
use glam::DVec3;

const AXES: [char; 3] = ['x', 'y', 'z'];

/// Simulation configuration, fixed once the simulation is built
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gravity: f64,
    pub restitution: f64,
    pub delta_t: f64,
    pub bounds: Bounds,
    pub num_balls: usize,
    pub initial_speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: Params::GRAVITY,
            restitution: Params::RESTITUTION,
            delta_t: Params::DELTA_T,
            bounds: Bounds::cube(Params::BOX_SIZE),
            num_balls: Params::NUM_BALLS,
            initial_speed: Params::INITIAL_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_num_balls(mut self, num_balls: usize) -> Self {
        self.num_balls = num_balls;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }

    /// Gravitational acceleration vector, pulling down the z axis
    pub fn acceleration(&self) -> DVec3 {
        DVec3::new(0.0, 0.0, -self.gravity)
    }

    /// Reject configurations that would make wall bounces ill-defined
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, name) in AXES.iter().enumerate() {
            let (min, max) = (self.bounds.min[axis], self.bounds.max[axis]);
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(ConfigError::InvertedBounds {
                    axis: *name,
                    min,
                    max,
                });
            }
        }

        if !(self.restitution > 0.0 && self.restitution <= 1.0) {
            return Err(ConfigError::Restitution(self.restitution));
        }

        if !(self.delta_t.is_finite() && self.delta_t > 0.0) {
            return Err(ConfigError::TimeStep(self.delta_t));
        }

        if !self.gravity.is_finite() {
            return Err(ConfigError::Gravity(self.gravity));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.num_balls, 100);
        assert_eq!(config.bounds, Bounds::cube(10.0));
    }

    #[test]
    fn test_acceleration_points_down_z() {
        let config = Config::new();
        assert_eq!(config.acceleration(), DVec3::new(0.0, 0.0, -9.80665));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let bounds = Bounds::new(DVec3::new(0.0, 5.0, 0.0), DVec3::new(10.0, 4.0, 10.0));
        let config = Config::new().with_bounds(bounds);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedBounds {
                axis: 'y',
                min: 5.0,
                max: 4.0
            })
        );
    }

    #[test]
    fn test_degenerate_bounds_accepted() {
        let bounds = Bounds::new(DVec3::splat(3.0), DVec3::splat(3.0));
        let config = Config::new().with_bounds(bounds);
        assert!(config.validate().is_ok(), "min == max is a valid, flat box");
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let bounds = Bounds::new(DVec3::ZERO, DVec3::new(f64::NAN, 1.0, 1.0));
        let config = Config::new().with_bounds(bounds);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds { axis: 'x', .. })
        ));
    }

    #[test]
    fn test_restitution_range() {
        assert!(Config::new().with_restitution(1.0).validate().is_ok());
        assert_eq!(
            Config::new().with_restitution(0.0).validate(),
            Err(ConfigError::Restitution(0.0))
        );
        assert_eq!(
            Config::new().with_restitution(1.5).validate(),
            Err(ConfigError::Restitution(1.5))
        );
    }

    #[test]
    fn test_time_step_and_gravity_checked() {
        assert_eq!(
            Config::new().with_delta_t(0.0).validate(),
            Err(ConfigError::TimeStep(0.0))
        );
        assert!(matches!(
            Config::new().with_gravity(f64::INFINITY).validate(),
            Err(ConfigError::Gravity(_))
        ));
    }
}
