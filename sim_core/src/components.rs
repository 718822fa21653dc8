use crate::{Bounds, Config};
use glam::DVec3;
use rand::Rng;

/// Ball component - kinematic state of one point mass
///
/// `velocity` is the displacement applied per tick, so `advance` adds it to
/// the position unscaled by the time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: DVec3,
    pub velocity: DVec3,
}

impl Ball {
    pub fn new(position: DVec3, velocity: DVec3) -> Self {
        Self { position, velocity }
    }

    /// Random position inside `bounds`, random velocity in `[0, initial_speed)` per axis
    pub fn random(bounds: &Bounds, initial_speed: f64, rng: &mut crate::SimRng) -> Self {
        let mut position = DVec3::ZERO;
        let mut velocity = DVec3::ZERO;
        for axis in 0..3 {
            // Scaling a unit sample keeps flat axes (min == max) valid
            let u: f64 = rng.0.gen();
            position[axis] = bounds.min[axis] + u * (bounds.max[axis] - bounds.min[axis]);
        }
        for axis in 0..3 {
            let u: f64 = rng.0.gen();
            velocity[axis] = u * initial_speed;
        }
        Self { position, velocity }
    }

    /// Point the velocity back inside on every axis touching a wall.
    ///
    /// Returns the number of axes that were corrected.
    pub fn bounce_walls(&mut self, bounds: &Bounds, restitution: f64) -> usize {
        let mut corrected = 0;
        for axis in 0..3 {
            if self.position[axis] <= bounds.min[axis] {
                self.velocity[axis] = restitution * self.velocity[axis].abs();
                corrected += 1;
            } else if self.position[axis] >= bounds.max[axis] {
                self.velocity[axis] = -restitution * self.velocity[axis].abs();
                corrected += 1;
            }
        }
        corrected
    }

    pub fn apply_gravity(&mut self, acceleration: DVec3, delta_t: f64) {
        self.velocity += acceleration * delta_t;
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    pub fn clamp_to(&mut self, bounds: &Bounds) {
        self.position = bounds.clamp(self.position);
    }

    /// Advance one tick: bounce, gravity, move, clamp
    ///
    /// Never panics. An inverted box (which `Config::validate` rejects) pins
    /// each inverted axis to its `max`.
    pub fn update(&mut self, config: &Config) {
        self.bounce_walls(&config.bounds, config.restitution);
        self.apply_gravity(config.acceleration(), config.delta_t);
        self.advance();
        self.clamp_to(&config.bounds);
    }
}

/// Display colour of a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
    ];

    /// One-letter plot code (b, g, r, c, m, y)
    pub fn code(self) -> char {
        match self {
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Red => 'r',
            Color::Cyan => 'c',
            Color::Magenta => 'm',
            Color::Yellow => 'y',
        }
    }

    pub fn random(rng: &mut crate::SimRng) -> Self {
        Self::ALL[rng.0.gen_range(0..Self::ALL.len())]
    }
}

/// Marker component - how a ball is drawn, kept apart from its physics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub color: Color,
}

impl Marker {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}
