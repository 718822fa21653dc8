//! Boundary between the physics core and whatever draws it

use crate::Color;
use glam::DVec3;

/// What a renderer needs to draw one ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub position: DVec3,
    pub color: Color,
}

/// Receives the render set once per tick, in ball insertion order.
pub trait Renderer {
    type Error;

    fn draw(&mut self, balls: &[BallView]) -> Result<(), Self::Error>;
}
