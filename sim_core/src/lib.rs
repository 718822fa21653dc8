pub mod bounds;
pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use bounds::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Advance every ball in the world by one tick
///
/// Balls never interact, so running each stage across all balls gives the
/// same state as calling `Ball::update` on each ball in turn.
pub fn step(world: &mut World, config: &Config, events: &mut Events) {
    // Clear events at start of tick
    events.clear();

    // 1. Bounce off walls using last tick's positions
    bounce_walls(world, config, events);

    // 2. Gravity
    apply_gravity(world, config);

    // 3. Move
    move_balls(world);

    // 4. Clamp back into the box
    contain_balls(world, config);
}

/// Helper to create a ball entity
pub fn create_ball(world: &mut World, ball: Ball, color: Color) -> hecs::Entity {
    world.spawn((ball, Marker::new(color)))
}
