use crate::{Ball, Config};
use hecs::World;

/// Accelerate every ball by gravity for one time step
pub fn apply_gravity(world: &mut World, config: &Config) {
    let acceleration = config.acceleration();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.apply_gravity(acceleration, config.delta_t);
    }
}

/// Move balls based on velocity
pub fn move_balls(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}
