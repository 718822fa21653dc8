use crate::{Ball, Config, Events};
use hecs::World;

/// Turn balls touching a wall back inside, losing speed to restitution
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        events.wall_contacts += ball.bounce_walls(&config.bounds, config.restitution);
    }
}

/// Keep every ball inside the box after it moved
pub fn contain_balls(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.clamp_to(&config.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use crate::Color;
    use glam::DVec3;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    #[test]
    fn test_bounce_counts_wall_contacts() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(DVec3::new(0.0, 5.0, 5.0), DVec3::new(-1.0, 0.0, 0.0)),
            Color::Red,
        );
        create_ball(
            &mut world,
            Ball::new(DVec3::new(10.0, 10.0, 5.0), DVec3::new(1.0, 1.0, 0.0)),
            Color::Blue,
        );
        create_ball(
            &mut world,
            Ball::new(DVec3::splat(5.0), DVec3::ZERO),
            Color::Green,
        );

        bounce_walls(&mut world, &config, &mut events);

        assert_eq!(events.wall_contacts, 3, "One contact, then two, then none");
    }

    #[test]
    fn test_bounce_flips_outgoing_velocity() {
        let (mut world, config, mut events) = setup_world();
        let entity = create_ball(
            &mut world,
            Ball::new(DVec3::new(5.0, 5.0, 10.0), DVec3::new(0.0, 0.0, 2.0)),
            Color::Cyan,
        );

        bounce_walls(&mut world, &config, &mut events);

        let ball = world.get::<&Ball>(entity).expect("ball should exist");
        assert!(ball.velocity.z <= 0.0, "Upper wall sends the ball down");
        assert!((ball.velocity.z + 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_contain_clamps_escaped_balls() {
        let (mut world, config, _events) = setup_world();
        let entity = create_ball(
            &mut world,
            Ball::new(DVec3::new(-1.0, 12.0, 5.0), DVec3::ZERO),
            Color::Yellow,
        );

        contain_balls(&mut world, &config);

        let ball = world.get::<&Ball>(entity).expect("ball should exist");
        assert_eq!(ball.position, DVec3::new(0.0, 10.0, 5.0));
    }
}
