use crate::{
    create_ball, step, Ball, BallView, Color, Config, ConfigError, Events, Marker, Renderer,
    SimRng,
};
use hecs::{Entity, World};

/// Owns the balls and the constants, and advances them one tick at a time
pub struct Simulation {
    world: World,
    order: Vec<Entity>, // Insertion order, for stable renderer association
    config: Config,
    events: Events,
}

impl Simulation {
    /// Build `config.num_balls` balls at random positions and velocities.
    ///
    /// Pass a seed for a reproducible run.
    pub fn new(config: Config, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate().inspect_err(|err| {
            tracing::debug!(%err, "rejecting simulation config");
        })?;

        let mut rng = SimRng::from_seed(seed);
        let balls: Vec<(Ball, Color)> = (0..config.num_balls)
            .map(|_| {
                let ball = Ball::random(&config.bounds, config.initial_speed, &mut rng);
                (ball, Color::random(&mut rng))
            })
            .collect();

        tracing::info!(num_balls = balls.len(), ?seed, "simulation initialized");
        Ok(Self::spawn_all(config, balls))
    }

    /// Build a simulation from explicit balls, ignoring `config.num_balls`
    pub fn from_balls(
        config: Config,
        balls: impl IntoIterator<Item = (Ball, Color)>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::spawn_all(config, balls))
    }

    fn spawn_all(config: Config, balls: impl IntoIterator<Item = (Ball, Color)>) -> Self {
        let mut world = World::new();
        let order = balls
            .into_iter()
            .map(|(ball, color)| create_ball(&mut world, ball, color))
            .collect();

        Self {
            world,
            order,
            config,
            events: Events::new(),
        }
    }

    /// Advance every ball one tick and return what should be drawn
    pub fn tick(&mut self) -> Vec<BallView> {
        step(&mut self.world, &self.config, &mut self.events);
        tracing::trace!(wall_contacts = self.events.wall_contacts, "tick");
        self.views()
    }

    /// Advance one tick and hand the result to `renderer`
    pub fn tick_into<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        let views = self.tick();
        renderer.draw(&views)
    }

    /// Current render set, in insertion order
    pub fn views(&self) -> Vec<BallView> {
        self.order
            .iter()
            .filter_map(|&entity| {
                let ball = self.world.get::<&Ball>(entity).ok()?;
                let marker = self.world.get::<&Marker>(entity).ok()?;
                Some(BallView {
                    position: ball.position,
                    color: marker.color,
                })
            })
            .collect()
    }

    pub fn ball(&self, index: usize) -> Option<Ball> {
        let entity = *self.order.get(index)?;
        self.world.get::<&Ball>(entity).ok().map(|ball| *ball)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }
}
