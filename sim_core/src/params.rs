/// Simulation constants for the bouncing balls box
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Gravity
    pub const GRAVITY: f64 = 9.80665; // m/s^2, standard gravity

    // Walls
    pub const RESTITUTION: f64 = 0.9; // Ratio of speed after and before a bounce
    pub const BOX_SIZE: f64 = 10.0; // Each axis spans [0, BOX_SIZE]

    // Balls
    pub const NUM_BALLS: usize = 100;
    pub const INITIAL_SPEED: f64 = 0.1; // Upper bound of each initial velocity component

    // Time
    pub const DELTA_T: f64 = 0.001; // 1 ms per tick
}
