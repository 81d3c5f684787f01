/// Game tuning parameters for Tracking Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (logical units, top-left origin)
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 800;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_MARGIN: i32 = 20; // gap between paddle and side wall

    // Ball
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEED: f32 = 7.0;
    pub const BALL_SERVE_VY: i32 = 2; // serve vy drawn from [-2, 2]

    // Momentum
    pub const BASE_FORCE: f32 = 30.0;
    pub const VELOCITY_MIN: f32 = -8.0;
    pub const VELOCITY_MAX: f32 = 8.0;

    // Rebound
    pub const REBOUND_STEPS: i32 = 10; // steps per paddle half height
    pub const REBOUND_FACTOR: f64 = 0.7;

    // AI
    pub const AI_DEAD_ZONE: f32 = 30.0;
    pub const AI_REACTION_FRACTION: f32 = 0.75;
    pub const AI_OVERSHOOT_BELOW: (f32, f32) = (1.5, 2.5);
    pub const AI_OVERSHOOT_ABOVE: (f32, f32) = (1.3, 2.8);

    // Score
    pub const WIN_SCORE: u32 = 5;

    // Loop
    pub const TICK_SLEEP_MS: u64 = 10;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
