pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use scheduler::*;

use glam::{IVec2, Vec2};
use hecs::World;
use systems::*;

/// Run one tick of the simulation.
///
/// Systems run in a fixed order. The AI goes last so it reacts to the ball
/// state collision and scoring just produced.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    dt: f32,
    dir: Direction,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    time.dt = dt.clamp(0.0, config.max_dt);

    // Clear events at start of tick
    events.clear();

    // 1. Apply sampled input to the human paddle's force
    apply_input(world, dir, config);

    // 2. Turn forces into paddle velocity
    apply_momentum(world, time, config);

    // 3. Move everything and clamp to the arena
    move_bodies(world, config);

    // 4. Paddle and wall bounces, ball pass and serve
    check_collisions(world, config, events, rng);

    // 5. Points and rally count from this tick's events
    track_score(state, events);

    // 6. AI picks its force for the next tick
    drive_ai(world, config, rng);
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, config: &Config, side: Side, is_ai: bool) -> hecs::Entity {
    world.spawn((
        Body::new(config.paddle_spawn(side), config.paddle_size),
        Velocity::new(Vec2::ZERO, config.velocity_min, config.velocity_max),
        Force::new(),
        PlayerData::new(side, is_ai),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config, pos: IVec2, vel: Vec2) -> hecs::Entity {
    world.spawn((
        Body::new(pos, config.ball_size),
        Velocity::new(vel, config.velocity_min, config.velocity_max),
        Ball,
    ))
}
