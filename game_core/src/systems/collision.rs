use std::cmp::Ordering;

use crate::{Ball, Body, Config, Events, GameRng, PlayerData, Side, Velocity};
use hecs::World;
use rand::Rng;

/// Check ball collisions with paddles and walls, and serve again after a pass
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    // Collect paddle data first (deterministic: sort by entity ID)
    let mut paddles: Vec<_> = world
        .query::<(&Body, &Velocity, &PlayerData)>()
        .iter()
        .map(|(entity, (body, _vel, player))| (entity, player.side, *body))
        .collect();
    paddles.sort_by_key(|(entity, _, _)| entity.id());

    let bounds = config.arena_size();

    for (_entity, (body, velocity, _ball)) in world.query_mut::<(&mut Body, &mut Velocity, &Ball)>() {
        // Only the first overlapping paddle shapes the rebound
        if let Some((_, side, paddle)) = paddles.iter().find(|(_, _, p)| body.overlaps(p)) {
            velocity.vel.x = -velocity.vel.x;
            velocity.vel.y = rebound_vy(body, paddle, velocity.vel.y, config);
            events.paddle_hit = Some(*side);
            log::debug!("ball hit {side:?} paddle, vy now {}", velocity.vel.y);
        }

        // Wall contact is exact thanks to the movement clamp
        if body.pos.y == 0 || body.pos.y == bounds.y - body.size.y {
            velocity.vel.y = -velocity.vel.y;
            events.wall_hit = true;
        }

        if let Some(side) = passed_edge(body, bounds.x) {
            events.ball_passed = Some(side);
            serve(body, velocity, config, rng);
            log::debug!("ball passed the {side:?} edge, served from {}", body.pos);
        }
    }
}

/// Vertical velocity after the ball bounces off `paddle`.
///
/// The further from the paddle center the contact, the steeper the angle.
/// A dead-center hit simply reverses the current vy.
pub fn rebound_vy(ball: &Body, paddle: &Body, vy: f32, config: &Config) -> f32 {
    let half_height = paddle.size.y / 2;
    let step = (half_height / config.rebound_steps.max(1)).max(1);
    let offset = ball.center_y() - (paddle.pos.y + half_height);
    let factor = offset.abs() / step;
    let magnitude = (f64::from(factor) * config.rebound_factor).round_ties_even() as f32;

    match offset.cmp(&0) {
        Ordering::Less => -magnitude,
        Ordering::Greater => magnitude,
        Ordering::Equal => -vy,
    }
}

/// Edge of the arena the ball has reached, if any
pub fn passed_edge(ball: &Body, arena_width: i32) -> Option<Side> {
    if ball.pos.x == 0 {
        Some(Side::Left)
    } else if ball.pos.x == arena_width - ball.size.x {
        Some(Side::Right)
    } else {
        None
    }
}

/// Put the ball back in the center heading the other way with a fresh angle
pub fn serve(body: &mut Body, velocity: &mut Velocity, config: &Config, rng: &mut GameRng) {
    body.pos = config.ball_spawn();
    velocity.vel.x = -velocity.vel.x;
    velocity.vel.y = serve_vy(config, rng);
}

/// Random serve angle drawn from [-n, n]
pub fn serve_vy(config: &Config, rng: &mut GameRng) -> f32 {
    let n = config.ball_serve_vy.abs();
    rng.0.gen_range(-n..=n) as f32
}
