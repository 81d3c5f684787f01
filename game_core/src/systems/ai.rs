use crate::{Ball, Body, Config, Force, GameRng, PlayerData, Side, Velocity};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// What the AI knows about the ball when it decides
#[derive(Debug, Clone, Copy)]
pub struct BallView {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

/// Drive every AI paddle's force toward where the ball is heading
pub fn drive_ai(world: &mut World, config: &Config, rng: &mut GameRng) {
    let ball = world
        .query::<(&Body, &Velocity, &Ball)>()
        .iter()
        .next()
        .map(|(_e, (body, vel, _))| BallView {
            pos: body.pos.as_vec2(),
            size: body.size.as_vec2(),
            vel: vel.vel,
        });

    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, (player, body, force)) in world.query_mut::<(&PlayerData, &Body, &mut Force)>() {
        if !player.is_ai {
            continue;
        }
        force.force = decide_force(player.side, body, &ball, config, rng);
        log::trace!("{:?} AI force {}", player.side, force.force);
    }
}

/// Force for the paddle on `side` given the current ball state
pub fn decide_force(
    side: Side,
    paddle: &Body,
    ball: &BallView,
    config: &Config,
    rng: &mut GameRng,
) -> f32 {
    let paddle_y = paddle.center_y() as f32;
    let paddle_x = paddle.pos.x as f32;

    // Zero vx never counts as approaching, so it is never divided by
    let approaching = match side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };

    if !approaching {
        let center = (config.arena_height / 2) as f32;
        return steer(center, paddle_y, config);
    }

    let to_ball = paddle_x - ball.pos.x;
    let distance = match side {
        Side::Left => -to_ball,
        Side::Right => to_ball,
    };

    // Reaction delay: a ball this far away is ignored
    if distance >= config.arena_width as f32 * config.ai_reaction_fraction {
        return 0.0;
    }

    let projected = to_ball / ball.vel.x * ball.vel.y + ball.pos.y + ball.size.y;
    let target = miss_offscreen(projected, config, rng);
    steer(target, paddle_y, config)
}

/// Distort a target that lies outside the arena so the AI misjudges bounces
pub fn miss_offscreen(target: f32, config: &Config, rng: &mut GameRng) -> f32 {
    let height = config.arena_height as f32;
    if target > height {
        let (lo, hi) = config.ai_overshoot_below;
        target - (target.abs() - height) * rng.0.gen_range(lo..hi)
    } else if target < 0.0 {
        let (lo, hi) = config.ai_overshoot_above;
        target + target.abs() * rng.0.gen_range(lo..hi)
    } else {
        target
    }
}

/// Full force toward `target`, none inside the dead zone around `paddle_y`
fn steer(target: f32, paddle_y: f32, config: &Config) -> f32 {
    if target > paddle_y + config.ai_dead_zone {
        config.base_force
    } else if target < paddle_y - config.ai_dead_zone {
        -config.base_force
    } else {
        0.0
    }
}
