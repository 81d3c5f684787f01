use crate::{Body, Config, Velocity};
use glam::IVec2;
use hecs::World;

/// Integrate velocity into position and keep every body inside the arena
pub fn move_bodies(world: &mut World, config: &Config) {
    let bounds = config.arena_size();
    for (_entity, (body, velocity)) in world.query_mut::<(&mut Body, &Velocity)>() {
        body.pos += velocity.step();
        body.pos = clamp_to_bounds(body.pos, body.size, IVec2::ZERO, bounds);
    }
}

/// Clamp the low edge first, then pull the far edge back onto the high bound.
///
/// Contact with a wall leaves the position exactly on the bound, which the
/// collision system compares against with plain equality.
pub fn clamp_to_bounds(pos: IVec2, size: IVec2, min: IVec2, max: IVec2) -> IVec2 {
    let mut pos = pos.max(min);
    if pos.x + size.x > max.x {
        pos.x = max.x - size.x;
    }
    if pos.y + size.y > max.y {
        pos.y = max.y - size.y;
    }
    pos
}
