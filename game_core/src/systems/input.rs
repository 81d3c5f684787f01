use hecs::World;

use crate::{Config, Direction, Force, PlayerData};

/// Set the force of every human-controlled paddle from the sampled direction
pub fn apply_input(world: &mut World, dir: Direction, config: &Config) {
    for (_entity, (player, force)) in world.query_mut::<(&PlayerData, &mut Force)>() {
        if player.is_ai {
            continue;
        }
        force.force = dir.sign() * config.base_force;
    }
}
