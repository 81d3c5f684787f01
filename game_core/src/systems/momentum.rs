use crate::{Config, Force, Time, Velocity};
use hecs::World;

/// Convert each paddle's force into a change of vertical velocity
pub fn apply_momentum(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (velocity, force)) in world.query_mut::<(&mut Velocity, &Force)>() {
        velocity.vel.y = accelerate(
            velocity.vel.y,
            force.force,
            time.dt,
            velocity.min,
            velocity.max,
            config.base_force,
        );
    }
}

/// New vy after `dt` seconds under `force`.
///
/// Past a bound, pushing further pulls vy back toward that bound instead.
/// With no force vy decays toward zero at half the base force and stops there.
pub fn accelerate(vy: f32, force: f32, dt: f32, min: f32, max: f32, base_force: f32) -> f32 {
    let impulse = force * dt;

    let vy = if force < 0.0 {
        if vy < min {
            vy - impulse
        } else {
            vy + impulse
        }
    } else if force > 0.0 {
        if vy > max {
            vy - impulse
        } else {
            vy + impulse
        }
    } else {
        let decay = base_force / 2.0 * dt;
        if vy > 0.0 {
            (vy - decay).max(0.0)
        } else if vy < 0.0 {
            (vy + decay).min(0.0)
        } else {
            0.0
        }
    };

    vy.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::{IVec2, Vec2};

    const BASE: f32 = 30.0;

    #[test]
    fn test_negative_force_accelerates_up() {
        let vy = accelerate(0.0, -BASE, 0.1, -8.0, 8.0, BASE);
        assert!((vy - -3.0).abs() < 1e-5, "got {vy}");
    }

    #[test]
    fn test_positive_force_accelerates_down() {
        let vy = accelerate(1.0, BASE, 0.1, -8.0, 8.0, BASE);
        assert!((vy - 4.0).abs() < 1e-5, "got {vy}");
    }

    #[test]
    fn test_velocity_stays_within_clamp() {
        for &dt in &[0.0, 0.01, 0.1, 0.5, 1.0, 10.0] {
            for &force in &[-BASE, 0.0, BASE] {
                for &vy in &[-8.0, -7.9, -1.0, 0.0, 1.0, 7.9, 8.0] {
                    let out = accelerate(vy, force, dt, -8.0, 8.0, BASE);
                    assert!(
                        (-8.0..=8.0).contains(&out),
                        "vy {vy} force {force} dt {dt} produced {out}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_velocity_is_pulled_back() {
        // Pushing further past the bound nudges vy back toward it
        let vy = accelerate(-9.0, -BASE, 0.01, -8.0, 8.0, BASE);
        assert_eq!(vy, -8.0);
        let vy = accelerate(9.0, BASE, 0.01, -8.0, 8.0, BASE);
        assert_eq!(vy, 8.0);
    }

    #[test]
    fn test_decay_never_crosses_zero() {
        // Decay of 15 * 1.0 would overshoot 2.0 by a wide margin
        assert_eq!(accelerate(2.0, 0.0, 1.0, -8.0, 8.0, BASE), 0.0);
        assert_eq!(accelerate(-2.0, 0.0, 1.0, -8.0, 8.0, BASE), 0.0);
        assert_eq!(accelerate(0.0, 0.0, 1.0, -8.0, 8.0, BASE), 0.0);
    }

    #[test]
    fn test_decay_rate_is_half_base_force() {
        let vy = accelerate(4.0, 0.0, 0.1, -8.0, 8.0, BASE);
        assert!((vy - 2.5).abs() < 1e-5, "got {vy}");
    }

    #[test]
    fn test_zero_dt_leaves_velocity_unchanged() {
        assert_eq!(accelerate(3.25, BASE, 0.0, -8.0, 8.0, BASE), 3.25);
        assert_eq!(accelerate(-3.25, 0.0, 0.0, -8.0, 8.0, BASE), -3.25);
    }

    #[test]
    fn test_ball_is_not_affected() {
        let config = Config::new();
        let mut world = World::new();
        let ball = create_ball(&mut world, &config, IVec2::new(390, 390), Vec2::new(7.0, 1.0));
        let paddle = create_paddle(&mut world, &config, Side::Left, false);
        world.get::<&mut Force>(paddle).unwrap().force = BASE;

        apply_momentum(&mut world, &Time::new(0.1), &config);

        assert_eq!(world.get::<&Velocity>(ball).unwrap().vel, Vec2::new(7.0, 1.0));
        assert!(world.get::<&Velocity>(paddle).unwrap().vel.y > 0.0);
    }
}
