use std::time::Duration;

use glam::IVec2;
use thiserror::Error;

use crate::params::Params;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arena must have a positive size, got {width}x{height}")]
    EmptyArena { width: i32, height: i32 },

    #[error("{what} of size {size} does not fit inside the arena")]
    DoesNotFit { what: &'static str, size: IVec2 },

    #[error("velocity clamp is inverted: min {min} > max {max}")]
    InvertedClamp { min: f32, max: f32 },

    #[error("win condition must be at least 1")]
    NoWinCondition,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub paddle_size: IVec2,
    pub paddle_margin: i32,
    pub ball_size: IVec2,
    pub ball_speed: f32,
    pub ball_serve_vy: i32,
    pub base_force: f32,
    pub velocity_min: f32,
    pub velocity_max: f32,
    pub rebound_steps: i32,
    pub rebound_factor: f64,
    pub ai_dead_zone: f32,
    pub ai_reaction_fraction: f32,
    pub ai_overshoot_below: (f32, f32),
    pub ai_overshoot_above: (f32, f32),
    pub win_score: u32,
    pub tick_sleep: Duration,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_size: IVec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: IVec2::splat(Params::BALL_SIZE),
            ball_speed: Params::BALL_SPEED,
            ball_serve_vy: Params::BALL_SERVE_VY,
            base_force: Params::BASE_FORCE,
            velocity_min: Params::VELOCITY_MIN,
            velocity_max: Params::VELOCITY_MAX,
            rebound_steps: Params::REBOUND_STEPS,
            rebound_factor: Params::REBOUND_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ai_reaction_fraction: Params::AI_REACTION_FRACTION,
            ai_overshoot_below: Params::AI_OVERSHOOT_BELOW,
            ai_overshoot_above: Params::AI_OVERSHOOT_ABOVE,
            win_score: Params::WIN_SCORE,
            tick_sleep: Duration::from_millis(Params::TICK_SLEEP_MS),
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the values the systems rely on before a session starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0 || self.arena_height <= 0 {
            return Err(ConfigError::EmptyArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        let arena = self.arena_size();
        let fits = |size: IVec2| size.cmpgt(IVec2::ZERO).all() && size.cmple(arena).all();

        // Both paddles plus their margins must fit side by side
        let paddle_span = IVec2::new(
            2 * (self.paddle_size.x + self.paddle_margin),
            self.paddle_size.y,
        );
        if !fits(self.paddle_size) || !fits(paddle_span) || self.paddle_margin < 0 {
            return Err(ConfigError::DoesNotFit {
                what: "paddle",
                size: self.paddle_size,
            });
        }
        if !fits(self.ball_size) {
            return Err(ConfigError::DoesNotFit {
                what: "ball",
                size: self.ball_size,
            });
        }

        if self.velocity_min > self.velocity_max {
            return Err(ConfigError::InvertedClamp {
                min: self.velocity_min,
                max: self.velocity_max,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::NoWinCondition);
        }

        Ok(())
    }

    pub fn arena_size(&self) -> IVec2 {
        IVec2::new(self.arena_width, self.arena_height)
    }

    /// Top-left spawn position of the paddle on `side`
    pub fn paddle_spawn(&self, side: crate::Side) -> IVec2 {
        let y = self.arena_height / 2 - self.paddle_size.y / 2;
        match side {
            crate::Side::Left => IVec2::new(self.paddle_margin, y),
            crate::Side::Right => IVec2::new(
                self.arena_width - self.paddle_size.x - self.paddle_margin,
                y,
            ),
        }
    }

    /// Top-left position of a ball centered in the arena
    pub fn ball_spawn(&self) -> IVec2 {
        self.arena_size() / 2 - self.ball_size / 2
    }
}
