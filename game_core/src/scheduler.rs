//! Frame scheduler: owns the world and drives the tick loop

use std::time::Instant;

use glam::Vec2;
use hecs::World;

use crate::systems::serve_vy;
use crate::{
    create_ball, create_paddle, step, Ball, Body, Config, ConfigError, Direction, Events, GameRng,
    MatchState, PlayerData, Side, Time,
};

/// Source of elapsed time between ticks
pub trait Clock {
    /// Seconds since the previous call
    fn elapsed(&mut self) -> f32;
}

/// Wall clock backed by `Instant`
pub struct MonotonicClock {
    last: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn elapsed(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Clock that reports the same step every tick
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub f32);

impl Clock for FixedClock {
    fn elapsed(&mut self) -> f32 {
        self.0
    }
}

/// Input sampled once at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub dir: Direction,
    pub quit: bool,
}

impl InputSnapshot {
    pub fn steer(dir: Direction) -> Self {
        Self { dir, quit: false }
    }

    pub fn quit() -> Self {
        Self {
            dir: Direction::Idle,
            quit: true,
        }
    }
}

/// Where the scheduler gets its per-tick input from
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

impl<F: FnMut() -> InputSnapshot> InputSource for F {
    fn poll(&mut self) -> InputSnapshot {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal: a stopped game never runs again
    Stopped,
}

/// Read-only view handed to the renderer after each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    pub tick: u64,
    pub left: Body,
    pub right: Body,
    pub ball: Body,
    pub score: [u32; 2],
    pub rally: u32,
    pub winner: Option<Side>,
}

/// A single session: two paddles, one ball, one match
pub struct Game {
    world: World,
    time: Time,
    config: Config,
    state: MatchState,
    events: Events,
    rng: GameRng,
    loop_state: LoopState,
    tick: u64,
}

impl Game {
    /// Left paddle is human, right paddle is AI
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, &config, Side::Left, false);
        create_paddle(&mut world, &config, Side::Right, true);

        let vel = Vec2::new(config.ball_speed, serve_vy(&config, &mut rng));
        create_ball(&mut world, &config, config.ball_spawn(), vel);

        log::info!("new game, seed {seed}, first to {}", config.win_score);

        Ok(Self {
            world,
            time: Time::default(),
            state: MatchState::new(config.win_score),
            config,
            events: Events::new(),
            rng,
            loop_state: LoopState::Running,
            tick: 0,
        })
    }

    /// Run one tick with the given input and elapsed seconds
    pub fn tick(&mut self, input: InputSnapshot, dt: f32) {
        step(
            &mut self.world,
            &mut self.time,
            dt,
            input.dir,
            &self.config,
            &mut self.state,
            &mut self.events,
            &mut self.rng,
        );
        self.tick += 1;
    }

    /// Sample input, tick, render, sleep; until the input asks to quit
    pub fn run<C, I, R>(&mut self, clock: &mut C, input: &mut I, mut render: R)
    where
        C: Clock,
        I: InputSource,
        R: FnMut(&Frame),
    {
        while self.loop_state == LoopState::Running {
            let snapshot = input.poll();
            if snapshot.quit {
                self.stop();
                break;
            }

            let dt = clock.elapsed();
            self.tick(snapshot, dt);
            render(&self.frame());

            if !self.config.tick_sleep.is_zero() {
                std::thread::sleep(self.config.tick_sleep);
            }
        }
    }

    pub fn stop(&mut self) {
        if self.loop_state == LoopState::Running {
            log::info!(
                "game stopped after {} ticks, score {}-{}",
                self.tick,
                self.state.score[0],
                self.state.score[1]
            );
        }
        self.loop_state = LoopState::Stopped;
    }

    /// Snapshot of everything the renderer needs
    pub fn frame(&self) -> Frame {
        let mut frame = Frame {
            tick: self.tick,
            score: self.state.score,
            rally: self.state.rally,
            winner: self.state.has_winner(),
            ..Frame::default()
        };

        for (_e, (body, player)) in self.world.query::<(&Body, &PlayerData)>().iter() {
            match player.side {
                Side::Left => frame.left = *body,
                Side::Right => frame.right = *body,
            }
        }
        if let Some((_e, (body, _))) = self.world.query::<(&Body, &Ball)>().iter().next() {
            frame.ball = *body;
        }

        frame
    }

    pub fn is_match_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.has_winner()
    }

    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access for setting up scenarios
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Direct access for resuming a match from a given score
    pub fn match_state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> Config {
        Config {
            tick_sleep: std::time::Duration::ZERO,
            ..Config::new()
        }
    }

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(quiet_config(), 1).unwrap();
        let frame = game.frame();

        assert_eq!(frame.left.pos, glam::IVec2::new(20, 350));
        assert_eq!(frame.right.pos, glam::IVec2::new(760, 350));
        assert_eq!(frame.ball.pos, glam::IVec2::new(390, 390));
        assert_eq!(frame.score, [0, 0]);
        assert_eq!(frame.winner, None);
        assert_eq!(game.loop_state(), LoopState::Running);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            win_score: 0,
            ..quiet_config()
        };
        assert!(matches!(Game::new(config, 1), Err(ConfigError::NoWinCondition)));
    }

    #[test]
    fn test_run_stops_on_quit() {
        let mut game = Game::new(quiet_config(), 1).unwrap();
        let mut polls = 0;
        let mut input = || {
            polls += 1;
            if polls > 3 {
                InputSnapshot::quit()
            } else {
                InputSnapshot::default()
            }
        };
        let mut frames = Vec::new();

        game.run(&mut FixedClock(0.016), &mut input, |frame| frames.push(*frame));

        assert_eq!(frames.len(), 3, "quit is seen before the fourth tick");
        assert_eq!(frames.last().map(|f| f.tick), Some(3));
        assert_eq!(game.loop_state(), LoopState::Stopped);
    }

    #[test]
    fn test_stopped_is_terminal() {
        let mut game = Game::new(quiet_config(), 1).unwrap();
        game.stop();

        let mut rendered = 0;
        game.run(
            &mut FixedClock(0.016),
            &mut || InputSnapshot::default(),
            |_| rendered += 1,
        );

        assert_eq!(rendered, 0);
        assert_eq!(game.loop_state(), LoopState::Stopped);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut game = Game::new(quiet_config(), 1).unwrap();
        game.tick(InputSnapshot::default(), 5.0);
        assert_eq!(game.time().dt, game.config().max_dt);

        game.tick(InputSnapshot::default(), -1.0);
        assert_eq!(game.time().dt, 0.0);
    }

    #[test]
    fn test_dt_is_replaced_not_accumulated() {
        let mut game = Game::new(quiet_config(), 1).unwrap();
        game.tick(InputSnapshot::default(), 0.016);
        game.tick(InputSnapshot::default(), 0.02);
        assert_eq!(game.time().dt, 0.02);
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock(0.25);
        assert_eq!(clock.elapsed(), 0.25);
        assert_eq!(clock.elapsed(), 0.25);
    }

    #[test]
    fn test_monotonic_clock_never_negative() {
        let mut clock = MonotonicClock::new();
        assert!(clock.elapsed() >= 0.0);
        assert!(clock.elapsed() >= 0.0);
    }
}
