use crate::Side;

/// Time resource for the current step
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32, // Clamped delta time for this step
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy)]
pub struct MatchState {
    pub score: [u32; 2], // [left, right]
    pub rally: u32,      // paddle hits since the last point
    pub win_condition: u32,
}

impl MatchState {
    pub fn new(win_condition: u32) -> Self {
        Self {
            score: [0, 0],
            rally: 0,
            win_condition,
        }
    }

    pub fn award_point(&mut self, side: Side) {
        self.score[side.index()] = self.score[side.index()].saturating_add(1);
        self.rally = 0;
    }

    pub fn record_hit(&mut self) {
        self.rally = self.rally.saturating_add(1);
    }

    pub fn has_winner(&self) -> Option<Side> {
        if self.score[0] >= self.win_condition {
            Some(Side::Left)
        } else if self.score[1] >= self.win_condition {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.has_winner().is_some()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_passed: Option<Side>, // edge the ball left through
    pub paddle_hit: Option<Side>,
    pub wall_hit: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Take the pass event so it is handled once
    pub fn take_ball_passed(&mut self) -> Option<Side> {
        self.ball_passed.take()
    }
}
