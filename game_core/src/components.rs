use glam::{IVec2, Vec2};

/// Which half of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Score slot for this side (0 = left, 1 = right)
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Axis-aligned box in integer arena units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Body {
    pub pos: IVec2, // top-left corner
    pub size: IVec2,
}

impl Body {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    /// Strict intersection: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Velocity with a clamp applied to the vertical component only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub vel: Vec2,
    pub min: f32,
    pub max: f32,
}

impl Velocity {
    pub fn new(vel: Vec2, min: f32, max: f32) -> Self {
        Self { vel, min, max }
    }

    /// Whole units moved this tick, truncated toward zero
    pub fn step(&self) -> IVec2 {
        IVec2::new(self.vel.x as i32, self.vel.y as i32)
    }
}

/// Force accumulator set by input or AI
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Force {
    pub force: f32,
}

impl Force {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Player data carried by paddles only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerData {
    pub side: Side,
    pub is_ai: bool,
}

impl PlayerData {
    pub fn new(side: Side, is_ai: bool) -> Self {
        Self { side, is_ai }
    }
}

/// Marker component for the ball
#[derive(Debug, Clone, Copy, Default)]
pub struct Ball;

/// Steering input for a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Up,
    #[default]
    Idle,
    Down,
}

impl Direction {
    /// Sign of the force this direction applies (up is negative y)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Idle => 0.0,
            Direction::Down => 1.0,
        }
    }
}
