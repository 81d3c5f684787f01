//! Software drawing of a game frame into a 0RGB pixel buffer

use game_core::{Body, Frame};

pub const FOREGROUND: u32 = 0x00FF_FFFF;
pub const BACKGROUND: u32 = 0x0000_0000;

/// 4x5 digit bitmaps, one nibble per row, high bit on the left
const DIGITS: [[u8; 5]; 10] = [
    [0xF, 0x9, 0x9, 0x9, 0xF],
    [0x2, 0x6, 0x2, 0x2, 0x7],
    [0xF, 0x1, 0xF, 0x8, 0xF],
    [0xF, 0x1, 0xF, 0x1, 0xF],
    [0x9, 0x9, 0xF, 0x1, 0x1],
    [0xF, 0x8, 0xF, 0x1, 0xF],
    [0xF, 0x8, 0xF, 0x9, 0xF],
    [0xF, 0x1, 0x2, 0x4, 0x4],
    [0xF, 0x9, 0xF, 0x9, 0xF],
    [0xF, 0x9, 0xF, 0x1, 0xF],
];

const CELL: i32 = 10;
const DIGIT_ADVANCE: i32 = 5 * CELL;
const SCORE_TOP: i32 = 50;
const SCORE_GAP: i32 = 60; // net to the left score's last digit

const DASH_WIDTH: i32 = 4;
const DASH_HEIGHT: i32 = 15;
const DASH_PERIOD: i32 = 25;

/// Mutable view over a row-major pixel buffer
pub struct Canvas<'a> {
    pixels: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// Buffers shorter than `width * height` are drawn into as far as they go
    pub fn new(pixels: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = height.min(pixels.len() / width.max(1));
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = (x.saturating_add(w).max(0) as usize).min(self.width);
        let y1 = (y.saturating_add(h).max(0) as usize).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in y0..y1 {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(color);
        }
    }

    pub fn fill_body(&mut self, body: &Body, color: u32) {
        self.fill_rect(body.pos.x, body.pos.y, body.size.x, body.size.y, color);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }
}

/// Paint a whole frame: background, net, scores, paddles and ball
pub fn draw_frame(canvas: &mut Canvas, frame: &Frame, arena_width: i32, arena_height: i32) {
    canvas.clear(BACKGROUND);

    let center_x = arena_width / 2;
    draw_net(canvas, center_x, arena_height);

    // Left score ends just left of the net, right score starts just right of it
    draw_number(canvas, frame.score[0], center_x - SCORE_GAP, Align::Right);
    draw_number(canvas, frame.score[1], center_x + SCORE_GAP - 4 * CELL, Align::Left);

    canvas.fill_body(&frame.left, FOREGROUND);
    canvas.fill_body(&frame.right, FOREGROUND);
    canvas.fill_body(&frame.ball, FOREGROUND);
}

fn draw_net(canvas: &mut Canvas, center_x: i32, height: i32) {
    let x = center_x - DASH_WIDTH / 2;
    let mut y = 0;
    while y < height {
        canvas.fill_rect(x, y, DASH_WIDTH, DASH_HEIGHT, FOREGROUND);
        y += DASH_PERIOD;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `x` is the left edge of the last digit; earlier digits grow leftward
    Right,
    /// `x` is the left edge of the first digit
    Left,
}

pub fn draw_number(canvas: &mut Canvas, value: u32, x: i32, align: Align) {
    let digits: Vec<usize> = value
        .to_string()
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect();

    let start = match align {
        Align::Left => x,
        Align::Right => x - (digits.len() as i32 - 1) * DIGIT_ADVANCE,
    };

    for (i, digit) in digits.into_iter().enumerate() {
        draw_digit(canvas, digit, start + i as i32 * DIGIT_ADVANCE, SCORE_TOP);
    }
}

fn draw_digit(canvas: &mut Canvas, digit: usize, x: i32, y: i32) {
    let Some(rows) = DIGITS.get(digit) else {
        return;
    };
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..4 {
            if bits & (0x8 >> col) != 0 {
                canvas.fill_rect(x + col * CELL, y + row as i32 * CELL, CELL, CELL, FOREGROUND);
            }
        }
    }
}
