//! Plain-data copy of the session state, handed to renderers each frame.

use crate::grid_tetromino::GridTetromino;
use crate::point::Point;
use crate::tetromino::Blocks;
use crate::types::{Color, Shape, BOARD_HEIGHT, BOARD_WIDTH, MAX_SECONDS_PER_TICK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub shape: Shape,
    pub color: Color,
    pub anchor: Point,
    /// Absolute block positions (anchor applied).
    pub blocks: Blocks,
}

impl From<&GridTetromino> for PieceSnapshot {
    fn from(value: &GridTetromino) -> Self {
        Self {
            shape: value.shape(),
            color: value.color(),
            anchor: value.anchor(),
            blocks: value.mapped_blocks(),
        }
    }
}

impl Default for PieceSnapshot {
    fn default() -> Self {
        Self::from(&GridTetromino::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Color codes per cell, 0 = empty (see `Color::code`).
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub seconds_per_tick: f64,
    pub spawn_point: Point,
    pub just_locked: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Locked-block color at a board cell, if any.
    pub fn cell(&self, x: usize, y: usize) -> Option<Color> {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&code| Color::from_code(code))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: PieceSnapshot::default(),
            next: PieceSnapshot::default(),
            score: 0,
            seconds_per_tick: MAX_SECONDS_PER_TICK,
            spawn_point: Point::new(BOARD_WIDTH as i32 / 2, 0),
            just_locked: false,
        }
    }
}
