//! Tetromino module - shape geometry and clockwise rotation
//!
//! Each shape is four block offsets around a pivot at (0, 0) plus a fixed
//! color. The offsets come from a static table; a [`Tetromino`] is a small
//! `Copy` value holding the table entry and any rotation applied since.

use crate::point::Point;
use crate::types::{Color, Shape};

/// Block offsets of one shape.
pub type Blocks = [Point; 4];

/// Static table entry for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub blocks: Blocks,
    pub color: Color,
}

const fn def(offsets: [(i32, i32); 4], color: Color) -> ShapeDef {
    ShapeDef {
        blocks: [
            Point::new(offsets[0].0, offsets[0].1),
            Point::new(offsets[1].0, offsets[1].1),
            Point::new(offsets[2].0, offsets[2].1),
            Point::new(offsets[3].0, offsets[3].1),
        ],
        color,
    }
}

/// Spawn geometry for every shape, in [`Shape::ALL`] order.
pub const SHAPES: [ShapeDef; 7] = [
    // S
    def([(0, 0), (-1, 0), (0, 1), (1, 1)], Color::Red),
    // Z
    def([(0, 0), (-1, 1), (1, 0), (0, 1)], Color::Green),
    // L
    def([(0, 0), (0, 1), (0, -1), (1, -1)], Color::Orange),
    // J
    def([(0, 0), (0, -1), (-1, -1), (0, 1)], Color::BlueDark),
    // O
    def([(0, 0), (0, 1), (1, 0), (1, 1)], Color::Yellow),
    // I
    def([(0, 0), (0, -1), (0, 1), (0, 2)], Color::BlueLight),
    // T
    def([(0, 0), (0, -1), (-1, 0), (1, 0)], Color::Purple),
];

/// Look up the spawn geometry of a shape.
pub fn shape_def(shape: Shape) -> ShapeDef {
    let index = match shape {
        Shape::S => 0,
        Shape::Z => 1,
        Shape::L => 2,
        Shape::J => 3,
        Shape::O => 4,
        Shape::I => 5,
        Shape::T => 6,
    };
    SHAPES[index]
}

/// A shape with its current (possibly rotated) block offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    shape: Shape,
    color: Color,
    blocks: Blocks,
}

impl Tetromino {
    pub fn new(shape: Shape) -> Self {
        let ShapeDef { blocks, color } = shape_def(shape);
        Self {
            shape,
            color,
            blocks,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Block offsets relative to the pivot.
    pub fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    /// Switch to another shape, discarding any rotation.
    pub fn set_shape(&mut self, shape: Shape) {
        *self = Self::new(shape);
    }

    /// Rotate 90° clockwise in place: (x, y) -> (-y, x).
    ///
    /// The swap comes first; negating x before swapping yields (y, -x),
    /// which turns the piece counter-clockwise on a y-down board.
    ///
    /// The O shape is left untouched; turning it about (0, 0) would make it
    /// wander one column per rotation.
    pub fn rotate_clockwise(&mut self) {
        if self.shape == Shape::O {
            return;
        }
        for block in &mut self.blocks {
            block.swap_xy();
            block.multiply_x(-1);
        }
    }

    /// Rotated copy, leaving `self` alone.
    pub fn rotated(mut self) -> Self {
        self.rotate_clockwise();
        self
    }

    /// 7x7 ASCII picture of the offsets, `y = 3` on the first line.
    pub fn preview(&self) -> String {
        let mut out = String::with_capacity(7 * 8);
        for y in (-3..=3).rev() {
            for x in -3..=3 {
                let filled = self.blocks.iter().any(|b| b.x() == x && b.y() == y);
                out.push(if filled { 'x' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Tetromino {
    fn default() -> Self {
        Self::new(Shape::S)
    }
}
