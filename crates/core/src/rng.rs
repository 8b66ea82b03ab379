//! RNG module - where new shapes come from
//!
//! The session never reaches for global randomness. It owns a
//! [`ShapeSource`], so a seeded [`SimpleRng`] gives a reproducible game and a
//! [`ShapeSequence`] gives a fully scripted one.

use crate::types::Shape;

/// Supplies the shape of each newly picked piece.
pub trait ShapeSource {
    fn next_shape(&mut self) -> Shape;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current generator state (feeding it back to `new` resumes the sequence).
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for SimpleRng {
    /// Uniform pick among the seven shapes.
    fn next_shape(&mut self) -> Shape {
        Shape::from_index(self.next_range(Shape::ALL.len() as u32) as usize)
    }
}

/// Cycles through a fixed list of shapes forever.
#[derive(Debug, Clone)]
pub struct ShapeSequence {
    shapes: Vec<Shape>,
    pos: usize,
}

impl ShapeSequence {
    /// # Panics
    ///
    /// Panics if `shapes` is empty.
    pub fn new(shapes: impl Into<Vec<Shape>>) -> Self {
        let shapes = shapes.into();
        assert!(!shapes.is_empty(), "shape sequence must not be empty");
        Self { shapes, pos: 0 }
    }

    /// Always the same shape.
    pub fn repeat(shape: Shape) -> Self {
        Self::new(vec![shape])
    }
}

impl ShapeSource for ShapeSequence {
    fn next_shape(&mut self) -> Shape {
        let shape = self.shapes[self.pos];
        self.pos = (self.pos + 1) % self.shapes.len();
        shape
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_shape(&mut self) -> Shape {
        (**self).next_shape()
    }
}
