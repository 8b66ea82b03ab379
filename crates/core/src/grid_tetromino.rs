//! A tetromino placed on the board at an absolute anchor.

use crate::point::Point;
use crate::tetromino::{Blocks, Tetromino};
use crate::types::{Color, Shape};

/// Piece geometry plus the board cell its pivot sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridTetromino {
    piece: Tetromino,
    anchor: Point,
}

impl GridTetromino {
    pub fn new(shape: Shape, anchor: Point) -> Self {
        Self {
            piece: Tetromino::new(shape),
            anchor,
        }
    }

    pub fn piece(&self) -> &Tetromino {
        &self.piece
    }

    pub fn shape(&self) -> Shape {
        self.piece.shape()
    }

    pub fn color(&self) -> Color {
        self.piece.color()
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.piece.set_shape(shape);
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Shift the anchor. No bounds or collision checks.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.anchor = self.anchor.translated(dx, dy);
    }

    /// Rotate the geometry around the anchor. No bounds or collision checks.
    pub fn rotate_clockwise(&mut self) {
        self.piece.rotate_clockwise();
    }

    /// Absolute board coordinates of the four blocks.
    ///
    /// Computed from the current offsets and anchor on every call.
    pub fn mapped_blocks(&self) -> Blocks {
        self.piece.blocks().map(|offset| offset + self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_blocks_follow_anchor() {
        let mut piece = GridTetromino::new(Shape::I, Point::new(5, 0));
        assert_eq!(
            piece.mapped_blocks(),
            [
                Point::new(5, 0),
                Point::new(5, -1),
                Point::new(5, 1),
                Point::new(5, 2)
            ]
        );

        piece.move_by(-2, 3);
        assert_eq!(piece.anchor(), Point::new(3, 3));
        assert_eq!(piece.mapped_blocks()[0], Point::new(3, 3));
        assert_eq!(piece.mapped_blocks()[3], Point::new(3, 5));
    }

    #[test]
    fn test_mapped_blocks_follow_rotation() {
        let mut piece = GridTetromino::new(Shape::I, Point::new(4, 4));
        piece.rotate_clockwise();
        let ys: Vec<i32> = piece.mapped_blocks().iter().map(|p| p.y()).collect();
        assert_eq!(ys, vec![4, 4, 4, 4]);
    }

    #[test]
    fn test_set_anchor() {
        let mut piece = GridTetromino::default();
        piece.set_anchor(Point::new(9, 18));
        assert_eq!(piece.anchor(), Point::new(9, 18));
        assert_eq!(piece.shape(), Shape::S);
    }
}
