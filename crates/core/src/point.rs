//! Point module - integer grid coordinates
//!
//! `x` grows to the right, `y` grows downward (row 0 is the top of the board).

use std::fmt;
use std::ops::Add;

/// A 2D integer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub fn set_xy(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Exchange the two axes in place.
    pub fn swap_xy(&mut self) {
        std::mem::swap(&mut self.x, &mut self.y);
    }

    pub fn multiply_x(&mut self, factor: i32) {
        self.x *= factor;
    }

    pub fn multiply_y(&mut self, factor: i32) {
        self.y *= factor;
    }

    /// Copy of this point shifted by (dx, dy).
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point::default(), Point::new(0, 0));
    }

    #[test]
    fn test_setters() {
        let mut p = Point::new(1, 2);
        p.set_x(7);
        assert_eq!(p, Point::new(7, 2));
        p.set_y(-3);
        assert_eq!(p, Point::new(7, -3));
        p.set_xy(4, 5);
        assert_eq!((p.x(), p.y()), (4, 5));
    }

    #[test]
    fn test_swap_and_multiply() {
        let mut p = Point::new(2, -1);
        p.swap_xy();
        assert_eq!(p, Point::new(-1, 2));

        p.multiply_x(-1);
        assert_eq!(p, Point::new(1, 2));
        p.multiply_y(3);
        assert_eq!(p, Point::new(1, 6));
    }

    #[test]
    fn test_translate_and_add() {
        let p = Point::new(5, 0);
        assert_eq!(p.translated(-1, 2), Point::new(4, 2));
        assert_eq!(p + Point::new(0, -1), Point::new(5, -1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(3, -4).to_string(), "[3,-4]");
    }
}
