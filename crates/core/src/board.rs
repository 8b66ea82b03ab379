//! Board module - the locked-block grid
//!
//! The board is a 10x19 grid where each cell is either empty or holds the color
//! of a block that was locked there. Storage is a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..18
//! (top to bottom). New pieces spawn at (5, 0).
//!
//! Reads are strict (out-of-range is a bug and panics); writes and emptiness
//! checks quietly skip coordinates that fall off the grid, so a piece poking
//! out above row 0 can still be written and tested as a whole.

use std::fmt;

use arrayvec::ArrayVec;

use crate::point::Point;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices, top to bottom. Never longer than the board is tall.
pub type RowList = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 19 rows
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        let mut board = Self {
            cells: [None; BOARD_SIZE],
        };
        board.clear();
        board
    }

    #[inline(always)]
    fn index(p: Point) -> Option<usize> {
        if !Self::in_bounds(p) {
            return None;
        }
        Some((p.y() as usize) * WIDTH + (p.x() as usize))
    }

    #[inline(always)]
    fn in_bounds(p: Point) -> bool {
        p.x() >= 0 && p.x() < WIDTH as i32 && p.y() >= 0 && p.y() < HEIGHT as i32
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Where every new piece's anchor is placed.
    pub fn spawn_point(&self) -> Point {
        Point::new(WIDTH as i32 / 2, 0)
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_in_bounds(&self, p: Point) -> bool {
        Self::in_bounds(p)
    }

    /// Cell contents at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the board.
    pub fn read(&self, p: Point) -> Cell {
        match Self::index(p) {
            Some(idx) => self.cells[idx],
            None => panic!("board read out of bounds at {}", p),
        }
    }

    /// Set the cell at `p`. Out-of-bounds points are ignored.
    pub fn write(&mut self, p: Point, cell: Cell) {
        if let Some(idx) = Self::index(p) {
            self.cells[idx] = cell;
        }
    }

    /// [`Board::write`] every point, skipping the ones off the grid.
    pub fn write_all(&mut self, points: &[Point], cell: Cell) {
        for &p in points {
            self.write(p, cell);
        }
    }

    /// True if every in-bounds point is empty. Off-grid points never block.
    pub fn all_empty(&self, points: &[Point]) -> bool {
        points
            .iter()
            .filter_map(|&p| Self::index(p))
            .all(|idx| self.cells[idx].is_none())
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Check if a row has no empty cell
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a valid row index.
    pub fn is_row_complete(&self, y: usize) -> bool {
        assert!(y < HEIGHT, "row index {} out of range", y);
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Indices of every complete row, top to bottom.
    pub fn completed_rows(&self) -> RowList {
        (0..HEIGHT).filter(|&y| self.is_row_complete(y)).collect()
    }

    /// Set every cell of row `y` to `cell`.
    pub fn fill_row(&mut self, y: usize, cell: Cell) {
        assert!(y < HEIGHT, "row index {} out of range", y);
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(cell);
    }

    /// Overwrite row `dst` with the contents of row `src`.
    pub fn copy_row_into_row(&mut self, src: usize, dst: usize) {
        assert!(src < HEIGHT && dst < HEIGHT, "row index out of range");
        self.cells
            .copy_within(src * WIDTH..(src + 1) * WIDTH, dst * WIDTH);
    }

    /// Remove one row: everything above it falls by one and row 0 empties.
    fn remove_row(&mut self, y: usize) {
        for row in (0..y).rev() {
            self.copy_row_into_row(row, row + 1);
        }
        self.fill_row(0, None);
    }

    /// Remove every complete row and return how many went.
    ///
    /// Rows are removed one at a time from the top down. Removing a row only
    /// moves rows above it, so the remaining (lower) indices stay valid.
    pub fn clear_rows(&mut self) -> usize {
        let rows = self.completed_rows();
        for &y in &rows {
            self.remove_row(y);
        }
        rows.len()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a grid of color codes (0 = empty).
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * WIDTH + x].map_or(0, |c| c.code());
            }
        }
    }

    /// Build a board from text rows, top row first. `.` is empty, a digit
    /// 1-7 is a color code. Short input leaves the remaining rows empty.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        use crate::types::Color;

        let mut board = Self::new();
        for (y, line) in rows.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let code = ch.to_digit(10).unwrap_or(0) as u8;
                board.write(Point::new(x as i32, y as i32), Color::from_code(code));
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug dump: one line per row, `.` for empty, the color code otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..HEIGHT {
            for cell in self.row(y) {
                match cell {
                    Some(color) => write!(f, "{:>2}", color.code())?,
                    None => write!(f, "{:>2}", '.')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
