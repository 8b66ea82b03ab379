//! Board tests through the public facade.

use blockfall::core::{Board, Point};
use blockfall::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.spawn_point(), Point::new(5, 0));

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.read(Point::new(x, y)), None, "({}, {})", x, y);
        }
    }
    assert!(board.completed_rows().is_empty());
}

#[test]
fn test_write_then_read() {
    let mut board = Board::new();
    board.write(Point::new(2, 3), Some(Color::Red));
    assert_eq!(board.read(Point::new(2, 3)), Some(Color::Red));

    board.write(Point::new(2, 3), None);
    assert_eq!(board.read(Point::new(2, 3)), None);
}

#[test]
fn test_write_out_of_bounds_is_noop() {
    let mut board = Board::new();
    let before = board.clone();

    board.write(Point::new(-1, 0), Some(Color::Red));
    board.write(Point::new(0, -1), Some(Color::Red));
    board.write(Point::new(BOARD_WIDTH as i32, 0), Some(Color::Red));
    board.write(Point::new(0, BOARD_HEIGHT as i32), Some(Color::Red));

    assert_eq!(board, before);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_read_out_of_bounds_panics() {
    let board = Board::new();
    let _ = board.read(Point::new(0, BOARD_HEIGHT as i32));
}

#[test]
fn test_all_empty_ignores_points_above_top() {
    let mut board = Board::new();
    board.write(Point::new(4, 0), Some(Color::Green));

    assert!(board.all_empty(&[Point::new(5, -1), Point::new(5, 0)]));
    assert!(!board.all_empty(&[Point::new(4, -1), Point::new(4, 0)]));
    assert!(board.all_empty(&[Point::new(4, -1)]));
}

#[test]
fn test_single_full_row_is_detected() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i32 {
        board.write(Point::new(x, 18), Some(Color::BlueLight));
    }
    assert!(board.is_row_complete(18));
    assert!(!board.is_row_complete(17));
    assert_eq!(board.completed_rows().as_slice(), &[18]);
}

#[test]
fn test_clear_rows_three_and_seven() {
    let mut board = Board::new();
    board.fill_row(3, Some(Color::Red));
    board.fill_row(7, Some(Color::Red));
    board.write(Point::new(0, 0), Some(Color::Purple));
    board.write(Point::new(1, 5), Some(Color::Orange));
    board.write(Point::new(2, 10), Some(Color::Yellow));

    assert_eq!(board.clear_rows(), 2);

    // Above both rows: falls by two.
    assert_eq!(board.read(Point::new(0, 2)), Some(Color::Purple));
    // Between them: falls by one.
    assert_eq!(board.read(Point::new(1, 6)), Some(Color::Orange));
    // Below both: untouched.
    assert_eq!(board.read(Point::new(2, 10)), Some(Color::Yellow));

    assert!(board.completed_rows().is_empty());
    for x in 0..BOARD_WIDTH as i32 {
        assert_eq!(board.read(Point::new(x, 0)), None);
        assert_eq!(board.read(Point::new(x, 1)), None);
    }
}

#[test]
fn test_clear_rows_on_incomplete_board() {
    let mut board = Board::new();
    board.fill_row(18, Some(Color::Red));
    board.write(Point::new(9, 18), None);

    assert_eq!(board.clear_rows(), 0);
    assert_eq!(board.read(Point::new(0, 18)), Some(Color::Red));
}

#[test]
fn test_copy_row_into_row() {
    let mut board = Board::new();
    board.write(Point::new(3, 4), Some(Color::BlueDark));
    board.copy_row_into_row(4, 12);
    assert_eq!(board.read(Point::new(3, 12)), Some(Color::BlueDark));
    assert_eq!(board.read(Point::new(3, 4)), Some(Color::BlueDark));
}

#[test]
fn test_clear_resets_every_cell() {
    let mut board = Board::new();
    board.fill_row(0, Some(Color::Red));
    board.fill_row(18, Some(Color::Red));
    board.clear();
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_write_all_skips_off_board_points() {
    let mut board = Board::new();
    board.write_all(
        &[Point::new(5, -1), Point::new(5, 0), Point::new(10, 3)],
        Some(Color::Red),
    );

    assert_eq!(board.read(Point::new(5, 0)), Some(Color::Red));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}
