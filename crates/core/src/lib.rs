//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: the shape source is injected, so a seed (or a scripted
//!   sequence) fixes the whole game
//! - **Testable**: every rule is reachable without a terminal
//! - **Allocation-light**: piece geometry is `[Point; 4]`, row lists are
//!   stack arrays
//!
//! # Module Structure
//!
//! - [`point`]: integer grid coordinates
//! - [`tetromino`]: shape table and clockwise rotation
//! - [`grid_tetromino`]: a tetromino anchored on the board
//! - [`board`]: 10x19 grid with bounds-tolerant writes and row clearing
//! - [`rng`]: seedable shape sources
//! - [`speed`]: row-clear scoring and gravity tiers
//! - [`game`]: the session loop (commands, gravity, locking, spawning)
//! - [`snapshot`]: plain-data copy of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn with their pivot at (5, 0) and may poke out above the top
//!   row; side walls and the floor are solid.
//! - A piece that cannot fall is locked. The next loop pass spawns the next
//!   piece, removes complete rows (+100 each) and re-times gravity.
//! - When the next piece has no room at the spawn point the session resets.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::Command;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//! game.apply_command(Command::Drop);
//! assert!(game.just_locked());
//!
//! // The next loop pass spawns a fresh piece at the top.
//! game.process_game_loop(0.016);
//! assert!(!game.just_locked());
//! assert_eq!(game.current().anchor(), game.board().spawn_point());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::process_game_loop`](game::GameState::process_game_loop)
//! every frame with the elapsed time in seconds. Gravity starts at 0.75s per
//! row and speeds up with score down to 0.35s.

pub mod board;
pub mod game;
pub mod grid_tetromino;
pub mod point;
pub mod rng;
pub mod snapshot;
pub mod speed;
pub mod tetromino;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::GameState;
pub use grid_tetromino::GridTetromino;
pub use point::Point;
pub use rng::{ShapeSequence, ShapeSource, SimpleRng};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use speed::{row_clear_score, seconds_per_tick};
pub use tetromino::{shape_def, Tetromino, SHAPES};
