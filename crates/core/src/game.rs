//! Game state module - the session loop
//!
//! Ties the board, the falling piece, the next piece, scoring and gravity
//! together. Every move or rotation is tried on a copy of the piece first and
//! only committed when the copy sits legally on the board.
//!
//! Locking and the bookkeeping that follows are split across two steps: a
//! lock only writes the blocks and raises a latch; the next
//! [`GameState::process_game_loop`] call spawns, clears rows, scores and
//! re-times gravity. Input handlers never touch the board layout directly.

use std::vec::Drain;

use crate::board::Board;
use crate::grid_tetromino::GridTetromino;
use crate::point::Point;
use crate::rng::{ShapeSource, SimpleRng};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::speed::{row_clear_score, seconds_per_tick};
use crate::types::{Command, SessionEvent, BOARD_HEIGHT, BOARD_WIDTH};

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R: ShapeSource = SimpleRng> {
    board: Board,
    current: GridTetromino,
    next: GridTetromino,
    source: R,
    score: u32,
    seconds_per_tick: f64,
    seconds_since_last_tick: f64,
    /// Set by `lock`, consumed by the next loop pass.
    shape_placed: bool,
    events: Vec<SessionEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<R: ShapeSource> GameState<R> {
    /// Create a new game drawing shapes from `source`.
    ///
    /// The first piece is already spawned and a next piece picked.
    pub fn with_source(source: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            current: GridTetromino::default(),
            next: GridTetromino::default(),
            source,
            score: 0,
            seconds_per_tick: seconds_per_tick(0),
            seconds_since_last_tick: 0.0,
            shape_placed: false,
            events: Vec::new(),
        };
        state.reset();
        state.events.clear();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &GridTetromino {
        &self.current
    }

    pub fn next(&self) -> &GridTetromino {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seconds_per_tick(&self) -> f64 {
        self.seconds_per_tick
    }

    /// True between a lock and the loop pass that spawns the next piece.
    pub fn just_locked(&self) -> bool {
        self.shape_placed
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Drain<'_, SessionEvent> {
        self.events.drain(..)
    }

    /// Start over: zero score, empty board, fresh current and next piece.
    pub fn reset(&mut self) {
        let final_score = self.score;
        self.score = 0;
        self.update_speed();
        self.board.clear();
        self.seconds_since_last_tick = 0.0;
        self.shape_placed = false;

        self.pick_next_shape();
        let spawned = self.spawn_next_shape();
        debug_assert!(spawned, "spawn must be legal on an empty board");
        self.pick_next_shape();

        self.events.push(SessionEvent::Reset { final_score });
    }

    /// Advance the session by `elapsed` seconds.
    ///
    /// First finishes any pending lock (spawn, clear, score, speed, or a full
    /// reset when the next piece has no room), then runs as many gravity ticks
    /// as the accumulated time pays for. Catch-up stops at a lock; the time
    /// left over carries into the next call.
    pub fn process_game_loop(&mut self, elapsed: f64) {
        if self.shape_placed {
            if self.spawn_next_shape() {
                self.pick_next_shape();
                let rows = self.board.clear_rows();
                if rows > 0 {
                    let gained = row_clear_score(rows);
                    self.score = self.score.saturating_add(gained);
                    self.events.push(SessionEvent::RowsCleared {
                        rows: rows as u32,
                        score: self.score,
                    });
                }
                self.update_speed();
            } else {
                self.reset();
            }
            self.shape_placed = false;
        }

        if !(elapsed.is_finite() && elapsed > 0.0) {
            return;
        }

        self.seconds_since_last_tick += elapsed;
        while self.seconds_since_last_tick > self.seconds_per_tick {
            self.seconds_since_last_tick -= self.seconds_per_tick;
            self.tick();
            if self.shape_placed {
                break;
            }
        }
    }

    /// One gravity step: fall a row, or lock where the piece stands.
    pub fn tick(&mut self) {
        if !self.attempt_move(0, 1) {
            self.lock();
        }
    }

    /// Apply an input command. Returns whether it changed anything.
    ///
    /// Commands are ignored while a locked piece awaits its replacement.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.shape_placed && command != Command::Restart {
            return false;
        }
        match command {
            Command::MoveLeft => self.attempt_move(-1, 0),
            Command::MoveRight => self.attempt_move(1, 0),
            Command::MoveDown => self.attempt_move(0, 1),
            Command::Rotate => self.attempt_rotate(),
            Command::Drop => {
                self.drop();
                self.lock();
                true
            }
            Command::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Move the current piece if the shifted copy is legal.
    pub fn attempt_move(&mut self, dx: i32, dy: i32) -> bool {
        let mut candidate = self.current;
        candidate.move_by(dx, dy);
        self.commit_if_legal(candidate)
    }

    /// Rotate the current piece clockwise if the rotated copy is legal.
    pub fn attempt_rotate(&mut self) -> bool {
        let mut candidate = self.current;
        candidate.rotate_clockwise();
        self.commit_if_legal(candidate)
    }

    /// Slide the current piece down until the next step would be illegal.
    pub fn drop(&mut self) {
        while self.attempt_move(0, 1) {}
    }

    /// Write the current piece into the board and raise the lock latch.
    pub fn lock(&mut self) {
        let blocks = self.current.mapped_blocks();
        self.board.write_all(&blocks, Some(self.current.color()));
        self.shape_placed = true;

        let anchor = self.current.anchor();
        self.events.push(SessionEvent::Locked {
            shape: self.current.shape(),
            x: anchor.x(),
            y: anchor.y(),
        });
    }

    /// Inside the side and bottom walls and not overlapping a locked block.
    ///
    /// Blocks above row 0 are allowed so pieces can enter from the top.
    pub fn is_position_legal(&self, piece: &GridTetromino) -> bool {
        let blocks = piece.mapped_blocks();
        Self::is_within_borders(&blocks) && self.board.all_empty(&blocks)
    }

    fn is_within_borders(blocks: &[Point]) -> bool {
        blocks
            .iter()
            .all(|p| p.x() >= 0 && p.x() < BOARD_WIDTH as i32 && p.y() < BOARD_HEIGHT as i32)
    }

    fn commit_if_legal(&mut self, candidate: GridTetromino) -> bool {
        if self.is_position_legal(&candidate) {
            self.current = candidate;
            true
        } else {
            false
        }
    }

    /// Promote the next piece to current at the spawn point, if it fits.
    fn spawn_next_shape(&mut self) -> bool {
        let mut candidate = self.next;
        candidate.set_anchor(self.board.spawn_point());
        self.commit_if_legal(candidate)
    }

    fn pick_next_shape(&mut self) {
        let shape = self.source.next_shape();
        self.next = GridTetromino::new(shape, Point::default());
    }

    fn update_speed(&mut self) {
        let secs = seconds_per_tick(self.score);
        if secs != self.seconds_per_tick {
            self.seconds_per_tick = secs;
            self.events.push(SessionEvent::SpeedChanged {
                seconds_per_tick: secs,
            });
        }
    }

    /// Copy the renderable state into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.current = PieceSnapshot::from(&self.current);
        out.next = PieceSnapshot::from(&self.next);
        out.score = self.score;
        out.seconds_per_tick = self.seconds_per_tick;
        out.spawn_point = self.board.spawn_point();
        out.just_locked = self.shape_placed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
