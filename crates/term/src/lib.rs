//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the session snapshot is drawn into
//! a plain framebuffer, which is then flushed to the terminal with row-level
//! diffing. No widget toolkit is involved, so the board keeps an exact
//! 2-columns-per-cell aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, AnchorY, BoardFrame, GameView, Viewport};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
