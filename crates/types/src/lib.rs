//! Shared types module - plain data and constants
//!
//! Everything here is dependency-free so the core rules, the terminal view and
//! the input mapping can all agree on the same vocabulary.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 19 rows (indexed 0-18, row 0 is the top)
//! - **Spawn point**: (`BOARD_WIDTH / 2`, 0) = (5, 0)
//!
//! # Speed Tiers
//!
//! Gravity is expressed in seconds per downward step and tightens as the
//! score grows:
//!
//! | Score | Seconds per tick |
//! |-------|------------------|
//! | < 300 | 0.75 |
//! | 300 | 0.65 |
//! | 400 | 0.55 |
//! | 500 | 0.45 |
//! | 600+ | 0.35 |
//!
//! The interval is always clamped to
//! [`MIN_SECONDS_PER_TICK`, `MAX_SECONDS_PER_TICK`].
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let shape = Shape::from_str("t").unwrap();
//! assert_eq!(shape, Shape::T);
//! assert_eq!(Shape::T.color(), blockfall_types::Color::Purple);
//!
//! assert_eq!(Command::from_str("drop"), Some(Command::Drop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 19);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (19 rows)
pub const BOARD_HEIGHT: u8 = 19;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Slowest gravity, used for a fresh game
pub const MAX_SECONDS_PER_TICK: f64 = 0.75;

/// Fastest gravity the speed tiers may ever reach
pub const MIN_SECONDS_PER_TICK: f64 = 0.20;

/// Score thresholds and the gravity they unlock, in ascending score order.
pub const SPEED_TIERS: [(u32, f64); 5] = [
    (200, 0.75),
    (300, 0.65),
    (400, 0.55),
    (500, 0.45),
    (600, 0.35),
];

/// Points awarded per removed row
pub const POINTS_PER_ROW: u32 = 100;

/// The seven piece shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    S,
    Z,
    L,
    J,
    O,
    I,
    T,
}

impl Shape {
    /// Every shape, in table order.
    pub const ALL: [Shape; 7] = [
        Shape::S,
        Shape::Z,
        Shape::L,
        Shape::J,
        Shape::O,
        Shape::I,
        Shape::T,
    ];

    /// Map an index in `0..7` to a shape (wraps modulo 7).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The color every block of this shape is drawn and locked with.
    pub fn color(&self) -> Color {
        match self {
            Shape::S => Color::Red,
            Shape::Z => Color::Green,
            Shape::L => Color::Orange,
            Shape::J => Color::BlueDark,
            Shape::O => Color::Yellow,
            Shape::I => Color::BlueLight,
            Shape::T => Color::Purple,
        }
    }

    /// Parse shape from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("O"), Some(Shape::O));
    /// assert_eq!(Shape::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            "l" => Some(Shape::L),
            "j" => Some(Shape::J),
            "o" => Some(Shape::O),
            "i" => Some(Shape::I),
            "t" => Some(Shape::T),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::S => "s",
            Shape::Z => "z",
            Shape::L => "l",
            Shape::J => "j",
            Shape::O => "o",
            Shape::I => "i",
            Shape::T => "t",
        }
    }
}

/// Block colors, one per shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    BlueLight,
    BlueDark,
    Purple,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::BlueLight,
        Color::BlueDark,
        Color::Purple,
    ];

    /// Compact numeric code (1-7). 0 is reserved for an empty cell.
    pub fn code(&self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Orange => 2,
            Color::Yellow => 3,
            Color::Green => 4,
            Color::BlueLight => 5,
            Color::BlueDark => 6,
            Color::Purple => 7,
        }
    }

    /// Inverse of [`Color::code`]; `None` for 0 and unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Color::Red),
            2 => Some(Color::Orange),
            3 => Some(Color::Yellow),
            4 => Some(Color::Green),
            5 => Some(Color::BlueLight),
            6 => Some(Color::BlueDark),
            7 => Some(Color::Purple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::BlueLight => "blue_light",
            Color::BlueDark => "blue_dark",
            Color::Purple => "purple",
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(Color)`: a locked block of that color
pub type Cell = Option<Color>;

/// Discrete commands the input side can send to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to the lowest legal row and lock it
    Drop,
    /// Throw the current game away and start over
    Restart,
}

impl Command {
    /// Parse command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "drop" => Some(Command::Drop),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::Drop => "drop",
            Command::Restart => "restart",
        }
    }
}

/// Something noteworthy the session did, queued for the host to drain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A piece was written into the board.
    Locked { shape: Shape, x: i32, y: i32 },
    /// Completed rows were removed after a lock.
    RowsCleared { rows: u32, score: u32 },
    /// The gravity interval changed.
    SpeedChanged { seconds_per_tick: f64 },
    /// The session started over (board full or explicit restart).
    Reset { final_score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_a_distinct_color() {
        let mut seen = Vec::new();
        for shape in Shape::ALL {
            let color = shape.color();
            assert!(!seen.contains(&color), "{:?} reuses {:?}", shape, color);
            seen.push(color);
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn color_codes_round_trip_and_skip_zero() {
        for color in Color::ALL {
            assert_ne!(color.code(), 0);
            assert_eq!(Color::from_code(color.code()), Some(color));
        }
        assert_eq!(Color::from_code(0), None);
        assert_eq!(Color::from_code(8), None);
    }

    #[test]
    fn speed_tiers_are_ascending_and_within_limits() {
        for pair in SPEED_TIERS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 >= pair[1].1);
        }
        for (_, secs) in SPEED_TIERS {
            assert!(secs <= MAX_SECONDS_PER_TICK);
            assert!(secs >= MIN_SECONDS_PER_TICK);
        }
    }

    #[test]
    fn shape_from_index_wraps() {
        assert_eq!(Shape::from_index(0), Shape::S);
        assert_eq!(Shape::from_index(6), Shape::T);
        assert_eq!(Shape::from_index(7), Shape::S);
    }

    #[test]
    fn command_strings_parse_back() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::MoveDown,
            Command::Rotate,
            Command::Drop,
            Command::Restart,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }
}
