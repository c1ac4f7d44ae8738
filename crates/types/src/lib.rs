//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping, audio).
//!
//! # Playfield
//!
//! The default playfield is 25 columns by 20 rows. The outermost ring of cells
//! (`x == 0`, `x == width - 1`, `y == 0`, `y == height - 1`) is the border and is
//! lethal to the snake's head. Everything inside the ring is the *interior*, the
//! only region where fruit, power-ups and obstacles are placed.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_SPEED_MS` | 150 | Tick delay at level 1 |
//! | `MIN_SPEED_MS` | 50 | Floor for the tick delay |
//! | `SPEED_STEP_MS` | 10 | Delay removed per level-up |
//! | `VERTICAL_PENALTY_MS` | 15 | Extra delay while heading up/down |
//!
//! Terminal glyphs are taller than they are wide, so vertical travel gets a
//! longer delay to look as fast as horizontal travel.
//!
//! # Scoring
//!
//! | Constant | Value |
//! |----------|-------|
//! | `FRUIT_POINTS` | 10 |
//! | `POWER_UP_POINTS` | 25 |
//! | `FIRST_LEVEL_SCORE` | 30 |
//! | `LEVEL_SCORE_STEP` | 30 |
//! | `OBSTACLES_PER_LEVEL` | 3 |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Command, Direction, Point};
//!
//! let head = Point::new(12, 10);
//! assert_eq!(head.step(Direction::Right), Point::new(13, 10));
//!
//! // Parse a command (case-insensitive)
//! let cmd = Command::from_str("moveUp").unwrap();
//! assert_eq!(cmd.direction(), Some(Direction::Up));
//!
//! // Reversals are detected through `opposite`
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! ```

/// Default playfield width in cells (including the border ring)
pub const DEFAULT_WIDTH: u16 = 25;

/// Default playfield height in cells (including the border ring)
pub const DEFAULT_HEIGHT: u16 = 20;

/// Smallest playable dimension: a border ring around a 2x2 interior, enough
/// room for the snake, a fruit and a power-up
pub const MIN_DIMENSION: u16 = 4;

/// Largest dimension the renderer can address
pub const MAX_DIMENSION: u16 = 512;

/// Tick delay at the start of a game
pub const BASE_SPEED_MS: u32 = 150;

/// The tick delay never drops below this
pub const MIN_SPEED_MS: u32 = 50;

/// Delay removed from the tick on every level-up
pub const SPEED_STEP_MS: u32 = 10;

/// Extra delay added while the snake travels vertically
pub const VERTICAL_PENALTY_MS: u32 = 15;

/// Points for eating a fruit
pub const FRUIT_POINTS: u32 = 10;

/// Points for collecting a power-up
pub const POWER_UP_POINTS: u32 = 25;

/// Score needed to leave level 1
pub const FIRST_LEVEL_SCORE: u32 = 30;

/// Threshold increment after each automatic level-up
pub const LEVEL_SCORE_STEP: u32 = 30;

/// Obstacles generated per level (`level * OBSTACLES_PER_LEVEL`)
pub const OBSTACLES_PER_LEVEL: u32 = 3;

/// Random draws the spawner makes before falling back to a full scan
pub const SPAWN_ATTEMPTS: u32 = 256;


/// A cell coordinate on the playfield
///
/// `x` grows to the right and `y` grows downwards, matching terminal rows.
/// Coordinates are signed so that a step off the left/top edge is still
/// representable (and then rejected as lethal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`
    ///
    /// `Direction::None` returns the point unchanged.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Heading of the snake
///
/// - **None**: Idle heading at game start; the snake does not move
/// - **Left/Right/Up/Down**: One cell per tick in that direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit offset `(dx, dy)` for one step
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::None => (0, 0),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// The direct reverse of this heading (`None` has no reverse)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::None.opposite(), Direction::None);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Discrete player commands delivered by the input port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Turn the snake left
    MoveLeft,
    /// Turn the snake right
    MoveRight,
    /// Turn the snake up
    MoveUp,
    /// Turn the snake down
    MoveDown,
    /// End the game immediately
    Quit,
    /// Skip to the next level without scoring
    LevelUp,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("LEVELUP"), Some(Command::LevelUp));
    /// assert_eq!(Command::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "moveup" => Some(Command::MoveUp),
            "movedown" => Some(Command::MoveDown),
            "quit" => Some(Command::Quit),
            "levelup" => Some(Command::LevelUp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveUp => "moveUp",
            Command::MoveDown => "moveDown",
            Command::Quit => "quit",
            Command::LevelUp => "levelUp",
        }
    }

    /// Heading requested by a movement command, `None` for the others
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::Quit | Command::LevelUp => None,
        }
    }
}

/// Semantic content of one playfield cell, as handed to the display port
///
/// Glyphs and colors are a presentation concern and are chosen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellTag {
    #[default]
    Empty,
    Border,
    Head,
    Body,
    Fruit,
    PowerUp,
    Obstacle,
}

/// Named audio cues raised by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Pickup,
    PowerUp,
    GameOver,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Pickup => "pickup",
            Cue::PowerUp => "powerup",
            Cue::GameOver => "gameover",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// Head entered the border ring
    Border,
    /// Head hit an obstacle
    Obstacle,
    /// Head ran into the snake's own body
    SelfCollision,
    /// Player asked to quit
    Quit,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Border => "border",
            EndReason::Obstacle => "obstacle",
            EndReason::SelfCollision => "self",
            EndReason::Quit => "quit",
        }
    }
}
