//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the tick loop.
//! It has **zero dependencies** on the terminal, keyboard or sound device, making it:
//!
//! - **Deterministic**: Same seed produces identical fruit, power-up and obstacle layouts
//! - **Testable**: Scripted port fakes drive whole games without a terminal
//! - **Portable**: Any frontend that implements the ports can host the game
//!
//! # Module Structure
//!
//! - [`field`]: playfield bounds, border ring and interior
//! - [`snake`]: body segments, heading, movement, growth and self-collision
//! - [`rng`]: seeded LCG used for every placement
//! - [`spawner`]: pickup and obstacle placement
//! - [`progression`]: score thresholds, levels and tick speed
//! - [`session`]: the game state machine (`Running -> GameOver`)
//! - [`occupancy`]: per-tick cell tags handed to the display
//! - [`ports`]: Display / Input / Audio / Clock interfaces
//! - [`game_loop`]: the tick scheduler
//! - [`config`]: game configuration and environment overrides
//!
//! # Game Rules
//!
//! - The snake starts in the centre, idle until the first direction command
//! - Direct reversals (left <-> right, up <-> down) are ignored
//! - Touching the border ring, an obstacle or its own body ends the game
//! - Fruit is worth 10 points and grows the snake; a power-up is worth 25
//! - Every 30 points is a level: faster ticks and `level * 3` fresh obstacles
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameSession};
//! use tui_snake_types::{Command, Point};
//!
//! let mut game = GameSession::new(&GameConfig::default().with_seed(12345));
//! game.set_obstacles(Vec::new());
//! game.set_fruit(Point::new(1, 1));
//!
//! game.apply_command(Command::MoveRight);
//! for _ in 0..5 {
//!     game.step();
//! }
//!
//! assert_eq!(game.snake().head(), Point::new(17, 10));
//! assert!(!game.game_over());
//! ```

pub mod config;
pub mod field;
pub mod game_loop;
pub mod occupancy;
pub mod ports;
pub mod progression;
pub mod rng;
pub mod session;
pub mod snake;
pub mod spawner;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use field::Field;
pub use game_loop::GameLoop;
pub use occupancy::OccupancyMap;
pub use ports::{Audio, Clock, Display, Frame, Input, SystemClock};
pub use progression::{ManualLevelUp, Progression};
pub use rng::SimpleRng;
pub use session::{GameSession, GameStatus, GameSummary, Status, TickReport};
pub use snake::Snake;
pub use spawner::Spawner;
