//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders the core's per-cell tags into a simple framebuffer that is
//! diffed and flushed to the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Tag-to-glyph mapping lives here, never in the game rules
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
