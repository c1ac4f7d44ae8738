//! TUI Snake (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_snake::{types,core,input,term,audio}` and hosts the
//! binary's CLI and logging setup.

pub mod cli;
pub mod logging;

pub use tui_snake_audio as audio;
pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
