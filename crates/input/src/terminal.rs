//! Non-blocking keyboard adapter for the core input port.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::Input;
use crate::map::handle_key_event;
use crate::types::Command;

/// Reads pending crossterm key events without ever waiting.
///
/// Each poll consumes events until the first one that maps to a command.
/// Anything still queued is left for the next tick.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl Input for TerminalInput {
    fn poll_command(&mut self) -> Result<Option<Command>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Ignore terminal auto-repeat and release events.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = handle_key_event(key) {
                    return Ok(Some(command));
                }
            }
        }
        Ok(None)
    }
}
