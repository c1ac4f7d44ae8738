//! Ports - the interfaces the game loop consumes
//!
//! The core never touches the terminal, the keyboard or a sound device. The
//! binary plugs in adapters for these traits; tests plug in scripted fakes.
//!
//! - [`Display`]: draw a [`Frame`] and the final result
//! - [`Input`]: non-blocking poll for at most one [`Command`]
//! - [`Audio`]: fire-and-forget cue playback, failures are swallowed
//! - [`Clock`]: monotonic time and the blocking inter-tick wait

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::field::Field;
use crate::occupancy::OccupancyMap;
use crate::session::{GameSummary, Status};
use crate::types::{Command, Cue};

/// Everything a display needs to draw one tick
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub field: Field,
    pub cells: &'a OccupancyMap,
    pub status: Status,
}

pub trait Display {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Called once when the game ends, with the last frame
    fn game_over(&mut self, frame: &Frame<'_>, summary: &GameSummary) -> Result<()>;
}

pub trait Input {
    /// Return the next pending command without blocking
    fn poll_command(&mut self) -> Result<Option<Command>>;
}

pub trait Audio {
    /// Start playing `cue` and return immediately
    fn play_cue(&mut self, cue: Cue);
}

pub trait Clock {
    /// Monotonic time since an arbitrary origin
    fn now(&self) -> Duration;

    fn sleep(&mut self, duration: Duration);
}

impl<T: Display + ?Sized> Display for Box<T> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        (**self).render(frame)
    }

    fn game_over(&mut self, frame: &Frame<'_>, summary: &GameSummary) -> Result<()> {
        (**self).game_over(frame, summary)
    }
}

impl<T: Input + ?Sized> Input for Box<T> {
    fn poll_command(&mut self) -> Result<Option<Command>> {
        (**self).poll_command()
    }
}

impl<T: Audio + ?Sized> Audio for Box<T> {
    fn play_cue(&mut self, cue: Cue) {
        (**self).play_cue(cue)
    }
}

impl<T: Display + ?Sized> Display for &mut T {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        (**self).render(frame)
    }

    fn game_over(&mut self, frame: &Frame<'_>, summary: &GameSummary) -> Result<()> {
        (**self).game_over(frame, summary)
    }
}

impl<T: Input + ?Sized> Input for &mut T {
    fn poll_command(&mut self) -> Result<Option<Command>> {
        (**self).poll_command()
    }
}

impl<T: Audio + ?Sized> Audio for &mut T {
    fn play_cue(&mut self, cue: Cue) {
        (**self).play_cue(cue)
    }
}

/// Wall clock backed by `Instant` and `thread::sleep`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
