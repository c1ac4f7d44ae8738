//! Game loop - the tick scheduler and state machine driver
//!
//! One tick is a full synchronous pass:
//!
//! 1. Render the current state
//! 2. Poll input once and apply at most one command
//! 3. Step the session (move, collide, pickups, progression)
//! 4. Fire the cues the step raised
//! 5. Wait for whatever remains of the tick delay
//!
//! The wait is measured against the monotonic clock taken at the start of the
//! tick, so render and input time count towards the delay instead of adding to
//! it. When the session reaches `GameOver` the loop shows the final frame,
//! plays the "gameover" cue exactly once and returns the summary. Running an
//! already finished session only returns its summary.

use anyhow::Result;
use tracing::debug;

use crate::occupancy::OccupancyMap;
use crate::ports::{Audio, Clock, Display, Frame, Input};
use crate::session::{GameSession, GameSummary};
use crate::types::Cue;

pub struct GameLoop<D, I, A, C> {
    display: D,
    input: I,
    audio: A,
    clock: C,
    max_ticks: Option<u64>,
}

impl<D, I, A, C> GameLoop<D, I, A, C>
where
    D: Display,
    I: Input,
    A: Audio,
    C: Clock,
{
    pub fn new(display: D, input: I, audio: A, clock: C) -> Self {
        Self {
            display,
            input,
            audio,
            clock,
            max_ticks: None,
        }
    }

    /// Stop after `max_ticks` ticks even if the game is still running
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Drive `session` until it ends (or the tick limit is reached)
    pub fn run(&mut self, session: &mut GameSession) -> Result<GameSummary> {
        if !session.is_running() {
            return Ok(session.summary());
        }

        let mut cells = OccupancyMap::new(session.field());
        let mut ticks = 0u64;

        while session.is_running() {
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                debug!(ticks, "tick limit reached");
                return Ok(session.summary());
            }
            ticks += 1;

            let tick_start = self.clock.now();

            cells.rebuild(session);
            self.display.render(&Frame {
                field: session.field(),
                cells: &cells,
                status: session.status_line(),
            })?;

            if let Some(command) = self.input.poll_command()? {
                debug!(command = command.as_str(), "input");
                session.apply_command(command);
            }

            let report = session.step();
            for &cue in &report.cues {
                self.audio.play_cue(cue);
            }

            if !session.is_running() {
                break;
            }

            let spent = self.clock.now().saturating_sub(tick_start);
            self.clock.sleep(session.tick_delay().saturating_sub(spent));
        }

        let summary = session.summary();
        cells.rebuild(session);
        self.display.game_over(
            &Frame {
                field: session.field(),
                cells: &cells,
                status: session.status_line(),
            },
            &summary,
        )?;
        self.audio.play_cue(Cue::GameOver);

        Ok(summary)
    }
}
