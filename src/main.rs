//! Terminal Snake runner (default binary).
//!
//! Wires the crossterm display/input adapters, the selected audio adapter and
//! the wall clock into the core game loop.

use std::env;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_snake::cli::{parse_args, CliConfig};
use tui_snake::core::{GameLoop, GameSession, GameSummary, SystemClock};
use tui_snake::input::TerminalInput;
use tui_snake::term::TerminalDisplay;
use tui_snake::{audio, logging};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cfg = parse_args(&args, CliConfig::from_env())?;
    cfg.game.validate()?;
    logging::init(cfg.log_path.as_deref())?;

    let mut display = TerminalDisplay::default();
    display.enter()?;

    let result = run(&cfg, &mut display);

    // Always try to restore terminal state.
    let _ = display.exit();

    let summary = result?;
    info!(
        score = summary.score,
        level = summary.level,
        ticks = summary.ticks,
        reason = summary.reason.map(|r| r.as_str()),
        "exit"
    );
    println!("Game Over! Final Score: {}", summary.score);
    Ok(())
}

fn run(cfg: &CliConfig, display: &mut TerminalDisplay) -> Result<GameSummary> {
    let mut session = GameSession::new(&cfg.game);
    let audio = audio::build_audio(cfg.audio, cfg.sounds_dir.clone());

    let mut game = GameLoop::new(&mut *display, TerminalInput::new(), audio, SystemClock::new());
    let summary = game.run(&mut session)?;

    wait_for_key()?;
    Ok(summary)
}

/// Block until a key press so the final frame stays readable.
fn wait_for_key() -> Result<()> {
    // Drop keys still queued from the last ticks.
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
