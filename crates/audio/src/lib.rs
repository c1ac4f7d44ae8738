//! Audio cue adapters.
//!
//! Every adapter is fire-and-forget: `play_cue` returns immediately and any
//! playback failure is logged and dropped. A missing sound device never stops
//! the game.
//!
//! - [`SilentAudio`]: discards cues
//! - [`BellAudio`]: rings the terminal bell
//! - `ToneAudio` (feature `rodio`): plays `<dir>/<cue>.wav` or a generated tone

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::{debug, warn};

pub use tui_snake_core as core;
pub use tui_snake_types as types;

use crate::core::Audio;
use crate::types::Cue;

#[cfg(feature = "rodio")]
mod tone;

#[cfg(feature = "rodio")]
pub use tone::ToneAudio;

/// Which audio adapter to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioMode {
    Off,
    #[default]
    Bell,
    Tone,
}

impl AudioMode {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "bell" => Ok(Self::Bell),
            "tone" => Ok(Self::Tone),
            other => Err(anyhow!("invalid audio mode: {other} (expected off|bell|tone)")),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Bell => "bell",
            Self::Tone => "tone",
        }
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl Audio for SilentAudio {
    fn play_cue(&mut self, cue: Cue) {
        debug!(cue = cue.as_str(), "cue (silent)");
    }
}

/// Writes the BEL control character for every cue.
pub struct BellAudio<W: Write = io::Stdout> {
    out: W,
}

impl BellAudio<io::Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for BellAudio<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> BellAudio<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Audio for BellAudio<W> {
    fn play_cue(&mut self, cue: Cue) {
        let res = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(e) = res {
            debug!(cue = cue.as_str(), error = %e, "bell failed");
        }
    }
}

/// Build the adapter for `mode`.
///
/// `sounds_dir` is only used by the tone adapter. If the tone adapter can't
/// open an output device this falls back to the bell.
pub fn build_audio(mode: AudioMode, sounds_dir: Option<PathBuf>) -> Box<dyn Audio> {
    match mode {
        AudioMode::Off => Box::new(SilentAudio),
        AudioMode::Bell => Box::new(BellAudio::new()),
        AudioMode::Tone => build_tone(sounds_dir),
    }
}

#[cfg(feature = "rodio")]
fn build_tone(sounds_dir: Option<PathBuf>) -> Box<dyn Audio> {
    match ToneAudio::new(sounds_dir) {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            warn!(error = %e, "no audio output, falling back to bell");
            Box::new(BellAudio::new())
        }
    }
}

#[cfg(not(feature = "rodio"))]
fn build_tone(sounds_dir: Option<PathBuf>) -> Box<dyn Audio> {
    warn!(
        sounds = ?sounds_dir,
        "built without the `rodio` feature, falling back to bell"
    );
    Box::new(BellAudio::new())
}
