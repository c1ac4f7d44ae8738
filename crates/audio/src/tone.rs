//! rodio-backed cue playback.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rodio::{buffer::SamplesBuffer, Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use crate::core::Audio;
use crate::types::Cue;

const SAMPLE_RATE: u32 = 44_100;

pub struct ToneAudio {
    // The stream must outlive every sink created from `handle`.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sounds_dir: Option<PathBuf>,
}

impl ToneAudio {
    pub fn new(sounds_dir: Option<PathBuf>) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default().context("open audio output")?;
        Ok(Self {
            _stream: stream,
            handle,
            sounds_dir,
        })
    }

    fn try_play(&self, cue: Cue) -> Result<()> {
        let sink = Sink::try_new(&self.handle).context("create sink")?;
        match self.sound_file(cue) {
            Some(path) => {
                let file = File::open(&path).with_context(|| format!("open {}", path.display()))?;
                let source = Decoder::new(BufReader::new(file))
                    .with_context(|| format!("decode {}", path.display()))?;
                sink.append(source);
            }
            None => {
                let (freq, secs) = tone_for(cue);
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, sine(freq, secs)));
            }
        }
        sink.detach();
        Ok(())
    }

    fn sound_file(&self, cue: Cue) -> Option<PathBuf> {
        let dir: &Path = self.sounds_dir.as_deref()?;
        let path = dir.join(format!("{}.wav", cue.as_str()));
        path.is_file().then_some(path)
    }
}

impl Audio for ToneAudio {
    fn play_cue(&mut self, cue: Cue) {
        match self.try_play(cue) {
            Ok(()) => debug!(cue = cue.as_str(), "cue"),
            Err(e) => warn!(cue = cue.as_str(), error = %e, "cue playback failed"),
        }
    }
}

fn tone_for(cue: Cue) -> (f32, f32) {
    match cue {
        Cue::Pickup => (660.0, 0.08),
        Cue::PowerUp => (880.0, 0.15),
        Cue::GameOver => (220.0, 0.5),
    }
}

fn sine(freq: f32, secs: f32) -> Vec<f32> {
    let n = (SAMPLE_RATE as f32 * secs) as usize;
    (0..n)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let fade = 1.0 - i as f32 / n as f32;
            (t * freq * std::f32::consts::TAU).sin() * 0.15 * fade
        })
        .collect()
}
