//! Command-line arguments for the `tui-snake` binary.
//!
//! Flags are layered over the environment: `GameConfig::from_env` first, then
//! `SNAKE_AUDIO` / `SNAKE_SOUNDS` / `SNAKE_LOG_PATH`, then the flags below.
//!
//! ```text
//! tui-snake [--width N] [--height N] [--seed N] [--audio off|bell|tone]
//!           [--sounds DIR] [--log FILE]
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::audio::AudioMode;
use crate::core::GameConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub game: GameConfig,
    pub audio: AudioMode,
    pub sounds_dir: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl CliConfig {
    /// Defaults plus environment overrides, before any flags.
    pub fn from_env() -> Self {
        let audio = env::var("SNAKE_AUDIO")
            .ok()
            .and_then(|v| AudioMode::from_str(&v).ok())
            .unwrap_or_default();

        Self {
            game: GameConfig::from_env(),
            audio,
            sounds_dir: env::var_os("SNAKE_SOUNDS").map(PathBuf::from),
            log_path: env::var_os("SNAKE_LOG_PATH").map(PathBuf::from),
        }
    }
}

/// Apply `args` (without the program name) on top of `base`.
pub fn parse_args(args: &[String], base: CliConfig) -> Result<CliConfig> {
    let mut cfg = base;
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--width" => cfg.game.width = parse_value(args, &mut i, flag)?,
            "--height" => cfg.game.height = parse_value(args, &mut i, flag)?,
            "--seed" => cfg.game.seed = Some(parse_value(args, &mut i, flag)?),
            "--audio" => {
                let v = value(args, &mut i, flag)?;
                cfg.audio = AudioMode::from_str(v)?;
            }
            "--sounds" => cfg.sounds_dir = Some(PathBuf::from(value(args, &mut i, flag)?)),
            "--log" => cfg.log_path = Some(PathBuf::from(value(args, &mut i, flag)?)),
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(cfg)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    let v = value(args, i, flag)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_args_without_flags_keeps_base() {
        let cfg = parse_args(&[], CliConfig::default()).unwrap();
        assert_eq!(cfg, CliConfig::default());
    }

    #[test]
    fn parse_args_reads_every_flag() {
        let cfg = parse_args(
            &args(&[
                "--width", "30", "--height", "12", "--seed", "7", "--audio", "off", "--sounds",
                "assets", "--log", "snake.log",
            ]),
            CliConfig::default(),
        )
        .unwrap();

        assert_eq!(cfg.game.width, 30);
        assert_eq!(cfg.game.height, 12);
        assert_eq!(cfg.game.seed, Some(7));
        assert_eq!(cfg.audio, AudioMode::Off);
        assert_eq!(cfg.sounds_dir, Some(PathBuf::from("assets")));
        assert_eq!(cfg.log_path, Some(PathBuf::from("snake.log")));
    }

    #[test]
    fn flags_override_base_values() {
        let mut base = CliConfig::default();
        base.game.width = 40;
        base.audio = AudioMode::Tone;

        let cfg = parse_args(&args(&["--audio", "bell"]), base).unwrap();
        assert_eq!(cfg.game.width, 40);
        assert_eq!(cfg.audio, AudioMode::Bell);
    }

    #[test]
    fn parse_args_rejects_unknown_flag() {
        let err = parse_args(&args(&["--speed", "3"]), CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unknown argument: --speed"));
    }

    #[test]
    fn parse_args_rejects_missing_value() {
        let err = parse_args(&args(&["--width"]), CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("missing value for --width"));
    }

    #[test]
    fn parse_args_rejects_bad_number() {
        let err = parse_args(&args(&["--seed", "abc"]), CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("invalid --seed value: abc"));
    }

    #[test]
    fn parse_args_rejects_bad_audio_mode() {
        assert!(parse_args(&args(&["--audio", "loud"]), CliConfig::default()).is_err());
    }
}
