//! Run settings
//!
//! Defaults come from [`Settings::default`], can be replaced by a JSON file
//! (`--config settings.json`), and individual command line flags override both.
//! Canvas size and redraw period are fixed and not part of the settings.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub vsync: bool,
    /// Bolt RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "lightning".to_string(),
            vsync: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; missing fields keep their defaults and
    /// unknown fields are ignored
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Settings),
    Help,
}

/// Flags given on the command line, applied on top of the base settings
#[derive(Debug, Default)]
struct Overrides {
    config: Option<PathBuf>,
    vsync: Option<bool>,
    seed: Option<u64>,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T> {
    let value = value.ok_or_else(|| Error::InvalidArgument(format!("{} needs a value", flag)))?;
    value
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("{}: cannot parse '{}'", flag, value)))
}

/// Parse command line arguments (without the program name)
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut overrides = Overrides::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match flag {
            "--help" => return Ok(Command::Help),
            "--vsync" => overrides.vsync = Some(true),
            "--no-vsync" => overrides.vsync = Some(false),
            "--config" | "-c" => {
                let path = value
                    .ok_or_else(|| Error::InvalidArgument(format!("{} needs a value", flag)))?;
                overrides.config = Some(PathBuf::from(path));
                i += 1;
            },
            "--seed" => {
                overrides.seed = Some(parse_value(flag, value)?);
                i += 1;
            },
            other => log::warn!("ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    let mut settings = match &overrides.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(v) = overrides.vsync {
        settings.vsync = v;
    }
    if overrides.seed.is_some() {
        settings.seed = overrides.seed;
    }

    Ok(Command::Run(settings))
}

pub fn print_usage() {
    println!("Usage: lightning [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config PATH, -c PATH    Load settings from a JSON file");
    println!("  --seed N                  Seed the bolt generator for a repeatable run");
    println!("  --vsync / --no-vsync      Wait for monitor refresh when presenting");
    println!("  --help                    Show this help message");
    println!();
    println!("Set RUST_LOG=debug for timing diagnostics.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(list: &[&str]) -> Settings {
        match parse_args(&args(list)) {
            Ok(Command::Run(settings)) => settings,
            other => panic!("expected settings, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let settings = run(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.title, "lightning");
        assert!(!settings.vsync);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_flag_overrides() {
        let settings = run(&["--seed", "42", "--vsync"]);
        assert_eq!(settings.seed, Some(42));
        assert!(settings.vsync);

        let settings = run(&["--vsync", "--no-vsync"]);
        assert!(!settings.vsync);
    }

    #[test]
    fn test_help() {
        assert_eq!(
            parse_args(&args(&["--seed", "1", "--help"])).ok(),
            Some(Command::Help)
        );
    }

    #[test]
    fn test_bad_values_rejected() {
        for bad in [
            &["--seed"][..],
            &["--seed", "-1"][..],
            &["--seed", "lots"][..],
            &["--config"][..],
        ] {
            assert!(
                matches!(parse_args(&args(bad)), Err(Error::InvalidArgument(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_unknown_flags_ignored() {
        assert_eq!(run(&["--fullscreen"]), Settings::default());
    }

    #[test]
    fn test_size_and_tick_flags_not_accepted() {
        // Canvas size and cadence are fixed; these fall through as unknown flags
        // and their values are ignored too
        let settings = run(&["-w", "--tick-ms", "--resolution", "--height"]);
        assert_eq!(settings, Settings::default());

        let settings = run(&["--width", "--seed", "3"]);
        assert_eq!(settings.seed, Some(3));
    }

    #[test]
    fn test_json_partial_fields_keep_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "seed": 7 }"#)
            .unwrap_or_else(|e| panic!("parse failed: {}", e));
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.title, "lightning");
        assert!(!settings.vsync);
    }

    #[test]
    fn test_json_size_and_tick_fields_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{ "width": 640, "height": 480, "tick_ms": 5, "vsync": true }"#)
                .unwrap_or_else(|e| panic!("parse failed: {}", e));
        assert_eq!(
            settings,
            Settings {
                vsync: true,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_missing_config_file() {
        let err = parse_args(&args(&["--config", "/nonexistent/lightning.json"]));
        assert!(matches!(err, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_config_file_then_flags() {
        let path = std::env::temp_dir().join(format!(
            "lightning-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "title": "storm", "seed": 9, "vsync": true }"#)
            .unwrap_or_else(|e| panic!("write failed: {}", e));

        let path_str = path.to_string_lossy().to_string();
        let settings = run(&["--config", path_str.as_str(), "--seed", "10"]);
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.title, "storm");
        assert_eq!(settings.seed, Some(10));
        assert!(settings.vsync);
    }

    #[test]
    fn test_malformed_config_file() {
        let path = std::env::temp_dir().join(format!(
            "lightning-bad-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ title: ").unwrap_or_else(|e| panic!("write failed: {}", e));

        let path_str = path.to_string_lossy().to_string();
        let err = parse_args(&args(&["-c", path_str.as_str()]));
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, Err(Error::ConfigParse { .. })));
    }
}
