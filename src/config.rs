//! Command line and environment configuration.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "FOLIOTUI_STATE_DIR";

/// Log levels accepted by `--log-level`.
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where preferences and logs live.
    pub state_dir: PathBuf,
    /// flexi_logger level spec.
    pub log_level: String,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
foliotui - a personal portfolio in your terminal

Usage: foliotui [OPTIONS]

Options:
  -s, --state-dir <DIR>    Where to keep preferences and logs
                           (default: $FOLIOTUI_STATE_DIR or <config dir>/foliotui)
  -l, --log-level <LEVEL>  off, error, warn, info, debug or trace (default: info)
  -h, --help               Show this help message";

/// Default state directory: `$FOLIOTUI_STATE_DIR`, else `<config dir>/foliotui`.
pub fn default_state_dir() -> PathBuf {
    if let Some(dir) = env::var_os(STATE_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(env::temp_dir)
        .join("foliotui")
}

/// Parses command line arguments (without the program name).
///
/// Supports:
/// - `-s <DIR>` or `--state-dir <DIR>`
/// - `-l <LEVEL>` or `--log-level <LEVEL>`
/// - `-h` or `--help`
pub fn parse_args<I>(args: I, default_state_dir: PathBuf) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config {
        state_dir: default_state_dir,
        log_level: "info".to_string(),
    };

    let mut args_iter = args.into_iter();
    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-s" | "--state-dir" => match args_iter.next() {
                Some(dir) => config.state_dir = PathBuf::from(dir),
                None => bail!("--state-dir requires a DIR argument"),
            },
            "-l" | "--log-level" => match args_iter.next() {
                Some(level) if LOG_LEVELS.contains(&level.as_str()) => config.log_level = level,
                Some(level) => bail!("Unknown log level '{level}'"),
                None => bail!("--log-level requires a LEVEL argument"),
            },
            "-h" | "--help" => return Ok(Command::Help),
            other => bail!("Unknown argument '{other}'"),
        }
    }

    Ok(Command::Run(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(
            args.iter().map(|a| a.to_string()),
            PathBuf::from("/tmp/default"),
        )
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            parse(&[]).unwrap(),
            Command::Run(Config {
                state_dir: PathBuf::from("/tmp/default"),
                log_level: "info".to_string(),
            })
        );
    }

    #[test]
    fn test_state_dir_and_level() {
        let Command::Run(config) = parse(&["-s", "/data/folio", "--log-level", "debug"]).unwrap()
        else {
            panic!("expected run");
        };
        assert_eq!(config.state_dir, PathBuf::from("/data/folio"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["--state-dir", "x", "-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_missing_value_is_error() {
        assert!(parse(&["--state-dir"]).is_err());
        assert!(parse(&["-l"]).is_err());
    }

    #[test]
    fn test_unknown_argument_is_error() {
        let err = parse(&["--project", "x"]).unwrap_err();
        assert!(err.to_string().contains("--project"));
    }

    #[test]
    fn test_bad_level_is_error() {
        assert!(parse(&["-l", "loud"]).is_err());
    }
}
