//! Logger setup
//!
//! Report lines, warnings and failures all go through `log`. The terminal
//! sink colours a line by its level; the optional file sink gets the same
//! text plain, with a timestamp.

use anyhow::Result;
use chrono::SecondsFormat;
use colored::{ColoredString, Colorize};
use fern::Dispatch;
use log::{Level, LevelFilter};

use crate::constants::LOG_FILE_DEFAULT;

/// How much `ren` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only flagged names and failures (`-q`)
    Quiet,
    /// One line per file plus the summary
    Normal,
    /// Also configuration and collision details (`-v`)
    Verbose,
    /// Everything, including each transformation step (`-vv`)
    Trace,
}

impl LogLevel {
    /// Picks the level from the `--quiet` flag and the number of `-v` flags
    ///
    /// `--quiet` wins over any number of `-v`.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => LogLevel::Quiet,
            (false, 0) => LogLevel::Normal,
            (false, 1) => LogLevel::Verbose,
            (false, _) => LogLevel::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::Warn,
            LogLevel::Normal => LevelFilter::Info,
            LogLevel::Verbose => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn colorize(level: Level, line: &str) -> ColoredString {
    match level {
        Level::Error => line.red(),
        Level::Warn => line.yellow(),
        Level::Info => line.green(),
        Level::Debug | Level::Trace => line.bright_black(),
    }
}

/// Formats a record for the log file
fn file_line(timestamp: &str, level: Level, message: &str) -> String {
    format!("[{timestamp} {level:<5}] {message}")
}

/// Initialise the logger
///
/// Messages always go to stdout and are only coloured when stdout is a
/// terminal. A non-empty `log_file` adds a second, uncoloured sink.
pub fn init_logger(level: LogLevel, log_file: &str) -> Result<()> {
    colored::control::set_override(atty::is(atty::Stream::Stdout));

    let stdout_sink = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}",
                colorize(record.level(), &message.to_string())
            ))
        })
        .chain(std::io::stdout());

    let mut dispatch = Dispatch::new().level(level.level_filter());

    if !log_file.is_empty() {
        let file_sink = Dispatch::new()
            .format(|out, message, record| {
                let timestamp = chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
                out.finish(format_args!(
                    "{}",
                    file_line(&timestamp, record.level(), &message.to_string())
                ))
            })
            .chain(fern::log_file(log_file)?);
        dispatch = dispatch.chain(file_sink);
    }

    dispatch.chain(stdout_sink).apply()?;

    log::debug!("Logging at {level:?}");
    Ok(())
}

/// Initialise the logger for stdout only at the normal level
pub fn init_default_logger() -> Result<()> {
    init_logger(LogLevel::Normal, LOG_FILE_DEFAULT)
}
