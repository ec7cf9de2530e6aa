//! Logger initialization for the wordfreq binary.
//!
//! Stdout carries the report, so terminal logging always goes to stderr.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use wordfreq_logging::wordfreq_warn;

/// Destination for log output.
pub enum LogDestination {
    /// Write to stderr only.
    Terminal,
    /// Write to stderr and to the given file.
    Both(PathBuf),
}

/// Initialize the logger with the specified destination and level.
///
/// A log file that cannot be created is skipped with a warning on stderr.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    let mut file_failure = None;
    if let LogDestination::Both(path) = destination {
        match File::create(&path) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => file_failure = Some((path, err)),
        }
    }

    let _ = CombinedLogger::init(loggers);

    if let Some((path, err)) = file_failure {
        wordfreq_warn!("Could not create log file at {:?}: {}", path, err);
    }
}

fn build_config() -> Config {
    ConfigBuilder::new().set_time_format_rfc3339().build()
}
