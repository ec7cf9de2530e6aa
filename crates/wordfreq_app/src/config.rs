//! Invocation settings: command-line flags layered over an optional RON file.
//!
//! Precedence is explicit flag, then config file, then built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use wordfreq_core::{HashAlgorithm, ReportMode};
use wordfreq_engine::{RunConfig, DEFAULT_INPUT, DEFAULT_TOP};
use wordfreq_logging::{wordfreq_info, wordfreq_trace};

/// Contains information parsed from the command-line invocation of wordfreq.
#[derive(Parser, Debug)]
#[command(
    name = "wordfreq",
    version,
    about = "Count whitespace-delimited words in a text file and list the most frequent"
)]
pub struct CmdOptions {
    /// Text file to count [default: shakespeare.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// How many of the most frequent words to list [default: 100]
    #[arg(short = 'k', long)]
    pub top: Option<usize>,
    /// Report how long counting took instead of listing words
    #[arg(short, long, overrides_with = "no_time")]
    pub time: bool,
    /// List words even if the config file enables timing
    #[arg(long, overrides_with = "time")]
    pub no_time: bool,
    /// Hash function backing the frequency table [default: std]
    #[arg(long, value_enum)]
    pub hasher: Option<HasherChoice>,
    /// RON file supplying any of `input`, `top`, `time`, `hasher`
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Also write log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HasherChoice {
    Std,
    #[value(name = "fnv1a")]
    Fnv1a,
}

impl From<HasherChoice> for HashAlgorithm {
    fn from(choice: HasherChoice) -> Self {
        match choice {
            HasherChoice::Std => HashAlgorithm::Std,
            HasherChoice::Fnv1a => HashAlgorithm::Fnv1a,
        }
    }
}

/// Settings read from a config file; missing fields take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: PathBuf,
    pub top: usize,
    pub time: bool,
    pub hasher: HashAlgorithm,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            top: DEFAULT_TOP,
            time: false,
            hasher: HashAlgorithm::default(),
        }
    }
}

pub fn load_file_config(path: &Path) -> anyhow::Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = ron::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    wordfreq_info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Resolve the settings for this run, reading the config file if one was given.
pub fn resolve(options: &CmdOptions) -> anyhow::Result<RunConfig> {
    let file = match &options.config {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };
    Ok(merge(options, file))
}

fn merge(options: &CmdOptions, file: FileConfig) -> RunConfig {
    wordfreq_trace!("Merging {:?} over {:?}", options, file);
    let timing = if options.time {
        true
    } else if options.no_time {
        false
    } else {
        file.time
    };
    let mode = if timing {
        ReportMode::Timing
    } else {
        ReportMode::Ranked
    };
    RunConfig {
        input: options.input.clone().unwrap_or(file.input),
        top: options.top.unwrap_or(file.top),
        mode,
        hasher: options.hasher.map(HashAlgorithm::from).unwrap_or(file.hasher),
    }
}
