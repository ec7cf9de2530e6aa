use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use wordfreq_core::{
    rank, tokenize, Fnv1aBuildHasher, FrequencyTable, HashAlgorithm, Report, ReportMode,
};
use wordfreq_logging::{wordfreq_debug, wordfreq_info};

use crate::load::{load, LoadError};
use crate::timing::timed;

pub const DEFAULT_INPUT: &str = "shakespeare.txt";
pub const DEFAULT_TOP: usize = 100;

/// Everything fixed at invocation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub top: usize,
    pub mode: ReportMode,
    pub hasher: HashAlgorithm,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            top: DEFAULT_TOP,
            mode: ReportMode::default(),
            hasher: HashAlgorithm::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to write report")]
    Output(#[source] io::Error),
}

/// Load, tokenize and count the configured input, producing the configured report.
pub fn build_report(config: &RunConfig) -> Result<Report, LoadError> {
    let text = load(&config.input)?;
    let report = match config.hasher {
        HashAlgorithm::Std => report_with::<RandomState>(&text, config),
        HashAlgorithm::Fnv1a => report_with::<Fnv1aBuildHasher>(&text, config),
    };
    Ok(report)
}

/// Run the whole pipeline and write the report to `out`.
///
/// Nothing is written unless the input was loaded successfully.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<Report, RunError> {
    let report = build_report(config)?;
    write!(out, "{report}").map_err(RunError::Output)?;
    out.flush().map_err(RunError::Output)?;
    Ok(report)
}

fn report_with<S: BuildHasher + Default>(text: &str, config: &RunConfig) -> Report {
    // Tokenize up front so the timed section covers counting only.
    let tokens: Vec<&str> = tokenize(text).collect();
    wordfreq_debug!("Tokenized {} tokens", tokens.len());

    let (table, elapsed) = timed(|| FrequencyTable::<S>::from_tokens(tokens.iter().copied()));
    wordfreq_info!(
        "Counted {} tokens, {} distinct, in {:?} using {} hasher",
        table.total(),
        table.len(),
        elapsed,
        config.hasher
    );
    wordfreq_debug!(
        "Table capacity {}, load {:.1}%",
        table.capacity(),
        table.load_percent()
    );

    match config.mode {
        ReportMode::Ranked => Report::Ranked {
            unique: table.len(),
            top: config.top,
            entries: rank(&table, config.top),
        },
        ReportMode::Timing => Report::Timing {
            unique: table.len(),
            elapsed,
        },
    }
}
