use std::fmt;
use std::time::Duration;

use crate::RankedEntry;

/// Which of the two mutually exclusive reports a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    #[default]
    Ranked,
    Timing,
}

/// Final output of a run, rendered line by line through `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Ranked {
        unique: usize,
        top: usize,
        entries: Vec<RankedEntry>,
    },
    Timing {
        unique: usize,
        elapsed: Duration,
    },
}

impl Report {
    /// Number of distinct tokens the report was built from.
    pub fn unique(&self) -> usize {
        match self {
            Report::Ranked { unique, .. } | Report::Timing { unique, .. } => *unique,
        }
    }

    pub fn mode(&self) -> ReportMode {
        match self {
            Report::Ranked { .. } => ReportMode::Ranked,
            Report::Timing { .. } => ReportMode::Timing,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} unique words", self.unique())?;
        match self {
            Report::Ranked { top, entries, .. } => {
                writeln!(f, "Top {top}:")?;
                for entry in entries {
                    writeln!(f, "{entry}")?;
                }
            }
            Report::Timing { elapsed, .. } => {
                writeln!(f, "Elapsed: {}s", elapsed.as_secs_f64())?;
            }
        }
        Ok(())
    }
}
