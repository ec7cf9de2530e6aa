//! Wordfreq engine: file loading and the counting pipeline.
mod decode;
mod load;
mod run;
mod timing;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use load::{load, LoadError};
pub use run::{build_report, run, RunConfig, RunError, DEFAULT_INPUT, DEFAULT_TOP};
pub use timing::timed;
