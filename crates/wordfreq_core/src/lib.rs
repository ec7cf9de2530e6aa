//! Wordfreq core: tokenizing, counting and ranking without any I/O.
mod hash;
mod rank;
mod report;
mod table;
mod token;

pub use hash::{Fnv1aBuildHasher, Fnv1aHasher, HashAlgorithm};
pub use rank::{rank, RankedEntry};
pub use report::{Report, ReportMode};
pub use table::{count, FrequencyTable};
pub use token::{tokenize, Tokens};
