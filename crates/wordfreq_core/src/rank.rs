use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::hash::BuildHasher;

use crate::FrequencyTable;

/// One token and its count in a ranked listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub token: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(token: impl Into<String>, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

/// Renders as a tuple, e.g. `('the', 123)`.
impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        write_quoted(f, &self.token)?;
        write!(f, ", {})", self.count)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, token: &str) -> fmt::Result {
    let quote = if token.contains('\'') && !token.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for ch in token.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\t' => f.write_str("\\t")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if c.is_control() => write!(f, "\\x{:02x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// Highest count first; equal counts ordered by token bytes ascending.
fn by_rank(a: &(&str, u64), b: &(&str, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Returns the `k` most frequent tokens, or all of them if fewer than `k` exist.
///
/// Ties on count are broken lexicographically by token so the result is
/// deterministic regardless of table iteration order.
pub fn rank<S: BuildHasher>(table: &FrequencyTable<S>, k: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<(&str, u64)> = table
        .iter()
        .map(|(token, count)| (token.as_str(), *count))
        .collect();

    if k < entries.len() {
        entries.select_nth_unstable_by(k, by_rank);
        entries.truncate(k);
    }
    entries.sort_unstable_by(by_rank);

    entries
        .into_iter()
        .map(|(token, count)| RankedEntry::new(token, count))
        .collect()
}
