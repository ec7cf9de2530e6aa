use std::collections::hash_map::{Iter, RandomState};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Occurrence count per distinct token.
///
/// Every key present has a count of at least one. Iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S = RandomState> {
    counts: HashMap<String, u64, S>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Default> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self {
            counts: HashMap::default(),
        }
    }
}

impl<S: BuildHasher> FrequencyTable<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            counts: HashMap::with_hasher(hasher),
        }
    }

    /// Builds a table from a token sequence, counting each occurrence.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        S: Default,
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        table.extend(tokens);
        table
    }

    /// Increments the count for `token`, inserting it with a count of one if absent.
    ///
    /// Returns the updated count.
    pub fn record(&mut self, token: &str) -> u64 {
        // Only allocate an owned key the first time a token is seen.
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
            return *count;
        }
        self.counts.insert(token.to_owned(), 1);
        1
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of tokens recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of entries the table holds before it must grow.
    pub fn capacity(&self) -> usize {
        self.counts.capacity()
    }

    /// Distinct tokens as a percentage of capacity; zero for an unallocated table.
    pub fn load_percent(&self) -> f64 {
        match self.capacity() {
            0 => 0.0,
            capacity => self.len() as f64 * 100.0 / capacity as f64,
        }
    }

    pub fn iter(&self) -> Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl<S: BuildHasher> PartialEq for FrequencyTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<S: BuildHasher> Eq for FrequencyTable<S> {}

impl<'a, S: BuildHasher> Extend<&'a str> for FrequencyTable<S> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, tokens: I) {
        for token in tokens {
            self.record(token);
        }
    }
}

impl<'a, S: BuildHasher + Default> FromIterator<&'a str> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(tokens: I) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<'t, S> IntoIterator for &'t FrequencyTable<S> {
    type Item = (&'t String, &'t u64);
    type IntoIter = Iter<'t, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Counts `tokens` into a fresh table backed by the standard hasher.
pub fn count<'a, I>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    FrequencyTable::from_tokens(tokens)
}
