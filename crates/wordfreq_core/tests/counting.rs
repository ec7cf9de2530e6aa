use std::sync::Once;

use pretty_assertions::assert_eq;
use wordfreq_core::{count, tokenize, Fnv1aBuildHasher, FrequencyTable};

const SAMPLES: &[&str] = &[
    "",
    "   \n\t  ",
    "the cat sat on the mat the cat ran",
    "One two two three three three",
    "  leading and trailing  \r\n whitespace\tsplits\u{00a0}too ",
    "Punctuation, counts; punctuation counts! Punctuation,",
];

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wordfreq_logging::initialize_for_tests);
}

#[test]
fn tokenize_drops_empty_fragments() {
    let tokens: Vec<&str> = tokenize("  a\t\tb\n\nc  ").collect();
    assert_eq!(tokens, vec!["a", "b", "c"]);
}

#[test]
fn tokenize_keeps_case_and_punctuation() {
    let tokens: Vec<&str> = tokenize("The the, THE").collect();
    assert_eq!(tokens, vec!["The", "the,", "THE"]);
}

#[test]
fn tokenize_splits_on_information_separators() {
    let tokens: Vec<&str> = tokenize("a\u{1f}b\u{1c}c\u{1d}\u{1e}d").collect();
    assert_eq!(tokens, vec!["a", "b", "c", "d"]);
}

#[test]
fn record_inserts_then_increments() {
    let mut table = FrequencyTable::new();
    assert_eq!(table.record("word"), 1);
    assert_eq!(table.record("word"), 2);
    assert_eq!(table.record("other"), 1);
    assert_eq!(table.get("word"), Some(2));
    assert_eq!(table.get("missing"), None);
}

#[test]
fn total_matches_token_count() {
    init_logging();
    for text in SAMPLES {
        let table = count(tokenize(text));
        assert_eq!(table.total(), tokenize(text).count() as u64, "input {text:?}");
    }
}

#[test]
fn every_count_is_positive() {
    for text in SAMPLES {
        let table = count(tokenize(text));
        assert!(table.iter().all(|(_, &n)| n >= 1), "input {text:?}");
    }
}

#[test]
fn counting_twice_yields_identical_tables() {
    for text in SAMPLES {
        let tokens: Vec<&str> = tokenize(text).collect();
        let first = count(tokens.iter().copied());
        let second = count(tokens.iter().copied());
        assert_eq!(first, second, "input {text:?}");
    }
}

#[test]
fn fnv1a_table_counts_like_std_table() {
    for text in SAMPLES {
        let std_table = count(tokenize(text));
        let fnv_table = FrequencyTable::<Fnv1aBuildHasher>::from_tokens(tokenize(text));
        assert_eq!(std_table.len(), fnv_table.len());
        for (token, n) in &std_table {
            assert_eq!(fnv_table.get(token), Some(*n), "token {token:?}");
        }
    }
}

#[test]
fn sample_sentence_counts() {
    let table = count(tokenize("the cat sat on the mat the cat ran"));
    assert_eq!(table.len(), 6);
    assert_eq!(table.get("the"), Some(3));
    assert_eq!(table.get("cat"), Some(2));
    assert_eq!(table.get("ran"), Some(1));
}

#[test]
fn capacity_and_load_track_the_backing_map() {
    let empty = FrequencyTable::new();
    assert_eq!(empty.capacity(), 0);
    assert_eq!(empty.load_percent(), 0.0);

    let table = count(tokenize("the cat sat on the mat the cat ran"));
    assert!(table.capacity() >= table.len());
    let load = table.load_percent();
    assert!(load > 0.0 && load <= 100.0, "load {load}");
    assert_eq!(load, table.len() as f64 * 100.0 / table.capacity() as f64);
}

#[test]
fn empty_input_gives_empty_table() {
    let table = count(tokenize(""));
    assert!(table.is_empty());
    assert_eq!(table.total(), 0);
}
