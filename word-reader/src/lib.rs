//! Readers for words stored as `[index, exponent]` pairs.
//!
//! Two layouts are supported: JSON lines (see [`jsonl`]) and CSV with one
//! letter per row (see [`csv_rows`]).

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use thompson_engine::{GeneratorTerm, Word, WordError};

pub mod csv_rows;
pub mod jsonl;

pub use csv_rows::{parse_row, read_csv, TermRow};
pub use jsonl::{parse_line, read_json_lines};

/// Errors raised while decoding words, tagged with the offending line or record.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("record {record}: {source}")]
    Csv { record: usize, source: csv::Error },

    #[error("line {line}: {source}")]
    Json { line: usize, source: serde_json::Error },

    #[error("{location} {number}: {source}")]
    Term {
        location: &'static str,
        number: usize,
        source: WordError,
    },

    #[error("record {record}: index and exponent must both be set or both be empty")]
    IncompleteTerm { record: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A decoded word together with the identifier it was read under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedWord {
    pub id: String,
    pub word: Word,
}

impl NamedWord {
    pub fn new(id: impl Into<String>, word: Word) -> Self {
        NamedWord {
            id: id.into(),
            word,
        }
    }
}

/// Groups letters into words by identifier, keeping identifiers in the order
/// they first appear.
#[derive(Debug, Clone, Default)]
pub struct WordCollector {
    positions: HashMap<String, usize>,
    words: Vec<NamedWord>,
}

impl WordCollector {
    pub fn new() -> Self {
        WordCollector::default()
    }

    /// Returns the word registered under `id`, creating an empty one if needed.
    pub fn word_mut(&mut self, id: &str) -> &mut Word {
        let id = id.trim();
        let position = match self.positions.get(id) {
            Some(&position) => position,
            None => {
                let position = self.words.len();
                self.positions.insert(id.to_string(), position);
                self.words.push(NamedWord::new(id, Word::new()));
                position
            }
        };
        &mut self.words[position].word
    }

    /// Appends a letter to the word named `id`.
    pub fn push(&mut self, id: &str, term: GeneratorTerm) {
        self.word_mut(id).push(term);
    }

    /// Number of distinct words seen so far.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn into_words(self) -> Vec<NamedWord> {
        self.words
    }
}
