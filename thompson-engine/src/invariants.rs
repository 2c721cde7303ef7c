use crate::types::{Exponent, GeneratorTerm, Word};
use serde::Serialize;

/// Returns true if no positive letter follows a negative one.
pub fn is_seminormal(terms: &[GeneratorTerm]) -> bool {
    let first_negative = terms
        .iter()
        .position(GeneratorTerm::is_negative)
        .unwrap_or(terms.len());
    terms[first_negative..].iter().all(GeneratorTerm::is_negative)
}

/// Trait for incremental updates to word statistics.
/// This allows streaming updates as letters are read.
pub trait IncrementalUpdate {
    /// Updates the state with a new letter.
    fn update(&mut self, term: &GeneratorTerm);
}

/// Image of a word under the abelianization F → Z².
///
/// x_0 maps to (1, 0) and every x_i with i ≥ 1 maps to (0, 1). Since this is
/// a homomorphism, two words for the same element always agree here, which
/// makes it a cheap cross-check for normal forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Abelianization {
    /// Exponent sum of x_0.
    pub x0: i64,
    /// Exponent sum of all x_i with i ≥ 1.
    pub rest: i64,
}

impl IncrementalUpdate for Abelianization {
    fn update(&mut self, term: &GeneratorTerm) {
        let value = term.exponent.value();
        if term.index == 0 {
            self.x0 += value;
        } else {
            self.rest += value;
        }
    }
}

/// Streaming fingerprint of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordStats {
    pub letters: usize,
    pub positive_letters: usize,
    /// Highest generator index seen, `None` for the empty word.
    pub max_index: Option<usize>,
    pub abelianization: Abelianization,
}

impl WordStats {
    pub fn new() -> Self {
        WordStats::default()
    }

    /// Collects the statistics of a whole word.
    pub fn from_word(word: &Word) -> Self {
        let mut stats = WordStats::new();
        for term in word.iter() {
            stats.update(term);
        }
        stats
    }

    pub fn negative_letters(&self) -> usize {
        self.letters - self.positive_letters
    }

    pub fn reset(&mut self) {
        *self = WordStats::default();
    }
}

impl IncrementalUpdate for WordStats {
    fn update(&mut self, term: &GeneratorTerm) {
        self.letters += 1;
        if term.exponent == Exponent::Positive {
            self.positive_letters += 1;
        }
        self.max_index = Some(self.max_index.map_or(term.index, |m| m.max(term.index)));
        self.abelianization.update(term);
    }
}
