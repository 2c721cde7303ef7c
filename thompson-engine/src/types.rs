use crate::error::WordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign of a letter: x_i (Positive) or x_i^{-1} (Negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exponent {
    Positive,
    Negative,
}

impl Exponent {
    /// Returns the exponent as `1` or `-1`.
    pub fn value(&self) -> i64 {
        match self {
            Exponent::Positive => 1,
            Exponent::Negative => -1,
        }
    }

    /// Returns the opposite sign.
    pub fn inverse(&self) -> Self {
        match self {
            Exponent::Positive => Exponent::Negative,
            Exponent::Negative => Exponent::Positive,
        }
    }
}

impl TryFrom<i64> for Exponent {
    type Error = WordError;

    fn try_from(exponent: i64) -> Result<Self, Self::Error> {
        match exponent {
            1 => Ok(Exponent::Positive),
            -1 => Ok(Exponent::Negative),
            _ => Err(WordError::InvalidExponent { exponent }),
        }
    }
}

/// A single letter x_index^exponent of Thompson's group F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct GeneratorTerm {
    pub index: usize,
    pub exponent: Exponent,
}

impl GeneratorTerm {
    pub fn new(index: usize, exponent: Exponent) -> Self {
        GeneratorTerm { index, exponent }
    }

    /// The letter x_index.
    pub fn x(index: usize) -> Self {
        GeneratorTerm::new(index, Exponent::Positive)
    }

    /// The letter x_index^{-1}.
    pub fn x_inv(index: usize) -> Self {
        GeneratorTerm::new(index, Exponent::Negative)
    }

    pub fn is_positive(&self) -> bool {
        self.exponent == Exponent::Positive
    }

    pub fn is_negative(&self) -> bool {
        self.exponent == Exponent::Negative
    }

    /// Returns the same generator with the opposite exponent.
    pub fn inverse(&self) -> Self {
        GeneratorTerm::new(self.index, self.exponent.inverse())
    }
}

impl TryFrom<(i64, i64)> for GeneratorTerm {
    type Error = WordError;

    fn try_from((index, exponent): (i64, i64)) -> Result<Self, Self::Error> {
        let index = usize::try_from(index).map_err(|_| WordError::NegativeIndex { index })?;
        let exponent = Exponent::try_from(exponent)?;
        Ok(GeneratorTerm::new(index, exponent))
    }
}

impl From<GeneratorTerm> for (i64, i64) {
    fn from(term: GeneratorTerm) -> Self {
        (term.index as i64, term.exponent.value())
    }
}

impl fmt::Display for GeneratorTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exponent {
            Exponent::Positive => write!(f, "x{}", self.index),
            Exponent::Negative => write!(f, "x{}^-1", self.index),
        }
    }
}

/// A word over the generators of F, read left to right as a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word {
    terms: Vec<GeneratorTerm>,
}

impl Word {
    /// Creates the empty word (the identity element).
    pub fn new() -> Self {
        Word { terms: Vec::new() }
    }

    pub fn from_terms(terms: Vec<GeneratorTerm>) -> Self {
        Word { terms }
    }

    /// Builds a word from raw `(index, exponent)` pairs, rejecting any
    /// negative index or exponent other than 1 and -1.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Result<Self, WordError> {
        pairs
            .iter()
            .map(|&pair| GeneratorTerm::try_from(pair))
            .collect::<Result<Vec<_>, _>>()
            .map(Word::from_terms)
    }

    pub fn push(&mut self, term: GeneratorTerm) {
        self.terms.push(term);
    }

    /// Appends every letter of `other` to this word.
    pub fn extend(&mut self, other: &Word) {
        self.terms.extend_from_slice(&other.terms);
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratorTerm> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[GeneratorTerm] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<GeneratorTerm> {
        self.terms
    }

    /// Returns the group product `self · other` as a (not yet normalized) word.
    pub fn product(&self, other: &Word) -> Word {
        let mut terms = Vec::with_capacity(self.len() + other.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);
        Word::from_terms(terms)
    }

    /// Returns the inverse element: letters reversed, exponents flipped.
    pub fn inverse(&self) -> Word {
        Word::from_terms(self.terms.iter().rev().map(GeneratorTerm::inverse).collect())
    }

    /// True if all positive letters precede all negative letters.
    pub fn is_seminormal(&self) -> bool {
        crate::invariants::is_seminormal(&self.terms)
    }

    /// Replaces the letters of this word.
    /// Used internally by normalization.
    pub(crate) fn replace_terms(&mut self, terms: Vec<GeneratorTerm>) {
        self.terms = terms;
    }

    pub(crate) fn take_terms(&mut self) -> Vec<GeneratorTerm> {
        std::mem::take(&mut self.terms)
    }
}

impl From<Vec<GeneratorTerm>> for Word {
    fn from(terms: Vec<GeneratorTerm>) -> Self {
        Word::from_terms(terms)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "1");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
