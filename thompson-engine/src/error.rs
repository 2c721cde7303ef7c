use thiserror::Error;

/// Rejections raised when raw `(index, exponent)` pairs enter the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// Generator indices start at 0.
    #[error("invalid input: generator index {index} is negative")]
    NegativeIndex { index: i64 },

    /// Only x_i and x_i^{-1} are letters of a word.
    #[error("invalid input: exponent {exponent} is not 1 or -1")]
    InvalidExponent { exponent: i64 },
}
