use crate::invariants::is_seminormal;
use crate::types::GeneratorTerm;

/// Shifts every generator of `word` up by `k`: x_i becomes x_{i+k}.
///
/// This is the endomorphism δ_k used when letters are moved past a
/// generator of lower index.
///
/// # Example
/// ```
/// use thompson_engine::{delta, GeneratorTerm};
///
/// let shifted = delta(vec![GeneratorTerm::x(1), GeneratorTerm::x_inv(2)], 3);
/// assert_eq!(shifted, vec![GeneratorTerm::x(4), GeneratorTerm::x_inv(5)]);
/// ```
pub fn delta(mut word: Vec<GeneratorTerm>, k: usize) -> Vec<GeneratorTerm> {
    if k != 0 {
        for term in &mut word {
            term.index += k;
        }
    }
    word
}

/// Length of the positive prefix: everything up to the last positive letter.
fn positive_len(word: &[GeneratorTerm]) -> usize {
    word.iter()
        .rposition(GeneratorTerm::is_positive)
        .map_or(0, |last| last + 1)
}

/// Returns the positive block of a seminormal form.
pub fn pos(word: &[GeneratorTerm]) -> Vec<GeneratorTerm> {
    debug_assert!(is_seminormal(word), "pos expects a seminormal form");
    word[..positive_len(word)].to_vec()
}

/// Returns the negative block of a seminormal form.
/// A word without positive letters is returned whole.
pub fn neg(word: &[GeneratorTerm]) -> Vec<GeneratorTerm> {
    debug_assert!(is_seminormal(word), "neg expects a seminormal form");
    word[positive_len(word)..].to_vec()
}

/// Splits a seminormal form into `(pos(word), neg(word))` without copying.
pub(crate) fn split_blocks(mut word: Vec<GeneratorTerm>) -> (Vec<GeneratorTerm>, Vec<GeneratorTerm>) {
    debug_assert!(is_seminormal(&word), "split_blocks expects a seminormal form");
    let negative = word.split_off(positive_len(&word));
    (word, negative)
}
