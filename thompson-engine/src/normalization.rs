use crate::merge::merge;
use crate::shift::split_blocks;
use crate::types::{GeneratorTerm, Word};
use std::collections::VecDeque;
use tracing::trace;

/// Computes a seminormal form of an arbitrary word.
///
/// The word is split at its midpoint, both halves are reduced recursively
/// and the results are combined with [`merge`]. Words of length 0 or 1 are
/// already seminormal.
pub fn seminormal_form(mut word: Vec<GeneratorTerm>) -> Vec<GeneratorTerm> {
    if word.len() <= 1 {
        return word;
    }
    let right = word.split_off(word.len() / 2);
    merge(seminormal_form(word), seminormal_form(right))
}

/// One side of the bad-pair scan: the letters kept so far on that side and,
/// for each of them, the number of pairs cancelled directly beneath it.
#[derive(Debug, Default)]
struct Survivors {
    kept: Vec<GeneratorTerm>,
    debt: Vec<usize>,
}

impl Survivors {
    fn keep(&mut self, term: GeneratorTerm) {
        self.kept.push(term);
        self.debt.push(0);
    }

    /// Records a cancelled pair under the most recently kept letter.
    fn charge(&mut self) {
        if let Some(owed) = self.debt.last_mut() {
            *owed += 1;
        }
    }

    /// A pair at `index` is protected by this side when the nearest kept
    /// letter, lowered by its pending debt, sits at `index` or `index + 1`.
    fn protects(&self, index: usize) -> bool {
        match (self.kept.last(), self.debt.last()) {
            (Some(nearest), Some(&owed)) => nearest
                .index
                .checked_sub(owed)
                .map_or(false, |lowered| lowered == index || lowered == index + 1),
            _ => false,
        }
    }

    /// Emits the kept letters from the outermost inward, lowering each by the
    /// debt accumulated outside of it.
    fn settle(self) -> Vec<GeneratorTerm> {
        let mut total = 0;
        self.kept
            .iter()
            .rev()
            .zip(self.debt.iter().rev())
            .map(|(term, owed)| {
                total += owed;
                debug_assert!(term.index >= total, "debt exceeds index of {}", term);
                GeneratorTerm::new(term.index - total, term.exponent)
            })
            .collect()
    }
}

/// Reduces a seminormal form to the normal form by erasing bad pairs.
///
/// Letters are consumed from the seam between the positive and the negative
/// block outward. A letter with strictly larger index than its counterpart on
/// the other side survives. Two letters with equal index form a pair that is
/// cancelled unless the nearest survivor on either side protects it; every
/// cancellation lowers all survivors further out by one.
///
/// # Example
/// ```
/// use thompson_engine::{erase_bad_pairs, GeneratorTerm};
///
/// // x_0 x_2 x_0^{-1} = x_1
/// let word = vec![GeneratorTerm::x(0), GeneratorTerm::x(2), GeneratorTerm::x_inv(0)];
/// assert_eq!(erase_bad_pairs(word), vec![GeneratorTerm::x(1)]);
/// ```
pub fn erase_bad_pairs(word: Vec<GeneratorTerm>) -> Vec<GeneratorTerm> {
    let (mut positive, negative) = split_blocks(word);
    let mut negative = VecDeque::from(negative);
    let mut upper = Survivors::default();
    let mut lower = Survivors::default();
    let mut cancelled = 0usize;

    loop {
        match (positive.last().copied(), negative.front().copied()) {
            (None, None) => break,
            (Some(p), Some(n)) if p.index == n.index => {
                positive.pop();
                negative.pop_front();
                if upper.protects(p.index) || lower.protects(p.index) {
                    upper.keep(p);
                    lower.keep(n);
                } else {
                    upper.charge();
                    lower.charge();
                    cancelled += 1;
                }
            }
            (Some(p), None) => {
                positive.pop();
                upper.keep(p);
            }
            (Some(p), Some(n)) if p.index > n.index => {
                positive.pop();
                upper.keep(p);
            }
            (_, Some(n)) => {
                negative.pop_front();
                lower.keep(n);
            }
        }
    }

    trace!(cancelled, "erased bad pairs");

    let mut normal = upper.settle();
    let mut tail = lower.settle();
    tail.reverse();
    normal.extend(tail);
    normal
}

/// Computes the normal form of a word: the unique canonical representative
/// of the element of F it spells.
///
/// # Example
/// ```
/// use thompson_engine::{normal_form, Word};
///
/// let word = Word::from_pairs(&[(1, 1), (1, 1), (1, -1), (2, -1)]).unwrap();
/// let expected = Word::from_pairs(&[(1, 1), (2, -1)]).unwrap();
/// assert_eq!(normal_form(word), expected);
/// ```
pub fn normal_form(word: Word) -> Word {
    let input_len = word.len();
    let normal = erase_bad_pairs(seminormal_form(word.into_terms()));
    trace!(input_len, output_len = normal.len(), "computed normal form");
    Word::from_terms(normal)
}

/// Replaces `word` with its normal form in place.
pub fn normalize(word: &mut Word) {
    let terms = word.take_terms();
    let normal = normal_form(Word::from_terms(terms));
    word.replace_terms(normal.into_terms());
}
