use proptest::prelude::*;
use thompson_engine::{
    erase_bad_pairs, is_seminormal, merge, normal_form, seminormal_form, GeneratorTerm, Word,
    WordStats,
};

/// Letters over a handful of low generators, where relations interact most.
fn arb_term() -> impl Strategy<Value = GeneratorTerm> {
    (0usize..6, any::<bool>()).prop_map(|(index, positive)| {
        if positive {
            GeneratorTerm::x(index)
        } else {
            GeneratorTerm::x_inv(index)
        }
    })
}

fn arb_word(max_len: usize) -> impl Strategy<Value = Word> {
    prop::collection::vec(arb_term(), 0..max_len).prop_map(Word::from_terms)
}

proptest! {
    /// Normal forms are fixed points.
    #[test]
    fn normal_form_idempotent(w in arb_word(14)) {
        let once = normal_form(w);
        let twice = normal_form(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// Inserting x_i x_i^{-1} or x_i^{-1} x_i anywhere leaves the element unchanged.
    #[test]
    fn trivial_insertion_invariant(
        w in arb_word(12),
        index in 0usize..7,
        positive_first in any::<bool>(),
        at in any::<prop::sample::Index>(),
    ) {
        let expected = normal_form(w.clone());

        let letter = GeneratorTerm::x(index);
        let pair = if positive_first {
            [letter, letter.inverse()]
        } else {
            [letter.inverse(), letter]
        };
        let mut terms = w.into_terms();
        let position = at.index(terms.len() + 1);
        terms.splice(position..position, pair);

        prop_assert_eq!(normal_form(Word::from_terms(terms)), expected);
    }

    /// Output keeps the positive block in front of the negative block.
    #[test]
    fn normal_form_well_formed(w in arb_word(16)) {
        let seminormal = seminormal_form(w.clone().into_terms());
        prop_assert!(is_seminormal(&seminormal));
        prop_assert!(normal_form(w).is_seminormal());
    }

    #[test]
    fn word_times_inverse_is_identity(w in arb_word(12)) {
        prop_assert!(normal_form(w.product(&w.inverse())).is_empty());
    }

    /// Merging seminormal forms does not depend on how the product is bracketed.
    #[test]
    fn merge_associative(a in arb_word(7), b in arb_word(7), c in arb_word(7)) {
        let sa = seminormal_form(a.clone().into_terms());
        let sb = seminormal_form(b.clone().into_terms());
        let sc = seminormal_form(c.clone().into_terms());

        let left = erase_bad_pairs(merge(merge(sa.clone(), sb.clone()), sc.clone()));
        let right = erase_bad_pairs(merge(sa, merge(sb, sc)));
        prop_assert_eq!(&left, &right);

        let whole = normal_form(a.product(&b).product(&c));
        prop_assert_eq!(left, whole.into_terms());
    }

    /// Peeling off one letter at a time gives the same normal form as the
    /// midpoint split.
    #[test]
    fn split_strategy_irrelevant(w in arb_word(12)) {
        let folded = w
            .terms()
            .iter()
            .rev()
            .fold(Vec::new(), |acc, term| merge(vec![*term], acc));
        prop_assert_eq!(erase_bad_pairs(folded), normal_form(w).into_terms());
    }

    /// The abelianization is a homomorphism, so normalization preserves it.
    #[test]
    fn abelianization_preserved(w in arb_word(16)) {
        let before = WordStats::from_word(&w);
        let after = WordStats::from_word(&normal_form(w));
        prop_assert_eq!(before.abelianization, after.abelianization);
        prop_assert!(after.letters <= before.letters);
    }
}
