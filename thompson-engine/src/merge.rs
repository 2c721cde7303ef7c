use crate::shift::{delta, split_blocks};
use crate::types::GeneratorTerm;
use std::cmp::Ordering;

/// Computes a seminormal form of δ_a(n) · δ_b(p).
///
/// `n` holds only negative letters and `p` only positive ones. The seam
/// between them is resolved from the inside out:
/// - equal indices cancel,
/// - a lower negative letter is pushed out to the right, and every remaining
///   positive letter it crosses is shifted up by one,
/// - a lower positive letter is pushed out to the left, shifting the
///   remaining negative letters up by one.
pub fn merge_np(
    mut n: Vec<GeneratorTerm>,
    p: Vec<GeneratorTerm>,
    mut a: usize,
    mut b: usize,
) -> Vec<GeneratorTerm> {
    debug_assert!(n.iter().all(GeneratorTerm::is_negative), "merge_np: n must be negative");
    debug_assert!(p.iter().all(GeneratorTerm::is_positive), "merge_np: p must be positive");

    // Positive letters pushed out to the left, in emission order.
    let mut head = Vec::new();
    // Negative letters pushed out to the right, in reverse of their final order.
    let mut tail = Vec::new();
    let mut next = 0;

    while let (Some(last), Some(first)) = (n.last(), p.get(next)) {
        let left = last.index + a;
        let right = first.index + b;
        match left.cmp(&right) {
            Ordering::Equal => {
                n.pop();
                next += 1;
            }
            Ordering::Less => {
                tail.push(GeneratorTerm::x_inv(left));
                n.pop();
                b += 1;
            }
            Ordering::Greater => {
                head.push(GeneratorTerm::x(right));
                next += 1;
                a += 1;
            }
        }
    }

    // At most one of the two sides has letters left.
    head.extend(delta(n, a));
    head.extend(p[next..].iter().map(|t| GeneratorTerm::x(t.index + b)));
    head.extend(tail.into_iter().rev());
    head
}

/// Computes a positive seminormal form of `p · q` for positive `p` and `q`.
///
/// Uses x_j x_i = x_i x_{j+1} for i < j to move the inverted letters at the
/// seam past each other, then re-merges both sides.
pub fn merge_pp(mut p: Vec<GeneratorTerm>, mut q: Vec<GeneratorTerm>) -> Vec<GeneratorTerm> {
    debug_assert!(p.iter().all(GeneratorTerm::is_positive), "merge_pp: p must be positive");
    debug_assert!(q.iter().all(GeneratorTerm::is_positive), "merge_pp: q must be positive");

    let inverted = match (p.last(), q.first()) {
        (Some(last), Some(first)) => last.index > first.index,
        _ => false,
    };
    if !inverted {
        p.extend(q);
        return p;
    }

    let moved = p.pop().map(|t| GeneratorTerm::x(t.index + 1));
    let y = q.remove(0);
    let left = merge_pp(p, vec![y]);
    let right = merge_pp(moved.into_iter().collect(), q);
    merge_pp(left, right)
}

/// Computes a negative seminormal form of `n · m` for negative `n` and `m`.
///
/// Mirror image of [`merge_pp`]: x_i^{-1} x_j^{-1} = x_{j+1}^{-1} x_i^{-1} for
/// i < j, so the incoming letter of `m` is the one shifted up.
pub fn merge_nn(mut n: Vec<GeneratorTerm>, mut m: Vec<GeneratorTerm>) -> Vec<GeneratorTerm> {
    debug_assert!(n.iter().all(GeneratorTerm::is_negative), "merge_nn: n must be negative");
    debug_assert!(m.iter().all(GeneratorTerm::is_negative), "merge_nn: m must be negative");

    let inverted = match (n.last(), m.first()) {
        (Some(last), Some(first)) => last.index < first.index,
        _ => false,
    };
    if !inverted {
        n.extend(m);
        return n;
    }

    let x = n.pop();
    let moved = GeneratorTerm::x_inv(m.remove(0).index + 1);
    let left = merge_nn(n, vec![moved]);
    let right = merge_nn(x.into_iter().collect(), m);
    merge_nn(left, right)
}

/// Combines two seminormal forms `w` and `v` into a seminormal form of `w · v`.
///
/// # Example
/// ```
/// use thompson_engine::{merge, GeneratorTerm};
///
/// // x_1^{-1} · x_0 = x_0 · x_2^{-1}
/// let w = vec![GeneratorTerm::x_inv(1)];
/// let v = vec![GeneratorTerm::x(0)];
/// assert_eq!(merge(w, v), vec![GeneratorTerm::x(0), GeneratorTerm::x_inv(2)]);
/// ```
pub fn merge(w: Vec<GeneratorTerm>, v: Vec<GeneratorTerm>) -> Vec<GeneratorTerm> {
    let (w_pos, w_neg) = split_blocks(w);
    let (v_pos, v_neg) = split_blocks(v);

    let seam = merge_np(w_neg, v_pos, 0, 0);
    let (seam_pos, seam_neg) = split_blocks(seam);

    let mut merged = merge_pp(w_pos, seam_pos);
    merged.extend(merge_nn(seam_neg, v_neg));
    merged
}
