//! Normal forms for Thompson's group F.
//!
//! Elements of F are written as words over the generators x_0, x_1, … with
//! exponents ±1. [`normal_form`] returns the unique canonical word of the
//! element, following the divide-and-conquer algorithm of Shpilrain and
//! Ushakov: a seminormal form is built by recursive merging and its bad
//! pairs are then erased.

pub mod error;
pub mod invariants;
pub mod merge;
pub mod normalization;
pub mod shift;
pub mod types;

pub use error::WordError;
pub use invariants::{is_seminormal, Abelianization, IncrementalUpdate, WordStats};
pub use merge::{merge, merge_nn, merge_np, merge_pp};
pub use normalization::{erase_bad_pairs, normal_form, normalize, seminormal_form};
pub use shift::{delta, neg, pos};
pub use types::{Exponent, GeneratorTerm, Word};
