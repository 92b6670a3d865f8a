//! Cryptanalysis engines: key recovery without the key.
//!
//! [`shift`] correlates ciphertext letter frequencies against a language
//! model. [`transposition`] searches column permutations scored by digraph
//! frequencies. Both need nothing but ciphertext and a
//! [`LanguageModel`](crate::LanguageModel), and both are deterministic:
//! the same input always recovers the same key.

pub mod shift;
pub mod transposition;

pub use shift::{break_shift_cipher, ShiftBreak};
pub use transposition::{
    break_transposition_cipher, break_transposition_cipher_in_range,
    break_transposition_cipher_with_limit, candidate_grid, CandidateScorer, DigraphScorer,
    Permutations, TranspositionBreak,
};
