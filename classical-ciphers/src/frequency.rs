//! Language statistics and empirical letter counting.
//!
//! A [`LanguageModel`] is the read-only frequency oracle the attacks score
//! against: one weight per letter and one per ordered letter pair, on an
//! arbitrary scale since only the relative order of scores matters. The
//! crate ships an English model; other languages plug in through
//! [`LanguageModel::new`] with their own tables.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::english;

/// Read-only letter and digraph weights for one language.
pub struct LanguageModel {
    letters: [f64; ALPHABET_LEN],
    digraphs: [[f64; ALPHABET_LEN]; ALPHABET_LEN],
}

static ENGLISH: LanguageModel =
    LanguageModel::new(english::LETTER_WEIGHTS, english::DIGRAPH_WEIGHTS);

impl LanguageModel {
    /// Creates a model from a letter table and a digraph table, both in
    /// canonical a-z order.
    pub const fn new(
        letters: [f64; ALPHABET_LEN],
        digraphs: [[f64; ALPHABET_LEN]; ALPHABET_LEN],
    ) -> Self {
        Self { letters, digraphs }
    }

    /// The built-in English model, backed by the tables in [`english`].
    pub fn english() -> &'static LanguageModel {
        &ENGLISH
    }

    /// Weight of the letter at `index` (0-25).
    pub fn letter_weight(&self, index: usize) -> f64 {
        self.letters[index]
    }

    /// Weight of the ordered letter pair (`first`, `second`), both 0-25.
    pub fn digraph_weight(&self, first: usize, second: usize) -> f64 {
        self.digraphs[first][second]
    }
}

/// Counts occurrences of each alphabet letter in `text`.
///
/// Characters outside the alphabet are not counted.
pub fn count_letters(text: &str) -> [u32; ALPHABET_LEN] {
    let mut counts = [0u32; ALPHABET_LEN];
    for symbol in text.chars() {
        if let Some(index) = alphabet::to_index(symbol) {
            counts[index] += 1;
        }
    }
    counts
}

/// Empirical frequency of each letter as a percentage of all counted
/// letters.
///
/// Returns all zeros when `text` contains no alphabet letters, so empty or
/// entirely foreign input never divides by zero.
pub fn letter_frequencies(text: &str) -> [f64; ALPHABET_LEN] {
    let counts = count_letters(text);
    let total: u32 = counts.iter().sum();
    let mut frequencies = [0.0f64; ALPHABET_LEN];
    if total == 0 {
        return frequencies;
    }
    for (frequency, &count) in frequencies.iter_mut().zip(counts.iter()) {
        *frequency = count as f64 / total as f64 * 100.0;
    }
    frequencies
}
