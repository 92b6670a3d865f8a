//! Exhaustive permutation attack on the columnar transposition cipher.
//!
//! The key insight: applying *any* column order to the ciphertext the way
//! decryption would produces some arrangement of the original grid columns,
//! and the arrangement produced by the true key order reads as natural
//! language. Scoring every arrangement by digraph frequencies and keeping
//! the best one therefore recovers the key without ever seeing it.
//!
//! Only the exhaustive search is implemented. Smarter strategies (column
//! hill climbing, branch and bound on partial scores) would slot in behind
//! the same [`CandidateScorer`] seam.

use std::ops::RangeInclusive;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use crate::frequency::LanguageModel;
use crate::transposition::{fill_columns, Grid};

/// Outcome of a transposition break: the winning column order, the score it
/// achieved, and the row-major read-out of the winning arrangement.
///
/// The plaintext is always the read-out of the arrangement that actually
/// won, so rescoring `candidate_grid(ciphertext, &column_order)` reproduces
/// `score` exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct TranspositionBreak {
    pub column_order: Vec<usize>,
    pub score: f64,
    pub plaintext: String,
}

/// Plausibility oracle for candidate arrangements; higher means more like
/// natural language.
///
/// The exhaustive search is generic over this seam, so a smarter scorer
/// (trigraphs, dictionary words) slots in without touching the search.
pub trait CandidateScorer {
    fn score(&self, grid: &Grid) -> f64;
}

/// Scores an arrangement by summing language-model weights of every
/// horizontally adjacent letter pair.
///
/// Empty cells and characters outside the alphabet contribute nothing;
/// they simply break the chain of scorable pairs.
pub struct DigraphScorer<'a> {
    model: &'a LanguageModel,
}

impl<'a> DigraphScorer<'a> {
    pub fn new(model: &'a LanguageModel) -> Self {
        Self { model }
    }
}

impl CandidateScorer for DigraphScorer<'_> {
    fn score(&self, grid: &Grid) -> f64 {
        let mut score = 0.0;
        for row in 0..grid.rows() {
            for pair in grid.row(row).windows(2) {
                let first = pair[0].and_then(alphabet::to_index);
                let second = pair[1].and_then(alphabet::to_index);
                if let (Some(a), Some(b)) = (first, second) {
                    score += self.model.digraph_weight(a, b);
                }
            }
        }
        score
    }
}

/// Builds the arrangement a given column order produces from `ciphertext`:
/// the `i`-th sequential ciphertext block becomes column `column_order[i]`,
/// exactly as decryption fills its grid.
///
/// `column_order` must be a permutation of `0..column_order.len()`.
pub fn candidate_grid(ciphertext: &str, column_order: &[usize]) -> Grid {
    debug_assert!(column_order.iter().all(|&col| col < column_order.len()));
    let chars: Vec<char> = ciphertext.chars().collect();
    fill_columns(&chars, column_order)
}

/// Iterator over all permutations of `0..len` in lexicographic order.
///
/// The identity permutation comes first, which gives the search its
/// deterministic tie-break: the earliest enumerated candidate wins.
pub struct Permutations {
    next: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(len: usize) -> Self {
        Self {
            next: Some((0..len).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        self.next = successor(&current);
        Some(current)
    }
}

/// Lexicographic successor of `perm`, or `None` after the final, fully
/// descending permutation.
fn successor(perm: &[usize]) -> Option<Vec<usize>> {
    let len = perm.len();
    if len < 2 {
        return None;
    }
    // Rightmost position whose element is smaller than its right neighbour.
    let mut pivot = len - 1;
    while pivot > 0 && perm[pivot - 1] >= perm[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return None;
    }
    let pivot = pivot - 1;

    let mut next = perm.to_vec();
    // Smallest element right of the pivot that still exceeds it.
    let mut swap = len - 1;
    while next[swap] <= next[pivot] {
        swap -= 1;
    }
    next.swap(pivot, swap);
    next[pivot + 1..].reverse();
    Some(next)
}

/// Exhaustively searches all `key_length!` column orders and returns the
/// best-scoring arrangement.
///
/// Candidates are enumerated in lexicographic order and only a strictly
/// better score displaces the incumbent, so ties resolve to the earliest
/// order and the result is fully deterministic. With a digraph scorer and a
/// few grid rows of ciphertext, the winner is reliably the order the true
/// keyword derives.
///
/// Factorial growth makes the exhaustive search practical for short
/// keywords only (8! is 40320, 11! is about 40 million); see
/// [`break_transposition_cipher_with_limit`] for a bounded variant.
///
/// # Errors
///
/// [`CipherError::InvalidKeyLength`] unless 1 ≤ `key_length` ≤ 26.
pub fn break_transposition_cipher<S: CandidateScorer>(
    ciphertext: &str,
    key_length: usize,
    scorer: &S,
) -> Result<TranspositionBreak> {
    break_transposition_cipher_with_limit(ciphertext, key_length, scorer, usize::MAX)
}

/// Bounded variant of [`break_transposition_cipher`]: examines at most
/// `max_candidates` permutations, and always at least one.
///
/// With fewer candidates than `key_length!` the result is the best of the
/// examined prefix of the lexicographic enumeration: still deterministic,
/// no longer guaranteed optimal.
///
/// # Errors
///
/// [`CipherError::InvalidKeyLength`] unless 1 ≤ `key_length` ≤ 26.
pub fn break_transposition_cipher_with_limit<S: CandidateScorer>(
    ciphertext: &str,
    key_length: usize,
    scorer: &S,
    max_candidates: usize,
) -> Result<TranspositionBreak> {
    if key_length == 0 || key_length > ALPHABET_LEN {
        return Err(CipherError::InvalidKeyLength(key_length));
    }
    let chars: Vec<char> = ciphertext.chars().collect();

    let mut best_order: Vec<usize> = (0..key_length).collect();
    let mut best_score = f64::NEG_INFINITY;
    for order in Permutations::new(key_length).take(max_candidates.max(1)) {
        let score = scorer.score(&fill_columns(&chars, &order));
        if score > best_score {
            best_score = score;
            best_order = order;
        }
    }

    let plaintext = fill_columns(&chars, &best_order).read_row_major();
    Ok(TranspositionBreak {
        column_order: best_order,
        score: best_score,
        plaintext,
    })
}

/// Runs the exhaustive attack once per key length in `lengths` and keeps
/// the arrangement that scores best per scorable pair.
///
/// Raw digraph sums grow with the number of adjacent pairs, which differs
/// between grid widths, so arrangements of different key lengths are
/// compared by score divided by [`Grid::filled_pair_count`]. Lengths are
/// tried in ascending order and only a strictly better per-pair score
/// displaces the incumbent.
///
/// # Errors
///
/// [`CipherError::EmptySearchRange`] when `lengths` contains nothing, and
/// [`CipherError::InvalidKeyLength`] when it reaches outside \[1, 26\].
pub fn break_transposition_cipher_in_range<S: CandidateScorer>(
    ciphertext: &str,
    lengths: RangeInclusive<usize>,
    scorer: &S,
) -> Result<TranspositionBreak> {
    let chars: Vec<char> = ciphertext.chars().collect();

    let mut best: Option<TranspositionBreak> = None;
    let mut best_per_pair = f64::NEG_INFINITY;
    for key_length in lengths {
        let candidate = break_transposition_cipher(ciphertext, key_length, scorer)?;
        let pairs = fill_columns(&chars, &candidate.column_order).filled_pair_count();
        let per_pair = if pairs > 0 {
            candidate.score / pairs as f64
        } else {
            f64::NEG_INFINITY
        };
        // The first length always seeds the incumbent, so a degenerate
        // ciphertext with no scorable pairs still resolves deterministically.
        if best.is_none() || per_pair > best_per_pair {
            best_per_pair = per_pair;
            best = Some(candidate);
        }
    }
    best.ok_or(CipherError::EmptySearchRange)
}
