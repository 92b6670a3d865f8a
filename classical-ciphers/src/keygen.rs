//! Random key generation.
//!
//! Both generators take the random source as a parameter, so callers decide
//! between `thread_rng()` and a seeded generator. Nothing in this crate owns
//! global randomness, which keeps key generation reproducible under test.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::ALPHABET_LEN;
use crate::error::{CipherError, Result};
use crate::transposition::TranspositionKey;

/// Draws a shift key uniformly from \[1, 25\].
///
/// Zero is excluded because a zero shift encrypts every message to itself.
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let key = classical_ciphers::keygen::random_shift_key(&mut StdRng::seed_from_u64(7));
/// assert!((1..=25).contains(&key));
/// ```
pub fn random_shift_key<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=25)
}

/// Draws a transposition keyword of `length` distinct letters by shuffling
/// the alphabet and keeping the first `length` symbols.
///
/// # Errors
///
/// [`CipherError::InvalidKeyLength`] unless 1 ≤ `length` ≤ 26. An
/// out-of-range request is an error, never silently clamped.
pub fn random_transposition_key<R: Rng>(rng: &mut R, length: usize) -> Result<TranspositionKey> {
    if length == 0 || length > ALPHABET_LEN {
        return Err(CipherError::InvalidKeyLength(length));
    }
    let mut symbols: Vec<char> = ('a'..='z').collect();
    symbols.shuffle(rng);
    symbols.truncate(length);
    let keyword: String = symbols.into_iter().collect();
    TranspositionKey::new(&keyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shift_key_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let key = random_shift_key(&mut rng);
            assert!((1..=25).contains(&key));
        }
    }

    #[test]
    fn test_shift_key_is_reproducible_per_seed() {
        let first = random_shift_key(&mut StdRng::seed_from_u64(42));
        let second = random_shift_key(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_transposition_key_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(3);
        for length in [1, 4, 13, 26] {
            let key = random_transposition_key(&mut rng, length).unwrap();
            assert_eq!(key.len(), length);
        }
    }

    #[test]
    fn test_transposition_key_is_reproducible_per_seed() {
        let first = random_transposition_key(&mut StdRng::seed_from_u64(9), 6).unwrap();
        let second = random_transposition_key(&mut StdRng::seed_from_u64(9), 6).unwrap();
        assert_eq!(first.keyword(), second.keyword());
    }

    #[test]
    fn test_transposition_key_rejects_bad_lengths() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            random_transposition_key(&mut rng, 0),
            Err(CipherError::InvalidKeyLength(0))
        ));
        assert!(matches!(
            random_transposition_key(&mut rng, 27),
            Err(CipherError::InvalidKeyLength(27))
        ));
    }
}
