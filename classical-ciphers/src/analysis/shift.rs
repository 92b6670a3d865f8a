//! Frequency-correlation attack on the shift cipher.

use crate::alphabet::ALPHABET_LEN;
use crate::frequency::{self, LanguageModel};
use crate::shift;

/// Outcome of a shift-cipher break: the recovered key, the correlation that
/// key scored, and the ciphertext decrypted under it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftBreak {
    pub key: u8,
    pub correlation: f64,
    pub plaintext: String,
}

/// Recovers a shift key by letter-frequency correlation and decrypts the
/// ciphertext with it.
///
/// For each of the 26 candidate keys, the ciphertext's empirical letter
/// percentages are rotated back into plaintext position and scored by dot
/// product against the model's letter weights. All 26 candidates are always
/// scored; keys are scanned in ascending order and only a strictly better
/// correlation displaces the incumbent, so ties resolve to the smallest key
/// deterministically.
///
/// A couple hundred letters of natural-language ciphertext is plenty for
/// the winner to be the true key. Short or artificial input still produces
/// a deterministic answer, just a best-effort one. Ciphertext without a
/// single alphabet letter scores every key at zero and key 0 wins.
pub fn break_shift_cipher(ciphertext: &str, model: &LanguageModel) -> ShiftBreak {
    let observed = frequency::letter_frequencies(ciphertext);

    let mut best_key = 0u8;
    let mut best_correlation = f64::NEG_INFINITY;
    for key in 0..ALPHABET_LEN {
        // Undo the candidate shift on the distribution instead of on the
        // text: position (i - key) mod 26 receives the percentage observed
        // at i.
        let mut deshifted = [0.0f64; ALPHABET_LEN];
        for (index, &percent) in observed.iter().enumerate() {
            deshifted[(index + ALPHABET_LEN - key) % ALPHABET_LEN] = percent;
        }
        let mut correlation = 0.0;
        for (index, &percent) in deshifted.iter().enumerate() {
            correlation += percent * model.letter_weight(index);
        }
        if correlation > best_correlation {
            best_correlation = correlation;
            best_key = key as u8;
        }
    }

    ShiftBreak {
        key: best_key,
        correlation: best_correlation,
        plaintext: shift::decrypt(ciphertext, best_key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAINTEXT: &str = "meetmeattheoldbridgejustaftermidnightandbringthemaps";

    #[test]
    fn test_recovers_key_from_medium_ciphertext() {
        for key in [5u8, 7] {
            let ciphertext = shift::encrypt(PLAINTEXT, key);
            let broken = break_shift_cipher(&ciphertext, LanguageModel::english());
            assert_eq!(broken.key, key);
            assert_eq!(broken.plaintext, PLAINTEXT);
            assert!(broken.correlation > 0.0);
        }
    }

    #[test]
    fn test_short_input_is_deterministic_best_effort() {
        // Five letters are not enough statistics for the true key; the
        // attack still answers, and always the same answer.
        let broken = break_shift_cipher("khoor", LanguageModel::english());
        assert_eq!(broken.key, 10);
        assert_eq!(broken.plaintext, "axeeh");
        assert!((broken.correlation - 796.3).abs() < 1e-6);
    }

    #[test]
    fn test_single_letter_distribution_lands_on_e() {
        // Everything maps to the heaviest letter when only one letter occurs.
        let broken = break_shift_cipher("zzz", LanguageModel::english());
        assert_eq!(broken.key, 21);
        assert_eq!(broken.plaintext, "eee");
        assert!((broken.correlation - 1270.2).abs() < 1e-6);
    }

    #[test]
    fn test_empty_ciphertext_scores_zero() {
        let broken = break_shift_cipher("", LanguageModel::english());
        assert_eq!(broken.key, 0);
        assert_eq!(broken.plaintext, "");
        assert_eq!(broken.correlation, 0.0);
    }

    #[test]
    fn test_letterless_ciphertext_falls_back_to_key_zero() {
        let broken = break_shift_cipher("12 34!", LanguageModel::english());
        assert_eq!(broken.key, 0);
        // decrypt passes foreign characters through, so the input survives
        assert_eq!(broken.plaintext, "12 34!");
    }
}
