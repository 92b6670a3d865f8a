//! Shift (Caesar) cipher transform.
//!
//! Encryption and decryption treat characters outside the alphabet
//! differently: encryption drops them, decryption passes them through
//! unchanged. Callers that decrypt what encrypt produced never notice;
//! callers decrypting material from elsewhere keep their spacing and
//! punctuation. That asymmetry is deliberate, long-standing behavior and is
//! pinned by tests here rather than smoothed over.

use crate::alphabet::{self, ALPHABET_LEN};

/// Encrypts `plaintext` by rotating every letter `key` positions forward
/// through the alphabet.
///
/// Characters outside a-z are dropped from the output. Any key value is
/// accepted and reduced modulo 26; key generation draws from \[1, 25\] but a
/// multiple of 26 simply leaves letters in place.
///
/// ```rust
/// assert_eq!(classical_ciphers::shift::encrypt("helloworld", 3), "khoorzruog");
/// assert_eq!(classical_ciphers::shift::encrypt("hello, world!", 3), "khoorzruog");
/// ```
pub fn encrypt(plaintext: &str, key: u8) -> String {
    let offset = key as usize % ALPHABET_LEN;
    plaintext
        .chars()
        .filter_map(|symbol| {
            alphabet::to_index(symbol)
                .map(|index| alphabet::to_symbol((index + offset) % ALPHABET_LEN))
        })
        .collect()
}

/// Decrypts `ciphertext` by rotating every letter `key` positions backward
/// through the alphabet.
///
/// Characters outside a-z are passed through unchanged (see the module
/// docs for why this differs from [`encrypt`]).
///
/// ```rust
/// assert_eq!(classical_ciphers::shift::decrypt("khoorzruog", 3), "helloworld");
/// assert_eq!(classical_ciphers::shift::decrypt("khoor, zruog!", 3), "hello, world!");
/// ```
pub fn decrypt(ciphertext: &str, key: u8) -> String {
    let offset = key as usize % ALPHABET_LEN;
    ciphertext
        .chars()
        .map(|symbol| match alphabet::to_index(symbol) {
            Some(index) => alphabet::to_symbol((index + ALPHABET_LEN - offset) % ALPHABET_LEN),
            None => symbol,
        })
        .collect()
}
