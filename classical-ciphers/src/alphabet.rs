//! Fixed lowercase alphabet and its index mapping.
//!
//! Everything in this crate speaks in indices 0-25; this module is the one
//! place where letters and indices meet. Characters outside `a`-`z` have no
//! index. The cipher transforms skip or pass them through, they are never an
//! error here.

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the index 0-25 of a lowercase letter, or `None` for any other
/// character.
pub fn to_index(symbol: char) -> Option<usize> {
    if symbol.is_ascii_lowercase() {
        Some(symbol as usize - 'a' as usize)
    } else {
        None
    }
}

/// Returns the lowercase letter at `index`.
///
/// `index` must be below [`ALPHABET_LEN`]; callers reduce modulo 26 first.
pub fn to_symbol(index: usize) -> char {
    debug_assert!(index < ALPHABET_LEN);
    (b'a' + index as u8) as char
}

/// Returns true when `symbol` belongs to the alphabet.
pub fn contains(symbol: char) -> bool {
    symbol.is_ascii_lowercase()
}
