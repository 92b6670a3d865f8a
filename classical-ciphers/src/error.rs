//! Error types for key construction and attack configuration.

use thiserror::Error;

/// Errors reported by key validation, key generation and the attack entry
/// points.
///
/// The cipher transforms themselves are total: once a key exists they accept
/// any input, so nothing here concerns plaintext or ciphertext content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Key lengths must stay within the alphabet, 1 to 26 symbols.
    #[error("invalid key length {0}, must be between 1 and 26")]
    InvalidKeyLength(usize),

    /// A keyword letter appeared twice; the column read-out order would be
    /// ambiguous.
    #[error("duplicate symbol '{0}' in transposition keyword")]
    DuplicateKeySymbol(char),

    /// A keyword contained something other than a lowercase letter.
    #[error("keyword symbol '{0}' is not a lowercase letter")]
    KeySymbolOutsideAlphabet(char),

    /// The key-length range handed to the scanning attack was empty.
    #[error("key length range contains no lengths")]
    EmptySearchRange,
}

/// Result type alias for cipher operations.
pub type Result<T> = std::result::Result<T, CipherError>;
