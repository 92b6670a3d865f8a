//! # Classical Ciphers Library
//!
//! Two classical cipher families together with the statistical attacks that
//! break them without the key:
//!
//! - **Shift (Caesar) cipher**: substitution by a fixed alphabet offset,
//!   broken by letter-frequency correlation
//! - **Columnar transposition cipher**: keyword-driven column reordering,
//!   broken by exhaustive permutation search scored with digraph frequencies
//!
//! ## Breaking a shift cipher
//!
//! ```rust
//! use classical_ciphers::{analysis, shift, LanguageModel};
//!
//! let secret = "meetmeattheoldbridgejustaftermidnightandbringthemaps";
//! let ciphertext = shift::encrypt(secret, 5);
//!
//! let broken = analysis::break_shift_cipher(&ciphertext, LanguageModel::english());
//! assert_eq!(broken.key, 5);
//! assert_eq!(broken.plaintext, secret);
//! ```
//!
//! ## Breaking a columnar transposition
//!
//! ```rust
//! use classical_ciphers::analysis::{break_transposition_cipher, DigraphScorer};
//! use classical_ciphers::{transposition, LanguageModel, TranspositionKey};
//!
//! let secret = "movethegoldtonightandtellnoonewherethewagonstops";
//! let key = TranspositionKey::new("code")?;
//! let ciphertext = transposition::encrypt(secret, &key);
//!
//! let scorer = DigraphScorer::new(LanguageModel::english());
//! let broken = break_transposition_cipher(&ciphertext, 4, &scorer)?;
//! assert_eq!(broken.column_order, key.column_order());
//! assert_eq!(broken.plaintext, secret);
//! # Ok::<(), classical_ciphers::CipherError>(())
//! ```
//!
//! ## Features
//!
//! - Fixed 26-letter lowercase alphabet with deterministic handling of
//!   everything outside it
//! - Keyword validation that rejects ambiguous (repeated-letter) keywords
//! - Injectable randomness for key generation, seedable under test
//! - Pluggable language statistics: English is built in, other languages
//!   slot in through [`LanguageModel::new`]
//! - Attack entry points that return the recovered key material alongside
//!   the decrypted plaintext and its score

pub mod alphabet;
pub mod analysis;
pub mod english;
pub mod error;
pub mod frequency;
pub mod keygen;
pub mod normalize;
pub mod shift;
pub mod transposition;

pub use analysis::{
    break_shift_cipher, break_transposition_cipher, CandidateScorer, DigraphScorer, ShiftBreak,
    TranspositionBreak,
};
pub use error::{CipherError, Result};
pub use frequency::LanguageModel;
pub use transposition::{Grid, TranspositionKey};
