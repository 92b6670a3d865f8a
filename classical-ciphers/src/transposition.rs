//! Columnar transposition cipher transform.
//!
//! The plaintext is written row by row into a grid as wide as the keyword,
//! the grid is padded to a full rectangle with a deterministic alphabet run,
//! and the ciphertext is the concatenation of whole columns taken in the
//! alphabetical rank order of the keyword letters. Decryption refills those
//! columns in the same order and reads the grid back row by row, returning
//! the plaintext plus the padding that encryption appended.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::{CipherError, Result};

/// A validated transposition keyword.
///
/// Between 1 and 26 distinct lowercase letters. The column read-out order is
/// derived once at construction: entry `i` of
/// [`column_order`](Self::column_order) is the position in the keyword of its
/// `i`-th smallest letter. Repeated letters are rejected because they would
/// leave that derivation ambiguous, with one column read twice and another
/// never.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionKey {
    symbols: Vec<char>,
    order: Vec<usize>,
}

impl TranspositionKey {
    /// Validates `keyword` and derives the column read-out order.
    ///
    /// ```rust
    /// use classical_ciphers::TranspositionKey;
    ///
    /// let key = TranspositionKey::new("dcba")?;
    /// assert_eq!(key.column_order(), &[3, 2, 1, 0]);
    /// # Ok::<(), classical_ciphers::CipherError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidKeyLength`] unless the keyword has 1 to 26
    /// symbols, [`CipherError::KeySymbolOutsideAlphabet`] for anything but
    /// a-z, and [`CipherError::DuplicateKeySymbol`] for a repeated letter.
    pub fn new(keyword: &str) -> Result<Self> {
        let symbols: Vec<char> = keyword.chars().collect();
        if symbols.is_empty() || symbols.len() > ALPHABET_LEN {
            return Err(CipherError::InvalidKeyLength(symbols.len()));
        }
        let mut seen = [false; ALPHABET_LEN];
        for &symbol in &symbols {
            if !alphabet::contains(symbol) {
                return Err(CipherError::KeySymbolOutsideAlphabet(symbol));
            }
            let index = symbol as usize - 'a' as usize;
            if seen[index] {
                return Err(CipherError::DuplicateKeySymbol(symbol));
            }
            seen[index] = true;
        }
        // Index sort: order[i] is where the i-th smallest letter sits in the
        // keyword. Distinct symbols make the order unique.
        let mut order: Vec<usize> = (0..symbols.len()).collect();
        order.sort_by_key(|&position| symbols[position]);
        Ok(Self { symbols, order })
    }

    /// The keyword this key was built from.
    pub fn keyword(&self) -> String {
        self.symbols.iter().collect()
    }

    /// Number of keyword symbols, which is the number of grid columns.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// The derived column read-out order.
    pub fn column_order(&self) -> &[usize] {
        &self.order
    }
}

/// Rectangular character grid shared by the transform and the attack.
///
/// Cells are optional: encryption always fills every cell, but refilling
/// columns from a ciphertext whose length is not a whole number of columns
/// leaves trailing cells empty, and empty cells are skipped rather than
/// treated as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.cells.len() / self.cols
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at (`row`, `col`), or `None` when it was never filled.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells[row * self.cols + col]
    }

    /// One row as a slice of optional cells.
    pub fn row(&self, row: usize) -> &[Option<char>] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, symbol: char) {
        self.cells[row * self.cols + col] = Some(symbol);
    }

    /// Reads the grid row by row, skipping empty cells.
    pub fn read_row_major(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Number of horizontally adjacent filled cell pairs, which is the
    /// number of pairs digraph scoring can look at.
    pub fn filled_pair_count(&self) -> usize {
        (0..self.rows())
            .map(|row| {
                self.row(row)
                    .windows(2)
                    .filter(|pair| pair[0].is_some() && pair[1].is_some())
                    .count()
            })
            .sum()
    }
}

/// Rows needed to hold `len` characters in `cols` columns.
fn rows_for(len: usize, cols: usize) -> usize {
    let mut rows = len / cols;
    if len % cols != 0 {
        rows += 1;
    }
    rows
}

/// Fills a grid column by column: the `i`-th sequential block of `chars`
/// becomes column `order[i]`, top to bottom. Trailing cells stay empty when
/// `chars` runs out.
pub(crate) fn fill_columns(chars: &[char], order: &[usize]) -> Grid {
    let cols = order.len();
    if cols == 0 {
        return Grid::new(0, 0);
    }
    let rows = rows_for(chars.len(), cols);
    let mut grid = Grid::new(rows, cols);
    let mut pos = 0;
    for &col in order {
        for row in 0..rows {
            if pos < chars.len() {
                grid.set(row, col, chars[pos]);
                pos += 1;
            }
        }
    }
    grid
}

/// Encrypts `plaintext` by columnar transposition under `key`.
///
/// The grid is padded to a full rectangle with the alphabet run `a`, `b`,
/// `c`, ... (cell `i` beyond the plaintext receives the letter at index
/// `(i - plaintext_len) % 26`), so the ciphertext length is always a whole
/// multiple of the keyword length. The padding depends only on how many
/// cells are missing, never on the plaintext. Empty plaintext encrypts to an
/// empty ciphertext.
///
/// ```rust
/// use classical_ciphers::{transposition, TranspositionKey};
///
/// let key = TranspositionKey::new("dcba")?;
/// assert_eq!(transposition::encrypt("abcdefgh", &key), "dhcgbfae");
/// # Ok::<(), classical_ciphers::CipherError>(())
/// ```
pub fn encrypt(plaintext: &str, key: &TranspositionKey) -> String {
    let chars: Vec<char> = plaintext.chars().collect();
    let cols = key.len();
    let rows = rows_for(chars.len(), cols);
    let mut grid = Grid::new(rows, cols);
    for index in 0..rows * cols {
        let symbol = if index < chars.len() {
            chars[index]
        } else {
            alphabet::to_symbol((index - chars.len()) % ALPHABET_LEN)
        };
        grid.set(index / cols, index % cols, symbol);
    }

    let mut ciphertext = String::with_capacity(rows * cols);
    for &col in key.column_order() {
        for row in 0..rows {
            if let Some(symbol) = grid.get(row, col) {
                ciphertext.push(symbol);
            }
        }
    }
    ciphertext
}

/// Decrypts a columnar transposition under `key`.
///
/// Returns the plaintext followed by whatever padding encryption appended;
/// callers that know the original length trim the tail themselves. A
/// ciphertext shorter than a full rectangle leaves trailing cells empty and
/// they are skipped on read-out instead of failing.
///
/// ```rust
/// use classical_ciphers::{transposition, TranspositionKey};
///
/// let key = TranspositionKey::new("dcba")?;
/// assert_eq!(transposition::decrypt("dhcgbfae", &key), "abcdefgh");
/// # Ok::<(), classical_ciphers::CipherError>(())
/// ```
pub fn decrypt(ciphertext: &str, key: &TranspositionKey) -> String {
    let chars: Vec<char> = ciphertext.chars().collect();
    fill_columns(&chars, key.column_order()).read_row_major()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derives_column_order() {
        assert_eq!(
            TranspositionKey::new("dcba").unwrap().column_order(),
            &[3, 2, 1, 0]
        );
        assert_eq!(
            TranspositionKey::new("code").unwrap().column_order(),
            &[0, 2, 3, 1]
        );
        assert_eq!(
            TranspositionKey::new("cab").unwrap().column_order(),
            &[1, 2, 0]
        );
        assert_eq!(
            TranspositionKey::new("crypt").unwrap().column_order(),
            &[0, 3, 1, 4, 2]
        );
    }

    #[test]
    fn test_key_accepts_boundary_lengths() {
        assert_eq!(TranspositionKey::new("k").unwrap().column_order(), &[0]);
        let full = TranspositionKey::new("thequickbrownfxjmpsvlazydg").unwrap();
        assert_eq!(full.len(), 26);
    }

    #[test]
    fn test_key_rejects_bad_lengths() {
        assert!(matches!(
            TranspositionKey::new(""),
            Err(CipherError::InvalidKeyLength(0))
        ));
        assert!(matches!(
            TranspositionKey::new("abcdefghijklmnopqrstuvwxyza"),
            Err(CipherError::InvalidKeyLength(27))
        ));
    }

    #[test]
    fn test_key_rejects_duplicate_symbols() {
        assert!(matches!(
            TranspositionKey::new("abca"),
            Err(CipherError::DuplicateKeySymbol('a'))
        ));
        assert!(matches!(
            TranspositionKey::new("banana"),
            Err(CipherError::DuplicateKeySymbol('a'))
        ));
    }

    #[test]
    fn test_key_rejects_foreign_symbols() {
        assert!(matches!(
            TranspositionKey::new("aBcd"),
            Err(CipherError::KeySymbolOutsideAlphabet('B'))
        ));
        assert!(matches!(
            TranspositionKey::new("ab d"),
            Err(CipherError::KeySymbolOutsideAlphabet(' '))
        ));
    }

    #[test]
    fn test_keyword_round_trips() {
        let key = TranspositionKey::new("zebra").unwrap();
        assert_eq!(key.keyword(), "zebra");
        assert_eq!(key.len(), 5);
    }

    #[test]
    fn test_encrypt_known_vector() {
        let key = TranspositionKey::new("dcba").unwrap();
        assert_eq!(encrypt("abcdefgh", &key), "dhcgbfae");
    }

    #[test]
    fn test_encrypt_pads_with_alphabet_run() {
        let key = TranspositionKey::new("cab").unwrap();
        assert_eq!(encrypt("abcdefgh", &key), "behcfaadg");

        // two plaintext letters in a four column grid: padding is "ab"
        let key = TranspositionKey::new("dcba").unwrap();
        assert_eq!(encrypt("ab", &key), "baba");
    }

    #[test]
    fn test_decrypt_known_vector() {
        let key = TranspositionKey::new("dcba").unwrap();
        assert_eq!(decrypt("dhcgbfae", &key), "abcdefgh");
    }

    #[test]
    fn test_round_trip_keeps_padding() {
        let key = TranspositionKey::new("dcba").unwrap();
        let ciphertext = encrypt("helloworld", &key);
        assert_eq!(ciphertext, "lrbloaewdhol");
        assert_eq!(decrypt(&ciphertext, &key), "helloworldab");
    }

    #[test]
    fn test_round_trip_is_exact_for_full_rectangles() {
        let key = TranspositionKey::new("crypt").unwrap();
        let plaintext = "fifteenletterss";
        assert_eq!(decrypt(&encrypt(plaintext, &key), &key), plaintext);
    }

    #[test]
    fn test_empty_plaintext() {
        let key = TranspositionKey::new("dcba").unwrap();
        assert_eq!(encrypt("", &key), "");
        assert_eq!(decrypt("", &key), "");
    }

    #[test]
    fn test_fill_columns_leaves_short_tail_empty() {
        let chars: Vec<char> = "abcde".chars().collect();
        let grid = fill_columns(&chars, &[0, 1, 2]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(0, 0), Some('a'));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.read_row_major(), "acebd");
        assert_eq!(grid.filled_pair_count(), 3);
    }
}
