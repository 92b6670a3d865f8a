//! Plaintext normalization.
//!
//! The ciphers operate on bare a-z sequences; this module turns readable
//! text into that form: lowercase everything, fold the common Latin
//! diacritics onto their base letters, and drop whatever remains outside the
//! alphabet (spaces, digits, punctuation). Decrypted output is usually fed
//! back to a human, so there is no inverse.

/// Normalizes `text` to a lowercase a-z sequence.
///
/// ```rust
/// assert_eq!(classical_ciphers::normalize::normalize("Olá, Mundo!"), "olamundo");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars().filter_map(fold).collect()
}

/// Maps one character into the alphabet, or `None` to drop it.
fn fold(symbol: char) -> Option<char> {
    match symbol {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => Some('a'),
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => Some('a'),
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => Some('e'),
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => Some('i'),
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => Some('o'),
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => Some('o'),
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => Some('u'),
        'ç' | 'Ç' => Some('c'),
        'ñ' | 'Ñ' => Some('n'),
        'ý' | 'ÿ' | 'Ý' => Some('y'),
        _ if symbol.is_ascii_alphabetic() => Some(symbol.to_ascii_lowercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_ascii() {
        assert_eq!(normalize("HelloWorld"), "helloworld");
        assert_eq!(normalize("MiXeD CaSe"), "mixedcase");
    }

    #[test]
    fn test_folds_diacritics() {
        assert_eq!(normalize("Olá, Mundo!"), "olamundo");
        assert_eq!(
            normalize("Ação, coração e ESPIONAGEM: não há segredos à noite!"),
            "acaocoracaoeespionagemnaohasegredosanoite"
        );
        assert_eq!(normalize("über señor"), "ubersenor");
    }

    #[test]
    fn test_drops_digits_and_punctuation() {
        assert_eq!(normalize("attack at 04:00, sector 7!"), "attackatsector");
    }

    #[test]
    fn test_drops_unknown_scripts() {
        assert_eq!(normalize("шифр abc"), "abc");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }
}
