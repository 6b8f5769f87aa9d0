//! The palindrome check itself. Pure functions, no I/O.
//!
//! Words are compared code point by code point: `"añña"` reverses to itself,
//! while reversing the UTF-8 bytes would not even produce valid text. There is
//! no case folding and no whitespace or punctuation stripping.

/// Returns `true` when `word` reads the same backwards.
///
/// Total over all strings; the empty string and any single character are
/// palindromes.
pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}

/// Code-point-wise reversal of `word`.
pub fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character() {
        for word in ["a", "b", "c", "x", "0", "9", "ñ", "語", " "] {
            assert!(is_palindrome(word), "{word:?} should be a palindrome");
        }
    }

    #[test]
    fn test_empty_string() {
        assert!(is_palindrome(""));
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_big() {
        assert!(is_palindrome("abccba"));
        assert!(!is_palindrome("abcdef"));
    }

    #[test]
    fn test_binary() {
        assert!(is_palindrome("010010"));
        assert!(!is_palindrome("110110001"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_palindrome("Abba"));
        assert!(is_palindrome("AbbA"));
    }

    #[test]
    fn test_no_whitespace_or_punctuation_stripping() {
        assert!(!is_palindrome("never odd or even"));
        assert!(!is_palindrome("abba!"));
        assert!(is_palindrome("a b a"));
    }

    #[test]
    fn test_multibyte_code_points() {
        assert!(is_palindrome("añña"));
        assert!(!is_palindrome("ñaña"));
        assert!(is_palindrome("日本日"));
        assert_eq!(reverse("añb"), "bña");
    }

    #[test]
    fn test_matches_reverse_equality() {
        for word in ["", "a", "ab", "aba", "abccba", "abcdef", "010010", "110110001", "añña"] {
            assert_eq!(is_palindrome(word), reverse(word) == word, "{word:?}");
            assert_eq!(is_palindrome(word), is_palindrome(&reverse(word)), "{word:?}");
        }
    }
}
