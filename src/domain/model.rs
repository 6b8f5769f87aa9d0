use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of checking one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalindromeReport {
    pub word: String,
    pub is_palindrome: bool,
}

impl PalindromeReport {
    pub fn new(word: impl Into<String>, is_palindrome: bool) -> Self {
        Self {
            word: word.into(),
            is_palindrome,
        }
    }
}

impl fmt::Display for PalindromeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_palindrome {
            write!(f, "Input '{}' is a palindrome.", self.word)
        } else {
            write!(f, "Input '{}' is not a palindrome.", self.word)
        }
    }
}
