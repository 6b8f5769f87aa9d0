use crate::core::palindrome::is_palindrome;
use crate::core::{PalindromeReport, WordProvider};

/// Runs one check against whatever supplies the word.
pub struct PalindromeEngine<W: WordProvider> {
    provider: W,
}

impl<W: WordProvider> PalindromeEngine<W> {
    pub fn new(provider: W) -> Self {
        Self { provider }
    }

    pub fn run(&self) -> PalindromeReport {
        let word = self.provider.word();
        tracing::debug!(
            "Checking word {:?} ({} chars, {} bytes)",
            word,
            word.chars().count(),
            word.len()
        );

        let result = is_palindrome(word);
        tracing::info!("Word {:?} palindrome: {}", word, result);

        PalindromeReport::new(word, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWord(&'static str);

    impl WordProvider for FixedWord {
        fn word(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_engine_reports_palindrome() {
        let engine = PalindromeEngine::new(FixedWord("abccba"));
        assert_eq!(engine.run(), PalindromeReport::new("abccba", true));
    }

    #[test]
    fn test_engine_reports_non_palindrome() {
        let engine = PalindromeEngine::new("110110001".to_string());
        let report = engine.run();
        assert!(!report.is_palindrome);
        assert_eq!(report.word, "110110001");
    }

    #[test]
    fn test_engine_accepts_str() {
        assert!(PalindromeEngine::new("").run().is_palindrome);
    }
}
