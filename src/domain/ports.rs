/// Where the engine gets the word to check from.
pub trait WordProvider {
    fn word(&self) -> &str;
}

impl WordProvider for &str {
    fn word(&self) -> &str {
        self
    }
}

impl WordProvider for String {
    fn word(&self) -> &str {
        self
    }
}
