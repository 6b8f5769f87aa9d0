use crate::core::WordProvider;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Input '<word>' is [not] a palindrome.
    #[default]
    Text,
    /// {"word": ..., "is_palindrome": ...}
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "palindrome-checker")]
#[command(version, about = "Check whether a word is a palindrome")]
pub struct CliConfig {
    /// The word that might be a palindrome.
    #[arg(short, long)]
    pub word: String,

    /// How the result is printed.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl WordProvider for CliConfig {
    fn word(&self) -> &str {
        &self.word
    }
}
