use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalindromeError {
    #[error("{message}")]
    Usage { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PalindromeError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Usage { message } => format!("Invalid command line: {}", message),
            Self::Io(e) => format!("Could not write output: {}", e),
            Self::Serialization(e) => format!("Could not render report: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "Pass the word to check with --word <WORD>, or run with --help",
            Self::Io(_) => "Check that standard output is writable (closed pipe?)",
            Self::Serialization(_) => "Retry with --format text",
        }
    }
}

#[cfg(feature = "cli")]
impl From<clap::Error> for PalindromeError {
    fn from(err: clap::Error) -> Self {
        // clap renders "error: <message>\n\nUsage: ...\n\nFor more information...";
        // the usage block is printed separately, so keep the first paragraph
        let rendered = err.to_string();
        let message = rendered
            .lines()
            .take_while(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        let message = message.strip_prefix("error: ").unwrap_or(&message);
        Self::usage(message.trim_end())
    }
}

pub type Result<T> = std::result::Result<T, PalindromeError>;
