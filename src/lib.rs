#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::{run, Outcome};
#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use crate::core::{
    checker::PalindromeEngine,
    palindrome::{is_palindrome, reverse},
};
pub use crate::domain::model::PalindromeReport;
pub use crate::utils::error::{PalindromeError, Result};
