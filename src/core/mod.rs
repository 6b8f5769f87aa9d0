pub mod checker;
pub mod palindrome;

pub use crate::domain::model::PalindromeReport;
pub use crate::domain::ports::WordProvider;
pub use crate::utils::error::Result;
