pub mod runner;

pub use runner::{dispatch, parse_args, run, Invocation, Outcome};
