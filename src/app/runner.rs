//! Top level of one invocation: parse the command line, run the check, write
//! the result. Writers are passed in so the whole flow runs in tests without
//! spawning a process.

use crate::config::{CliConfig, OutputFormat};
use crate::core::checker::PalindromeEngine;
use crate::core::PalindromeReport;
use crate::utils::error::{PalindromeError, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::Write;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// What the command line asked for.
#[derive(Debug, Clone)]
pub enum Invocation {
    Check(CliConfig),
    /// `--help` or `--version`; carries the text clap rendered.
    Info(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Checked(PalindromeReport),
    HelpShown,
    UsageError,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Checked(_) | Outcome::HelpShown => EXIT_SUCCESS,
            Outcome::UsageError => EXIT_USAGE,
        }
    }
}

/// Parses `args` (program name first). Help and version requests win over a
/// missing `--word`.
pub fn parse_args<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliConfig::try_parse_from(args) {
        Ok(config) => Ok(Invocation::Check(config)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Info(e.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Acts on an already parsed command line. Only I/O and serialization
/// failures come back as `Err`; a usage error is reported on `err` and
/// becomes `Outcome::UsageError`.
pub fn dispatch<O, E>(parsed: Result<Invocation>, out: &mut O, err: &mut E) -> Result<Outcome>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match parsed {
        Ok(Invocation::Check(config)) => {
            tracing::debug!("CLI config: {:?}", config);
            let format = config.format;
            let report = PalindromeEngine::new(config).run();
            write_report(out, &report, format)?;
            Ok(Outcome::Checked(report))
        }
        Ok(Invocation::Info(text)) => {
            write!(out, "{}", text)?;
            out.flush()?;
            Ok(Outcome::HelpShown)
        }
        Err(PalindromeError::Usage { message }) => {
            tracing::debug!("Usage error: {}", message);
            writeln!(err, "error: {}", message)?;
            writeln!(err)?;
            write!(err, "{}", CliConfig::command().render_help())?;
            err.flush()?;
            Ok(Outcome::UsageError)
        }
        Err(e) => Err(e),
    }
}

/// `parse_args` followed by `dispatch`.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    dispatch(parse_args(args), out, err)
}

pub fn write_report<O>(out: &mut O, report: &PalindromeReport, format: OutputFormat) -> Result<()>
where
    O: Write + ?Sized,
{
    match format {
        OutputFormat::Text => writeln!(out, "{}", report)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(report)?)?,
    }
    out.flush()?;
    Ok(())
}
