//! Command line parsing

use crate::error::{Error, Result};
use clap::{App, AppSettings, ErrorKind};
use std::ffi::OsString;

/// Usage text printed for `-h` or `--help`.
pub const HELP: &str = "Parser for language IPPcode22

Reads an IPPcode22 program from standard input and writes its XML
representation to standard output.

Arguments:
    -h, --help  print this help

Return codes:
    10 - invalid arguments
    21 - missing IPPcode22 header
    22 - unknown operation code
    23 - other syntactic error
";

/// Enumeration of everything an invocation can ask for
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print usage and exit without touching the input.
    Help,

    /// Translate standard input to standard output.
    Translate,
}

impl Command {
    /// Construct the clap application accepted by the translator.
    fn clap_app<'a, 'b>() -> App<'a, 'b> {
        App::new(env!("CARGO_PKG_NAME"))
            .about("Parser for language IPPcode22")
            .setting(AppSettings::DisableVersion)
            .setting(AppSettings::ColorNever)
    }

    /// Determine the command from the full argument list, program name
    /// included.
    ///
    /// At most one argument is accepted, and the only argument recognized is
    /// the help flag.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if args.len() > 2 {
            return Err(Error::InvalidArguments(format!(
                "expected at most one argument, found {}",
                args.len() - 1
            )));
        }

        match Self::clap_app().get_matches_from_safe(args) {
            Ok(_) => Ok(Command::Translate),
            Err(e) if e.kind == ErrorKind::HelpDisplayed => Ok(Command::Help),
            Err(e) => {
                let reason = e.message.lines().next().unwrap_or_default();

                Err(Error::InvalidArguments(
                    reason.trim_start_matches("error: ").to_string(),
                ))
            }
        }
    }
}
