//! CLI entry point

use crate::cli::{self, Command};
use crate::error::{Error, Result};
use std::env;
use std::io::{self, Write};
use tracing::debug;

pub fn main() -> Result<()> {
    let command = Command::from_args(env::args_os())?;

    debug!(?command, "parsed command line");

    match command {
        Command::Help => {
            let stdout = io::stdout();
            let mut out = stdout.lock();

            out.write_all(cli::HELP.as_bytes()).map_err(Error::Output)?;
            out.flush().map_err(Error::Output)?;
        }
        Command::Translate => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut out = io::BufWriter::new(stdout.lock());

            cli::run(stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
