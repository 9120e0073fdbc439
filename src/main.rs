#[macro_use]
extern crate lazy_static;

mod ast;
mod cli;
mod emit;
mod error;
mod grammar;
mod input;
mod token;

use std::{io, process};
use tracing_subscriber::EnvFilter;

/// Route diagnostics to stderr, filtered by `RUST_LOG`.
///
/// Only warnings and worse are shown by default so that a successful run
/// leaves stderr empty.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();

    if let Err(e) = cli::main() {
        eprintln!("[ERROR] {}", e);
        process::exit(e.exit_code());
    }
}
