//! CLI commands

mod common;
mod main;
mod translate;

pub use common::{Command, HELP};
pub use main::main;
pub use translate::{run, translate};
