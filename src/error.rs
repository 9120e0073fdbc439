//! Error type for translation runs

use crate::ast::HEADER;
use crate::grammar::{BuildError, SyntaxError};
use std::{io, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The command line could not be understood.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The first content line was not the language header.
    #[error("Missing or invalid header, expected `{}`", HEADER)]
    MissingHeader,

    /// An instruction named an opcode the language does not have.
    #[error("line {line}: Invalid or unknown operation `{opcode}`")]
    UnknownOperation { line: usize, opcode: String },

    /// An instruction with a known opcode failed validation.
    #[error("line {line}: Syntax error: {reason}")]
    Syntax { line: usize, reason: SyntaxError },

    /// Underlying cause of error is reading the source program
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Underlying cause of error is writing the output document
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// Attach a source line number to an instruction build failure.
    pub fn at_line(line: usize, err: BuildError) -> Self {
        match err {
            BuildError::UnknownOperation(opcode) => Error::UnknownOperation { line, opcode },
            BuildError::Syntax(reason) => Error::Syntax { line, reason },
        }
    }

    /// The process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArguments(_) => 10,
            Error::Input(_) => 11,
            Error::Output(_) => 12,
            Error::MissingHeader => 21,
            Error::UnknownOperation { .. } => 22,
            Error::Syntax { .. } => 23,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
