//! Error types for instruction validation

use crate::grammar::{Opcode, Slot};
use thiserror::Error;

/// Why a recognized instruction was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The instruction has the wrong number of operands.
    #[error("{opcode} takes {expected} operand(s), found {found}")]
    Arity {
        opcode: Opcode,
        expected: usize,
        found: usize,
    },

    /// An operand does not have the shape its position requires.
    ///
    /// `index` counts from 1, matching the `argN` numbering of the output.
    #[error("operand {index} of {opcode} must be {expected}, found `{token}`")]
    Operand {
        opcode: Opcode,
        index: usize,
        expected: Slot,
        token: String,
    },
}

/// Error type for building a single instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The opcode is not part of the language.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
