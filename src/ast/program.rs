//! Top-level AST type which represents a whole translated program.

use crate::ast::Instruction;
use std::slice;

/// The mandatory first content line of every source program.
pub const HEADER: &str = ".IPPcode22";

/// The language identifier written onto the document root.
pub const LANGUAGE: &str = "IPPcode22";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    language: &'static str,
    instructions: Vec<Instruction>,
}

impl Default for Program {
    fn default() -> Self {
        Program {
            language: LANGUAGE,
            instructions: Vec::new(),
        }
    }
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> &str {
        self.language
    }

    pub fn append_instr(&mut self, instr: Instruction) {
        self.instructions.push(instr);
    }

    pub fn iter_instrs(&self) -> slice::Iter<Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
