//! Instruction AST type

use crate::ast::Operand;
use crate::grammar::Opcode;
use std::slice;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Position of the instruction within the program, starting at 1.
    order: usize,
    /// The instruction being executed
    opcode: Opcode,
    /// Operands for the instruction, if any
    operands: Vec<Operand>,
}

impl Instruction {
    pub fn new(order: usize, opcode: Opcode, operands: Vec<Operand>) -> Self {
        Instruction {
            order,
            opcode,
            operands,
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn iter_operands(&self) -> slice::Iter<Operand> {
        self.operands.iter()
    }
}
