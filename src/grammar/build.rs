//! Instruction validation and construction

use crate::ast::{Instruction, Operand, OperandKind};
use crate::grammar::{lookup, BuildError, Opcode, SyntaxError, Slot};
use crate::token;

/// Validates source instructions against the grammar and numbers the ones
/// that pass.
///
/// A builder is meant to live for exactly one program translation: the order
/// it hands out starts at 1 and grows by one for every instruction built.
#[derive(Debug)]
pub struct Builder {
    next_order: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Builder { next_order: 1 }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The order the next successfully built instruction will receive.
    pub fn next_order(&self) -> usize {
        self.next_order
    }

    /// Validate an opcode and its operand tokens and build the instruction.
    ///
    /// Rejected instructions do not consume an order number.
    pub fn build(&mut self, opcode: &str, operands: &[&str]) -> Result<Instruction, BuildError> {
        let rule =
            lookup(opcode).ok_or_else(|| BuildError::UnknownOperation(opcode.to_string()))?;

        if operands.len() != rule.arity() {
            return Err(SyntaxError::Arity {
                opcode: rule.opcode(),
                expected: rule.arity(),
                found: operands.len(),
            }
            .into());
        }

        let operands = rule
            .slots()
            .iter()
            .zip(operands)
            .enumerate()
            .map(|(i, (slot, token))| accept(rule.opcode(), i + 1, *slot, token))
            .collect::<Result<Vec<_>, _>>()?;

        let order = self.next_order;
        self.next_order += 1;

        Ok(Instruction::new(order, rule.opcode(), operands))
    }
}

/// Check a single operand token against its slot and convert it.
fn accept(opcode: Opcode, index: usize, slot: Slot, token: &str) -> Result<Operand, SyntaxError> {
    let operand = match slot {
        Slot::Var if token::is_variable(token) => Some(Operand::new(OperandKind::Variable, token)),
        Slot::Label if token::is_identifier(token) => Some(Operand::new(OperandKind::Label, token)),
        Slot::Type if token::is_type_name(token) => Some(Operand::new(OperandKind::Type, token)),
        Slot::Symb => token::classify(token).map(|kind| Operand::symbol(kind, token)),
        _ => None,
    };

    operand.ok_or_else(|| SyntaxError::Operand {
        opcode,
        index,
        expected: slot,
        token: token.to_string(),
    })
}
