//! Emitter trait

use crate::ast::{Instruction, Operand, Program};
use std::io::{Result, Write};

/// Trait which represents a particular output document syntax.
///
/// Implementations only provide the individual pieces; `emit_instr` and
/// `emit_program` walk the program in order and call them.
pub trait Emitter {
    /// Emit everything that precedes the first instruction, such as a
    /// document declaration and the opening root element.
    fn emit_prologue(&self, stream: &mut dyn Write, program: &Program) -> Result<()>;

    /// Emit the start of an instruction.
    ///
    /// This method is given the entire instruction as a reference; but it must
    /// not render its operands, as that is covered by `emit_operand`.
    fn emit_instr_start(&self, stream: &mut dyn Write, instr: &Instruction) -> Result<()>;

    /// Emit a single operand.
    ///
    /// The index counts from zero in operand order.
    fn emit_operand(
        &self,
        stream: &mut dyn Write,
        instr: &Instruction,
        operand_index: usize,
        operand: &Operand,
    ) -> Result<()>;

    /// Emit the end of an instruction.
    fn emit_instr_end(&self, stream: &mut dyn Write, instr: &Instruction) -> Result<()>;

    /// Emit everything that follows the last instruction.
    fn emit_epilogue(&self, stream: &mut dyn Write, program: &Program) -> Result<()>;

    /// Emit an entire instruction.
    fn emit_instr(&self, stream: &mut dyn Write, instr: &Instruction) -> Result<()> {
        self.emit_instr_start(stream, instr)?;

        for (i, operand) in instr.iter_operands().enumerate() {
            self.emit_operand(stream, instr, i, operand)?;
        }

        self.emit_instr_end(stream, instr)?;

        Ok(())
    }

    /// Emit an entire program.
    fn emit_program(&self, stream: &mut dyn Write, program: &Program) -> Result<()> {
        self.emit_prologue(stream, program)?;

        for instr in program.iter_instrs() {
            self.emit_instr(stream, instr)?;
        }

        self.emit_epilogue(stream, program)?;

        Ok(())
    }
}
