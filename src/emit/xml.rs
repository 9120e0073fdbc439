//! XML document output

use crate::ast::{Instruction, Operand, Program};
use crate::emit::Emitter;
use std::io::{Result, Write};

const INDENT: &str = "    ";

/// The XML representation consumed by the interpreter.
///
/// Operand values are written verbatim. String literals have already had
/// their angle brackets replaced with entities when they were built, and no
/// other operand kind can contain them.
#[derive(Copy, Clone, Debug, Default)]
pub struct Xml();

impl Emitter for Xml {
    fn emit_prologue(&self, stream: &mut dyn Write, program: &Program) -> Result<()> {
        writeln!(stream, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(stream, "<program language=\"{}\">", program.language())
    }

    fn emit_instr_start(&self, stream: &mut dyn Write, instr: &Instruction) -> Result<()> {
        writeln!(
            stream,
            "{}<instruction order=\"{}\" opcode=\"{}\">",
            INDENT,
            instr.order(),
            instr.opcode()
        )
    }

    fn emit_operand(
        &self,
        stream: &mut dyn Write,
        _instr: &Instruction,
        operand_index: usize,
        operand: &Operand,
    ) -> Result<()> {
        let arg = operand_index + 1;

        writeln!(
            stream,
            "{}{}<arg{} type=\"{}\">{}</arg{}>",
            INDENT,
            INDENT,
            arg,
            operand.kind(),
            operand.value(),
            arg
        )
    }

    fn emit_instr_end(&self, stream: &mut dyn Write, _instr: &Instruction) -> Result<()> {
        writeln!(stream, "{}</instruction>", INDENT)
    }

    fn emit_epilogue(&self, stream: &mut dyn Write, _program: &Program) -> Result<()> {
        writeln!(stream, "</program>")
    }
}
