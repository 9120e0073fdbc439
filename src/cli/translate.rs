//! Translation of a whole source program

use crate::ast::{Program, HEADER};
use crate::emit::{Emitter, Xml};
use crate::error::{Error, Result};
use crate::grammar::Builder;
use crate::input;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Translate every line of `source` into a program.
///
/// The first line carrying any tokens must be exactly the language header.
/// Blank and comment-only lines are skipped wherever they appear. The first
/// invalid instruction aborts the translation.
pub fn translate<R: BufRead>(source: R) -> Result<Program> {
    let mut program = Program::new();
    let mut builder = Builder::new();
    let mut header_seen = false;

    for (index, line) in source.lines().enumerate() {
        let line = line.map_err(Error::Input)?;
        let line_no = index + 1;
        let tokens = input::sanitize(&line);

        let (opcode, operands) = match tokens.split_first() {
            Some(split) => split,
            None => {
                trace!(line = line_no, "skipping blank line");
                continue;
            }
        };

        if !header_seen {
            if tokens != [HEADER] {
                return Err(Error::MissingHeader);
            }

            debug!(line = line_no, "found language header");
            header_seen = true;
            continue;
        }

        let instr = builder
            .build(opcode, operands)
            .map_err(|e| Error::at_line(line_no, e))?;

        trace!(
            line = line_no,
            order = instr.order(),
            opcode = %instr.opcode(),
            "built instruction"
        );

        program.append_instr(instr);
    }

    if !header_seen {
        return Err(Error::MissingHeader);
    }

    debug!(instructions = program.len(), "translation finished");

    Ok(program)
}

/// Translate `source` and write the resulting XML document to `sink`.
///
/// Nothing is written unless the whole program translates.
pub fn run<R, W>(source: R, sink: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let program = translate(source)?;

    Xml().emit_program(sink, &program).map_err(Error::Output)?;
    sink.flush().map_err(Error::Output)?;

    Ok(())
}
