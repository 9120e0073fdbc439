//! Emitter test suite

use crate::ast::{Instruction, Operand, OperandKind, Program};
use crate::emit::{Emitter, Xml};
use crate::grammar::Opcode;

fn render(program: &Program) -> String {
    let mut out = Vec::new();

    Xml().emit_program(&mut out, program).unwrap();

    String::from_utf8(out).unwrap()
}

#[test]
fn empty_program() {
    assert_eq!(
        render(&Program::new()),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <program language=\"IPPcode22\">\n\
         </program>\n"
    );
}

#[test]
fn instructions_in_order() {
    let mut program = Program::new();

    program.append_instr(Instruction::new(
        1,
        Opcode::DefVar,
        vec![Operand::new(OperandKind::Variable, "GF@x")],
    ));
    program.append_instr(Instruction::new(
        2,
        Opcode::Move,
        vec![
            Operand::new(OperandKind::Variable, "GF@x"),
            Operand::new(OperandKind::Integer, "5"),
        ],
    ));
    program.append_instr(Instruction::new(3, Opcode::Break, vec![]));

    assert_eq!(
        render(&program),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <program language=\"IPPcode22\">\n\
         \x20   <instruction order=\"1\" opcode=\"DEFVAR\">\n\
         \x20       <arg1 type=\"var\">GF@x</arg1>\n\
         \x20   </instruction>\n\
         \x20   <instruction order=\"2\" opcode=\"MOVE\">\n\
         \x20       <arg1 type=\"var\">GF@x</arg1>\n\
         \x20       <arg2 type=\"int\">5</arg2>\n\
         \x20   </instruction>\n\
         \x20   <instruction order=\"3\" opcode=\"BREAK\">\n\
         \x20   </instruction>\n\
         </program>\n"
    );
}

#[test]
fn operand_kinds_and_values() {
    let instr = Instruction::new(
        7,
        Opcode::JumpIfEq,
        vec![
            Operand::new(OperandKind::Label, "end"),
            Operand::symbol(OperandKind::String, "string@a<b"),
            Operand::new(OperandKind::Nil, "nil"),
        ],
    );
    let mut out = Vec::new();

    Xml().emit_instr(&mut out, &instr).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "    <instruction order=\"7\" opcode=\"JUMPIFEQ\">\n\
         \x20       <arg1 type=\"label\">end</arg1>\n\
         \x20       <arg2 type=\"string\">a&lt;b</arg2>\n\
         \x20       <arg3 type=\"nil\">nil</arg3>\n\
         \x20   </instruction>\n"
    );
}
