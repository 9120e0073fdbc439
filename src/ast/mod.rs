//! An abstract syntax tree representation of translated IPPcode22 programs

mod instr;
mod operand;
mod program;

pub use instr::Instruction;
pub use operand::{Operand, OperandKind};
pub use program::{Program, HEADER};
