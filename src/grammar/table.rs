//! Static per-opcode operand grammar

use crate::grammar::Opcode;
use std::collections::HashMap;
use std::fmt;

/// What an operand position accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A variable reference, `FRAME@name`.
    Var,
    /// A bare identifier naming a label.
    Label,
    /// One of the type names `int`, `string` or `bool`.
    Type,
    /// Any variable reference or literal.
    Symb,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Var => write!(f, "a variable"),
            Slot::Label => write!(f, "a label"),
            Slot::Type => write!(f, "a type name"),
            Slot::Symb => write!(f, "a variable or literal"),
        }
    }
}

/// The operand grammar of a single opcode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    opcode: Opcode,
    slots: &'static [Slot],
}

impl Rule {
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Number of operands the opcode takes.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &'static [Slot] {
        self.slots
    }
}

/// Opcodes sharing an operand signature, grouped by that signature.
static SIGNATURES: [(&[Opcode], &[Slot]); 8] = {
    use Opcode::*;
    use Slot::*;

    [
        (&[CreateFrame, PushFrame, PopFrame, Return, Break], &[]),
        (&[DefVar, PopS], &[Var]),
        (&[Call, Opcode::Label, Jump], &[Slot::Label]),
        (&[PushS, Write], &[Symb]),
        (&[Move, Int2Char, StrLen, Opcode::Type, Not], &[Var, Symb]),
        (&[Read], &[Var, Slot::Type]),
        (
            &[
                Add, Sub, Mul, IDiv, Lt, Gt, Eq, And, Or, Stri2Int, Concat, GetChar, SetChar,
            ],
            &[Var, Symb, Symb],
        ),
        (&[JumpIfEq, JumpIfNeq], &[Slot::Label, Symb, Symb]),
    ]
};

lazy_static! {
    static ref GRAMMAR: HashMap<Opcode, Rule> = {
        let mut grammar = HashMap::new();

        for &(opcodes, slots) in SIGNATURES.iter() {
            for &opcode in opcodes {
                grammar.insert(opcode, Rule { opcode, slots });
            }
        }

        grammar
    };
}

/// The grammar rule for an opcode.
pub fn rule(opcode: Opcode) -> Option<&'static Rule> {
    GRAMMAR.get(&opcode)
}

/// Find the grammar rule for an opcode as written in source.
///
/// Opcode names are matched case-insensitively. Names that are not part of
/// the language yield `None`.
pub fn lookup(name: &str) -> Option<&'static Rule> {
    Opcode::from_source(name).and_then(rule)
}
