//! Opcode enumeration

use serde::{Deserialize, Serialize};
use std::{fmt, str};

/// Every operation the language defines.
///
/// The textual form of an opcode is its uppercase name, e.g. `INT2CHAR`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Opcode {
    CreateFrame,
    PushFrame,
    PopFrame,
    Return,
    Break,
    DefVar,
    PopS,
    Call,
    Label,
    Jump,
    PushS,
    Write,
    Move,
    Int2Char,
    StrLen,
    Type,
    Not,
    Read,
    Add,
    Sub,
    Mul,
    IDiv,
    Lt,
    Gt,
    Eq,
    And,
    Or,
    Stri2Int,
    Concat,
    GetChar,
    SetChar,
    JumpIfEq,
    JumpIfNeq,
}

impl Opcode {
    pub fn iter() -> impl IntoIterator<Item = Self> {
        use Opcode::*;

        vec![
            CreateFrame,
            PushFrame,
            PopFrame,
            Return,
            Break,
            DefVar,
            PopS,
            Call,
            Label,
            Jump,
            PushS,
            Write,
            Move,
            Int2Char,
            StrLen,
            Type,
            Not,
            Read,
            Add,
            Sub,
            Mul,
            IDiv,
            Lt,
            Gt,
            Eq,
            And,
            Or,
            Stri2Int,
            Concat,
            GetChar,
            SetChar,
            JumpIfEq,
            JumpIfNeq,
        ]
    }

    /// Parse an opcode as written in source, ignoring case.
    pub fn from_source(name: &str) -> Option<Self> {
        name.to_ascii_uppercase().parse().ok()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = serde_plain::to_string(self).map_err(|_| fmt::Error)?;

        write!(f, "{}", name)
    }
}

impl str::FromStr for Opcode {
    type Err = serde_plain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s)
    }
}
