//! Operand AST type

use serde::{Deserialize, Serialize};
use std::{fmt, str};

/// The syntactic kind of an operand, as written into the output document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandKind {
    #[serde(rename = "var")]
    Variable,
    #[serde(rename = "int")]
    Integer,
    Bool,
    String,
    Nil,
    Label,
    Type,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = serde_plain::to_string(self).map_err(|_| fmt::Error)?;

        write!(f, "{}", name)
    }
}

impl str::FromStr for OperandKind {
    type Err = serde_plain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s)
    }
}

/// A single typed instruction operand.
///
/// The stored value is canonical: literal operands lose their `kind@` prefix,
/// variables keep the full `FRAME@name` form, and string payloads have `<` and
/// `>` replaced by their entity forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    kind: OperandKind,
    value: String,
}

impl Operand {
    pub fn new(kind: OperandKind, value: &str) -> Self {
        Operand {
            kind,
            value: value.to_string(),
        }
    }

    /// Construct an operand from a symbol token that has already been
    /// classified as `kind`.
    pub fn symbol(kind: OperandKind, token: &str) -> Self {
        match kind {
            OperandKind::Variable => Self::new(kind, token),
            OperandKind::String => Self::new(kind, &escape_entities(strip_kind(token))),
            _ => Self::new(kind, strip_kind(token)),
        }
    }

    pub fn kind(&self) -> OperandKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Everything after the first `@`, or the whole token if there is none.
fn strip_kind(token: &str) -> &str {
    match token.find('@') {
        Some(at) => &token[at + 1..],
        None => token,
    }
}

fn escape_entities(value: &str) -> String {
    value.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use crate::ast::{Operand, OperandKind};
    use std::str::FromStr;

    #[test]
    fn kind_names() {
        assert_eq!(OperandKind::Variable.to_string(), "var");
        assert_eq!(OperandKind::Integer.to_string(), "int");
        assert_eq!(OperandKind::Bool.to_string(), "bool");
        assert_eq!(OperandKind::String.to_string(), "string");
        assert_eq!(OperandKind::Nil.to_string(), "nil");
        assert_eq!(OperandKind::Label.to_string(), "label");
        assert_eq!(OperandKind::Type.to_string(), "type");
    }

    #[test]
    fn kind_parse() {
        assert_eq!(OperandKind::from_str("var").unwrap(), OperandKind::Variable);
        assert_eq!(OperandKind::from_str("int").unwrap(), OperandKind::Integer);
        assert!(OperandKind::from_str("Variable").is_err());
    }

    #[test]
    fn variable_keeps_frame() {
        let op = Operand::symbol(OperandKind::Variable, "LF@x");

        assert_eq!(op.kind(), OperandKind::Variable);
        assert_eq!(op.value(), "LF@x");
    }

    #[test]
    fn literal_drops_prefix() {
        assert_eq!(Operand::symbol(OperandKind::Integer, "int@42").value(), "42");
        assert_eq!(Operand::symbol(OperandKind::Integer, "int@").value(), "");
        assert_eq!(Operand::symbol(OperandKind::Bool, "bool@true").value(), "true");
        assert_eq!(Operand::symbol(OperandKind::Nil, "nil@nil").value(), "nil");
    }

    #[test]
    fn string_only_splits_first_at() {
        let op = Operand::symbol(OperandKind::String, "string@mail@example");

        assert_eq!(op.value(), "mail@example");
    }

    #[test]
    fn string_escapes_angle_brackets() {
        let op = Operand::symbol(OperandKind::String, "string@a<b>c");

        assert_eq!(op.value(), "a&lt;b&gt;c");
    }
}
