//! Token shape predicates
//!
//! None of these look at surrounding context: a token is a variable, a literal
//! or an identifier purely because of how it is spelled.

use crate::ast::OperandKind;
use crate::token::escape;
use serde::Deserialize;

/// Frames a variable reference may name.
static FRAMES: [&str; 3] = ["LF", "TF", "GF"];

/// Characters other than ASCII letters allowed anywhere in an identifier.
static IDENT_SPECIALS: [char; 8] = ['_', '-', '$', '&', '%', '*', '!', '?'];

/// Names accepted in a type operand position, e.g. the second operand of READ.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Int,
    String,
    Bool,
}

fn is_ident_head(c: char) -> bool {
    c.is_ascii_alphabetic() || IDENT_SPECIALS.contains(&c)
}

fn is_ident_tail(c: char) -> bool {
    c.is_ascii_alphanumeric() || IDENT_SPECIALS.contains(&c)
}

/// Label and variable name shape: a letter or special character followed by
/// any run of letters, digits and special characters.
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();

    match chars.next() {
        Some(head) if is_ident_head(head) => chars.all(is_ident_tail),
        _ => false,
    }
}

/// `LF@name`, `TF@name` or `GF@name`.
pub fn is_variable(token: &str) -> bool {
    match token.split_once('@') {
        Some((frame, name)) => FRAMES.contains(&frame) && is_identifier(name),
        None => false,
    }
}

/// `int@` followed by an optional sign and a possibly empty run of digits.
pub fn is_integer(token: &str) -> bool {
    match token.strip_prefix("int@") {
        Some(body) => {
            let digits = body
                .strip_prefix(|c: char| c == '-' || c == '+')
                .unwrap_or(body);

            digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

pub fn is_bool(token: &str) -> bool {
    token == "bool@true" || token == "bool@false"
}

pub fn is_nil(token: &str) -> bool {
    token == "nil@nil"
}

/// `string@` followed by a payload whose escape sequences are all valid.
pub fn is_string(token: &str) -> bool {
    match token.strip_prefix("string@") {
        Some(payload) => escape::validate(payload),
        None => false,
    }
}

/// Any variable reference or literal.
pub fn is_symbol(token: &str) -> bool {
    classify(token).is_some()
}

pub fn is_type_name(token: &str) -> bool {
    serde_plain::from_str::<TypeName>(token).is_ok()
}

/// Determine the kind of a symbol token.
///
/// Kinds are tried in the order variable, integer, bool, string, nil; tokens
/// that are not symbols yield `None`.
pub fn classify(token: &str) -> Option<OperandKind> {
    if is_variable(token) {
        Some(OperandKind::Variable)
    } else if is_integer(token) {
        Some(OperandKind::Integer)
    } else if is_bool(token) {
        Some(OperandKind::Bool)
    } else if is_string(token) {
        Some(OperandKind::String)
    } else if is_nil(token) {
        Some(OperandKind::Nil)
    } else {
        None
    }
}
