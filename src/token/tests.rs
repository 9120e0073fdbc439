//! Token classifier test suite

use crate::ast::OperandKind as Kind;
use crate::token::{
    classify, is_bool, is_identifier, is_integer, is_nil, is_string, is_symbol, is_type_name,
    is_variable,
};

macro_rules! assert_kind {
    ($token: expr, $kind: expr) => {
        assert_eq!(classify($token), Some($kind), "classifying {:?}", $token)
    };
}

macro_rules! assert_not_symbol {
    ($token: expr) => {
        assert_eq!(classify($token), None, "classifying {:?}", $token)
    };
}

#[test]
fn variables() {
    assert!(is_variable("GF@x"));
    assert!(is_variable("LF@counter_1"));
    assert!(is_variable("TF@-$&%*!?"));
    assert!(is_variable("GF@_"));

    assert!(!is_variable("GF@"));
    assert!(!is_variable("GF@1x"));
    assert!(!is_variable("XF@x"));
    assert!(!is_variable("gf@x"));
    assert!(!is_variable("GF@x@y"));
    assert!(!is_variable("GF@a.b"));
    assert!(!is_variable("GFx"));
}

#[test]
fn integers() {
    assert!(is_integer("int@42"));
    assert!(is_integer("int@-7"));
    assert!(is_integer("int@+7"));
    assert!(is_integer("int@0"));
    assert!(is_integer("int@"));
    assert!(is_integer("int@-"));

    assert!(!is_integer("int@4a"));
    assert!(!is_integer("int@--1"));
    assert!(!is_integer("int@0x10"));
    assert!(!is_integer("INT@1"));
    assert!(!is_integer("42"));
}

#[test]
fn bools_and_nil() {
    assert!(is_bool("bool@true"));
    assert!(is_bool("bool@false"));
    assert!(!is_bool("bool@TRUE"));
    assert!(!is_bool("bool@"));

    assert!(is_nil("nil@nil"));
    assert!(!is_nil("nil@"));
    assert!(!is_nil("nil@null"));
}

#[test]
fn strings() {
    assert!(is_string("string@"));
    assert!(is_string("string@hello"));
    assert!(is_string("string@a\\065b"));
    assert!(is_string("string@x@y"));

    assert!(!is_string("string@a\\200b"));
    assert!(!is_string("string@bad\\"));
    assert!(!is_string("string"));
    assert!(!is_string("str@x"));
}

#[test]
fn identifiers() {
    assert!(is_identifier("main"));
    assert!(is_identifier("_loop2"));
    assert!(is_identifier("?end!"));
    assert!(is_identifier("int"));

    assert!(!is_identifier(""));
    assert!(!is_identifier("2fast"));
    assert!(!is_identifier("GF@x"));
    assert!(!is_identifier("a.b"));
}

#[test]
fn type_names() {
    assert!(is_type_name("int"));
    assert!(is_type_name("string"));
    assert!(is_type_name("bool"));

    assert!(!is_type_name("nil"));
    assert!(!is_type_name("Int"));
    assert!(!is_type_name("int@"));
}

#[test]
fn classification() {
    assert_kind!("GF@x", Kind::Variable);
    assert_kind!("int@5", Kind::Integer);
    assert_kind!("bool@false", Kind::Bool);
    assert_kind!("string@hi", Kind::String);
    assert_kind!("nil@nil", Kind::Nil);

    assert_not_symbol!("label");
    assert_not_symbol!("int");
    assert_not_symbol!("float@1.0");
    assert_not_symbol!("string@\\1");
}

#[test]
fn symbols() {
    assert!(is_symbol("TF@tmp"));
    assert!(is_symbol("string@"));
    assert!(!is_symbol("loop"));
    assert!(!is_symbol(""));
}
