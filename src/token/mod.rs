//! Classification of raw operand tokens by their shape alone

mod classify;
pub mod escape;

#[cfg(test)]
mod tests;

pub use classify::{
    classify, is_bool, is_identifier, is_integer, is_nil, is_string, is_symbol, is_type_name,
    is_variable,
};
