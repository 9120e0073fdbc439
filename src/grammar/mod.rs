//! The IPPcode22 instruction grammar and the validator built on top of it

mod build;
mod error;
mod opcode;
mod table;


pub use build::Builder;
pub use error::{BuildError, SyntaxError};
pub use opcode::Opcode;
pub use table::{lookup, rule, Rule, Slot};
