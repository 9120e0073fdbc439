//! Serialization of translated programs into output documents

mod traits;
mod xml;

#[cfg(test)]
mod tests;

pub use traits::Emitter;
pub use xml::Xml;
