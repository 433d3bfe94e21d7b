//! Relative JSON pointers: parsed representation and grammar parser

mod parser;
mod types;

pub use types::{IndexAdjust, Prefix, RelativePointer, Tail};
