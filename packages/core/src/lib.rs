//! # reljsonpointer_core
//!
//! Relative JSON Pointers over `serde_json` documents.
//!
//! A relative JSON pointer such as `1/name`, `0+1` or `2#` is interpreted against a base
//! location in a document: climb a number of levels, optionally shift an array index,
//! then either descend along a JSON Pointer suffix or ask for the name/index of where
//! you ended up.
//!
//! ```text
//! "1-2/a"  --parse-->  RelativePointer  --to_absolute("/2/c")-->  "/0/a"  --resolve(doc)-->  value
//! ```
//!
//! All operations are pure functions of their arguments; documents are only ever borrowed.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod pointer;
pub mod relative;
pub mod resolver;

pub use config::ResolveOptions;
pub use error::{ErrorKind, RelPointerError, RelPointerResult};
pub use pointer::{EndOfList, JsonPointer, PointerError, Walked};
pub use relative::{IndexAdjust, Prefix, RelativePointer, Tail};
pub use resolver::{AsBasePointer, Resolved};
