//! RFC 6901 JSON Pointer support
//!
//! A JSON Pointer is either the empty string (the whole document) or a series of
//! `/`-prefixed reference tokens, escaped so that `~` is written `~0` and `/` is
//! written `~1`. This module provides the owned token sequence ([`JsonPointer`]) and
//! the walking primitives the relative resolver is built on:
//! - [`JsonPointer::resolve`] walks every token
//! - [`JsonPointer::walk_to_parent`] stops one token short
//! - the array append token `-` surfaces as [`Walked::EndOfList`], never as a value

mod error;
mod types;
mod walk;

pub use error::PointerError;
pub use types::{escape, unescape, JsonPointer};
pub use walk::{walk, EndOfList, Walked, APPEND_TOKEN};
