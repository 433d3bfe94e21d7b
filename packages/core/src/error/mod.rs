//! Relative JSON Pointer error handling
//!
//! Structural error kinds live in [`types`]; the `Display` text of each variant is the
//! human-readable message and is kept separate from the data callers branch on.

mod types;

pub use types::{ErrorKind, RelPointerError, RelPointerResult};
