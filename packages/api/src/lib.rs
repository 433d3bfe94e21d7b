//! Relative JSON Pointer public API
//!
//! Parse relative JSON pointers, turn them into absolute pointers from a base location,
//! and resolve them against `serde_json` documents.
//!
//! ```rust
//! use reljsonpointer::{Rjp, Resolved};
//! use serde_json::json;
//!
//! let doc = json!({"foo": ["bar", "baz"]});
//!
//! let value = Rjp::expr("0-1").from("/foo/1").resolve(&doc).unwrap();
//! assert_eq!(value.as_value(), Some(&json!("bar")));
//!
//! let name = Rjp::expr("2#").from("/foo/1").resolve(&doc);
//! assert!(name.is_err());
//!
//! let name = Rjp::expr("1#").from("/foo/1").resolve(&doc).unwrap();
//! assert_eq!(name, Resolved::Name("foo".into()));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::core::{BaseNotSet, BaseSet, ResolveBuilder};

// Re-export important types from the core package
pub use reljsonpointer_core::{
    pointer, AsBasePointer, EndOfList, ErrorKind, IndexAdjust, JsonPointer, PointerError,
    Prefix, RelPointerError, RelPointerResult, RelativePointer, ResolveOptions, Resolved, Tail,
    Walked,
};

use serde_json::Value;

/// The relative pointer type under its conventional name
pub type RelJsonPointer = RelativePointer;

/// Entry point providing static builder methods
pub struct Rjp;

impl Rjp {
    /// Start a resolve builder from relative pointer text
    ///
    /// Shorthand for `ResolveBuilder::new(expr)`
    #[must_use]
    pub fn expr<'a>(expr: &str) -> ResolveBuilder<'a> {
        ResolveBuilder::new(expr)
    }

    /// Start a resolve builder from a parsed relative pointer
    #[must_use]
    pub fn pointer<'a>(pointer: RelativePointer) -> ResolveBuilder<'a> {
        ResolveBuilder::with_pointer(pointer)
    }
}

/// Parse a relative JSON pointer
///
/// # Errors
///
/// Returns `NotRelative` or `InvalidPrefix` for malformed input.
pub fn parse(expr: &str) -> RelPointerResult<RelJsonPointer> {
    RelativePointer::parse(expr)
}

/// Parse `expr` and combine it with `base`
///
/// # Errors
///
/// Any parse error, or any error of [`RelativePointer::to_absolute`].
pub fn to_absolute<B>(expr: &str, base: &B) -> RelPointerResult<(JsonPointer, bool)>
where
    B: AsBasePointer + ?Sized,
{
    RelativePointer::parse(expr)?.to_absolute(base)
}

/// Parse `expr` and resolve it against `doc` from `base`
///
/// # Errors
///
/// Any parse error, or any error of [`RelativePointer::resolve`].
pub fn resolve<'a, B>(expr: &str, doc: &'a Value, base: &B) -> RelPointerResult<Resolved<'a>>
where
    B: AsBasePointer + ?Sized,
{
    RelativePointer::parse(expr)?.resolve(doc, base)
}
