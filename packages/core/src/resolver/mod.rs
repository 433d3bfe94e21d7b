//! Combining a relative pointer with a base location
//!
//! [`RelativePointer::to_absolute`](crate::RelativePointer::to_absolute) produces the
//! target pointer; [`RelativePointer::resolve`](crate::RelativePointer::resolve) walks a
//! document with it. Neither holds state between calls.

mod absolute;
mod base;
mod resolve;

pub use base::AsBasePointer;
pub use resolve::Resolved;
