//! Accepted forms of the base pointer

use std::borrow::Cow;

use crate::error::{RelPointerError, RelPointerResult};
use crate::pointer::JsonPointer;

/// Anything usable as the starting location of a relative pointer
pub trait AsBasePointer {
    /// Borrow or parse the base pointer
    ///
    /// # Errors
    ///
    /// Returns `RelPointerError::InvalidBase` if a textual base is not a JSON Pointer.
    fn as_base_pointer(&self) -> RelPointerResult<Cow<'_, JsonPointer>>;
}

impl AsBasePointer for JsonPointer {
    fn as_base_pointer(&self) -> RelPointerResult<Cow<'_, JsonPointer>> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsBasePointer for str {
    fn as_base_pointer(&self) -> RelPointerResult<Cow<'_, JsonPointer>> {
        JsonPointer::parse(self)
            .map(Cow::Owned)
            .map_err(RelPointerError::InvalidBase)
    }
}

impl AsBasePointer for String {
    fn as_base_pointer(&self) -> RelPointerResult<Cow<'_, JsonPointer>> {
        self.as_str().as_base_pointer()
    }
}

impl<T: AsBasePointer + ?Sized> AsBasePointer for &T {
    fn as_base_pointer(&self) -> RelPointerResult<Cow<'_, JsonPointer>> {
        (**self).as_base_pointer()
    }
}
