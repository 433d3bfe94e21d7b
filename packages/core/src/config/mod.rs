//! Per-call resolution options

use serde_json::Value;

/// Options for [`RelativePointer::resolve_with`](crate::RelativePointer::resolve_with)
///
/// The default value has no default fallback and allows landing on the array append
/// position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolveOptions<'a> {
    /// Returned in place of a missing value (value mode only)
    pub default: Option<&'a Value>,
    /// Fail with `EndOfList` instead of returning the append position
    pub reject_end_of_list: bool,
}

impl<'a> ResolveOptions<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default(mut self, default: &'a Value) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn reject_end_of_list(mut self) -> Self {
        self.reject_end_of_list = true;
        self
    }
}
