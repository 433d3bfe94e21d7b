//! Core `ResolveBuilder` structure and type states
//!
//! The builder carries a relative pointer and resolve options; the base location is a
//! type-state so that `resolve` and `absolute` only exist once a base has been given.

use reljsonpointer_core::{
    AsBasePointer, JsonPointer, RelPointerResult, RelativePointer, ResolveOptions, Resolved,
};
use serde_json::Value;

/// State marker indicating no base location has been set
#[derive(Debug, Clone, Copy)]
pub struct BaseNotSet;

/// State marker holding the base location
#[derive(Debug, Clone)]
pub struct BaseSet<B> {
    pub base: B,
}

/// Fluent builder resolving one relative pointer
///
/// Parse errors are held until a terminal method (`absolute` / `resolve`) runs.
#[derive(Debug, Clone)]
pub struct ResolveBuilder<'a, S = BaseNotSet> {
    pub(crate) pointer: RelPointerResult<RelativePointer>,
    pub(crate) options: ResolveOptions<'a>,
    pub(crate) state: S,
    pub(crate) debug_enabled: bool,
}

impl<'a> ResolveBuilder<'a, BaseNotSet> {
    /// Start from relative pointer text
    #[must_use]
    pub fn new(expr: &str) -> Self {
        Self::from_result(RelativePointer::parse(expr))
    }

    /// Start from an already parsed relative pointer
    #[must_use]
    pub fn with_pointer(pointer: RelativePointer) -> Self {
        Self::from_result(Ok(pointer))
    }

    fn from_result(pointer: RelPointerResult<RelativePointer>) -> Self {
        Self {
            pointer,
            options: ResolveOptions::default(),
            state: BaseNotSet,
            debug_enabled: false,
        }
    }

    /// Set the location resolution starts from
    ///
    /// Accepts pointer text (`&str`, `String`) or a [`JsonPointer`].
    #[must_use]
    pub fn from<B: AsBasePointer>(self, base: B) -> ResolveBuilder<'a, BaseSet<B>> {
        ResolveBuilder {
            pointer: self.pointer,
            options: self.options,
            state: BaseSet { base },
            debug_enabled: self.debug_enabled,
        }
    }
}

impl<'a, S> ResolveBuilder<'a, S> {
    /// Return `default` instead of failing when the target value is missing
    #[must_use]
    pub fn or_default(mut self, default: &'a Value) -> Self {
        self.options = self.options.with_default(default);
        self
    }

    /// Fail with `EndOfList` when the target is an array append position
    #[must_use]
    pub fn reject_end_of_list(mut self) -> Self {
        self.options = self.options.reject_end_of_list();
        self
    }

    /// Emit `tracing` debug events for this resolution
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    #[must_use]
    pub fn options(&self) -> &ResolveOptions<'a> {
        &self.options
    }
}

impl<'a, B: AsBasePointer> ResolveBuilder<'a, BaseSet<B>> {
    /// Compute the absolute target pointer and the name-of-last flag
    ///
    /// # Errors
    ///
    /// Returns the parse error held by the builder, or any error of
    /// [`RelativePointer::to_absolute`].
    pub fn absolute(&self) -> RelPointerResult<(JsonPointer, bool)> {
        let pointer = self.pointer.as_ref().map_err(Clone::clone)?;
        let result = pointer.to_absolute(&self.state.base);
        if self.debug_enabled {
            match &result {
                Ok((full, use_name_of_last)) => tracing::debug!(
                    relative = %pointer,
                    absolute = %full,
                    use_name_of_last,
                    "ResolveBuilder: computed absolute pointer"
                ),
                Err(e) => tracing::debug!(relative = %pointer, error = %e, "ResolveBuilder: failed"),
            }
        }
        result
    }

    /// Resolve against `doc`
    ///
    /// # Errors
    ///
    /// Returns the parse error held by the builder, or any error of
    /// [`RelativePointer::resolve_with`].
    pub fn resolve(self, doc: &'a Value) -> RelPointerResult<Resolved<'a>> {
        let pointer = self.pointer?;
        let result = pointer.resolve_with(doc, &self.state.base, &self.options);
        if self.debug_enabled {
            match &result {
                Ok(resolved) => tracing::debug!(
                    relative = %pointer,
                    end_of_list = resolved.is_end_of_list(),
                    "ResolveBuilder: resolved"
                ),
                Err(e) => tracing::debug!(relative = %pointer, error = %e, "ResolveBuilder: failed"),
            }
        }
        result
    }
}
