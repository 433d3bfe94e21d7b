//! Resolution of a relative pointer against a document

use serde_json::Value;

use super::base::AsBasePointer;
use crate::config::ResolveOptions;
use crate::error::{RelPointerError, RelPointerResult};
use crate::pointer::{walk, EndOfList, JsonPointer, Walked, APPEND_TOKEN};
use crate::relative::RelativePointer;

/// Result of resolving a relative pointer against a document
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// The value at the target, borrowed from the document (or the supplied default)
    Value(&'a Value),
    /// The target is the append position of an array
    EndOfList(EndOfList<'a>),
    /// `#` on an object member: the member name
    Name(String),
    /// `#` on an array element: the index, or the array length for `-`
    Index(usize),
}

impl<'a> Resolved<'a> {
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Resolved::Value(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_end_of_list(&self) -> bool {
        matches!(self, Resolved::EndOfList(_))
    }

    /// Owned JSON form of the result; `None` for the append position, which has no value
    #[must_use]
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Resolved::Value(value) => Some((*value).clone()),
            Resolved::EndOfList(_) => None,
            Resolved::Name(name) => Some(Value::String(name.clone())),
            Resolved::Index(index) => Some(Value::from(*index)),
        }
    }
}

impl<'a> From<Walked<'a>> for Resolved<'a> {
    fn from(walked: Walked<'a>) -> Self {
        match walked {
            Walked::Value(value) => Resolved::Value(value),
            Walked::EndOfList(end) => Resolved::EndOfList(end),
        }
    }
}

impl RelativePointer {
    /// Resolve against `doc` starting at `base`, with default options
    ///
    /// # Errors
    ///
    /// See [`resolve_with`](Self::resolve_with).
    pub fn resolve<'a, B>(&self, doc: &'a Value, base: &B) -> RelPointerResult<Resolved<'a>>
    where
        B: AsBasePointer + ?Sized,
    {
        self.resolve_with(doc, base, &ResolveOptions::default())
    }

    /// Resolve against `doc` starting at `base`
    ///
    /// In name mode (`#`) the result is the member name or array index of the target;
    /// otherwise it is the target's value, `options.default` if the target is missing and a
    /// default was given, or the array append position.
    ///
    /// # Errors
    ///
    /// - any error of [`to_absolute`](Self::to_absolute)
    /// - `DoesNotExist` if the target is missing in name mode
    /// - `NotFound` if the target is missing in value mode without a default
    /// - `EndOfList` if the target is the append position and `options.reject_end_of_list`
    pub fn resolve_with<'a, B>(
        &self,
        doc: &'a Value,
        base: &B,
        options: &ResolveOptions<'a>,
    ) -> RelPointerResult<Resolved<'a>>
    where
        B: AsBasePointer + ?Sized,
    {
        let (full, use_name_of_last) = self.to_absolute(base)?;
        if use_name_of_last {
            return name_of_last(doc, &full);
        }

        let walked = match options.default {
            Some(default) => full.resolve_or(doc, default),
            None => full
                .resolve(doc)
                .map_err(|source| RelPointerError::not_found(&full, source))?,
        };

        if options.reject_end_of_list && walked.is_end_of_list() {
            log::debug!("\"{full}\" is an append position, rejecting");
            return Err(RelPointerError::end_of_list(&full));
        }
        Ok(walked.into())
    }
}

/// The member name or array index addressed by `full`
fn name_of_last<'a>(doc: &'a Value, full: &JsonPointer) -> RelPointerResult<Resolved<'a>> {
    let does_not_exist = || RelPointerError::does_not_exist(full);

    let (parent, last) = full
        .walk_to_parent(doc)
        .map_err(|e| {
            log::trace!("parent of \"{full}\" missing: {e}");
            does_not_exist()
        })?
        .ok_or(RelPointerError::RootName)?;
    let Walked::Value(parent) = parent else {
        return Err(does_not_exist());
    };

    if let Value::Array(items) = parent {
        if last == APPEND_TOKEN {
            return Ok(Resolved::Index(items.len()));
        }
    }

    // The name is only meaningful if something is actually there.
    walk(parent, last).map_err(|_| does_not_exist())?;

    match parent {
        Value::Array(_) => last
            .parse()
            .map(Resolved::Index)
            .map_err(|_| does_not_exist()),
        _ => Ok(Resolved::Name(last.to_owned())),
    }
}
