//! Walking a `serde_json::Value` by reference token

use serde_json::Value;

use super::error::PointerError;
use super::types::JsonPointer;

/// Token addressing the position one past the end of an array
pub const APPEND_TOKEN: &str = "-";

/// The array position addressed by a trailing `-` token
///
/// Carries the array it was resolved against; it has a position but no value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndOfList<'a> {
    array: &'a [Value],
}

impl<'a> EndOfList<'a> {
    #[inline]
    #[must_use]
    pub fn array(&self) -> &'a [Value] {
        self.array
    }

    /// The index a value appended here would get
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }
}

/// Outcome of walking a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Walked<'a> {
    /// A value inside the document
    Value(&'a Value),
    /// The append position of an array
    EndOfList(EndOfList<'a>),
}

impl<'a> Walked<'a> {
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Walked::Value(value) => Some(value),
            Walked::EndOfList(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_end_of_list(&self) -> bool {
        matches!(self, Walked::EndOfList(_))
    }
}

/// Walk one reference token down from `doc`
///
/// # Errors
///
/// - `NotFound` / `OutOfRange` if the member or index is missing
/// - `InvalidIndex` if an array is indexed by anything but `0|[1-9][0-9]*` or `-`
/// - `NotIndexable` if `doc` is a scalar
pub fn walk<'a>(doc: &'a Value, token: &str) -> Result<Walked<'a>, PointerError> {
    match doc {
        Value::Object(map) => map
            .get(token)
            .map(Walked::Value)
            .ok_or_else(|| PointerError::not_found(token)),
        Value::Array(array) => {
            if token == APPEND_TOKEN {
                return Ok(Walked::EndOfList(EndOfList { array }));
            }
            let index = parse_array_index(token)?;
            array
                .get(index)
                .map(Walked::Value)
                .ok_or_else(|| PointerError::OutOfRange {
                    token: token.to_owned(),
                    len: array.len(),
                })
        }
        _ => Err(PointerError::not_indexable(token)),
    }
}

fn walk_step<'a>(current: Walked<'a>, token: &str) -> Result<Walked<'a>, PointerError> {
    match current {
        Walked::Value(doc) => walk(doc, token),
        Walked::EndOfList(_) => Err(PointerError::not_indexable(token)),
    }
}

/// Parse an array index token, rejecting signs and leading zeros
fn parse_array_index(token: &str) -> Result<usize, PointerError> {
    let valid = match token.as_bytes() {
        [b'0'] => true,
        [first, rest @ ..] => (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit),
        [] => false,
    };
    if !valid {
        return Err(PointerError::invalid_index(token));
    }
    // All digits but too large for usize: no array can be that long
    token.parse::<usize>().map_err(|_| PointerError::OutOfRange {
        token: token.to_owned(),
        len: 0,
    })
}

impl JsonPointer {
    /// Resolve every token of this pointer against `doc`
    ///
    /// # Errors
    ///
    /// Propagates the first [`PointerError`] met along the way.
    pub fn resolve<'a>(&self, doc: &'a Value) -> Result<Walked<'a>, PointerError> {
        self.tokens()
            .iter()
            .try_fold(Walked::Value(doc), |current, token| walk_step(current, token))
    }

    /// Resolve this pointer, falling back to `default` if the location does not exist
    pub fn resolve_or<'a>(&self, doc: &'a Value, default: &'a Value) -> Walked<'a> {
        self.resolve(doc).unwrap_or(Walked::Value(default))
    }

    /// Resolve all tokens but the last, returning the parent and the last token
    ///
    /// The last token is not checked against the parent. Returns `Ok(None)` for the root
    /// pointer, which has no parent.
    ///
    /// # Errors
    ///
    /// Propagates the first [`PointerError`] met while walking to the parent.
    pub fn walk_to_parent<'a, 'p>(
        &'p self,
        doc: &'a Value,
    ) -> Result<Option<(Walked<'a>, &'p str)>, PointerError> {
        let Some((last, init)) = self.tokens().split_last() else {
            return Ok(None);
        };
        let parent = init
            .iter()
            .try_fold(Walked::Value(doc), |current, token| walk_step(current, token))?;
        Ok(Some((parent, last.as_str())))
    }
}
