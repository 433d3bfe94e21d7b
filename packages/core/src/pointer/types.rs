//! Owned JSON Pointer token sequence

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::PointerError;

/// `~` not followed by `0` or `1`
static INVALID_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"~[^01]|~$").expect("escape pattern is valid"));

/// An absolute JSON Pointer held as its unescaped reference tokens
///
/// Pointers are never mutated in place: [`truncated`](Self::truncated),
/// [`join`](Self::join) and friends always build a new value, so a pointer handed in by a
/// caller can't alias one handed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    tokens: Vec<String>,
}

impl JsonPointer {
    pub(crate) const EMPTY: JsonPointer = JsonPointer { tokens: Vec::new() };

    /// The pointer to the whole document (`""`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parse the textual form of a pointer
    ///
    /// # Errors
    ///
    /// - `PointerError::MissingLeadingSlash` if a non-empty input does not start with `/`
    /// - `PointerError::InvalidEscape` if a `~` is not followed by `0` or `1`
    pub fn parse(pointer: &str) -> Result<Self, PointerError> {
        if pointer.is_empty() {
            return Ok(Self::root());
        }
        let Some(rest) = pointer.strip_prefix('/') else {
            return Err(PointerError::MissingLeadingSlash {
                pointer: pointer.to_owned(),
            });
        };
        if rest.split('/').any(|t| INVALID_ESCAPE.is_match(t)) {
            return Err(PointerError::InvalidEscape {
                pointer: pointer.to_owned(),
            });
        }
        let tokens = rest.split('/').map(|t| unescape(t).into_owned()).collect();
        Ok(Self { tokens })
    }

    /// Build a pointer from already-unescaped tokens
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of reference tokens (the depth of the addressed location)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// The pointer one level up, `None` for the root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.tokens.split_last()?;
        Some(Self {
            tokens: init.to_vec(),
        })
    }

    /// A new pointer keeping only the first `len` tokens
    #[must_use]
    pub fn truncated(&self, len: usize) -> Self {
        Self {
            tokens: self.tokens[..len.min(self.tokens.len())].to_vec(),
        }
    }

    /// A new pointer with `suffix`'s tokens appended to this one's
    #[must_use]
    pub fn join(&self, suffix: &JsonPointer) -> Self {
        Self {
            tokens: self
                .tokens
                .iter()
                .chain(suffix.tokens.iter())
                .cloned()
                .collect(),
        }
    }
}

/// Decode a reference token: `~1` becomes `/`, then `~0` becomes `~`
#[must_use]
pub fn unescape(token: &str) -> Cow<'_, str> {
    if token.contains('~') {
        Cow::Owned(token.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(token)
    }
}

/// Encode a reference token: `~` becomes `~0`, then `/` becomes `~1`
#[must_use]
pub fn escape(token: &str) -> Cow<'_, str> {
    if token.contains(['~', '/']) {
        Cow::Owned(token.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(token)
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "/{}", escape(token))?;
        }
        Ok(())
    }
}

impl FromStr for JsonPointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for JsonPointer {
    type Error = PointerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for JsonPointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JsonPointer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
