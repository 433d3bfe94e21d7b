//! Parsed form of a relative JSON pointer

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::pointer::JsonPointer;

/// Index adjustment applied to the last remaining ancestor token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexAdjust {
    #[default]
    None,
    /// `+n`
    Forward(u64),
    /// `-n`
    Backward(u64),
}

impl IndexAdjust {
    /// Signed offset; zero means no adjustment
    #[must_use]
    pub fn offset(self) -> i64 {
        match self {
            IndexAdjust::None => 0,
            IndexAdjust::Forward(n) => i64::try_from(n).unwrap_or(i64::MAX),
            IndexAdjust::Backward(n) => -i64::try_from(n).unwrap_or(i64::MAX),
        }
    }
}

/// The numeric prefix: up-count plus optional index adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    pub up: u64,
    pub adjust: IndexAdjust,
}

/// What follows the prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tail {
    /// A (possibly empty) absolute pointer appended after ascending
    Pointer(JsonPointer),
    /// `#`: the name or index of the location, not its value
    NameOfLast,
}

/// A parsed relative JSON pointer
///
/// Immutable once parsed. `#` and a non-empty suffix are mutually exclusive, which
/// [`Tail`] encodes directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePointer {
    pub(crate) prefix: Prefix,
    pub(crate) tail: Tail,
}

impl RelativePointer {
    #[must_use]
    pub fn new(prefix: Prefix, tail: Tail) -> Self {
        Self { prefix, tail }
    }

    #[inline]
    #[must_use]
    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    #[inline]
    #[must_use]
    pub fn tail(&self) -> &Tail {
        &self.tail
    }

    /// Number of ancestor levels stripped from the base pointer
    #[inline]
    #[must_use]
    pub fn up_count(&self) -> u64 {
        self.prefix.up
    }

    /// Signed index adjustment, zero when absent
    #[inline]
    #[must_use]
    pub fn over_count(&self) -> i64 {
        self.prefix.adjust.offset()
    }

    #[inline]
    #[must_use]
    pub fn use_name_of_last(&self) -> bool {
        matches!(self.tail, Tail::NameOfLast)
    }

    /// Pointer appended after ascending; the root pointer when there is none
    #[must_use]
    pub fn suffix(&self) -> &JsonPointer {
        static EMPTY: JsonPointer = JsonPointer::EMPTY;
        match &self.tail {
            Tail::Pointer(pointer) => pointer,
            Tail::NameOfLast => &EMPTY,
        }
    }
}

impl fmt::Display for RelativePointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix.up)?;
        match self.prefix.adjust {
            IndexAdjust::None => {}
            IndexAdjust::Forward(n) => write!(f, "+{n}")?,
            IndexAdjust::Backward(n) => write!(f, "-{n}")?,
        }
        match &self.tail {
            Tail::Pointer(pointer) => write!(f, "{pointer}"),
            Tail::NameOfLast => f.write_str("#"),
        }
    }
}

impl Serialize for RelativePointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RelativePointer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
