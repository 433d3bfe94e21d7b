//! Relative JSON Pointer error types

use crate::pointer::PointerError;

/// Result type for relative pointer operations
pub type RelPointerResult<T> = Result<T, RelPointerError>;

/// Fieldless classification of a [`RelPointerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input already is an absolute pointer
    NotRelative,
    /// Malformed up-count / index-adjustment prefix
    InvalidPrefix,
    /// Ascending past the document root
    Depth,
    /// Name or index requested for the root
    RootName,
    /// Index adjustment applied to the root
    RootManipulation,
    /// Index adjustment applied to a non-integer token
    IndexType,
    /// Name/index mode landed on a missing location
    DoesNotExist,
    /// Value mode landed on the array append position
    EndOfList,
    /// Base pointer string is not a valid JSON Pointer
    InvalidBase,
    /// Value mode target does not exist
    NotFound,
}

/// Errors raised while parsing or resolving a relative JSON pointer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelPointerError {
    #[error(
        "Cannot use non-relative JSON pointer {pointer} as relative JSON pointer, \
         which must start with a non-negative integer."
    )]
    NotRelative { pointer: String },

    #[error(
        "Relative JSON Pointer prefix \"{prefix}\" must start with a non-negative integer, \
         optionally followed by \"-\" or \"+\" and another non-negative integer."
    )]
    InvalidPrefix { prefix: String },

    #[error("Cannot go up {up_count} from starting point of depth {depth}")]
    Depth { up_count: u64, depth: usize },

    #[error("Cannot return name or index of the document root")]
    RootName,

    #[error("Cannot manipulate the index of the document root")]
    RootManipulation,

    #[error("Cannot add {over_count} to a non-integer index \"{token}\"")]
    IndexType { over_count: i64, token: String },

    #[error("Resolved JSON Pointer \"{pointer}\" points to a non-existent instance location.")]
    DoesNotExist { pointer: String },

    #[error(
        "Cannot resolve pointer with \"-\" index except to access the length of an array \
         with \"#\": \"{pointer}\""
    )]
    EndOfList { pointer: String },

    #[error("Invalid base pointer: {0}")]
    InvalidBase(#[source] PointerError),

    #[error("Resolved JSON Pointer \"{pointer}\" could not be resolved: {source}")]
    NotFound {
        pointer: String,
        #[source]
        source: PointerError,
    },
}

impl RelPointerError {
    /// Classify this error without inspecting its message
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotRelative { .. } => ErrorKind::NotRelative,
            Self::InvalidPrefix { .. } => ErrorKind::InvalidPrefix,
            Self::Depth { .. } => ErrorKind::Depth,
            Self::RootName => ErrorKind::RootName,
            Self::RootManipulation => ErrorKind::RootManipulation,
            Self::IndexType { .. } => ErrorKind::IndexType,
            Self::DoesNotExist { .. } => ErrorKind::DoesNotExist,
            Self::EndOfList { .. } => ErrorKind::EndOfList,
            Self::InvalidBase(_) => ErrorKind::InvalidBase,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub fn not_relative(pointer: impl Into<String>) -> Self {
        Self::NotRelative {
            pointer: pointer.into(),
        }
    }

    pub fn invalid_prefix(prefix: impl Into<String>) -> Self {
        Self::InvalidPrefix {
            prefix: prefix.into(),
        }
    }

    pub fn index_type(over_count: i64, token: impl Into<String>) -> Self {
        Self::IndexType {
            over_count,
            token: token.into(),
        }
    }

    pub fn does_not_exist(pointer: impl ToString) -> Self {
        Self::DoesNotExist {
            pointer: pointer.to_string(),
        }
    }

    pub fn not_found(pointer: impl ToString, source: PointerError) -> Self {
        Self::NotFound {
            pointer: pointer.to_string(),
            source,
        }
    }

    pub fn end_of_list(pointer: impl ToString) -> Self {
        Self::EndOfList {
            pointer: pointer.to_string(),
        }
    }
}
