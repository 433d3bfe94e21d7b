//! JSON Pointer error types

/// Errors raised while parsing a JSON Pointer or walking a document with one
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointerError {
    #[error("Location must start with /: {pointer:?}")]
    MissingLeadingSlash { pointer: String },

    #[error("Found invalid escape {pointer:?}; '~' must be followed by '0' or '1'")]
    InvalidEscape { pointer: String },

    #[error("Member {token:?} not found in document")]
    NotFound { token: String },

    #[error("Index {token} out of range for array of length {len}")]
    OutOfRange { token: String, len: usize },

    #[error("{token:?} is not a valid sequence index")]
    InvalidIndex { token: String },

    #[error("Document does not support indexing, cannot walk to {token:?}")]
    NotIndexable { token: String },
}

impl PointerError {
    pub(crate) fn not_found(token: &str) -> Self {
        Self::NotFound {
            token: token.to_owned(),
        }
    }

    pub(crate) fn invalid_index(token: &str) -> Self {
        Self::InvalidIndex {
            token: token.to_owned(),
        }
    }

    pub(crate) fn not_indexable(token: &str) -> Self {
        Self::NotIndexable {
            token: token.to_owned(),
        }
    }
}
