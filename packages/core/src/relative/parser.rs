//! Relative JSON Pointer grammar parser
//!
//! ```text
//! relative-json-pointer = non-negative-int [ ( "+" / "-" ) non-negative-int ] ( "#" / json-pointer )
//! ```
//!
//! The input is split on `/`; the first segment is the prefix and the rest form the
//! suffix pointer. `#` is only recognised at the end of a bare prefix.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{IndexAdjust, Prefix, RelativePointer, Tail};
use crate::error::{RelPointerError, RelPointerResult};
use crate::pointer::{unescape, JsonPointer};

static ADJUSTED_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<up>[0-9]+)(?P<sign>[-+])(?P<over>[0-9]+)$")
        .expect("adjusted prefix pattern is valid")
});

impl RelativePointer {
    /// Parse a relative JSON pointer
    ///
    /// # Errors
    ///
    /// - `NotRelative` if the input is empty or starts with `/`
    /// - `InvalidPrefix` if the leading count or index adjustment is malformed
    pub fn parse(input: &str) -> RelPointerResult<Self> {
        let mut segments = input.split('/');
        let first = segments.next().map(unescape).unwrap_or_default();
        if first.is_empty() {
            return Err(RelPointerError::not_relative(input));
        }

        let rest: Vec<String> = segments.map(|s| unescape(s).into_owned()).collect();
        let (prefix_text, tail) = if rest.is_empty() {
            match first.strip_suffix('#') {
                Some(stripped) => (stripped, Tail::NameOfLast),
                None => (first.as_ref(), Tail::Pointer(JsonPointer::root())),
            }
        } else {
            (first.as_ref(), Tail::Pointer(JsonPointer::from_tokens(rest)))
        };

        let prefix = parse_prefix(prefix_text)?;
        log::trace!("parsed relative pointer {input:?}: {prefix:?} {tail:?}");
        Ok(Self { prefix, tail })
    }
}

/// Parse `<up>` or `<up><sign><over>`
fn parse_prefix(text: &str) -> RelPointerResult<Prefix> {
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(RelPointerError::invalid_prefix(text));
    }

    if let Some(up) = parse_count(text) {
        return Ok(Prefix {
            up,
            adjust: IndexAdjust::None,
        });
    }

    let captures = ADJUSTED_PREFIX
        .captures(text)
        .ok_or_else(|| RelPointerError::invalid_prefix(text))?;
    let up = parse_count(&captures["up"]).ok_or_else(|| RelPointerError::invalid_prefix(text))?;
    let over = parse_count(&captures["over"])
        .filter(|n| i64::try_from(*n).is_ok())
        .ok_or_else(|| RelPointerError::invalid_prefix(text))?;
    let adjust = match &captures["sign"] {
        "+" => IndexAdjust::Forward(over),
        _ => IndexAdjust::Backward(over),
    };
    Ok(Prefix { up, adjust })
}

/// A run of ASCII digits as `u64`; `None` on any other character or on overflow
fn parse_count(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FromStr for RelativePointer {
    type Err = RelPointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RelativePointer {
    type Error = RelPointerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
