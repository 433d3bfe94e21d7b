//! Relative-to-absolute pointer arithmetic

use super::base::AsBasePointer;
use crate::error::{RelPointerError, RelPointerResult};
use crate::pointer::JsonPointer;
use crate::relative::{RelativePointer, Tail};

impl RelativePointer {
    /// Compute the absolute pointer this relative pointer designates from `base`
    ///
    /// Returns the pointer together with the name-of-last flag (`#`).
    ///
    /// # Errors
    ///
    /// - `InvalidBase` if `base` is text that is not a JSON Pointer
    /// - `Depth` if the up-count exceeds the depth of `base`
    /// - `RootName` if `#` would name the document root
    /// - `RootManipulation` if the index adjustment would apply to the root
    /// - `IndexType` if the adjusted token is not a non-negative integer
    pub fn to_absolute<B>(&self, base: &B) -> RelPointerResult<(JsonPointer, bool)>
    where
        B: AsBasePointer + ?Sized,
    {
        let base = base.as_base_pointer()?;
        let depth = base.len();
        let new_len = usize::try_from(self.up_count())
            .ok()
            .and_then(|up| depth.checked_sub(up))
            .ok_or(RelPointerError::Depth {
                up_count: self.up_count(),
                depth,
            })?;

        let use_name_of_last = self.use_name_of_last();
        if use_name_of_last && new_len < 1 {
            return Err(RelPointerError::RootName);
        }

        let mut tokens = base.tokens()[..new_len].to_vec();

        let over_count = self.over_count();
        if over_count != 0 {
            let last = tokens.last_mut().ok_or(RelPointerError::RootManipulation)?;
            let adjusted = adjust_index(last, over_count)?;
            *last = adjusted;
        }

        let full = match &self.tail {
            Tail::Pointer(suffix) => JsonPointer::from_tokens(tokens).join(suffix),
            Tail::NameOfLast => JsonPointer::from_tokens(tokens),
        };
        log::debug!("relative pointer {self} from \"{base}\" -> \"{full}\"");
        Ok((full, use_name_of_last))
    }
}

/// Add `over_count` to an integer token, writing the sum back as decimal text
///
/// A negative sum is kept as-is; it names no array element and fails to resolve later.
fn adjust_index(token: &str, over_count: i64) -> RelPointerResult<String> {
    let index = if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse::<i64>().ok()
    } else {
        None
    };
    let index = index.ok_or_else(|| RelPointerError::index_type(over_count, token))?;
    let adjusted = index
        .checked_add(over_count)
        .ok_or_else(|| RelPointerError::index_type(over_count, token))?;
    Ok(adjusted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_index_arithmetic() {
        assert_eq!(adjust_index("0", 1).expect("forward"), "1");
        assert_eq!(adjust_index("5", -2).expect("backward"), "3");
        assert_eq!(adjust_index("0", -1).expect("below zero"), "-1");
        assert_eq!(adjust_index("007", 1).expect("leading zeros"), "8");
    }

    #[test]
    fn adjust_index_rejects_names() {
        for token in ["", "foo", "-", "-1", "+1", "1.5"] {
            assert_eq!(
                adjust_index(token, 1),
                Err(RelPointerError::index_type(1, token)),
                "{token:?}"
            );
        }
    }
}
