//! Relative JSON Pointer Parser Tests
//!
//! Grammar coverage for the prefix, index adjustment, `#` and suffix forms

use proptest::prelude::*;
use reljsonpointer_core::{ErrorKind, IndexAdjust, RelativePointer, Tail};

fn check(rjp: &RelativePointer, up: u64, over: i64, suffix: &str, use_last: bool) {
    assert_eq!(rjp.up_count(), up);
    assert_eq!(rjp.over_count(), over);
    assert_eq!(rjp.suffix().to_string(), suffix);
    assert_eq!(rjp.use_name_of_last(), use_last);
}

#[cfg(test)]
mod parser_basic_tests {
    use super::*;

    #[test]
    fn test_up_only() {
        let rjp = RelativePointer::parse("2").expect("bare up-count is valid");
        check(&rjp, 2, 0, "", false);
        assert_eq!(rjp.prefix().adjust, IndexAdjust::None);
    }

    #[test]
    fn test_use_last() {
        let rjp = RelativePointer::parse("0#").expect("0# is valid");
        check(&rjp, 0, 0, "", true);
        assert_eq!(rjp.tail(), &Tail::NameOfLast);
    }

    #[test]
    fn test_with_pointer() {
        let rjp = RelativePointer::parse("100/foo/bar").expect("suffix pointer is valid");
        check(&rjp, 100, 0, "/foo/bar", false);
        assert_eq!(rjp.suffix().tokens(), ["foo", "bar"]);
    }

    #[test]
    fn test_with_index_forward_with_pointer() {
        let rjp = RelativePointer::parse("5+9/things/-/stuff").expect("adjusted prefix with suffix");
        check(&rjp, 5, 9, "/things/-/stuff", false);
    }

    #[test]
    fn test_with_index_backward_no_pointer() {
        let rjp = RelativePointer::parse("2-100").expect("backward adjustment");
        check(&rjp, 2, -100, "", false);
        assert_eq!(rjp.prefix().adjust, IndexAdjust::Backward(100));
    }

    #[test]
    fn test_with_index_and_use_last() {
        let rjp = RelativePointer::parse("3+1#").expect("adjustment combined with #");
        check(&rjp, 3, 1, "", true);
    }

    #[test]
    fn test_suffix_tokens_are_unescaped() {
        let rjp = RelativePointer::parse("0/a~1b/c~0d").expect("escaped suffix");
        assert_eq!(rjp.suffix().tokens(), ["a/b", "c~d"]);
        assert_eq!(rjp.to_string(), "0/a~1b/c~0d");
    }

    #[test]
    fn test_hash_inside_suffix_is_a_name() {
        let rjp = RelativePointer::parse("1/foo#").expect("# in a suffix token");
        assert!(!rjp.use_name_of_last());
        assert_eq!(rjp.suffix().tokens(), ["foo#"]);
    }

    #[test]
    fn test_empty_suffix_token() {
        let rjp = RelativePointer::parse("0/").expect("empty member name");
        assert_eq!(rjp.suffix().tokens(), [""]);
    }

    #[test]
    fn test_leading_zeros_accepted() {
        let rjp = RelativePointer::parse("01").expect("leading zeros parse as an integer");
        assert_eq!(rjp.up_count(), 1);
    }

    #[test]
    fn test_zero_adjustment_is_kept_textually() {
        let rjp = RelativePointer::parse("1+0").expect("zero adjustment");
        assert_eq!(rjp.over_count(), 0);
        assert_eq!(rjp.to_string(), "1+0");
    }
}

#[cfg(test)]
mod parser_error_tests {
    use super::*;

    fn kind_of(input: &str) -> ErrorKind {
        RelativePointer::parse(input)
            .expect_err("input should be rejected")
            .kind()
    }

    #[test]
    fn test_absolute() {
        assert_eq!(kind_of("/foo"), ErrorKind::NotRelative);
        assert_eq!(kind_of("/"), ErrorKind::NotRelative);
        assert_eq!(kind_of(""), ErrorKind::NotRelative);
    }

    #[test]
    fn test_non_integer_prefix() {
        assert_eq!(kind_of("abc/def"), ErrorKind::InvalidPrefix);
    }

    #[test]
    fn test_hash_without_numeric_prefix() {
        assert_eq!(kind_of("#"), ErrorKind::InvalidPrefix);
    }

    #[test]
    fn test_index_without_numeric_prefix() {
        assert_eq!(kind_of("-1"), ErrorKind::InvalidPrefix);
        assert_eq!(kind_of("+1"), ErrorKind::InvalidPrefix);
    }

    #[test]
    fn test_malformed_adjustments() {
        for input in ["1+", "1-", "1+a", "1++2", "1+2+3", "1 +2", "1+2 ", "1#/a", "1##"] {
            assert_eq!(kind_of(input), ErrorKind::InvalidPrefix, "{input:?}");
        }
    }

    #[test]
    fn test_error_names_the_prefix() {
        let err = RelativePointer::parse("1x/foo").expect_err("bad prefix");
        assert!(err.to_string().contains("\"1x\""), "{err}");
    }
}

proptest! {
    #[test]
    fn prop_plain_prefix(n in any::<u64>()) {
        let rjp = RelativePointer::parse(&n.to_string()).expect("any u64 is a valid prefix");
        prop_assert_eq!(rjp.up_count(), n);
        prop_assert_eq!(rjp.over_count(), 0);
        prop_assert!(!rjp.use_name_of_last());
        prop_assert!(rjp.suffix().is_root());
    }

    #[test]
    fn prop_adjusted_prefix(n in any::<u32>(), forward in any::<bool>(), m in 0..i64::MAX) {
        let sign = if forward { '+' } else { '-' };
        let rjp = RelativePointer::parse(&format!("{n}{sign}{m}")).expect("valid adjusted prefix");
        prop_assert_eq!(rjp.up_count(), u64::from(n));
        prop_assert_eq!(rjp.over_count(), if forward { m } else { -m });
    }

    #[test]
    fn prop_display_round_trips(
        n in 0u64..1000,
        m in 0u64..1000,
        tokens in proptest::collection::vec("[a-z~/]{0,4}", 0..4),
    ) {
        let text = format!(
            "{n}+{m}{}",
            tokens
                .iter()
                .map(|t| format!("/{}", t.replace('~', "~0").replace('/', "~1")))
                .collect::<String>()
        );
        let rjp = RelativePointer::parse(&text).expect("generated input is valid");
        prop_assert_eq!(rjp.to_string(), text);
    }
}
