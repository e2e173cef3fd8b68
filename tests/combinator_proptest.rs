//! Property-based tests for the core combinators
//!
//! These check laws that hold for any input rather than fixed examples:
//! - repetition counts exactly the matching prefix
//! - optional is idempotent
//! - ordered choice prefers the left alternative
//! - a literal consumes exactly its own characters
//! - numbers printed by Rust parse back unchanged

use parserc::prelude::*;
use parserc::text::{self, exact, literal, number, one_of};
use parserc::{CharCursor, Cause, parse_to_end};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_many_counts_matching_prefix(prefix in "a{0,20}", rest in "[b-z]{0,10}") {
        let input = format!("{prefix}{rest}");
        let (items, cursor) = exact('a').many().parse(CharCursor::new(&input)).unwrap();

        prop_assert_eq!(items.len(), prefix.len());
        prop_assert_eq!(cursor.rest(), rest.as_str());
    }

    #[test]
    fn test_optional_is_idempotent(input in "[ab]{0,5}") {
        let once = exact('a').optional('-');
        let twice = exact('a').optional('-').optional('-');

        let first = once.parse(CharCursor::new(&input)).map(|(v, c)| (v, c.index()));
        let second = twice.parse(CharCursor::new(&input)).map(|(v, c)| (v, c.index()));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_or_is_left_biased(c in proptest::char::range('a', 'z')) {
        let parser = text::any().map(|_| "left").or(exact(c).map(|_| "right"));
        let input = c.to_string();

        let (side, _) = parser.parse(CharCursor::new(&input)).unwrap();
        prop_assert_eq!(side, "left");
    }

    #[test]
    fn test_literal_consumes_its_length(word in "[a-zé中]{1,8}", rest in "[0-9]{0,5}") {
        let input = format!("{word}{rest}");
        let (matched, cursor) = literal(word.clone()).parse(CharCursor::new(&input)).unwrap();

        prop_assert_eq!(&*matched, word.as_str());
        prop_assert_eq!(cursor.index(), word.chars().count());
        prop_assert_eq!(cursor.rest(), rest.as_str());
    }

    #[test]
    fn test_number_round_trip(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let text = format!("{n}");
        prop_assert_eq!(parse_to_end(&number(), &text).unwrap(), n);
    }

    #[test]
    fn test_one_of_matches_members_only(set in "[a-m]{1,6}", c in proptest::char::range('a', 'z')) {
        let parser = one_of(set.chars());
        let input = c.to_string();
        prop_assert_eq!(parser.parse(CharCursor::new(&input)).is_ok(), set.contains(c));
    }
}

#[test]
fn test_empty_input_is_unexpected_end_at_origin() {
    let err = parse_to_end(&text::any(), "").unwrap_err();
    assert_eq!(err.cause(), &Cause::UnexpectedEnd);
    assert_eq!((err.row(), err.col()), (1, 1));
}
