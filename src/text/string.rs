use crate::cursor::CharCursor;
use crate::error::{Cause, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// Matching is all-or-nothing: on a mismatch anywhere in the string the error
/// points at the start of the attempt and names the whole literal.
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser for Literal {
    type Output = Cow<'static, str>;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut current_cursor = cursor;

        for expected_char in self.expected.chars() {
            match current_cursor.value() {
                Ok(ch) if ch == expected_char => current_cursor = current_cursor.next(),
                _ => {
                    return Err(ParseError::failure(
                        cursor.location(),
                        Cause::ExpectedLiteral(self.expected.to_string()),
                    ));
                }
            }
        }

        // Clone is cheap here - just copies the reference for &'static str
        Ok((self.expected.clone(), current_cursor))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let (result, cursor) = literal("abc").parse(CharCursor::new("abc")).unwrap();
        assert_eq!(result, "abc");
        assert!(cursor.eos());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let (result, cursor) = literal("hello")
            .parse(CharCursor::new("hello world"))
            .unwrap();
        assert_eq!(result, "hello");
        assert_eq!(cursor.value().unwrap(), ' ');
        assert_eq!(cursor.index(), 5);
    }

    #[test]
    fn test_unicode_string() {
        let (result, cursor) = literal("こんにちは")
            .parse(CharCursor::new("こんにちは世界"))
            .unwrap();
        assert_eq!(result, "こんにちは");
        assert_eq!(cursor.index(), 5);
        assert_eq!(cursor.rest(), "世界");
    }

    #[test]
    fn test_mismatches() {
        for input in ["", "a", "ab", "bc", "ac", "abd"] {
            assert!(
                literal("abc").parse(CharCursor::new(input)).is_err(),
                "{input:?} should not match"
            );
        }
    }

    #[test]
    fn test_failure_points_at_start_of_attempt() {
        let cursor = CharCursor::new("xtrux").next();
        let err = literal("true").parse(cursor).unwrap_err();
        assert_eq!(err.col(), 2);
        assert_eq!(err.cause(), &Cause::ExpectedLiteral("true".to_string()));
    }

    #[test]
    fn test_empty_literal_consumes_nothing() {
        let (result, cursor) = literal("").parse(CharCursor::new("abc")).unwrap();
        assert_eq!(result, "");
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_owned_literal() {
        let expected = String::from("dyn");
        let (result, _) = literal(expected).parse(CharCursor::new("dynamic")).unwrap();
        assert_eq!(result, "dyn");
    }
}
