use crate::cursor::CharCursor;
use crate::error::{Cause, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is a recoverable failure at the position where the inner
/// parser started, carrying `error_message` as its cause.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<P, F> Parser for FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, new_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(ParseError::failure(
                cursor.location(),
                Cause::Message(self.error_message.clone()),
            ))
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<P: Parser> FilterExt for P {}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{any, integer};

    #[test]
    fn test_filter_success() {
        let parser = any().filter(|c| c.is_alphabetic(), "expected alphabetic character");
        let (result, _) = parser.parse(CharCursor::new("a")).unwrap();
        assert_eq!(result, 'a');
    }

    #[test]
    fn test_filter_failure() {
        let parser = any().filter(|c| c.is_alphabetic(), "expected alphabetic character");
        let err = parser.parse(CharCursor::new("1")).unwrap_err();
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("expected alphabetic character"));
    }

    #[test]
    fn test_filter_unicode_letter() {
        let parser = any().filter(|c| c.is_alphabetic(), "expected letter");
        for (input, expected) in [("é", 'é'), ("ж", 'ж'), ("中", '中')] {
            let (ch, _) = parser.parse(CharCursor::new(input)).unwrap();
            assert_eq!(ch, expected);
        }
    }

    #[test]
    fn test_filter_rejection_points_at_start() {
        let parser = filter(integer(), |n| *n < 100, "number too large");
        let cursor = CharCursor::new(" 250").next();
        let err = parser.parse(cursor).unwrap_err();
        assert_eq!(err.col(), 2);
    }

    #[test]
    fn test_filter_propagates_inner_error() {
        let parser = filter(integer(), |_| true, "unused");
        let err = parser.parse(CharCursor::new("x")).unwrap_err();
        assert!(!err.to_string().contains("unused"));
    }
}
