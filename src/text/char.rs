use crate::cursor::CharCursor;
use crate::error::{Cause, ParseError};
use crate::parser::{ParseResult, Parser};

// Helper function to reduce error creation boilerplate
fn unexpected<'code, T>(cursor: &CharCursor<'code>, found: char) -> ParseResult<'code, T> {
    Err(ParseError::failure(
        cursor.location(),
        Cause::UnexpectedChar(found),
    ))
}

/// Parser that consumes and returns any single character
#[derive(Debug, Copy, Clone, Default)]
pub struct AnyChar;

impl Parser for AnyChar {
    type Output = char;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let ch = cursor.value()?;
        Ok((ch, cursor.next()))
    }
}

/// Convenience function to create an AnyChar parser
pub fn any() -> AnyChar {
    AnyChar
}

/// Parser that matches a specific character
#[derive(Debug, Copy, Clone)]
pub struct IsChar(char);

impl Parser for IsChar {
    type Output = char;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (ch, next_cursor) = any().parse(cursor)?;
        if ch == self.0 {
            Ok((ch, next_cursor))
        } else {
            Err(ParseError::failure(cursor.location(), Cause::Expected(self.0)))
        }
    }
}

/// Convenience function to create an IsChar parser
pub fn exact(expected: char) -> IsChar {
    IsChar(expected)
}

/// Parser that matches any character from a fixed set
#[derive(Debug, Clone)]
pub struct OneOf {
    set: Vec<char>,
}

impl Parser for OneOf {
    type Output = char;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (ch, next_cursor) = any().parse(cursor)?;
        if self.set.contains(&ch) {
            Ok((ch, next_cursor))
        } else {
            unexpected(&cursor, ch)
        }
    }
}

/// Create a parser matching any character of `set`
///
/// ```
/// use parserc::prelude::*;
/// use parserc::{parse_to_end, text::one_of};
///
/// assert_eq!(parse_to_end(&one_of("+-".chars()), "-").unwrap(), '-');
/// assert!(parse_to_end(&one_of(['a', 'b']), "c").is_err());
/// ```
pub fn one_of(set: impl IntoIterator<Item = char>) -> OneOf {
    OneOf {
        set: set.into_iter().collect(),
    }
}

/// Parser that matches any character except one
#[derive(Debug, Copy, Clone)]
pub struct NoneOf(char);

impl Parser for NoneOf {
    type Output = char;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (ch, next_cursor) = any().parse(cursor)?;
        if ch == self.0 {
            unexpected(&cursor, ch)
        } else {
            Ok((ch, next_cursor))
        }
    }
}

pub fn none_of(rejected: char) -> NoneOf {
    NoneOf(rejected)
}

/// Parser that matches a character within an inclusive range
#[derive(Debug, Copy, Clone)]
pub struct CharRange {
    lo: char,
    hi: char,
}

impl Parser for CharRange {
    type Output = char;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (ch, next_cursor) = any().parse(cursor)?;
        if (self.lo..=self.hi).contains(&ch) {
            Ok((ch, next_cursor))
        } else {
            unexpected(&cursor, ch)
        }
    }
}

/// Create a parser matching characters between `lo` and `hi` inclusive
pub fn range(lo: char, hi: char) -> CharRange {
    CharRange { lo, hi }
}
