use crate::cursor::CharCursor;
use crate::error::{Cause, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}

/// Parser combinator whose mapping function may reject the value
///
/// A rejection becomes a recoverable failure positioned where the inner
/// parser started, so an enclosing choice can still try something else.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F, U> Parser for TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, Cause>,
{
    type Output = U;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, next_cursor) = self.parser.parse(cursor)?;
        match (self.mapper)(value) {
            Ok(mapped) => Ok((mapped, next_cursor)),
            Err(cause) => Err(ParseError::failure(cursor.location(), cause)),
        }
    }
}

pub fn try_map<P, F, U>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, Cause>,
{
    TryMap { parser, mapper }
}

pub trait TryMapExt: Parser + Sized {
    fn try_map<F, U>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, Cause>,
    {
        TryMap {
            parser: self,
            mapper,
        }
    }
}

impl<P> TryMapExt for P where P: Parser {}
