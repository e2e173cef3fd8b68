use crate::cursor::CharCursor;
use crate::parser::{ParseResult, Parser};

/// Runs two parsers in sequence and keeps only the second value
pub struct DiscardLeft<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> Parser for DiscardLeft<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = P2::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.left.parse(cursor)?;
        self.right.parse(cursor)
    }
}

/// Runs two parsers in sequence and keeps only the first value
pub struct DiscardRight<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> Parser for DiscardRight<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = P1::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.left.parse(cursor)?;
        let (_, cursor) = self.right.parse(cursor)?;
        Ok((value, cursor))
    }
}

pub fn discard_left<P1, P2>(left: P1, right: P2) -> DiscardLeft<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    DiscardLeft { left, right }
}

pub fn discard_right<P1, P2>(left: P1, right: P2) -> DiscardRight<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    DiscardRight { left, right }
}

/// Extension trait for sequencing while dropping one side's value
///
/// `a.discard_left(b)` parses `a` then `b` and keeps `b`'s value;
/// `a.discard_right(b)` parses `a` then `b` and keeps `a`'s value.
pub trait DiscardExt: Parser + Sized {
    fn discard_left<P>(self, right: P) -> DiscardLeft<Self, P>
    where
        P: Parser,
    {
        DiscardLeft { left: self, right }
    }

    fn discard_right<P>(self, right: P) -> DiscardRight<Self, P>
    where
        P: Parser,
    {
        DiscardRight { left: self, right }
    }
}

impl<P> DiscardExt for P where P: Parser {}
