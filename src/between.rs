use crate::cursor::CharCursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value
/// with the delimiters discarded.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Parser for Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    type Output = P2::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content_val, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;

        Ok((content_val, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
///
/// Whitespace is not handled automatically; combine with
/// [`surrounded_by`] and [`ws`](crate::text::ws) for that.
pub fn between<P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    Between {
        open,
        content,
        close,
    }
}

/// Parser that applies the same trimming parser on both sides of a value
pub struct SurroundedBy<P, T> {
    parser: P,
    trim: T,
}

impl<P, T> Parser for SurroundedBy<P, T>
where
    P: Parser,
    T: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.trim.parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.trim.parse(cursor)?;
        Ok((value, cursor))
    }
}

pub fn surrounded_by<P, T>(parser: P, trim: T) -> SurroundedBy<P, T>
where
    P: Parser,
    T: Parser,
{
    SurroundedBy { parser, trim }
}

/// Extension trait to add .surrounded_by() method support for parsers
pub trait SurroundedByExt: Parser + Sized {
    fn surrounded_by<T>(self, trim: T) -> SurroundedBy<Self, T>
    where
        T: Parser,
    {
        SurroundedBy { parser: self, trim }
    }
}

impl<P> SurroundedByExt for P where P: Parser {}
