use crate::cursor::CharCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails with an ordinary failure: it stops at the first one and
/// returns what it collected, with the cursor where that attempt started.
/// Fatal errors are passed through.
///
/// The inner parser must consume input whenever it succeeds. A parser that
/// can succeed on empty input (such as `many(p)` itself or `optional(p, d)`)
/// makes `many` loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(err) if err.is_fatal() => return Err(err),
                // Many matches zero or more, so error is not propagated
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt: Parser + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

impl<P> ManyExt for P where P: Parser {}
