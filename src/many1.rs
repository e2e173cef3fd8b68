use crate::cursor::CharCursor;
use crate::many::Many;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<P> Parser for Many1<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let (first_value, cursor) = self.parser.parse(cursor)?;
        let (rest, cursor) = Many::new(&self.parser).parse(cursor)?;

        let mut results = Vec::with_capacity(rest.len() + 1);
        results.push(first_value);
        results.extend(rest);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<P>(parser: P) -> Many1<P>
where
    P: Parser,
{
    Many1::new(parser)
}

pub trait Many1Ext: Parser + Sized {
    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }
}

impl<P> Many1Ext for P where P: Parser {}
