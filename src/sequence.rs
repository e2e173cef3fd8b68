use crate::cursor::CharCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs a list of parsers one after another
///
/// Generalizes [`And`](crate::and::And) to any number of parsers sharing an
/// output type and collects their values in order. Like `And` it stops at
/// the first failure and reports that parser's error.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<P> Parser for Sequence<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Sequence parser
///
/// Parsers of different types can be combined by boxing them first:
/// ```
/// use parserc::prelude::*;
/// use parserc::{parse_to_end, sequence};
/// use parserc::text::{exact, literal};
///
/// let parser = sequence(vec![
///     exact('a').map(String::from).boxed(),
///     literal(" hello ").map(String::from).boxed(),
///     exact('b').map(String::from).boxed(),
/// ]);
/// assert_eq!(parse_to_end(&parser, "a hello b").unwrap(), ["a", " hello ", "b"]);
/// ```
pub fn sequence<P>(parsers: impl IntoIterator<Item = P>) -> Sequence<P>
where
    P: Parser,
{
    Sequence::new(parsers.into_iter().collect())
}
