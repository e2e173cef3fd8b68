use crate::cursor::CharCursor;
use crate::error::Location;
use crate::parser::{ParseResult, Parser};

/// Represents a span in the source with start and end locations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start location (inclusive)
    pub start: Location,
    /// End location (exclusive)
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Span { start, end }
    }

    /// Number of characters covered by the span
    pub fn len(&self) -> usize {
        self.end.index - self.start.index
    }

    pub fn is_empty(&self) -> bool {
        self.start.index == self.end.index
    }
}

/// A parser combinator that captures the span of a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Parser for Spanned<P>
where
    P: Parser,
{
    type Output = (P::Output, Span);

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = cursor.location();
        let (output, new_cursor) = self.parser.parse(cursor)?;
        let span = Span::new(start, new_cursor.location());
        Ok(((output, span), new_cursor))
    }
}

pub fn spanned<P>(parser: P) -> Spanned<P>
where
    P: Parser,
{
    Spanned { parser }
}

/// Extension trait to add position tracking to any parser
pub trait SpannedExt: Parser + Sized {
    fn spanned(self) -> Spanned<Self> {
        Spanned { parser: self }
    }
}

impl<P> SpannedExt for P where P: Parser {}

/// A parser combinator that returns the input text its inner parser consumed
pub struct Recognize<P> {
    parser: P,
}

impl<P> Parser for Recognize<P>
where
    P: Parser,
{
    type Output = String;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, new_cursor) = self.parser.parse(cursor)?;
        let before = cursor.rest();
        let consumed = &before[..before.len() - new_cursor.rest().len()];
        Ok((consumed.to_string(), new_cursor))
    }
}

pub fn recognize<P>(parser: P) -> Recognize<P>
where
    P: Parser,
{
    Recognize { parser }
}
