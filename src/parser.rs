use crate::cursor::CharCursor;
use crate::error::ParseError;
use std::sync::Arc;

/// Outcome of a parser application: the produced value and the remaining input
pub type ParseResult<'code, T> = Result<(T, CharCursor<'code>), ParseError>;

/// A type-erased parser, used wherever parsers of different types share a slot
pub type BoxedParser<T> = Box<dyn Parser<Output = T> + Send + Sync>;

/// Core parser trait for parser combinators
///
/// The input lifetime lives on `parse` rather than on the trait so that a
/// grammar can be built once and then run over any number of inputs.
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures do not consume input: the caller
    /// still holds the cursor it passed in.
    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<P> BoxedExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{exact, literal};

    #[test]
    fn test_reference_is_a_parser() {
        let parser = exact('a');
        let (ch, cursor) = (&parser).parse(CharCursor::new("ab")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.value().unwrap(), 'b');
    }

    #[test]
    fn test_boxed_parsers_share_a_vec() {
        let parsers: Vec<BoxedParser<char>> = vec![exact('a').boxed(), exact('b').boxed()];
        let (ch, _) = parsers[1].parse(CharCursor::new("b")).unwrap();
        assert_eq!(ch, 'b');
    }

    #[test]
    fn test_arc_parser() {
        let parser = Arc::new(literal("hi"));
        let (s, cursor) = parser.parse(CharCursor::new("hi!")).unwrap();
        assert_eq!(s, "hi");
        assert_eq!(cursor.rest(), "!");
    }
}
