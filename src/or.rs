use crate::cursor::CharCursor;
use crate::error::{Cause, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both alternatives start from the same cursor, so nothing the first one
/// consumed leaks into the second. When both fail, only the second error is
/// reported, even if the first got further into the input: order
/// alternatives from most to least specific. A fatal error from the first
/// alternative is returned as is and the second one is never tried.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(err) if err.is_fatal() => Err(err),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over any number of alternatives
///
/// Behaves like a left-to-right chain of [`Or`]: first success wins, the
/// reported error is the last alternative's, and fatal errors stop the search.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Parser for Choice<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut last_error = None;

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => last_error = Some(err),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ParseError::failure(cursor.location(), Cause::Message("no alternatives".into()))
        }))
    }
}

/// Create an ordered choice between `parsers`
///
/// ```
/// use parserc::prelude::*;
/// use parserc::{choice, parse_to_end};
/// use parserc::text::literal;
///
/// let fruit = choice([literal("apple"), literal("banana"), literal("cat")]);
/// assert_eq!(parse_to_end(&fruit, "banana").unwrap(), "banana");
/// assert!(parse_to_end(&fruit, "doctor").is_err());
/// ```
pub fn choice<P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser,
{
    Choice {
        parsers: parsers.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::fatal::FatalExt;
    use crate::map::MapExt;
    use crate::parser::BoxedExt;
    use crate::text::{exact, literal};

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(exact('a'), exact('b'));

        let (ch, cursor) = parser.parse(CharCursor::new("abc")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.value().unwrap(), 'b');
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(exact('a'), exact('b'));

        let (ch, cursor) = parser.parse(CharCursor::new("bcd")).unwrap();
        assert_eq!(ch, 'b');
        assert_eq!(cursor.value().unwrap(), 'c');
    }

    #[test]
    fn test_or_both_fail() {
        let parser = or(exact('a'), exact('b'));
        assert!(parser.parse(CharCursor::new("xyz")).is_err());
        assert!(parser.parse(CharCursor::new("")).is_err());
    }

    #[test]
    fn test_or_is_left_biased() {
        let parser = literal("ab").map(|_| 1).or(literal("ab").map(|_| 2));
        assert_eq!(parser.parse(CharCursor::new("ab")).unwrap().0, 1);
    }

    #[test]
    fn test_or_backtracks_before_second_alternative() {
        let parser = literal("abc").or(literal("abd"));
        let (s, cursor) = parser.parse(CharCursor::new("abd")).unwrap();
        assert_eq!(s, "abd");
        assert!(cursor.eos());
    }

    #[test]
    fn test_or_reports_last_alternative_error() {
        // The first alternative gets further, but its error is discarded
        let parser = literal("abcd").or(literal("x"));
        let err = parser.parse(CharCursor::new("abcx")).unwrap_err();
        assert_eq!(err.cause(), &Cause::ExpectedLiteral("x".to_string()));
    }

    #[test]
    fn test_shorter_first_alternative_wins() {
        let parser = literal("a").or(literal("ab"));
        let (s, cursor) = parser.parse(CharCursor::new("ab")).unwrap();
        assert_eq!(s, "a");
        assert_eq!(cursor.rest(), "b");
    }

    #[test]
    fn test_or_does_not_swallow_fatal() {
        let parser = exact('a').and(exact('b').fatal()).map(|_| 'x').or(exact('a'));
        let err = parser.parse(CharCursor::new("ac")).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.col(), 2);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = exact('a').or(exact('b')).or(exact('c')).or(exact('d'));

        let (ch, cursor) = parser.parse(CharCursor::new("d")).unwrap();
        assert_eq!(ch, 'd');
        assert!(cursor.eos());
    }

    #[test]
    fn test_choice() {
        let parser = choice([literal("apple"), literal("banana"), literal("cat")]);
        for word in ["apple", "banana", "cat"] {
            assert_eq!(parser.parse(CharCursor::new(word)).unwrap().0, word);
        }
        assert!(parser.parse(CharCursor::new("doctor")).is_err());
        assert!(parser.parse(CharCursor::new("")).is_err());
    }

    #[test]
    fn test_choice_reports_last_error() {
        let parser = choice([literal("apple"), literal("banana")]);
        let err = parser.parse(CharCursor::new("apricot")).unwrap_err();
        assert_eq!(err.cause(), &Cause::ExpectedLiteral("banana".to_string()));
    }

    #[test]
    fn test_choice_stops_at_fatal() {
        let parser = choice([exact('a').fatal().boxed(), exact('b').boxed()]);
        let err = parser.parse(CharCursor::new("b")).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_choice_fails() {
        let parser = choice(Vec::<crate::text::IsChar>::new());
        let err = parser.parse(CharCursor::new("a")).unwrap_err();
        assert!(!err.is_fatal());
    }
}
