use crate::cursor::CharCursor;
use crate::parser::{ParseResult, Parser};

/// Parser that falls back to a default value when its inner parser fails
///
/// On an ordinary failure it succeeds with a clone of `default` and consumes
/// nothing. Fatal errors are passed through. Because it can succeed without
/// consuming input, never repeat it with [`many`](crate::many::many).
pub struct Optional<P, T> {
    parser: P,
    default: T,
}

impl<P, T> Parser for Optional<P, T>
where
    P: Parser<Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(err) if err.is_fatal() => Err(err),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P, T>(parser: P, default: T) -> Optional<P, T>
where
    P: Parser<Output = T>,
    T: Clone,
{
    Optional { parser, default }
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self, default: Self::Output) -> Optional<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        Optional {
            parser: self,
            default,
        }
    }
}

impl<P> OptionalExt for P where P: Parser {}
