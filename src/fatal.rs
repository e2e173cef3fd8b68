use crate::cursor::CharCursor;
use crate::parser::{ParseResult, Parser};
use log::debug;

/// Parser that turns any failure of its inner parser into a fatal error
///
/// Use it once a grammar has committed to a branch, e.g. after an opening
/// bracket: a missing closing bracket is then reported where it is missing
/// instead of being swallowed by an enclosing choice.
pub struct Fatal<P> {
    parser: P,
}

impl<P> Parser for Fatal<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|err| {
            if !err.is_fatal() {
                debug!("escalating parse failure to fatal: {err}");
            }
            err.escalate()
        })
    }
}

pub fn fatal<P>(parser: P) -> Fatal<P>
where
    P: Parser,
{
    Fatal { parser }
}

/// Extension trait to add .fatal() method support for parsers
pub trait FatalExt: Parser + Sized {
    fn fatal(self) -> Fatal<Self> {
        Fatal { parser: self }
    }
}

impl<P> FatalExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Cause;
    use crate::text::exact;

    #[test]
    fn test_fatal_passes_success_through() {
        let (ch, cursor) = fatal(exact('a')).parse(CharCursor::new("ab")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.value().unwrap(), 'b');
    }

    #[test]
    fn test_fatal_escalates_failure() {
        let err = exact('a').fatal().parse(CharCursor::new("b")).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.cause(), &Cause::Expected('a'));
        assert_eq!((err.row(), err.col()), (1, 1));
    }

    #[test]
    fn test_nested_fatal_is_unchanged() {
        let once = exact('a').fatal().parse(CharCursor::new("b")).unwrap_err();
        let twice = exact('a').fatal().fatal().parse(CharCursor::new("b")).unwrap_err();
        assert_eq!(once, twice);
    }
}
