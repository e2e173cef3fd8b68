use crate::cursor::CharCursor;
use crate::parser::{ParseResult, Parser};

/// Lookahead branching: run `probe`, then continue with one of two parsers
///
/// The probe only decides which branch runs. Whatever it consumed is thrown
/// away and the chosen branch starts from the original cursor. A fatal error
/// from the probe aborts instead of selecting the failure branch.
pub struct Peek<Q, S, F> {
    probe: Q,
    on_success: S,
    on_failure: F,
}

impl<Q, S, F, O> Parser for Peek<Q, S, F>
where
    Q: Parser,
    S: Parser<Output = O>,
    F: Parser<Output = O>,
{
    type Output = O;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.probe.parse(cursor) {
            Ok(_) => self.on_success.parse(cursor),
            Err(err) if err.is_fatal() => Err(err),
            Err(_) => self.on_failure.parse(cursor),
        }
    }
}

pub fn peek<Q, S, F, O>(probe: Q, on_success: S, on_failure: F) -> Peek<Q, S, F>
where
    Q: Parser,
    S: Parser<Output = O>,
    F: Parser<Output = O>,
{
    Peek {
        probe,
        on_success,
        on_failure,
    }
}

/// Repeats a parser until a terminator would match, without consuming it
///
/// Equivalent to `many(peek(terminator, fail(..), parser))`: stops as soon as
/// `terminator` succeeds at the current position, or when `parser` fails.
pub struct ManyUntil<P, U> {
    parser: P,
    terminator: U,
}

impl<P, U> Parser for ManyUntil<P, U>
where
    P: Parser,
    U: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.terminator.parse(cursor) {
                Ok(_) => break,
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => {}
            }
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

pub fn many_until<P, U>(parser: P, terminator: U) -> ManyUntil<P, U>
where
    P: Parser,
    U: Parser,
{
    ManyUntil { parser, terminator }
}

pub trait ManyUntilExt: Parser + Sized {
    fn many_until<U>(self, terminator: U) -> ManyUntil<Self, U>
    where
        U: Parser,
    {
        ManyUntil {
            parser: self,
            terminator,
        }
    }
}

impl<P> ManyUntilExt for P where P: Parser {}
