use crate::cursor::CharCursor;
use crate::error::{Cause, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that replaces the cause of its inner parser's failures
///
/// Useful for turning a low-level complaint (`expected '"'`) into one that
/// names the construct (`expected string`). The failure stays where the inner
/// parser failed. Fatal errors keep their original cause.
pub struct Label<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Parser for Label<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|err| match err {
            ParseError::Failure { loc, .. } => {
                ParseError::failure(loc, Cause::Message(self.message.clone()))
            }
            fatal => fatal,
        })
    }
}

pub fn label<P>(parser: P, message: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser,
{
    Label {
        parser,
        message: message.into(),
    }
}

pub trait LabelExt: Parser + Sized {
    fn label(self, message: impl Into<Cow<'static, str>>) -> Label<Self> {
        label(self, message)
    }
}

impl<P> LabelExt for P where P: Parser {}
