use crate::cursor::CharCursor;
use crate::error::{Cause, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that always succeeds without consuming input and returns a clone of its value
pub struct Success<T> {
    value: T,
}

impl<T> Parser for Success<T>
where
    T: Clone,
{
    type Output = T;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a parser that always succeeds
pub fn success<T>(value: T) -> Success<T>
where
    T: Clone,
{
    Success { value }
}

/// Parser that always fails with a recoverable failure at the current position
pub struct Fail<T> {
    message: Cow<'static, str>,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> Parser for Fail<T> {
    type Output = T;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        Err(ParseError::failure(
            cursor.location(),
            Cause::Message(self.message.clone()),
        ))
    }
}

pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail {
        message: message.into(),
        _phantom: std::marker::PhantomData,
    }
}
