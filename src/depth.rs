use crate::cursor::CharCursor;
use crate::error::{Cause, ParseError};
use crate::parser::{ParseResult, Parser};
use log::debug;

/// Parser that bounds how deeply its inner parser may nest inside itself
///
/// Each pass through a `DepthLimit` raises the cursor's depth by one for the
/// inner parser and restores it afterwards. Reaching `limit` is a fatal
/// `nesting too deep` error, so a recursive grammar fails cleanly instead of
/// exhausting the stack. Wrap the part of the grammar that runs after the
/// opening delimiter, so only real nesting is counted.
pub struct DepthLimit<P> {
    parser: P,
    limit: usize,
}

impl<P> Parser for DepthLimit<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let depth = cursor.depth();
        if depth >= self.limit {
            debug!("nesting limit {} reached at {}", self.limit, cursor.location());
            return Err(ParseError::fatal(
                cursor.location(),
                Cause::Message("nesting too deep".into()),
            ));
        }

        let (value, rest) = self.parser.parse(cursor.with_depth(depth + 1))?;
        Ok((value, rest.with_depth(depth)))
    }
}

pub fn depth_limit<P>(parser: P, limit: usize) -> DepthLimit<P>
where
    P: Parser,
{
    DepthLimit { parser, limit }
}

pub trait DepthLimitExt: Parser + Sized {
    fn depth_limit(self, limit: usize) -> DepthLimit<Self> {
        DepthLimit {
            parser: self,
            limit,
        }
    }
}

impl<P> DepthLimitExt for P where P: Parser {}
