use crate::cursor::CharCursor;
use crate::error::{Cause, ParseError};
use crate::parser::Parser;
use log::{debug, trace};

/// Run `parser` over the whole of `input`
///
/// Succeeds only if the parser succeeds and leaves no input behind. Trailing
/// input is reported as an `IncompleteParse` failure at the first character
/// that was not consumed.
///
/// ```
/// use parserc::parse_to_end;
/// use parserc::text::literal;
///
/// assert_eq!(parse_to_end(&literal("ab"), "ab").unwrap(), "ab");
///
/// let err = parse_to_end(&literal("ab"), "abc").unwrap_err();
/// assert_eq!(err.to_string(), "parse error at row 1, col 3: end of input not reached");
/// ```
pub fn parse_to_end<P>(parser: &P, input: &str) -> Result<P::Output, ParseError>
where
    P: Parser + ?Sized,
{
    trace!("parsing {} bytes of input", input.len());

    let (value, rest) = parser.parse(CharCursor::new(input)).inspect_err(|err| {
        debug!("parse failed: {err}");
    })?;

    if !rest.eos() {
        debug!("parse stopped early at {}", rest.location());
        return Err(ParseError::failure(rest.location(), Cause::IncompleteParse));
    }

    Ok(value)
}
