use crate::many::{Many, many};
use crate::text::char::{OneOf, one_of};

/// Parser for a single space, tab, newline or carriage return
pub fn whitespace() -> OneOf {
    one_of([' ', '\t', '\n', '\r'])
}

/// Parser for a possibly empty run of whitespace
pub fn ws() -> Many<OneOf> {
    many(whitespace())
}
