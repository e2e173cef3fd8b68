//! JSON documents as [`serde_json::Value`]
//!
//! Numbers without a fraction or exponent become JSON integers when they fit
//! in an `i64`; everything else numeric becomes an `f64`. Objects are
//! collected into a [`serde_json::Map`], so a repeated key keeps its last
//! value.

use crate::cursor::CharCursor;
use crate::driver::parse_to_end;
use crate::error::{Cause, ParseError};
use crate::forward::{ForwardRef, recursive};
use crate::or::choice;
use crate::parser::ParseResult;
use crate::prelude::*;
use crate::text::{Literal, any, exact, literal, number_literal, one_of, ws};
use once_cell::sync::Lazy;
use serde_json::{Map, Number, Value};

/// Deepest array and object nesting accepted before failing with `nesting too deep`
pub const MAX_DEPTH: usize = 128;

static VALUE: Lazy<ForwardRef<Value>> = Lazy::new(value);

fn token(symbol: char) -> impl Parser<Output = char> + Send + Sync + 'static {
    exact(symbol).surrounded_by(ws())
}

fn invalid(cursor: CharCursor<'_>, message: &'static str) -> ParseError {
    ParseError::failure(cursor.location(), Cause::Message(message.into()))
}

/// Parser for the four hex digits after `\u`, including surrogate pairs
struct UnicodeEscape {
    low_prefix: Literal,
}

impl UnicodeEscape {
    fn new() -> Self {
        UnicodeEscape {
            low_prefix: literal("\\u"),
        }
    }

    fn hex4<'code>(cursor: CharCursor<'code>) -> ParseResult<'code, u32> {
        let mut cursor = cursor;
        let mut code = 0;
        for _ in 0..4 {
            let digit = cursor
                .value()?
                .to_digit(16)
                .ok_or_else(|| invalid(cursor, "expected hex digit"))?;
            code = code * 16 + digit;
            cursor = cursor.next();
        }
        Ok((code, cursor))
    }
}

impl Parser for UnicodeEscape {
    type Output = char;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (high, after_high) = Self::hex4(cursor)?;

        let (code, rest) = match high {
            0xD800..=0xDBFF => {
                let (_, low_start) = self
                    .low_prefix
                    .parse(after_high)
                    .map_err(|_| invalid(after_high, "unpaired high surrogate"))?;
                let (low, rest) = Self::hex4(low_start)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(invalid(low_start, "invalid low surrogate"));
                }
                (0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00), rest)
            }
            0xDC00..=0xDFFF => return Err(invalid(cursor, "unpaired low surrogate")),
            _ => (high, after_high),
        };

        let ch = char::from_u32(code).ok_or_else(|| invalid(cursor, "invalid code point"))?;
        Ok((ch, rest))
    }
}

fn escape() -> impl Parser<Output = char> + Send + Sync + 'static {
    let simple = one_of(['"', '\\', '/', 'b', 'f', 'n', 'r', 't'])
        .map(|c| match c {
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            other => other,
        })
        .label("invalid escape sequence");
    let unicode = exact('u').discard_left(UnicodeEscape::new().fatal());

    exact('\\').discard_left(unicode.or(simple).fatal())
}

fn string() -> impl Parser<Output = String> + Send + Sync + 'static {
    let plain = any().filter(
        |c| *c != '"' && *c != '\\' && !('\u{0}'..='\u{1f}').contains(c),
        "unexpected character in string",
    );

    exact('"')
        .discard_left(escape().or(plain).many())
        .discard_right(exact('"').fatal())
        .map(|chars| chars.into_iter().collect::<String>())
}

// `0` may only stand alone as the integer part
fn has_leading_zero(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let int_part = unsigned.split(['.', 'e', 'E']).next().unwrap_or(unsigned);
    int_part.len() > 1 && int_part.starts_with('0')
}

fn number() -> impl Parser<Output = Value> + Send + Sync + 'static {
    let checked = number_literal().filter(
        |text| !has_leading_zero(text),
        "leading zero in number",
    );

    checked.try_map(|text| {
        // `-0` stays a float so the sign survives
        if !text.contains(['.', 'e', 'E']) && text != "-0" {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::from(n));
            }
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| Cause::Message(format!("number out of range: {text}").into()))
    })
}

fn keyword(word: &'static str, value: Value) -> impl Parser<Output = Value> + Send + Sync + 'static {
    literal(word).map(move |_| value.clone())
}

fn array(value: ForwardRef<Value>) -> impl Parser<Output = Value> + Send + Sync + 'static {
    let items = value
        .separated_by(token(','))
        .optional(Vec::new())
        .discard_right(token(']').fatal());

    token('[')
        .discard_left(items.depth_limit(MAX_DEPTH))
        .map(Value::Array)
}

fn object(value: ForwardRef<Value>) -> impl Parser<Output = Value> + Send + Sync + 'static {
    let member = string()
        .surrounded_by(ws())
        .discard_right(token(':').fatal())
        .and(value.fatal());

    let members = member
        .separated_by(token(','))
        .optional(Vec::new())
        .discard_right(token('}').fatal());

    token('{')
        .discard_left(members.depth_limit(MAX_DEPTH))
        .map(|members| Value::Object(members.into_iter().collect::<Map<String, Value>>()))
}

/// Build the JSON value grammar
///
/// Call this once and reuse the result: the grammar refers to itself, so
/// every call allocates a new grammar that is never freed. [`parse`] keeps a
/// shared instance.
pub fn value() -> ForwardRef<Value> {
    recursive(|value: ForwardRef<Value>| {
        choice([
            string().map(Value::String).boxed(),
            number().boxed(),
            keyword("true", Value::Bool(true)).boxed(),
            keyword("false", Value::Bool(false)).boxed(),
            keyword("null", Value::Null).boxed(),
            array(value.clone()).boxed(),
            object(value).boxed(),
        ])
        .surrounded_by(ws())
    })
}

/// Parse a complete JSON document
///
/// ```
/// use parserc::grammars::json;
/// use serde_json::json;
///
/// let parsed = json::parse(r#"{"a": [1, 2.5, true]}"#).unwrap();
/// assert_eq!(parsed, json!({"a": [1, 2.5, true]}));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_to_end(&*VALUE, text)
}
