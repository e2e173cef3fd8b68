use crate::and::AndExt;
use crate::error::Cause;
use crate::many1::many1;
use crate::map::{MapExt, TryMapExt};
use crate::optional::OptionalExt;
use crate::parser::Parser;
use crate::position::recognize;
use crate::text::char::{CharRange, exact, one_of, range};

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> CharRange {
    range('0', '9')
}

/// Parser for one or more digits, returned as written
pub fn digits() -> impl Parser<Output = String> + Send + Sync + 'static {
    many1(digit()).map(|ds| ds.into_iter().collect::<String>())
}

/// Parser for an unsigned decimal integer
pub fn integer() -> impl Parser<Output = i64> + Send + Sync + 'static {
    digits().try_map(|s| {
        s.parse::<i64>()
            .map_err(|e| Cause::Message(format!("invalid integer {s:?}: {e}").into()))
    })
}

/// Parser for `digits.digits`, e.g. `3.25`
pub fn decimal() -> impl Parser<Output = f64> + Send + Sync + 'static {
    digits()
        .and(exact('.'))
        .and(digits())
        .try_map(|((int_part, _), frac_part)| {
            let text = format!("{int_part}.{frac_part}");
            text.parse::<f64>()
                .map_err(|e| Cause::Message(format!("invalid decimal {text:?}: {e}").into()))
        })
}

/// Parser recognizing a signed number with optional fraction and exponent
///
/// Accepts `-?digits(.digits)?([eE][+-]?digits)?` and returns the matched
/// text unchanged, so callers can decide how to interpret it.
pub fn number_literal() -> impl Parser<Output = String> + Send + Sync + 'static {
    let sign = exact('-').map(|_| ()).optional(());
    let fraction = exact('.').and(digits()).map(|_| ()).optional(());
    let exponent = one_of(['e', 'E'])
        .and(one_of(['+', '-']).map(|_| ()).optional(()))
        .and(digits())
        .map(|_| ())
        .optional(());

    recognize(sign.and(digits()).and(fraction).and(exponent))
}

/// Parser for a floating point number in the `number_literal` syntax
///
/// Any finite `f64` printed with `{}` parses back to the same value.
pub fn number() -> impl Parser<Output = f64> + Send + Sync + 'static {
    number_literal().try_map(|text| {
        text.parse::<f64>()
            .map_err(|e| Cause::Message(format!("invalid number {text:?}: {e}").into()))
    })
}
