//! Arithmetic expressions over `f64`
//!
//! Supports `+ - * /` with the usual precedence, parentheses, integer and
//! decimal literals and whitespace anywhere between tokens. Once an operator
//! or an opening parenthesis has been read the grammar is committed, so
//! `1+` and `(1` fail where the operand or `)` is missing. Parentheses nest
//! at most [`MAX_DEPTH`] levels deep.

use crate::driver::parse_to_end;
use crate::error::{Cause, ParseError};
use crate::forward::{ForwardRef, recursive};
use crate::or::choice;
use crate::prelude::*;
use crate::text::{decimal, digits, exact, ws};
use once_cell::sync::Lazy;

/// Deepest parenthesis nesting accepted before failing with `nesting too deep`
pub const MAX_DEPTH: usize = 128;

static EXPRESSION: Lazy<ForwardRef<f64>> = Lazy::new(expression);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }
}

fn token(symbol: char) -> impl Parser<Output = char> + Send + Sync + 'static {
    exact(symbol).surrounded_by(ws())
}

fn operator(symbol: char, op: Op) -> impl Parser<Output = Op> + Send + Sync + 'static {
    token(symbol).map(move |_| op)
}

// Left-associative fold of `first (op operand)*`
fn fold((first, rest): (f64, Vec<(Op, f64)>)) -> f64 {
    rest.into_iter()
        .fold(first, |acc, (op, rhs)| op.apply(acc, rhs))
}

fn factor(expr: ForwardRef<f64>) -> impl Parser<Output = f64> + Send + Sync + 'static {
    let integer = digits().try_map(|s| {
        s.parse::<f64>()
            .map_err(|e| Cause::Message(format!("invalid number {s:?}: {e}").into()))
    });
    let bracket = token('(').discard_left(
        expr.discard_right(token(')').fatal())
            .depth_limit(MAX_DEPTH),
    );

    choice([
        decimal().surrounded_by(ws()).boxed(),
        integer.surrounded_by(ws()).boxed(),
        bracket.boxed(),
    ])
}

fn term(expr: ForwardRef<f64>) -> impl Parser<Output = f64> + Send + Sync + 'static {
    let op = operator('*', Op::Mul).or(operator('/', Op::Div));
    factor(expr.clone())
        .and(op.and(factor(expr).fatal()).many())
        .map(fold)
}

/// Build the expression grammar
///
/// Call this once and reuse the result: the grammar refers to itself, so
/// every call allocates a new grammar that is never freed. [`eval`] keeps a
/// shared instance.
pub fn expression() -> ForwardRef<f64> {
    recursive(|expr| {
        let op = operator('+', Op::Add).or(operator('-', Op::Sub));
        term(expr.clone())
            .and(op.and(term(expr).fatal()).many())
            .map(fold)
    })
}

/// Evaluate an arithmetic expression
///
/// ```
/// use parserc::grammars::calc;
///
/// assert_eq!(calc::eval("(2+3)*(7-4)").unwrap(), 15.0);
/// assert!(calc::eval("1 * (2 + 3").unwrap_err().is_fatal());
/// ```
pub fn eval(text: &str) -> Result<f64, ParseError> {
    parse_to_end(&*EXPRESSION, text)
}
