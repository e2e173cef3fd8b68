//! Character-level primitive parsers
//!
//! These are the leaves of every grammar. Each one looks at most at the
//! characters it needs and fails without consuming anything.

pub mod char;
pub mod number;
pub mod string;
pub mod whitespace;

pub use char::{AnyChar, CharRange, IsChar, NoneOf, OneOf, any, exact, none_of, one_of, range};
pub use number::{decimal, digit, digits, integer, number, number_literal};
pub use string::{Literal, literal};
pub use whitespace::{whitespace, ws};
