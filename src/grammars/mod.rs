//! Complete grammars built from the combinators in this crate
//!
//! Both double as worked examples: [`calc`] shows operator precedence through
//! layered repetition, [`json`] shows list and object grammars over a
//! recursive value.

pub mod calc;
pub mod json;
