//! # parserc - Parser Combinator Library
//!
//! A character-level parser combinator library for building recursive-descent
//! parsers out of small, composable pieces.
//!
//! A parser is anything implementing [`Parser`]: given a [`CharCursor`] it
//! either produces a value and the cursor after the consumed input, or a
//! [`ParseError`] carrying the row and column where it gave up. Combinators
//! wrap parsers into bigger ones, and [`parse_to_end`] runs a finished grammar
//! over a whole input.
//!
//! - **Zero panics**: all parsing errors are handled through `Result` types
//! - **Positions everywhere**: every error knows its row and column, and can
//!   render itself against the source text
//! - **Recoverable and fatal failures**: ordinary failures drive backtracking,
//!   [`fatal`](fatal::fatal) errors abort the whole parse at the point of the
//!   real mistake
//! - **Reusable grammars**: parsers are `Send + Sync` values that can be built
//!   once and shared between threads
//!
//! ```
//! use parserc::prelude::*;
//! use parserc::parse_to_end;
//! use parserc::text::{exact, integer, ws};
//!
//! // a comma separated list of integers in brackets
//! let list = integer()
//!     .surrounded_by(ws())
//!     .separated_by(exact(','))
//!     .surrounded_by(ws());
//! let list = exact('[').discard_left(list).discard_right(exact(']').fatal());
//!
//! assert_eq!(parse_to_end(&list, "[1, 2 ,3]").unwrap(), vec![1, 2, 3]);
//!
//! let err = parse_to_end(&list, "[1, 2 3]").unwrap_err();
//! assert!(err.is_fatal());
//! assert_eq!((err.row(), err.col()), (1, 7));
//! ```

pub mod and;
pub mod between;
pub mod constant;
pub mod cursor;
pub mod depth;
pub mod discard;
pub mod driver;
pub mod error;
pub mod fatal;
pub mod filter;
pub mod forward;
pub mod grammars;
pub mod label;
pub mod many;
pub mod many1;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod peek;
pub mod position;
pub mod separated_list;
pub mod sequence;
pub mod text;

pub use constant::{fail, success};
pub use cursor::CharCursor;
pub use depth::depth_limit;
pub use driver::parse_to_end;
pub use error::{BindError, Cause, Location, ParseError};
pub use forward::{ForwardRef, forward_ref, recursive};
pub use or::choice;
pub use parser::{BoxedParser, ParseResult, Parser};
pub use peek::peek;
pub use position::{Span, recognize};
pub use sequence::sequence;

/// Everything needed to write grammars with method syntax
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::between::SurroundedByExt;
    pub use crate::depth::DepthLimitExt;
    pub use crate::discard::DiscardExt;
    pub use crate::fatal::FatalExt;
    pub use crate::filter::FilterExt;
    pub use crate::label::LabelExt;
    pub use crate::many::ManyExt;
    pub use crate::many1::Many1Ext;
    pub use crate::map::{MapExt, TryMapExt};
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::parser::{BoxedExt, Parser};
    pub use crate::peek::ManyUntilExt;
    pub use crate::position::SpannedExt;
    pub use crate::separated_list::SeparatedByExt;
}
