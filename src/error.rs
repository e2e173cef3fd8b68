use std::borrow::Cow;
use std::fmt;

/// A position in the input: scalar index plus 1-based row and column
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub index: usize,
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(index: usize, row: usize, col: usize) -> Self {
        Location { index, row, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, col {}", self.row, self.col)
    }
}

/// Why a parser rejected its input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Cause {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("expected {0:?}")]
    Expected(char),
    #[error("unexpected {0:?}")]
    UnexpectedChar(char),
    #[error("expected {0:?}")]
    ExpectedLiteral(String),
    #[error("end of input not reached")]
    IncompleteParse,
    #[error("forward reference used before it was bound")]
    UnboundReference,
    #[error("{0}")]
    Message(Cow<'static, str>),
}

/// Error produced by a parser
///
/// `Failure` is the ordinary, recoverable outcome: ordered choice, repetition
/// and optionality all treat it as "this alternative did not match" and move
/// on. `Fatal` is produced by [`fatal`](crate::fatal::fatal) (or by invoking an
/// unbound forward reference) and is never recovered from; every combinator
/// hands it straight back to its caller so the whole parse aborts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("parse error at {loc}: {cause}")]
    Failure { loc: Location, cause: Cause },
    #[error("fatal parse error at {loc}: {cause}")]
    Fatal { loc: Location, cause: Cause },
}

impl ParseError {
    pub fn failure(loc: Location, cause: Cause) -> Self {
        ParseError::Failure { loc, cause }
    }

    pub fn fatal(loc: Location, cause: Cause) -> Self {
        ParseError::Fatal { loc, cause }
    }

    pub fn location(&self) -> Location {
        match self {
            ParseError::Failure { loc, .. } | ParseError::Fatal { loc, .. } => *loc,
        }
    }

    pub fn row(&self) -> usize {
        self.location().row
    }

    pub fn col(&self) -> usize {
        self.location().col
    }

    pub fn cause(&self) -> &Cause {
        match self {
            ParseError::Failure { cause, .. } | ParseError::Fatal { cause, .. } => cause,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::Fatal { .. })
    }

    /// Turn a recoverable failure into a fatal one, keeping position and cause
    pub fn escalate(self) -> Self {
        match self {
            ParseError::Failure { loc, cause } => ParseError::Fatal { loc, cause },
            fatal => fatal,
        }
    }

    /// Render the error together with the surrounding lines of `source`
    ///
    /// Shows up to two lines of context before and after the failing row and
    /// points at the failing column:
    ///
    /// ```text
    /// parse error at row 2, col 3: expected ')'
    ///
    ///     1 | (1 +
    ///   > 2 | 2 ]
    ///           ^--- here
    /// ```
    pub fn render(&self, source: &str) -> String {
        let loc = self.location();
        let first = loc.row.saturating_sub(2).max(1);
        let last = loc.row + 2;

        let mut out = format!("{}\n\n", self);
        for (i, line) in source.split('\n').enumerate() {
            let row = i + 1;
            if row < first || row > last {
                continue;
            }
            let line = line.strip_suffix('\r').unwrap_or(line);
            let prefix = if row == loc.row {
                format!("  > {} | ", row)
            } else {
                format!("    {} | ", row)
            };
            out.push_str(&prefix);
            out.push_str(line);
            out.push('\n');

            if row == loc.row {
                let pointer_offset = prefix.len() + loc.col.saturating_sub(1);
                out.push_str(&" ".repeat(pointer_offset));
                out.push_str("^--- here\n");
            }
        }
        out
    }
}

/// Error returned when binding a forward reference that is already bound
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("forward reference is already bound")]
    AlreadyBound,
}
