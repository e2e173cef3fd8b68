use crate::error::{Cause, Location, ParseError};

/// Immutable position over the characters of an input string
///
/// A cursor never mutates: advancing returns a new cursor, so a parser that
/// fails can simply hand back the cursor it was given. Row and column are
/// 1-based and always describe the character at `index` (or one past the end
/// of input once the cursor is exhausted).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CharCursor<'code> {
    source: &'code str,
    /// Byte offset of the current character in `source`
    offset: usize,
    /// Number of characters consumed so far
    index: usize,
    row: usize,
    col: usize,
    /// Nesting depth entered through [`depth_limit`](crate::depth::depth_limit)
    depth: usize,
}

impl<'code> CharCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        CharCursor {
            source,
            offset: 0,
            index: 0,
            row: 1,
            col: 1,
            depth: 0,
        }
    }

    /// Get the character at the current cursor position
    ///
    /// Returns `UnexpectedEnd` if the cursor is positioned at the end of input
    pub fn value(&self) -> Result<char, ParseError> {
        self.rest()
            .chars()
            .next()
            .ok_or_else(|| ParseError::failure(self.location(), Cause::UnexpectedEnd))
    }

    /// Advance the cursor past the current character
    ///
    /// If already at the end, returns a cursor still positioned at the end
    pub fn next(self) -> Self {
        match self.rest().chars().next() {
            Some(ch) => {
                let (row, col) = if ch == '\n' {
                    (self.row + 1, 1)
                } else {
                    (self.row, self.col + 1)
                };
                CharCursor {
                    source: self.source,
                    offset: self.offset + ch.len_utf8(),
                    index: self.index + 1,
                    row,
                    col,
                    depth: self.depth,
                }
            }
            None => self,
        }
    }

    /// Advance the cursor, returning an error if it is already at the end
    pub fn try_next(self) -> Result<Self, ParseError> {
        if self.eos() {
            return Err(ParseError::failure(self.location(), Cause::UnexpectedEnd));
        }
        Ok(self.next())
    }

    /// Check if the cursor is at the end of input
    pub fn eos(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Number of characters consumed so far
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn location(&self) -> Location {
        Location::new(self.index, self.row, self.col)
    }

    /// The unconsumed remainder of the input
    pub fn rest(&self) -> &'code str {
        &self.source[self.offset..]
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The same position at another nesting depth
    pub fn with_depth(self, depth: usize) -> Self {
        CharCursor { depth, ..self }
    }

    /// The whole input this cursor walks over
    pub fn source(&self) -> &'code str {
        self.source
    }
}
