use crate::cursor::CharCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one element; wrap in [`optional`](crate::optional::optional)
///   with an empty default to accept empty lists
/// - A separator that is not followed by an item is left unconsumed
/// - Does not handle whitespace automatically
pub struct SeparatedBy<P, D> {
    parser: P,
    separator: D,
}

impl<P, D> SeparatedBy<P, D> {
    pub fn new(parser: P, separator: D) -> Self {
        SeparatedBy { parser, separator }
    }
}

impl<P, D> Parser for SeparatedBy<P, D>
where
    P: Parser,
    D: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        // Parse the first element (required)
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        results.push(first_value);

        // Parse remaining elements preceded by separator
        loop {
            let temp_cursor = match self.separator.parse(cursor) {
                Ok((_, new_cursor)) => new_cursor,
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => break, // No more separators, we're done
            };

            match self.parser.parse(temp_cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by `delimiter`
pub fn separated_by<D, P>(delimiter: D, parser: P) -> SeparatedBy<P, D>
where
    D: Parser,
    P: Parser,
{
    SeparatedBy::new(parser, delimiter)
}

/// Extension trait to add .separated_by() method support for item parsers
pub trait SeparatedByExt: Parser + Sized {
    fn separated_by<D>(self, delimiter: D) -> SeparatedBy<Self, D>
    where
        D: Parser,
    {
        SeparatedBy::new(self, delimiter)
    }
}

impl<P> SeparatedByExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fatal::FatalExt;
    use crate::or::OrExt;
    use crate::text::{any, exact, integer, literal};

    #[test]
    fn test_empty_list_fails() {
        let parser = separated_by(exact(','), integer());
        assert!(parser.parse(CharCursor::new("")).is_err());
    }

    #[test]
    fn test_single_element() {
        let parser = separated_by(exact(','), integer());

        let (results, _) = parser.parse(CharCursor::new("42")).unwrap();
        assert_eq!(results, vec![42]);
    }

    #[test]
    fn test_multiple_elements() {
        let parser = integer().separated_by(exact(','));

        let (results, _) = parser.parse(CharCursor::new("1,2,3")).unwrap();
        assert_eq!(results, vec![1, 2, 3]);
    }

    #[test]
    fn test_any_items() {
        let parser = separated_by(exact(','), any());
        let (results, cursor) = parser.parse(CharCursor::new("a,b,c")).unwrap();
        assert_eq!(results, vec!['a', 'b', 'c']);
        assert!(cursor.eos());
    }

    #[test]
    fn test_trailing_separator_is_left_unconsumed() {
        let parser = separated_by(exact(','), integer());

        let (results, cursor) = parser.parse(CharCursor::new("1,2,")).unwrap();
        assert_eq!(results, vec![1, 2]);
        assert_eq!(cursor.rest(), ",");
    }

    #[test]
    fn test_non_matching_separator() {
        let parser = separated_by(exact(','), integer());

        let (results, cursor) = parser.parse(CharCursor::new("1;2;3")).unwrap();
        assert_eq!(results, vec![1]); // Only first element
        assert_eq!(cursor.value().unwrap(), ';');
    }

    #[test]
    fn test_string_separator() {
        let parser = separated_by(
            literal("::"),
            literal("apple").or(literal("banana")).or(literal("cherry")),
        );

        let (results, _) = parser
            .parse(CharCursor::new("apple::banana::cherry"))
            .unwrap();
        assert_eq!(results, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_with_remaining_content() {
        let parser = separated_by(exact(','), integer());

        let (results, cursor) = parser.parse(CharCursor::new("1,2,3 extra")).unwrap();
        assert_eq!(results, vec![1, 2, 3]);
        assert_eq!(cursor.value().unwrap(), ' ');
    }

    #[test]
    fn test_fatal_item_after_separator() {
        let parser = separated_by(exact(','), integer().fatal());
        let err = parser.parse(CharCursor::new("1,x")).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.col(), 3);
    }
}
