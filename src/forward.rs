use crate::cursor::CharCursor;
use crate::error::{BindError, Cause, ParseError};
use crate::parser::{BoxedParser, ParseResult, Parser};
use log::{trace, warn};
use std::sync::{Arc, OnceLock};

/// A placeholder parser bound to its definition after construction
///
/// Recursive grammars need a parser that refers to itself (a bracketed
/// expression containing an expression). Create the reference first, hand
/// clones of it to the parsers that recurse, then bind the real definition
/// exactly once before parsing anything. All clones share the binding.
///
/// Parsing through a reference that was never bound is a grammar bug and
/// returns a fatal `UnboundReference` error rather than an ordinary failure.
///
/// A bound recursive grammar holds a reference to itself, so it is never
/// freed. Build it once and keep it, e.g. in a `once_cell::sync::Lazy`.
pub struct ForwardRef<T> {
    slot: Arc<OnceLock<BoxedParser<T>>>,
}

impl<T> ForwardRef<T> {
    pub fn new() -> Self {
        ForwardRef {
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// Bind the definition; fails if the reference is already bound
    pub fn bind<P>(&self, parser: P) -> Result<(), BindError>
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        self.slot
            .set(Box::new(parser))
            .map_err(|_| BindError::AlreadyBound)?;
        trace!("forward reference bound");
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T> Clone for ForwardRef<T> {
    fn clone(&self) -> Self {
        ForwardRef {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for ForwardRef<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Parser for ForwardRef<T> {
    type Output = T;

    fn parse<'code>(&self, cursor: CharCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.slot.get() {
            Some(parser) => parser.parse(cursor),
            None => Err(ParseError::fatal(cursor.location(), Cause::UnboundReference)),
        }
    }
}

/// Create an unbound forward reference
pub fn forward_ref<T>() -> ForwardRef<T> {
    ForwardRef::new()
}

/// Build a self-referential parser in one step
///
/// `build` receives a reference to the parser being defined and returns its
/// definition, which is then bound to that reference.
///
/// ```
/// use parserc::prelude::*;
/// use parserc::{parse_to_end, recursive};
/// use parserc::text::exact;
///
/// // nested parentheses around a single 'x', counting the depth
/// let nested = recursive(|nested| {
///     exact('(')
///         .discard_left(nested)
///         .discard_right(exact(')'))
///         .map(|depth: usize| depth + 1)
///         .or(exact('x').map(|_| 0))
/// });
/// assert_eq!(parse_to_end(&nested, "((x))").unwrap(), 2);
/// ```
pub fn recursive<T, P, F>(build: F) -> ForwardRef<T>
where
    P: Parser<Output = T> + Send + Sync + 'static,
    F: FnOnce(ForwardRef<T>) -> P,
{
    let this = ForwardRef::new();
    let definition = build(this.clone());
    if this.bind(definition).is_err() {
        warn!("recursive parser was bound inside its own builder; keeping that binding");
    }
    this
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::discard::DiscardExt;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::text::exact;

    #[test]
    fn test_bind_after_use_in_composition() {
        let first = forward_ref::<char>();
        let pair = first.clone().and(exact('b'));
        first.bind(exact('a')).unwrap();

        let ((a, b), cursor) = pair.parse(CharCursor::new("ab")).unwrap();
        assert_eq!((a, b), ('a', 'b'));
        assert!(cursor.eos());
        assert!(pair.parse(CharCursor::new("")).is_err());
        assert!(pair.parse(CharCursor::new("a")).is_err());
    }

    #[test]
    fn test_bind_twice_is_rejected() {
        let parser = forward_ref::<char>();
        assert!(!parser.is_bound());
        parser.bind(exact('a')).unwrap();
        assert!(parser.is_bound());
        assert_eq!(parser.bind(exact('b')), Err(BindError::AlreadyBound));

        let (ch, _) = parser.parse(CharCursor::new("a")).unwrap();
        assert_eq!(ch, 'a');
    }

    #[test]
    fn test_unbound_reference_is_fatal() {
        let parser = forward_ref::<char>().or(exact('a'));
        let err = parser.parse(CharCursor::new("a")).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.cause(), &Cause::UnboundReference);
    }

    #[test]
    fn test_self_recursive_grammar() {
        let nested: ForwardRef<usize> = forward_ref();
        let definition = exact('[')
            .discard_left(nested.clone())
            .discard_right(exact(']'))
            .map(|depth| depth + 1)
            .or(exact('.').map(|_| 0));
        nested.bind(definition).unwrap();

        let (depth, cursor) = nested.parse(CharCursor::new("[[[.]]]")).unwrap();
        assert_eq!(depth, 3);
        assert!(cursor.eos());
    }

    #[test]
    fn test_recursive_helper() {
        let nested = recursive(|nested| {
            exact('(')
                .discard_left(nested)
                .discard_right(exact(')'))
                .map(|depth: usize| depth + 1)
                .or(exact('x').map(|_| 0))
        });
        assert!(nested.is_bound());
        assert_eq!(nested.parse(CharCursor::new("(x)")).unwrap().0, 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let parser = Arc::new(recursive(|counted| {
            exact('a')
                .discard_left(counted)
                .map(|n: u32| n + 1)
                .or(exact('.').map(|_| 0))
        }));

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let parser = Arc::clone(&parser);
                std::thread::spawn(move || {
                    let input = format!("{}.", "a".repeat(n));
                    parser.parse(CharCursor::new(&input)).map(|(v, _)| v)
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(n as u32));
        }
    }
}
