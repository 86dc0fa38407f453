use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that always succeeds without consuming input, producing a clone
/// of its value
///
/// This is the `return` of the monadic algebra: the left identity of
/// `bind` (`pure(v).bind(f)` behaves exactly like `f(v)`).
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'text, T> Parser<'text> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T>(value: T) -> Pure<T>
where
    T: Clone,
{
    Pure::new(value)
}

/// Parser that always succeeds without consuming input and produces nothing
pub struct Epsilon;

impl<'text> Parser<'text> for Epsilon {
    type Output = ();

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        Ok(((), cursor))
    }
}

/// Convenience function to create an Epsilon parser
pub fn epsilon() -> Epsilon {
    Epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_consumes_nothing() {
        let cursor = CharCursor::new("hello");
        let parser = pure(42);

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert_eq!(cursor.rest(), "hello");
    }

    #[test]
    fn test_pure_on_empty_input() {
        let cursor = CharCursor::new("");
        let parser = pure("token".to_string());

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, "token");
        assert!(cursor.eos());
    }

    #[test]
    fn test_pure_is_reusable() {
        let parser = pure('v');

        let (first, _) = parser.parse(CharCursor::new("a")).unwrap();
        let (second, _) = parser.parse(CharCursor::new("b")).unwrap();
        assert_eq!(first, 'v');
        assert_eq!(second, 'v');
    }

    #[test]
    fn test_epsilon_consumes_nothing() {
        let cursor = CharCursor::new("abc");
        let parser = epsilon();

        let ((), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(cursor.rest(), "abc");
    }
}
