use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results
/// as a tuple
///
/// Note: chaining multiple `.and()` calls produces nested tuples like
/// `(((a, b), c), d)` rather than a flat tuple. Rust has no variadic
/// generics; the nested shape keeps the combinator fully general and the
/// destructuring pattern makes the parse order explicit. For a homogeneous
/// sequence use `chain`, which flattens into a `Vec`.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'text, P1, P2> Parser<'text> for And<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'text, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'text>: Parser<'text> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'text>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'text, P> AndExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;

    #[test]
    fn test_and_both_succeed() {
        let cursor = CharCursor::new("A5xyz");
        let parser = is_char('A').and(is_char('5'));

        let ((a, five), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(a, 'A');
        assert_eq!(five, '5');
        assert_eq!(cursor.rest(), "xyz");
    }

    #[test]
    fn test_and_first_fails() {
        let cursor = CharCursor::new("Bxyz");
        let parser = is_char('A').and(is_char('x'));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_and_second_fails() {
        let cursor = CharCursor::new("Axyz");
        let parser = is_char('A').and(is_char('5'));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_and_chain_nested_tuples() {
        let cursor = CharCursor::new("A5B");
        let parser = is_char('A').and(is_char('5')).and(is_char('B'));

        let (((a, five), b), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(a, 'A');
        assert_eq!(five, '5');
        assert_eq!(b, 'B');
        assert!(cursor.eos());
    }

    #[test]
    fn test_and_associativity_up_to_tuple_shape() {
        let input = CharCursor::new("abc");

        let left = is_char('a').and(is_char('b')).and(is_char('c'));
        let right = is_char('a').and(is_char('b').and(is_char('c')));

        let (((a1, b1), c1), cursor_left) = left.parse(input).unwrap();
        let ((a2, (b2, c2)), cursor_right) = right.parse(input).unwrap();
        assert_eq!((a1, b1, c1), (a2, b2, c2));
        assert_eq!(cursor_left.rest(), cursor_right.rest());
    }

    #[test]
    fn test_and_function_syntax() {
        let cursor = CharCursor::new("XY");
        let parser = and(is_char('X'), is_char('Y'));

        let ((x, y), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(x, 'X');
        assert_eq!(y, 'Y');
        assert!(cursor.eos());
    }
}
