use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails
/// recoverably, tries the second parser from the same position
///
/// Because the cursor is `Copy`, the second attempt starts from the
/// original, unconsumed input no matter how far the first parser got
/// before failing. A fatal failure from the first parser propagates
/// without the second parser ever running.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'text, P1, P2, O> Parser<'text> for Or<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    type Output = O;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(error) if error.is_recoverable() => {
                log::trace!(
                    "alternative failed at byte {}, backtracking to byte {}",
                    error.position(),
                    cursor.position()
                );
                self.parser2.parse(cursor)
            }
            Err(error) => Err(error),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'text>: Parser<'text> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'text, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'text, P> OrExt<'text> for P where P: Parser<'text> {}

/// Convenience function to create an Or parser
pub fn or<'text, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::try_map::TryMapExt;

    #[test]
    fn test_or_first_succeeds() {
        let _ = env_logger::builder().is_test(true).try_init();
        let cursor = CharCursor::new("abc");
        let parser = or(is_char('a'), is_char('b'));

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_or_second_succeeds() {
        let _ = env_logger::builder().is_test(true).try_init();
        let cursor = CharCursor::new("bcd");
        let parser = or(is_char('a'), is_char('b'));

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'b');
        assert_eq!(cursor.rest(), "cd");
    }

    #[test]
    fn test_or_both_fail() {
        let cursor = CharCursor::new("xyz");
        let parser = or(is_char('a'), is_char('b'));

        // The reported failure is the second branch's
        let error = parser.parse(cursor).unwrap_err();
        assert!(error.to_string().contains("'b'"));
    }

    #[test]
    fn test_or_backtracks_to_original_input() {
        // literal("ab") consumes 'a' internally before failing on 'x';
        // the alternative must still see the input from the start
        let cursor = CharCursor::new("axe");
        let parser = literal("ab").or(literal("ax"));

        let (matched, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(matched.as_ref(), "ax");
        assert_eq!(cursor.rest(), "e");
    }

    #[test]
    fn test_or_does_not_swallow_fatal_errors() {
        let cursor = CharCursor::new("a");
        let parser = is_char('a')
            .try_map(|_| Err::<char, _>("invariant violated".into()))
            .or(is_char('a'));

        let error = parser.parse(cursor).unwrap_err();
        assert!(!error.is_recoverable());
        assert!(error.to_string().contains("invariant violated"));
    }

    #[test]
    fn test_or_method_chain() {
        let cursor = CharCursor::new("c");
        let parser = is_char('a').or(is_char('b')).or(is_char('c'));

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'c');
        assert!(cursor.eos());
    }

    #[test]
    fn test_or_is_not_commutative() {
        // Both branches match; the left one wins
        let input = CharCursor::new("ab");

        let left_first = literal("a").or(literal("ab"));
        let (matched, _) = left_first.parse(input).unwrap();
        assert_eq!(matched.as_ref(), "a");

        let long_first = literal("ab").or(literal("a"));
        let (matched, _) = long_first.parse(input).unwrap();
        assert_eq!(matched.as_ref(), "ab");
    }

    #[test]
    fn test_or_with_map_to_common_type() {
        let cursor = CharCursor::new("7");
        let parser = is_char('x').map(|_| 0u32).or(is_char('7').map(|_| 7u32));

        let (n, _) = parser.parse(cursor).unwrap();
        assert_eq!(n, 7);
    }
}
