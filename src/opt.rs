use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or one occurrence of the given
/// parser
///
/// A recoverable failure becomes `None` with the input untouched, so
/// `opt(p)` never fails recoverably itself. Fatal failures propagate.
pub struct Opt<P> {
    parser: P,
}

impl<P> Opt<P> {
    pub fn new(parser: P) -> Self {
        Opt { parser }
    }
}

impl<'text, P> Parser<'text> for Opt<P>
where
    P: Parser<'text>,
{
    type Output = Option<P::Output>;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Option::Some(value), cursor)),
            Err(error) if error.is_recoverable() => Ok((None, cursor)),
            Err(error) => Err(error),
        }
    }
}

/// Convenience function to create an Opt parser
pub fn opt<'text, P>(parser: P) -> Opt<P>
where
    P: Parser<'text>,
{
    Opt::new(parser)
}

/// Extension trait to add .opt() method support for parsers
pub trait OptExt<'text>: Parser<'text> + Sized {
    fn opt(self) -> Opt<Self> {
        Opt::new(self)
    }
}

/// Implement OptExt for all parsers
impl<'text, P> OptExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::{any_char, is_char};
    use crate::try_map::TryMapExt;

    #[test]
    fn test_opt_present() {
        let cursor = CharCursor::new("-42");
        let parser = opt(is_char('-'));

        let (sign, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(sign, Option::Some('-'));
        assert_eq!(cursor.rest(), "42");
    }

    #[test]
    fn test_opt_absent_leaves_input_untouched() {
        let cursor = CharCursor::new("42");
        let parser = opt(is_char('-'));

        let (sign, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(sign, None);
        assert_eq!(cursor.rest(), "42");
    }

    #[test]
    fn test_opt_empty_input() {
        let cursor = CharCursor::new("");
        let parser = opt(is_char('-'));

        let (sign, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(sign, None);
        assert!(cursor.eos());
    }

    #[test]
    fn test_opt_propagates_fatal_errors() {
        let cursor = CharCursor::new("x");
        let parser = opt(any_char().try_map(|_| Err::<char, _>("invariant violated".into())));

        let error = parser.parse(cursor).unwrap_err();
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_opt_method_syntax() {
        let cursor = CharCursor::new("+3");
        let parser = is_char('+').opt();

        let (sign, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(sign, Option::Some('+'));
        assert_eq!(cursor.rest(), "3");
    }
}
