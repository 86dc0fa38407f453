use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that transforms the output of a parser using a
/// fallible mapping function
///
/// Unlike a failed match, a mapping failure means the text *did* parse but
/// the parsed value violates a domain invariant (for example a numeric
/// literal that overflows its target type). The resulting error is fatal:
/// `or`, `choice`, `many` and `opt` propagate it instead of backtracking.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<'text, P, F, T, U> Parser<'text> for TryMap<P, F>
where
    P: Parser<'text, Output = T>,
    F: Fn(T) -> Result<U, Cow<'static, str>>,
{
    type Output = U;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let start = cursor;
        let (value, cursor) = self.parser.parse(cursor)?;
        match (self.mapper)(value) {
            Ok(mapped) => Ok((mapped, cursor)),
            // Report at the position where the offending construct began
            Err(message) => Err(ParseError::fatal(message, start.loc())),
        }
    }
}

/// Convenience function to create a TryMap parser
pub fn try_map<'text, P, F, T, U>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<'text, Output = T>,
    F: Fn(T) -> Result<U, Cow<'static, str>>,
{
    TryMap::new(parser, mapper)
}

/// Extension trait to add .try_map() method support for parsers
pub trait TryMapExt<'text>: Parser<'text> + Sized {
    fn try_map<F, U>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, Cow<'static, str>>,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement TryMapExt for all parsers
impl<'text, P> TryMapExt<'text> for P where P: Parser<'text> {}
