use crate::cursor::CharCursor;
use crate::error::ParseError;

/// Core parser trait for parser combinators
///
/// A parser is an immutable, stateless value: a computation from an input
/// position to either a parsed value plus the remaining input, or a
/// `ParseError`. Failures must not consume input; `or` relies on this to
/// retry an alternative from the original cursor.
pub trait Parser<'text> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>>;

    /// Erase the concrete parser type.
    ///
    /// Useful for collecting differently shaped parsers with a common
    /// output into one list for `chain` or `choice`.
    fn boxed(self) -> BoxedParser<'text, Self::Output>
    where
        Self: Sized + 'text,
    {
        Box::new(self)
    }
}

/// Type-erased parser
pub type BoxedParser<'text, O> = Box<dyn Parser<'text, Output = O> + 'text>;

impl<'text, P> Parser<'text> for Box<P>
where
    P: Parser<'text> + ?Sized,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        self.as_ref().parse(cursor)
    }
}
