use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given
/// parser
///
/// Equivalent to the first application followed by `many`: fails iff the
/// very first application fails, otherwise repeats until a recoverable
/// failure. Fatal failures propagate from any iteration.
///
/// Correctness precondition: the inner parser must consume at least one
/// character on every success, otherwise the loop never terminates.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'text, P> Parser<'text> for Some<P>
where
    P: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let mut results = Vec::new();

        // First application must succeed
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        results.push(first_value);

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(error) if error.is_recoverable() => break,
                Err(error) => return Err(error),
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<'text, P>(parser: P) -> Some<P>
where
    P: Parser<'text>,
{
    Some::new(parser)
}
