use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given
/// parser
///
/// Repeats until the inner parser fails recoverably, then succeeds with
/// everything accumulated so far and the cursor where the failing attempt
/// started. Zero repetitions is a valid result: `many` never fails on its
/// own. A fatal failure inside the loop propagates instead of ending the
/// repetition.
///
/// Correctness precondition: the inner parser must consume at least one
/// character on every success, otherwise the loop never terminates.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'text, P> Parser<'text> for Many<P>
where
    P: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(error) if error.is_recoverable() => {
                    log::trace!(
                        "repetition ended after {} matches at byte {}",
                        results.len(),
                        cursor.position()
                    );
                    break;
                }
                Err(error) => return Err(error),
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'text, P>(parser: P) -> Many<P>
where
    P: Parser<'text>,
{
    Many::new(parser)
}
