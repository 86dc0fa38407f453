use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that tries each parser in a list, committing to the
/// first success
///
/// This is the n-ary generalization of `or` as a left fold. Every attempt
/// starts from the same original cursor. If all branches fail recoverably
/// the error of the *last* branch is reported; no cross-branch "best
/// error" heuristic is attempted. A fatal failure stops the trial
/// immediately. Intended for two or more parsers; an empty list is a
/// caller bug and yields a fatal error.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'text, P> Parser<'text> for Choice<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let mut last_error = None;
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(error) if error.is_recoverable() => {
                    log::trace!(
                        "choice branch failed at byte {}, trying next",
                        error.position()
                    );
                    last_error = Some(error);
                }
                Err(error) => return Err(error),
            }
        }
        Err(last_error
            .unwrap_or_else(|| ParseError::fatal("choice over an empty list", cursor.loc())))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'text, P>(parsers: Vec<P>) -> Choice<P>
where
    P: Parser<'text>,
{
    Choice::new(parsers)
}
