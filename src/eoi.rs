use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that succeeds, producing nothing, iff the input is exhausted
///
/// Trailing characters are reported as a *recoverable* syntax error, so
/// `eoi` composes uniformly inside `or`-based grammars ("this alternative
/// requires the input to end here" is an ordinary mismatch, not a
/// catastrophe). Callers that want trailing input to abort a parse can
/// escalate the failure themselves.
pub struct Eoi;

impl<'text> Parser<'text> for Eoi {
    type Output = ();

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        match cursor.value() {
            Err(_) => Ok(((), cursor)),
            Ok(ch) => Err(ParseError::syntax(
                format!("expected end of input, found '{}'", ch),
                cursor.loc(),
            )),
        }
    }
}

/// Convenience function to create an Eoi parser
pub fn eoi() -> Eoi {
    Eoi
}
