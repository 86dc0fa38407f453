use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that discards the output of a parser while still
/// consuming its input
///
/// The sub-parser still runs and must still match; only its produced value
/// is dropped. Failures propagate unchanged.
pub struct Ignore<P> {
    parser: P,
}

impl<P> Ignore<P> {
    pub fn new(parser: P) -> Self {
        Ignore { parser }
    }
}

impl<'text, P> Parser<'text> for Ignore<P>
where
    P: Parser<'text>,
{
    type Output = ();

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok(((), cursor))
    }
}

/// Convenience function to create an Ignore parser
pub fn ignore<'text, P>(parser: P) -> Ignore<P>
where
    P: Parser<'text>,
{
    Ignore::new(parser)
}

/// Extension trait to add .ignore() method support for parsers
pub trait IgnoreExt<'text>: Parser<'text> + Sized {
    fn ignore(self) -> Ignore<Self> {
        Ignore::new(self)
    }
}

/// Implement IgnoreExt for all parsers
impl<'text, P> IgnoreExt<'text> for P where P: Parser<'text> {}
