use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences a list of parsers with a common
/// output, collecting every result in order
///
/// This is the n-ary generalization of `and` as a left fold: every parser
/// must succeed, each one starting from the previous one's remaining
/// input. Intended for two or more parsers; an empty list trivially
/// succeeds with no results. For parsers of different concrete types, box
/// them first (see `Parser::boxed`).
pub struct Chain<P> {
    parsers: Vec<P>,
}

impl<P> Chain<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Chain { parsers }
    }
}

impl<'text, P> Parser<'text> for Chain<P>
where
    P: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let mut results = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Chain parser
pub fn chain<'text, P>(parsers: Vec<P>) -> Chain<P>
where
    P: Parser<'text>,
{
    Chain::new(parsers)
}
