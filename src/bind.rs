use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that feeds one parser's output into a function that
/// builds the next parser
///
/// This is the monadic `bind` and the engine's only mechanism for
/// input-dependent grammars: the parser returned by the function, and
/// therefore the shape of the rest of the parse, can depend on the value
/// just parsed. See `block::n_block` for the canonical example, where a
/// length prefix decides how many characters to consume next.
///
/// If the first parser fails, the failure propagates and the function is
/// never called.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'text, P, F, P2> Parser<'text> for Bind<P, F>
where
    P: Parser<'text>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'text>,
{
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'text, P, F, P2>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'text>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'text>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'text>: Parser<'text> + Sized {
    fn bind<F, P2>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'text>,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<'text, P> BindExt<'text> for P where P: Parser<'text> {}
