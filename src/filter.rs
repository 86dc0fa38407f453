use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that applies a predicate function to the output of another
/// parser
///
/// The predicate form of a character class: where `one_of` matches
/// against an explicit set, `filter` matches against a property (see the
/// letter parsers in `ascii`). A rejected value becomes a recoverable
/// syntax error with the given message, located where the inner parser
/// started.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            message,
        }
    }
}

impl<'text, P, F, T> Parser<'text> for Filter<P, F>
where
    P: Parser<'text, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let (value, next_cursor) = self.parser.parse(cursor)?;
        if (self.predicate)(&value) {
            Ok((value, next_cursor))
        } else {
            Err(ParseError::syntax(self.message.clone(), cursor.loc()))
        }
    }
}

/// Extension trait to add .filter() method support for parsers
pub trait FilterExt<'text>: Parser<'text> {
    fn filter<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate, message.into())
    }
}

impl<'text, P: Parser<'text>> FilterExt<'text> for P {}

/// Convenience function to create a Filter parser
pub fn filter<'text, P, F>(
    parser: P,
    predicate: F,
    message: impl Into<Cow<'static, str>>,
) -> Filter<P, F>
where
    P: Parser<'text>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate, message.into())
}
