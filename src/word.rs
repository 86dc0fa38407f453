use crate::char::one_of;
use crate::map::map;
use crate::parser::Parser;
use crate::some::some;
use itertools::Itertools;
use std::borrow::Cow;
use std::fmt::Display;

/// Fold a parser's iterable output into a single string token
///
/// Works for any output whose items render as text, e.g. `Vec<char>` from
/// a repeated character parser or `Vec<String>` from repeated tokens.
pub fn join<P, I>(parser: P) -> impl for<'text> Parser<'text, Output = String>
where
    P: for<'text> Parser<'text, Output = I>,
    I: IntoIterator,
    I::Item: Display,
{
    map(parser, |pieces| pieces.into_iter().join(""))
}

/// Greedily match a maximal run of class members as one token
///
/// Fails iff zero characters match; one character is enough.
pub fn word(class: impl Into<Cow<'static, str>>) -> impl for<'text> Parser<'text, Output = String> {
    join(some(one_of(class)))
}
