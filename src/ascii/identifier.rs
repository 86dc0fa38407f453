use crate::and::AndExt;
use crate::ascii::letter::{alpha, alphanumeric};
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;

/// Parser that matches an identifier: one letter followed by any run of
/// letters and digits, as one token
pub fn identifier() -> impl for<'text> Parser<'text, Output = String> {
    alpha()
        .and(many(alphanumeric()))
        .map(|(first, rest)| std::iter::once(first).chain(rest).collect())
}
