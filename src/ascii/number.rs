use crate::and::AndExt;
use crate::ascii::digit::{digit, digits};
use crate::char::{is_char, one_of};
use crate::many::many;
use crate::map::MapExt;
use crate::opt::opt;
use crate::or::OrExt;
use crate::parser::Parser;

/// Parser that matches an integer without leading zeros: a non-zero first
/// digit followed by any further digits
pub fn positive_integer() -> impl for<'text> Parser<'text, Output = String> {
    one_of("123456789")
        .and(many(digit()))
        .map(|(first, rest)| std::iter::once(first).chain(rest).collect())
}

/// Parser that matches `"0"` or a `positive_integer`
pub fn non_negative_integer() -> impl for<'text> Parser<'text, Output = String> {
    is_char('0').map(String::from).or(positive_integer())
}

/// Parser that matches an optional sign followed by a digit run, as one
/// token
///
/// Leading zeros are accepted: `"-042rest"` parses to `"-042"` with
/// `"rest"` remaining. Use `non_negative_integer` where a canonical
/// (zero-free) form is required.
pub fn integer() -> impl for<'text> Parser<'text, Output = String> {
    opt(one_of("+-"))
        .and(digits())
        .map(|(sign, run)| match sign {
            Some(sign) => format!("{sign}{run}"),
            None => run,
        })
}

/// Parser that matches an `integer` with an optional fractional part, as
/// one token
pub fn decimal() -> impl for<'text> Parser<'text, Output = String> {
    integer()
        .and(opt(is_char('.').and(digits())))
        .map(|(whole, fraction)| match fraction {
            Some((_, digits)) => format!("{whole}.{digits}"),
            None => whole,
        })
}
