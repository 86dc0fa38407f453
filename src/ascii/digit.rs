use crate::char::one_of;
use crate::parser::Parser;
use crate::word::word;

/// The decimal digit class
pub const DIGITS: &str = "0123456789";

/// Parser that matches a single decimal digit
pub fn digit() -> impl for<'text> Parser<'text, Output = char> {
    one_of(DIGITS)
}

/// Parser that matches a maximal run of decimal digits as one token
pub fn digits() -> impl for<'text> Parser<'text, Output = String> {
    word(DIGITS)
}
