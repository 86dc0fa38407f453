use crate::char::any_char;
use crate::filter::FilterExt;
use crate::parser::Parser;

/// Parser that matches a lowercase ASCII letter
pub fn lowercase() -> impl for<'text> Parser<'text, Output = char> {
    any_char().filter(char::is_ascii_lowercase, "expected lowercase letter")
}

/// Parser that matches an uppercase ASCII letter
pub fn uppercase() -> impl for<'text> Parser<'text, Output = char> {
    any_char().filter(char::is_ascii_uppercase, "expected uppercase letter")
}

/// Parser that matches any ASCII letter
pub fn alpha() -> impl for<'text> Parser<'text, Output = char> {
    any_char().filter(char::is_ascii_alphabetic, "expected letter")
}

/// Parser that matches an ASCII letter or digit
pub fn alphanumeric() -> impl for<'text> Parser<'text, Output = char> {
    any_char().filter(char::is_ascii_alphanumeric, "expected letter or digit")
}
