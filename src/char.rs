use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use itertools::Itertools;
use std::borrow::Cow;

/// Parser that consumes and returns a single character
pub struct AnyChar;

impl<'text> Parser<'text> for AnyChar {
    type Output = char;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let ch = cursor.value()?;
        Ok((ch, cursor.next()))
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that matches one specific character
pub struct IsChar {
    expected: char,
}

impl IsChar {
    pub fn new(expected: char) -> Self {
        IsChar { expected }
    }
}

impl<'text> Parser<'text> for IsChar {
    type Output = char;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        match cursor.value() {
            Ok(ch) if ch == self.expected => Ok((ch, cursor.next())),
            Ok(ch) => Err(ParseError::syntax(
                format!("expected '{}', found '{}'", self.expected, ch),
                cursor.loc(),
            )),
            Err(_) => Err(ParseError::syntax(
                format!("expected '{}', found end of input", self.expected),
                cursor.loc(),
            )),
        }
    }
}

/// Convenience function to create an IsChar parser
pub fn is_char(expected: char) -> IsChar {
    IsChar::new(expected)
}

/// Parser that matches one character out of a class
///
/// The class is the set of acceptable characters, given as a string. The
/// failure message names the class and the character actually found, or
/// end of input.
pub struct OneOf {
    class: Cow<'static, str>,
}

impl OneOf {
    pub fn new(class: impl Into<Cow<'static, str>>) -> Self {
        OneOf {
            class: class.into(),
        }
    }

    fn describe_class(&self) -> String {
        self.class.chars().map(|c| format!("'{c}'")).join(", ")
    }
}

impl<'text> Parser<'text> for OneOf {
    type Output = char;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        match cursor.value() {
            Ok(ch) if self.class.contains(ch) => Ok((ch, cursor.next())),
            Ok(ch) => Err(ParseError::syntax(
                format!(
                    "expected one of {}, found '{}'",
                    self.describe_class(),
                    ch
                ),
                cursor.loc(),
            )),
            Err(_) => Err(ParseError::syntax(
                format!(
                    "expected one of {}, found end of input",
                    self.describe_class()
                ),
                cursor.loc(),
            )),
        }
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of(class: impl Into<Cow<'static, str>>) -> OneOf {
    OneOf::new(class)
}
