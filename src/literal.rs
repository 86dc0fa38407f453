use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string character by character
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'text> Parser<'text> for Literal {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let mut current = cursor;

        for expected_char in self.expected.chars() {
            match current.value() {
                Ok(ch) if ch == expected_char => current = current.next(),
                Ok(ch) => {
                    return Err(ParseError::syntax(
                        format!(
                            "expected '{}', found '{}' while matching \"{}\"",
                            expected_char, ch, self.expected
                        ),
                        current.loc(),
                    ));
                }
                Err(_) => {
                    return Err(ParseError::syntax(
                        format!(
                            "expected '{}', found end of input while matching \"{}\"",
                            expected_char, self.expected
                        ),
                        current.loc(),
                    ));
                }
            }
        }

        // Cheap for a &'static str, one allocation otherwise
        Ok((self.expected.clone(), current))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
