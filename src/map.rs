use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a
/// mapping function
///
/// This is the algebra's `fmap`: the sub-parser's produced value is
/// replaced by the single value the function synthesizes from it. Failures
/// propagate unchanged.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'text, P, F, T, U> Parser<'text> for Map<P, F>
where
    P: Parser<'text, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'text, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'text, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'text>: Parser<'text> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'text, P> MapExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::or::OrExt;

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Special(char),
    }

    #[test]
    fn test_map_char_to_token() {
        let cursor = CharCursor::new("X");
        let parser = is_char('X').map(Token::Letter);

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, Token::Letter('X'));
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_chaining() {
        let cursor = CharCursor::new("5");
        let parser = is_char('5')
            .map(|ch| ch.to_digit(10))
            .map(|digit| format!("digit: {}", digit.map_or(0, |d| d)));

        let (result, _) = parser.parse(cursor).unwrap();
        assert_eq!(result, "digit: 5");
    }

    #[test]
    fn test_map_with_or_common_type() {
        let cursor = CharCursor::new("!");
        let parser = is_char('A')
            .map(Token::Letter)
            .or(is_char('!').map(Token::Special));

        let (token, _) = parser.parse(cursor).unwrap();
        assert_eq!(token, Token::Special('!'));
    }

    #[test]
    fn test_map_preserves_errors() {
        let cursor = CharCursor::new("xyz");
        let parser = is_char('A').map(|ch| ch as u32);

        let result = parser.parse(cursor);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_recoverable());
    }

    #[test]
    fn test_function_syntax() {
        let cursor = CharCursor::new("9");
        let parser = map(is_char('9'), String::from);

        let (s, _) = parser.parse(cursor).unwrap();
        assert_eq!(s, "9");
    }
}
