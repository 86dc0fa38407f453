use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that unconditionally consumes exactly the next `count`
/// characters as one token
///
/// No class or pattern is checked; the characters are opaque payload.
/// If fewer than `count` characters remain the parser fails recoverably
/// with an end-of-input error; `count == remaining length` succeeds and
/// leaves the cursor at end of input.
pub struct Take {
    count: usize,
}

impl Take {
    pub fn new(count: usize) -> Self {
        Take { count }
    }
}

impl<'text> Parser<'text> for Take {
    type Output = String;

    fn parse(
        &self,
        cursor: CharCursor<'text>,
    ) -> Result<(Self::Output, CharCursor<'text>), ParseError<'text>> {
        let start = cursor.position();
        let mut current = cursor;

        for _ in 0..self.count {
            current.value()?;
            current = current.next();
        }

        let token = cursor.source()[start..current.position()].to_string();
        Ok((token, current))
    }
}

/// Convenience function to create a Take parser
pub fn take(count: usize) -> Take {
    Take::new(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_exact_count() {
        let cursor = CharCursor::new("hallo rest");
        let parser = take(5);

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, "hallo");
        assert_eq!(cursor.rest(), " rest");
    }

    #[test]
    fn test_take_zero() {
        let cursor = CharCursor::new("abc");
        let parser = take(0);

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, "");
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_take_boundary_exact_remaining_length() {
        let cursor = CharCursor::new("abc");
        let parser = take(3);

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, "abc");
        assert!(cursor.eos());
    }

    #[test]
    fn test_take_more_than_remaining_fails_recoverably() {
        let cursor = CharCursor::new("ab");
        let parser = take(3);

        let error = parser.parse(cursor).unwrap_err();
        assert!(error.is_recoverable());
        assert!(error.to_string().contains("end of input"));
    }

    #[test]
    fn test_take_counts_characters_not_bytes() {
        let cursor = CharCursor::new("åäö rest");
        let parser = take(3);

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, "åäö");
        assert_eq!(cursor.rest(), " rest");
    }
}
