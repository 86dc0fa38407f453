use crate::char::{is_char, one_of};
use crate::many::many;
use crate::parser::Parser;
use crate::word::{join, word};

/// The whitespace class: space, tab, newline, carriage return
pub const WHITESPACE: &str = " \t\n\r";

/// Parser that matches a single space
pub fn space() -> impl for<'text> Parser<'text, Output = char> {
    is_char(' ')
}

/// Parser that matches a single tab
pub fn tab() -> impl for<'text> Parser<'text, Output = char> {
    is_char('\t')
}

/// Parser that matches a single newline
pub fn newline() -> impl for<'text> Parser<'text, Output = char> {
    is_char('\n')
}

/// Parser that matches a run of spaces as one token
pub fn spaces() -> impl for<'text> Parser<'text, Output = String> {
    word(" ")
}

/// Parser that matches a run of tabs as one token
pub fn tabs() -> impl for<'text> Parser<'text, Output = String> {
    word("\t")
}

/// Parser that matches a run of newlines as one token
pub fn newlines() -> impl for<'text> Parser<'text, Output = String> {
    word("\n")
}

/// Parser that matches a run of one or more whitespace characters of any
/// kind as one token
pub fn ws() -> impl for<'text> Parser<'text, Output = String> {
    word(WHITESPACE)
}

/// Parser that matches a possibly empty run of whitespace; never fails
pub fn opt_ws() -> impl for<'text> Parser<'text, Output = String> {
    join(many(one_of(WHITESPACE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CharCursor;

    #[test]
    fn test_single_character_parsers() {
        assert_eq!(space().parse(CharCursor::new(" x")).unwrap().0, ' ');
        assert_eq!(tab().parse(CharCursor::new("\tx")).unwrap().0, '\t');
        assert_eq!(newline().parse(CharCursor::new("\nx")).unwrap().0, '\n');
    }

    #[test]
    fn test_space_rejects_tab() {
        assert!(space().parse(CharCursor::new("\t")).is_err());
    }

    #[test]
    fn test_spaces_run() {
        let (token, cursor) = spaces().parse(CharCursor::new("   x")).unwrap();
        assert_eq!(token, "   ");
        assert_eq!(cursor.rest(), "x");
    }

    #[test]
    fn test_ws_mixed_run() {
        let (token, cursor) = ws().parse(CharCursor::new(" \t\n abc")).unwrap();
        assert_eq!(token, " \t\n ");
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_ws_requires_at_least_one() {
        assert!(ws().parse(CharCursor::new("abc")).is_err());
    }

    #[test]
    fn test_opt_ws_zero_matches_succeeds() {
        let (token, cursor) = opt_ws().parse(CharCursor::new("abc")).unwrap();
        assert_eq!(token, "");
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_opt_ws_consumes_run() {
        let (token, cursor) = opt_ws().parse(CharCursor::new("  abc")).unwrap();
        assert_eq!(token, "  ");
        assert_eq!(cursor.rest(), "abc");
    }
}
