use crate::error::{CodeLoc, ParseError};

/// Immutable cursor over a source string, advancing one character at a time.
///
/// The cursor is `Copy`: saving a position is a plain copy, which is what
/// makes backtracking in `or` free of any save/restore step. Consuming a
/// character never mutates shared state; it produces a new cursor whose
/// `rest()` is a suffix of the original input.
#[derive(Debug, Copy, Clone)]
pub enum CharCursor<'text> {
    /// Cursor pointing at a valid character position
    Valid {
        text: &'text str,
        /// Byte offset of the next character to read
        position: usize,
    },
    /// Cursor past the last character - nothing left to read
    EndOfInput { text: &'text str },
}

impl<'text> CharCursor<'text> {
    pub fn new(text: &'text str) -> Self {
        if text.is_empty() {
            return CharCursor::EndOfInput { text };
        }
        CharCursor::Valid { text, position: 0 }
    }

    /// Peek the character at the current position without consuming it.
    ///
    /// Fails recoverably at end of input.
    pub fn value(&self) -> Result<char, ParseError<'text>> {
        match self {
            CharCursor::Valid { text, position } => match text[*position..].chars().next() {
                Some(ch) => Ok(ch),
                None => Err(ParseError::end_of_input(CodeLoc::new(text, *position))),
            },
            CharCursor::EndOfInput { text } => {
                Err(ParseError::end_of_input(CodeLoc::new(text, text.len())))
            }
        }
    }

    /// Advance past the current character.
    ///
    /// An end-of-input cursor stays at end of input.
    pub fn next(self) -> Self {
        match self {
            CharCursor::Valid { text, position } => {
                let width = text[position..].chars().next().map_or(0, char::len_utf8);
                let position = position + width;
                if position >= text.len() {
                    CharCursor::EndOfInput { text }
                } else {
                    CharCursor::Valid { text, position }
                }
            }
            CharCursor::EndOfInput { text } => CharCursor::EndOfInput { text },
        }
    }

    /// Byte offset into the source; the source length at end of input.
    pub fn position(&self) -> usize {
        match self {
            CharCursor::Valid { position, .. } => *position,
            CharCursor::EndOfInput { text } => text.len(),
        }
    }

    /// The full source text this cursor was created over.
    pub fn source(&self) -> &'text str {
        match self {
            CharCursor::Valid { text, .. } => text,
            CharCursor::EndOfInput { text } => text,
        }
    }

    /// The unconsumed suffix of the input.
    pub fn rest(&self) -> &'text str {
        &self.source()[self.position()..]
    }

    /// Whether the cursor is at end of input.
    pub fn eos(&self) -> bool {
        matches!(self, CharCursor::EndOfInput { .. })
    }

    pub fn loc(&self) -> CodeLoc<'text> {
        CodeLoc::new(self.source(), self.position())
    }
}
