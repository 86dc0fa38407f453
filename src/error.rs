use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Location of a parse failure: the full source text plus the byte offset
/// at which the failing parser was positioned.
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'text> {
    text: &'text str,
    offset: usize,
}

/// Human-facing position derived from a `CodeLoc`.
#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    /// 1-based line number
    pub line: usize,
    /// 1-based character column within that line
    pub column: usize,
}

impl<'text> CodeLoc<'text> {
    pub fn new(text: &'text str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Absolute byte offset into the source text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Calculate line number and character column for this location.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.text[..self.offset.min(self.text.len())];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        ReadablePosition { line, column }
    }

    /// The line containing this location, with a caret pointing at it.
    /// Used by `ParseError::report` to render diagnostics.
    pub fn context(&self) -> String {
        let pos = self.readable_position();
        let line_start = self.text[..self.offset.min(self.text.len())]
            .rfind('\n')
            .map_or(0, |i| i + 1);
        let line_end = self.text[line_start..]
            .find('\n')
            .map_or(self.text.len(), |i| line_start + i);
        let prefix = format!("  > {} | ", pos.line);
        let pointer_offset = prefix.chars().count() + pos.column - 1;
        format!(
            "{}{}\n{}^--- here",
            prefix,
            &self.text[line_start..line_end],
            " ".repeat(pointer_offset)
        )
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(f, "line {}, column {}", pos.line, pos.column)
    }
}

/// Failure produced by a parser.
///
/// `Syntax` and `UnexpectedEndOfInput` are recoverable: they mean "this
/// parser did not match at this position" and are the only failures that
/// `or`, `choice`, `many` and `opt` may catch and convert into an
/// alternative attempt. `Fatal` means a domain invariant was violated and
/// must propagate through every combinator unmodified.
#[derive(Debug, Error)]
pub enum ParseError<'text> {
    #[error("syntax error at {loc}: {message}")]
    Syntax {
        message: Cow<'static, str>,
        loc: CodeLoc<'text>,
    },
    #[error("unexpected end of input at {loc}")]
    UnexpectedEndOfInput { loc: CodeLoc<'text> },
    #[error("fatal error at {loc}: {message}")]
    Fatal {
        message: Cow<'static, str>,
        loc: CodeLoc<'text>,
    },
}

impl<'text> ParseError<'text> {
    pub fn syntax(message: impl Into<Cow<'static, str>>, loc: CodeLoc<'text>) -> Self {
        ParseError::Syntax {
            message: message.into(),
            loc,
        }
    }

    pub fn end_of_input(loc: CodeLoc<'text>) -> Self {
        ParseError::UnexpectedEndOfInput { loc }
    }

    pub fn fatal(message: impl Into<Cow<'static, str>>, loc: CodeLoc<'text>) -> Self {
        ParseError::Fatal {
            message: message.into(),
            loc,
        }
    }

    /// Whether backtracking combinators are allowed to catch this failure.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ParseError::Fatal { .. })
    }

    pub fn loc(&self) -> CodeLoc<'text> {
        match self {
            ParseError::Syntax { loc, .. } => *loc,
            ParseError::UnexpectedEndOfInput { loc } => *loc,
            ParseError::Fatal { loc, .. } => *loc,
        }
    }

    /// Byte offset into the source where this failure occurred.
    pub fn position(&self) -> usize {
        self.loc().offset()
    }

    /// Multi-line rendering: the one-line message plus the offending line
    /// with a caret under the failure position.
    pub fn report(&self) -> String {
        format!("{}\n{}", self, self.loc().context())
    }
}
