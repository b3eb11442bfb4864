//! Source code representation and error management.

use std::ops::Range;
use thiserror::Error;

/// Byte offsets into the source text.
pub type Span = Range<usize>;

/// Represents source code.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    /// Display name of the source (a file path or `<stdin>`).
    pub name: &'a str,
    /// Original source code.
    pub content: &'a str,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `name` and `content`.
    pub fn new(name: &'a str, content: &'a str) -> Self {
        Self { name, content }
    }

    /// Returns the 1-based `(line, column)` of the byte `offset`.
    /// Columns count characters, not bytes. Offsets past the end are clamped to the end of the source.
    pub fn locate(&self, offset: usize) -> (usize, usize) {
        let mut offset = offset.min(self.content.len());
        while !self.content.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &self.content[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new("<input>", content)
    }
}

/// A character that does not start any token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character {character:?} at position {offset}")]
pub struct LexError {
    pub character: char,
    pub offset: usize,
}

/// The token sequence does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected {kind} token `{text}` at position {}", .span.start)]
    UnexpectedToken {
        kind: &'static str,
        text: String,
        span: Span,
    },
    /// Raised when the tokens run out inside an open call.
    #[error("unexpected end of input at position {offset}")]
    UnexpectedEof { offset: usize },
    /// Calls are nested deeper than the parser allows. `span` is the `(` opening the first call past the limit.
    #[error("calls nested deeper than {limit} levels at position {}", .span.start)]
    TooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Byte offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { span, .. } | ParseError::TooDeep { span, .. } => {
                span.start
            }
            ParseError::UnexpectedEof { offset } => *offset,
        }
    }
}

/// The output tree handed to the code generator is inconsistent.
/// This is never caused by user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeGenError {
    #[error("statement `{statement}` found in argument position of call to `{callee}`")]
    StatementInArgument { callee: String, statement: String },
}

/// Any error aborting a compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    CodeGen(#[from] CodeGenError),
}

impl CompileError {
    /// Byte offset into the source the error points at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            CompileError::Lex(err) => Some(err.offset),
            CompileError::Parse(err) => Some(err.offset()),
            CompileError::CodeGen(_) => None,
        }
    }
}
