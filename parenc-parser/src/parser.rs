use crate::ast::Program;
use crate::lexer::Token;
use parenc_source::ParseError;
use tracing::debug;

mod expr;

/// Maximum number of nested calls.
/// Parsing, traversal and code generation all recurse once per level, so this bounds their stack usage.
pub const MAX_NESTING: usize = 256;

pub struct Parser<'a> {
    tokens: &'a [Token],
    /// Index of the next unconsumed token.
    current: usize,
    /// Number of calls currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }
}

impl<'a> Parser<'a> {
    /// Parses expressions until the tokens are exhausted.
    /// Concatenated top-level forms such as `(add 2 3)(subtract 5 4)` each become a statement.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::default();

        while self.peek().is_some() {
            program.statements.push(self.parse_expr()?);
        }

        debug!(statements = program.statements.len(), "parsed program");
        Ok(program)
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    /// Returns the current token without consuming it, or an [`ParseError::UnexpectedEof`] if there is none.
    fn peek_or_eof(&self) -> Result<&'a Token, ParseError> {
        self.peek().ok_or_else(|| self.eof())
    }

    /// Consumes and returns the current token.
    fn next(&mut self) -> Result<&'a Token, ParseError> {
        let token = self.peek_or_eof()?;
        self.current += 1;
        Ok(token)
    }

    /// Eats the current token if it is a closing paren.
    fn eat_close_paren(&mut self) -> Result<bool, ParseError> {
        if self.peek_or_eof()?.is_close_paren() {
            self.current += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn eof(&self) -> ParseError {
        ParseError::UnexpectedEof {
            offset: self.tokens.last().map_or(0, |token| token.span.end),
        }
    }

    fn unexpected(&self, token: &Token) -> ParseError {
        ParseError::UnexpectedToken {
            kind: token.kind.name(),
            text: token.text.clone(),
            span: token.span.clone(),
        }
    }
}

/// Parses a whole token sequence into a [`Program`].
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
