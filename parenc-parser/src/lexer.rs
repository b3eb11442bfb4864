use logos::Logos;
use parenc_source::{LexError, Span};
use tracing::debug;

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // punctuation
    #[token("(")]
    #[token(")")]
    Paren,

    // literals
    #[regex("[0-9]+")]
    NumberLit,
    #[regex(r#""[^"]*""#)]
    StringLit,

    // identifiers
    #[regex("[a-z]+")]
    Name,

    // misc
    #[regex(r"[\s\x{FEFF}]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    /// Human readable name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Paren => "paren",
            TokenKind::NumberLit => "number",
            TokenKind::StringLit => "string",
            TokenKind::Name => "name",
            TokenKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The scanned text. Quotes are stripped from string literals.
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == ")"
    }
}

/// Scans the whole `input` into tokens.
/// Fails on the first character that does not start a token, including the opening quote of an unterminated string.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let text = match kind {
            TokenKind::Error => {
                let character = input[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError {
                    character,
                    offset: span.start,
                });
            }
            TokenKind::StringLit => {
                let slice = lexer.slice();
                slice[1..slice.len() - 1].to_string()
            }
            _ => lexer.slice().to_string(),
        };
        tokens.push(Token { kind, text, span });
    }

    debug!(tokens = tokens.len(), "tokenized input");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;

    fn kinds_and_text(input: &str) -> Vec<(TokenKind, String)> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|token| (token.kind, token.text))
            .collect()
    }

    #[test]
    fn test_call() {
        assert_debug_snapshot!(tokenize("(add 2 3)").unwrap(), @r###"
        [
            Token {
                kind: Paren,
                text: "(",
                span: 0..1,
            },
            Token {
                kind: Name,
                text: "add",
                span: 1..4,
            },
            Token {
                kind: NumberLit,
                text: "2",
                span: 5..6,
            },
            Token {
                kind: NumberLit,
                text: "3",
                span: 7..8,
            },
            Token {
                kind: Paren,
                text: ")",
                span: 8..9,
            },
        ]
        "###);
    }

    #[test]
    fn test_string_keeps_contents_verbatim() {
        let tokens = tokenize(r#"(concat "a b" "(x)\n")"#).unwrap();
        assert_eq!(tokens[2].kind, TokenKind::StringLit);
        assert_eq!(tokens[2].text, "a b");
        assert_eq!(tokens[2].span, 8..13);
        assert_eq!(tokens[3].text, r"(x)\n");
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_no_merge_across_categories() {
        assert_eq!(
            kinds_and_text("12abc"),
            vec![
                (TokenKind::NumberLit, "12".to_string()),
                (TokenKind::Name, "abc".to_string()),
            ]
        );
        assert_eq!(
            kinds_and_text("f\"s\"9"),
            vec![
                (TokenKind::Name, "f".to_string()),
                (TokenKind::StringLit, "s".to_string()),
                (TokenKind::NumberLit, "9".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(
            kinds_and_text(" \t(add\n\r1  2 )\n"),
            kinds_and_text("(add 1 2)")
        );
        assert!(tokenize("  \n\t ").unwrap().is_empty());
        assert_eq!(
            kinds_and_text("\u{feff}(add\u{a0}1\u{2028}2\u{3000})"),
            kinds_and_text("(add 1 2)")
        );
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(
            tokenize("(add 1 #)"),
            Err(LexError {
                character: '#',
                offset: 7
            })
        );
        assert_eq!(
            tokenize("(Add)"),
            Err(LexError {
                character: 'A',
                offset: 1
            })
        );
        assert_eq!(
            tokenize("-1"),
            Err(LexError {
                character: '-',
                offset: 0
            })
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            tokenize("(print \"oops)"),
            Err(LexError {
                character: '"',
                offset: 7
            })
        );
    }
}
