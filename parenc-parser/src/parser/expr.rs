use super::*;
use crate::ast::{CallExpression, NumberLiteral, SourceNode, StringLiteral};
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses any expression.
    pub fn parse_expr(&mut self) -> Result<SourceNode, ParseError> {
        let token = self.peek_or_eof()?;
        match token.kind {
            TokenKind::NumberLit => {
                self.current += 1;
                Ok(SourceNode::NumberLiteral(NumberLiteral {
                    text: token.text.clone(),
                }))
            }
            TokenKind::StringLit => {
                self.current += 1;
                Ok(SourceNode::StringLiteral(StringLiteral {
                    text: token.text.clone(),
                }))
            }
            TokenKind::Paren if token.is_open_paren() => self.parse_call_expr(),
            _ => Err(self.unexpected(token)),
        }
    }

    /* Expressions.Call */
    /// Parses a call expression (e.g. `(add 1 (subtract 3 2))`).
    /// The token after `(` is taken as the callee name whatever its kind.
    fn parse_call_expr(&mut self) -> Result<SourceNode, ParseError> {
        let open = self.next()?; // eat `(`
        if self.depth == MAX_NESTING {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING,
                span: open.span.clone(),
            });
        }
        let name = self.next()?.text.clone();

        self.depth += 1;
        let mut args = Vec::new();
        while !self.eat_close_paren()? {
            args.push(self.parse_expr()?);
        }
        self.depth -= 1;

        Ok(SourceNode::CallExpression(CallExpression { name, args }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use insta::assert_debug_snapshot;

    fn expr(source: &str) -> SourceNode {
        let tokens = tokenize(source).unwrap();
        let mut parser = Parser::new(&tokens);
        let node = parser.parse_expr().unwrap();
        assert!(parser.peek().is_none());
        node
    }

    #[test]
    fn test_literal() {
        assert_eq!(
            expr("42"),
            SourceNode::NumberLiteral(NumberLiteral {
                text: "42".to_string()
            })
        );
        assert_eq!(
            expr("\"hi there\""),
            SourceNode::StringLiteral(StringLiteral {
                text: "hi there".to_string()
            })
        );
    }

    #[test]
    fn test_nested_call() {
        assert_debug_snapshot!(expr("(add 2 (subtract 4 2))"), @r###"
        CallExpression(
            CallExpression {
                name: "add",
                args: [
                    NumberLiteral(
                        NumberLiteral {
                            text: "2",
                        },
                    ),
                    CallExpression(
                        CallExpression {
                            name: "subtract",
                            args: [
                                NumberLiteral(
                                    NumberLiteral {
                                        text: "4",
                                    },
                                ),
                                NumberLiteral(
                                    NumberLiteral {
                                        text: "2",
                                    },
                                ),
                            ],
                        },
                    ),
                ],
            },
        )
        "###);
    }

    #[test]
    fn test_call_without_args() {
        assert_eq!(
            expr("(now)"),
            SourceNode::CallExpression(CallExpression {
                name: "now".to_string(),
                args: Vec::new(),
            })
        );
    }

    #[test]
    fn test_callee_is_not_validated() {
        assert_eq!(
            expr("(1 \"a\")"),
            SourceNode::CallExpression(CallExpression {
                name: "1".to_string(),
                args: vec![SourceNode::StringLiteral(StringLiteral {
                    text: "a".to_string()
                })],
            })
        );
    }

    #[test]
    fn test_name_in_argument_position() {
        let tokens = tokenize("(add x)").unwrap();
        assert_eq!(
            Parser::new(&tokens).parse_expr(),
            Err(ParseError::UnexpectedToken {
                kind: "name",
                text: "x".to_string(),
                span: 5..6,
            })
        );
    }
}
