//! The output tree, shaped after the target's function call syntax.
//!
//! These types are kept apart from [`parenc_parser::ast`]: a call used as a statement is an [`ExpressionStatement`]
//! while a call used as an argument is a bare [`CallExpr`].

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<OutputNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputNode {
    ExpressionStatement(ExpressionStatement),
    CallExpr(CallExpr),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

/// A call in statement position (e.g. `add(1, 2);`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: CallExpr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: Identifier,
    pub arguments: Vec<OutputNode>,
}

impl CallExpr {
    /// Creates a call to `name` with no arguments.
    pub fn new(name: impl ToString) -> Self {
        Self {
            callee: Identifier {
                name: name.to_string(),
            },
            arguments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub text: String,
}
