/// The root of a source tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level expressions in source order.
    pub statements: Vec<SourceNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNode {
    CallExpression(CallExpression),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

/// A prefix call (e.g. `(add 1 2)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub name: String,
    pub args: Vec<SourceNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub text: String,
}

/// A string literal, without its quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub text: String,
}
