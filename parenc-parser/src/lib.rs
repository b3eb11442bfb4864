//! Front end: tokenizer, source AST, recursive descent parser and the generic traverser.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod visitor;
