//! Source tree to output tree pass.

use crate::output::{self, CallExpr, ExpressionStatement, OutputNode};
use parenc_parser::ast::{self, CallExpression};
use parenc_parser::visitor::{traverse, NodeRef, Visitor};
use tracing::debug;

/// Builds an [`output::Program`] in a single traversal of the source tree.
pub struct Transformer {
    program: output::Program,
    /// Calls whose arguments are still being visited, innermost last.
    /// Finished nodes are appended to the last frame, or to `program` when there is none.
    frames: Vec<CallExpr>,
}

impl Transformer {
    pub fn new() -> Self {
        Self {
            program: output::Program::default(),
            frames: Vec::new(),
        }
    }

    /// Consumes `self` and returns the built [`output::Program`].
    #[must_use]
    pub fn into_program(self) -> output::Program {
        self.program
    }

    fn append(&mut self, node: OutputNode) {
        match self.frames.last_mut() {
            Some(call) => call.arguments.push(node),
            None => self.program.statements.push(node),
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ast> Visitor<'ast> for Transformer {
    fn enter_call_expr(&mut self, call: &'ast CallExpression, _parent: NodeRef<'ast>) {
        self.frames.push(CallExpr::new(&call.name));
    }

    fn exit_call_expr(&mut self, _call: &'ast CallExpression, parent: NodeRef<'ast>) {
        let expression = match self.frames.pop() {
            Some(expression) => expression,
            None => unreachable!("exit_call_expr without matching enter_call_expr"),
        };
        let node = match parent {
            // nested call, expression position
            NodeRef::CallExpression(_) => OutputNode::CallExpr(expression),
            _ => OutputNode::ExpressionStatement(ExpressionStatement { expression }),
        };
        self.append(node);
    }

    fn enter_number_lit(&mut self, lit: &'ast ast::NumberLiteral, _parent: NodeRef<'ast>) {
        self.append(OutputNode::NumberLiteral(output::NumberLiteral {
            text: lit.text.clone(),
        }));
    }

    fn enter_string_lit(&mut self, lit: &'ast ast::StringLiteral, _parent: NodeRef<'ast>) {
        self.append(OutputNode::StringLiteral(output::StringLiteral {
            text: lit.text.clone(),
        }));
    }
}

/// Transforms the source tree into the output tree.
/// Top-level calls become [`ExpressionStatement`]s, nested calls stay [`CallExpr`]s and literals pass through.
pub fn transform(program: &ast::Program) -> output::Program {
    let mut transformer = Transformer::new();
    traverse(program, &mut transformer);

    let program = transformer.into_program();
    debug!(statements = program.statements.len(), "transformed program");
    program
}
