//! Visitor pattern for AST nodes.
//!
//! A [`Visitor`] has an `enter_*` and `exit_*` hook for every node kind. All hooks default to doing nothing.
//! [`traverse`] walks the tree depth first, calling `enter_*` before a node's children are visited and `exit_*` after.

use crate::ast::{CallExpression, NumberLiteral, Program, SourceNode, StringLiteral};

/// A borrowed reference to any node of the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'ast> {
    Program(&'ast Program),
    CallExpression(&'ast CallExpression),
    NumberLiteral(&'ast NumberLiteral),
    StringLiteral(&'ast StringLiteral),
}

/// Hooks called by [`traverse`]. `parent` is the node whose child list contains the visited node.
/// The root [`Program`] has no parent.
#[allow(unused_variables)]
pub trait Visitor<'ast>: Sized {
    fn enter_program(&mut self, program: &'ast Program) {}
    fn exit_program(&mut self, program: &'ast Program) {}

    fn enter_call_expr(&mut self, call: &'ast CallExpression, parent: NodeRef<'ast>) {}
    fn exit_call_expr(&mut self, call: &'ast CallExpression, parent: NodeRef<'ast>) {}

    fn enter_number_lit(&mut self, lit: &'ast NumberLiteral, parent: NodeRef<'ast>) {}
    fn exit_number_lit(&mut self, lit: &'ast NumberLiteral, parent: NodeRef<'ast>) {}

    fn enter_string_lit(&mut self, lit: &'ast StringLiteral, parent: NodeRef<'ast>) {}
    fn exit_string_lit(&mut self, lit: &'ast StringLiteral, parent: NodeRef<'ast>) {}
}

/// Walks `program` and all its descendants in source order.
pub fn traverse<'ast>(program: &'ast Program, visitor: &mut impl Visitor<'ast>) {
    visitor.enter_program(program);
    for node in &program.statements {
        walk_node(visitor, node, NodeRef::Program(program));
    }
    visitor.exit_program(program);
}

pub fn walk_node<'ast>(
    visitor: &mut impl Visitor<'ast>,
    node: &'ast SourceNode,
    parent: NodeRef<'ast>,
) {
    match node {
        SourceNode::CallExpression(call) => {
            visitor.enter_call_expr(call, parent);
            for arg in &call.args {
                walk_node(visitor, arg, NodeRef::CallExpression(call));
            }
            visitor.exit_call_expr(call, parent);
        }
        SourceNode::NumberLiteral(lit) => {
            visitor.enter_number_lit(lit, parent);
            visitor.exit_number_lit(lit, parent);
        }
        SourceNode::StringLiteral(lit) => {
            visitor.enter_string_lit(lit, parent);
            visitor.exit_string_lit(lit, parent);
        }
    }
}
