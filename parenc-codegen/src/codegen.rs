//! Renders the output tree as function call syntax.

use parenc_passes::output::{
    CallExpr, ExpressionStatement, Identifier, NumberLiteral, OutputNode, Program, StringLiteral,
};
use parenc_source::CodeGenError;
use tracing::debug;

/// A node of the output tree that can be rendered to text.
pub trait Generate {
    fn generate(&self) -> Result<String, CodeGenError>;
}

/// Renders `node` and everything below it.
pub fn generate(node: &impl Generate) -> Result<String, CodeGenError> {
    let code = node.generate()?;
    debug!(bytes = code.len(), "generated code");
    Ok(code)
}

impl Generate for Program {
    /// One statement per line.
    fn generate(&self) -> Result<String, CodeGenError> {
        let statements = self
            .statements
            .iter()
            .map(Generate::generate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(statements.join("\n"))
    }
}

impl Generate for OutputNode {
    fn generate(&self) -> Result<String, CodeGenError> {
        match self {
            OutputNode::ExpressionStatement(stmt) => stmt.generate(),
            OutputNode::CallExpr(call) => call.generate(),
            OutputNode::NumberLiteral(lit) => lit.generate(),
            OutputNode::StringLiteral(lit) => lit.generate(),
        }
    }
}

impl Generate for ExpressionStatement {
    fn generate(&self) -> Result<String, CodeGenError> {
        Ok(format!("{};", self.expression.generate()?))
    }
}

impl Generate for CallExpr {
    fn generate(&self) -> Result<String, CodeGenError> {
        let mut args = Vec::with_capacity(self.arguments.len());
        for arg in &self.arguments {
            if let OutputNode::ExpressionStatement(stmt) = arg {
                return Err(CodeGenError::StatementInArgument {
                    callee: self.callee.name.clone(),
                    statement: stmt.generate()?,
                });
            }
            args.push(arg.generate()?);
        }

        Ok(format!("{}({})", self.callee.generate()?, args.join(", ")))
    }
}

impl Generate for Identifier {
    fn generate(&self) -> Result<String, CodeGenError> {
        Ok(self.name.clone())
    }
}

impl Generate for NumberLiteral {
    fn generate(&self) -> Result<String, CodeGenError> {
        Ok(self.text.clone())
    }
}

impl Generate for StringLiteral {
    /// Embedded quotes are not escaped.
    fn generate(&self) -> Result<String, CodeGenError> {
        Ok(format!("\"{}\"", self.text))
    }
}
