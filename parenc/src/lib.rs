//! Compiles s-expression calls (e.g. `(add 2 (subtract 4 2))`) into function call syntax (e.g. `add(2, subtract(4, 2));`).
//!
//! The pipeline is [`tokenize`] → [`parse`] → [`transform`] (which drives [`traverse`]) → [`generate`].
//! Every stage is a pure function and the first error aborts the compilation.

pub use parenc_codegen::codegen::generate;
pub use parenc_parser::lexer::tokenize;
pub use parenc_parser::parser::{parse, MAX_NESTING};
pub use parenc_parser::visitor::traverse;
pub use parenc_passes::transform::transform;
pub use parenc_source::{CodeGenError, CompileError, LexError, ParseError, Source};

use tracing::debug_span;

/// Compiles `source` end to end.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let _span = debug_span!("compile", bytes = source.len()).entered();

    let tokens = tokenize(source)?;
    let ast = parse(&tokens)?;
    let output = transform(&ast);
    Ok(generate(&output)?)
}

/// How far to run the pipeline in [`compile_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Stage {
    /// The token sequence.
    Tokens,
    /// The source tree.
    Ast,
    /// The output tree.
    OutputAst,
    /// The generated code.
    Code,
}

/// Runs the pipeline up to `stage` and renders that stage's result.
/// Intermediate results are rendered with their pretty [`Debug`](std::fmt::Debug) representation.
pub fn compile_to(source: &str, stage: Stage) -> Result<String, CompileError> {
    if stage == Stage::Code {
        return compile(source);
    }

    let tokens = tokenize(source)?;
    if stage == Stage::Tokens {
        return Ok(format!("{:#?}", tokens));
    }
    let ast = parse(&tokens)?;
    if stage == Stage::Ast {
        return Ok(format!("{:#?}", ast));
    }
    Ok(format!("{:#?}", transform(&ast)))
}
