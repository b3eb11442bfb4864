//! Code generation from the output tree.

pub mod codegen;
