//! Passes over the source tree.

pub mod output;
pub mod transform;
