//! Shared declarative types handed to the external generator.
//!
//! These types are serialized into the build manifest and must stay stable
//! across everything that consumes it.

use serde::{Deserialize, Serialize};

/// Directory mapping returned by the build configuration.
///
/// Tells the external generator where source templates live (`input`) and
/// where the rendered site is written (`output`). Both are relative paths,
/// fixed once at configuration time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirMapping {
    /// Source content root the generator reads from.
    pub input: String,
    /// Output root the generator writes the rendered site into.
    pub output: String,
}

impl DirMapping {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}
