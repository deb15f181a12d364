//! Shader program lifecycle
//!
//! Source loading, stage compilation, program linking, diagnostics and the
//! cached uniform binder.

mod source;
mod diagnostic;
mod stage;
mod program;
mod uniform;

pub use source::{SourceLoader, ProgramSources};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use stage::{ShaderStage, CompileStatus, ShaderCompiler};
pub use program::{ShaderProgram, LinkStatus, ProgramLinker};
pub use uniform::UniformValue;

// GLSL fixtures shared by unit tests
#[cfg(test)]
pub(crate) mod test_sources;
