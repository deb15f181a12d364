/// Compiler, linker and loader diagnostics
///
/// A diagnostic is never fatal by itself: it is logged, stored in the stage
/// or program status, and only becomes an `Error` under the strict policy.

use std::fmt;
use crate::device::ShaderStageKind;

/// What produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Compilation of one stage
    Stage(ShaderStageKind),
    /// Program link
    Program,
    /// Shader source loading
    Source,
    /// Texture decoding
    Texture,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Stage(kind) => write!(f, "{} shader", kind),
            DiagnosticKind::Program => write!(f, "program"),
            DiagnosticKind::Source => write!(f, "shader source"),
            DiagnosticKind::Texture => write!(f, "texture"),
        }
    }
}

/// Human-readable failure report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Device info log or loader message
    pub log: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, log: impl Into<String>) -> Self {
        Self {
            kind,
            log: log.into(),
        }
    }

    /// Log the diagnostic at ERROR level
    pub fn report(&self, source: &str) {
        crate::kit_error!(source, "{} diagnostic: {}", self.kind, self.log.trim_end());
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.log.trim_end())
    }
}
