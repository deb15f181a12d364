//! Error types for OpenGL Kit
//!
//! This module defines the error taxonomy shared by the shader pipeline,
//! resource management and the render loop.

use std::fmt;
use crate::shader::Diagnostic;

/// Result type for OpenGL Kit operations
pub type Result<T> = std::result::Result<T, Error>;

/// OpenGL Kit errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Shader source resource missing or unreadable
    SourceLoadFailure(String),

    /// Shader stage failed to compile (strict diagnostic policy only)
    CompileFailure(Diagnostic),

    /// Program failed to link (strict diagnostic policy only)
    LinkFailure(Diagnostic),

    /// Image missing or not decodable
    TextureDecodeFailure(String),

    /// Window or GL context creation failed
    ContextInitFailure(String),

    /// Invalid resource description (vertex layout, scene ids, etc.)
    InvalidResource(String),

    /// Device-specific error (object allocation, swap, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceLoadFailure(msg) => write!(f, "Shader source load failed: {}", msg),
            Error::CompileFailure(diagnostic) => write!(f, "Shader compilation failed: {}", diagnostic),
            Error::LinkFailure(diagnostic) => write!(f, "Program linking failed: {}", diagnostic),
            Error::TextureDecodeFailure(msg) => write!(f, "Texture decode failed: {}", msg),
            Error::ContextInitFailure(msg) => write!(f, "Context initialization failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` with the same text
///
/// # Example
///
/// ```no_run
/// # use opengl_kit::kit_err;
/// let error = kit_err!("glkit::device", "Failed to create buffer: {}", "out of memory");
/// ```
#[macro_export]
macro_rules! kit_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::kit_error!($source, "{}", message);
        $crate::glkit::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return early with an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use opengl_kit::kit_bail;
/// fn check(frame: u64) -> opengl_kit::glkit::Result<()> {
///     if frame == 0 {
///         kit_bail!("glkit::RenderLoop", "Render loop not started");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! kit_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::kit_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
