/// Shader stage compilation
///
/// One `ShaderCompiler::compile` call allocates exactly one device shader
/// object. The resulting `ShaderStage` is consumed by the linker, which
/// releases the device object after the link attempt.

use crate::device::{GraphicsDevice, ShaderHandle, ShaderStageKind};
use crate::error::Result;
use crate::shader::{Diagnostic, DiagnosticKind};

/// Compilation outcome of a stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileStatus {
    Pending,
    Compiled,
    Failed(Diagnostic),
}

/// One compiled unit of shading-language code
#[derive(Debug)]
pub struct ShaderStage {
    kind: ShaderStageKind,
    source: String,
    status: CompileStatus,
    handle: ShaderHandle,
}

impl ShaderStage {
    pub fn kind(&self) -> ShaderStageKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn status(&self) -> &CompileStatus {
        &self.status
    }

    pub fn handle(&self) -> ShaderHandle {
        self.handle
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self.status, CompileStatus::Compiled)
    }

    /// Compiler diagnostic, if compilation failed
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.status {
            CompileStatus::Failed(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }

    /// Delete the device shader object without linking
    pub fn release(self, device: &mut dyn GraphicsDevice) {
        device.delete_shader(self.handle);
    }

    fn fail(&mut self, log: impl Into<String>) {
        let diagnostic = Diagnostic::new(DiagnosticKind::Stage(self.kind), log);
        diagnostic.report("glkit::ShaderCompiler");
        self.status = CompileStatus::Failed(diagnostic);
    }
}

/// Compiles shader stages on a device
pub struct ShaderCompiler;

impl ShaderCompiler {
    /// Compile one stage
    ///
    /// Compile errors are not returned as `Err`: the stage carries
    /// `CompileStatus::Failed` with the device info log, and the failure is
    /// logged at ERROR level. Empty source is rejected without calling the
    /// device compiler.
    ///
    /// # Errors
    ///
    /// Returns an error only if the device cannot allocate a shader object.
    pub fn compile(
        device: &mut dyn GraphicsDevice,
        kind: ShaderStageKind,
        source: &str,
    ) -> Result<ShaderStage> {
        let handle = device.create_shader(kind)?;
        let mut stage = ShaderStage {
            kind,
            source: source.to_string(),
            status: CompileStatus::Pending,
            handle,
        };

        if source.trim().is_empty() {
            stage.fail("empty shader source");
            return Ok(stage);
        }

        device.shader_source(handle, source);
        device.compile_shader(handle);

        if device.shader_compile_status(handle) {
            stage.status = CompileStatus::Compiled;
            crate::kit_debug!("glkit::ShaderCompiler", "Compiled {} shader {}", kind, handle.0);
        } else {
            let log = device.shader_info_log(handle);
            if log.trim().is_empty() {
                stage.fail("compilation failed without an info log");
            } else {
                stage.fail(log);
            }
        }

        Ok(stage)
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
