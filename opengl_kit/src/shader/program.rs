/// Program linking and lifetime
///
/// `ProgramLinker::link` consumes the stages and always deletes their device
/// objects after the link attempt. A program that failed to link keeps its
/// handle: using it is a no-op on the device.

use rustc_hash::FxHashMap;
use crate::config::DiagnosticPolicy;
use crate::device::{GraphicsDevice, ProgramHandle, ShaderStageKind, UniformLocation};
use crate::error::{Error, Result};
use crate::shader::{
    Diagnostic, DiagnosticKind, ProgramSources, ShaderCompiler, ShaderStage, SourceLoader,
};

/// Link outcome of a program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Pending,
    Linked,
    Failed(Diagnostic),
}

/// Linked device program with its uniform location cache
#[derive(Debug)]
pub struct ShaderProgram {
    handle: ProgramHandle,
    status: LinkStatus,
    /// name -> resolved location (`None` is cached too)
    pub(super) uniform_cache: FxHashMap<String, Option<UniformLocation>>,
}

/// Links compiled stages into programs
pub struct ProgramLinker;

impl ProgramLinker {
    /// Attach every stage to a new program and link it
    ///
    /// Link errors are captured in `LinkStatus::Failed` and logged; the
    /// program handle is kept. Every stage object is detached and deleted
    /// whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error only if the device cannot allocate a program object
    /// (the stages are released in that case too).
    pub fn link(device: &mut dyn GraphicsDevice, stages: Vec<ShaderStage>) -> Result<ShaderProgram> {
        let handle = match device.create_program() {
            Ok(handle) => handle,
            Err(err) => {
                for stage in stages {
                    stage.release(device);
                }
                return Err(err);
            }
        };

        for stage in &stages {
            device.attach_shader(handle, stage.handle());
        }
        device.link_program(handle);

        let status = if device.program_link_status(handle) {
            crate::kit_debug!("glkit::ProgramLinker", "Linked program {} from {} stages", handle.0, stages.len());
            LinkStatus::Linked
        } else {
            let log = device.program_info_log(handle);
            let log = if log.trim().is_empty() {
                "link failed without an info log".to_string()
            } else {
                log
            };
            let diagnostic = Diagnostic::new(DiagnosticKind::Program, log);
            diagnostic.report("glkit::ProgramLinker");
            LinkStatus::Failed(diagnostic)
        };

        for stage in stages {
            device.detach_shader(handle, stage.handle());
            stage.release(device);
        }

        Ok(ShaderProgram {
            handle,
            status,
            uniform_cache: FxHashMap::default(),
        })
    }
}

impl ShaderProgram {
    /// Compile both stages and link them under a diagnostic policy
    ///
    /// # Errors
    ///
    /// Device allocation failures are always returned. Under
    /// `DiagnosticPolicy::Strict`, a compile failure returns
    /// `Error::CompileFailure` and a link failure `Error::LinkFailure`; every
    /// device object allocated so far is released first.
    pub fn build(
        device: &mut dyn GraphicsDevice,
        sources: &ProgramSources,
        policy: DiagnosticPolicy,
    ) -> Result<ShaderProgram> {
        let vertex = ShaderCompiler::compile(device, ShaderStageKind::Vertex, &sources.vertex)?;
        let fragment = match ShaderCompiler::compile(device, ShaderStageKind::Fragment, &sources.fragment) {
            Ok(stage) => stage,
            Err(err) => {
                vertex.release(device);
                return Err(err);
            }
        };

        if policy.is_strict() {
            let failure = vertex
                .diagnostic()
                .or_else(|| fragment.diagnostic())
                .cloned();
            if let Some(diagnostic) = failure {
                vertex.release(device);
                fragment.release(device);
                return Err(Error::CompileFailure(diagnostic));
            }
        }

        let program = ProgramLinker::link(device, vec![vertex, fragment])?;

        if policy.is_strict() {
            if let LinkStatus::Failed(diagnostic) = &program.status {
                let diagnostic = diagnostic.clone();
                program.release(device);
                return Err(Error::LinkFailure(diagnostic));
            }
        }

        Ok(program)
    }

    /// Load both stage files and build the program
    ///
    /// Under the permissive policy an unreadable file is logged and replaced
    /// by empty source (the program then fails to link and draws nothing).
    /// Under the strict policy it is returned as `Error::SourceLoadFailure`.
    pub fn from_files(
        device: &mut dyn GraphicsDevice,
        loader: &SourceLoader,
        vertex_name: &str,
        fragment_name: &str,
        policy: DiagnosticPolicy,
    ) -> Result<ShaderProgram> {
        let sources = if policy.is_strict() {
            ProgramSources::load(loader, vertex_name, fragment_name)?
        } else {
            ProgramSources::load_or_empty(loader, vertex_name, fragment_name)
        };
        Self::build(device, &sources, policy)
    }

    pub fn handle(&self) -> ProgramHandle {
        self.handle
    }

    pub fn status(&self) -> &LinkStatus {
        &self.status
    }

    pub fn is_linked(&self) -> bool {
        matches!(self.status, LinkStatus::Linked)
    }

    /// Linker diagnostic, if linking failed
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.status {
            LinkStatus::Failed(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }

    /// Make this program current
    pub fn use_program(&self, device: &mut dyn GraphicsDevice) {
        device.use_program(Some(self.handle));
    }

    /// Whether this program is the device's current program
    pub fn is_current(&self, device: &dyn GraphicsDevice) -> bool {
        device.current_program() == Some(self.handle)
    }

    /// Delete the device program (unbinding it first if current)
    pub fn release(self, device: &mut dyn GraphicsDevice) {
        if self.is_current(device) {
            device.use_program(None);
        }
        device.delete_program(self.handle);
        crate::kit_debug!("glkit::ShaderProgram", "Released program {}", self.handle.0);
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
