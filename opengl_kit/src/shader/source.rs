/// Shader source loading
///
/// Sources are UTF-8 text files, one per stage, resolved against a root
/// directory (the `shaders/` resource directory by default).

use std::fs;
use std::path::{Path, PathBuf};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::shader::{Diagnostic, DiagnosticKind};

/// Reads shader source text from a resource directory
#[derive(Debug, Clone)]
pub struct SourceLoader {
    root: PathBuf,
}

impl SourceLoader {
    /// Create a loader resolving names against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a loader for the configured shader root
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.shader_root.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a named source
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read a source file
    ///
    /// # Errors
    ///
    /// Returns `Error::SourceLoadFailure` when the file is missing,
    /// unreadable or not valid UTF-8.
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.resolve(name);
        let bytes = fs::read(&path).map_err(|e| {
            Error::SourceLoadFailure(format!("{}: {}", path.display(), e))
        })?;
        String::from_utf8(bytes).map_err(|e| {
            Error::SourceLoadFailure(format!("{}: not valid UTF-8 ({})", path.display(), e.utf8_error()))
        })
    }

    /// Read a source file, or log the failure and return an empty string
    ///
    /// An empty source later fails compilation, so the program ends up as a
    /// no-op instead of aborting the exercise.
    pub fn load_or_empty(&self, name: &str) -> String {
        match self.load(name) {
            Ok(source) => source,
            Err(err) => {
                Diagnostic::new(DiagnosticKind::Source, err.to_string()).report("glkit::SourceLoader");
                String::new()
            }
        }
    }
}

/// Vertex and fragment source text for one program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramSources {
    pub vertex: String,
    pub fragment: String,
}

impl ProgramSources {
    /// Bundle inline sources
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Load both stages, failing on the first unreadable file
    pub fn load(loader: &SourceLoader, vertex_name: &str, fragment_name: &str) -> Result<Self> {
        Ok(Self {
            vertex: loader.load(vertex_name)?,
            fragment: loader.load(fragment_name)?,
        })
    }

    /// Load both stages, substituting empty text for unreadable files
    pub fn load_or_empty(loader: &SourceLoader, vertex_name: &str, fragment_name: &str) -> Self {
        Self {
            vertex: loader.load_or_empty(vertex_name),
            fragment: loader.load_or_empty(fragment_name),
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
