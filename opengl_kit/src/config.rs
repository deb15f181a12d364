/// Configuration types shared by the core and the device plugins

use std::path::PathBuf;

/// How compile and link diagnostics are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticPolicy {
    /// Log the diagnostic at ERROR level and keep the (non-functional) handle
    #[default]
    Permissive,
    /// Log the diagnostic and turn it into an `Error`
    Strict,
}

impl DiagnosticPolicy {
    /// Returns true for the strict policy
    pub fn is_strict(&self) -> bool {
        matches!(self, DiagnosticPolicy::Strict)
    }
}

/// Window and GL context creation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
    /// Requested GL version (major, minor)
    pub gl_version: (u8, u8),
    /// Request a core profile context
    pub core_profile: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            core_profile: true,
        }
    }
}

/// Top-level configuration for an exercise
#[derive(Debug, Clone)]
pub struct Config {
    /// Window/context options
    pub window: WindowConfig,
    /// Background color used by the per-frame clear
    pub clear_color: [f32; 4],
    /// Compile/link diagnostic policy
    pub diagnostic_policy: DiagnosticPolicy,
    /// Draw polygons as lines
    pub wireframe: bool,
    /// Directory shader sources are loaded from
    pub shader_root: PathBuf,
    /// Flip decoded images vertically before upload
    pub flip_textures: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            diagnostic_policy: DiagnosticPolicy::Permissive,
            wireframe: false,
            shader_root: PathBuf::from("shaders"),
            flip_textures: true,
        }
    }
}

impl Config {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn with_diagnostic_policy(mut self, policy: DiagnosticPolicy) -> Self {
        self.diagnostic_policy = policy;
        self
    }

    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }

    pub fn with_shader_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.shader_root = root.into();
        self
    }

    pub fn with_flip_textures(mut self, flip: bool) -> Self {
        self.flip_textures = flip;
        self
    }
}
