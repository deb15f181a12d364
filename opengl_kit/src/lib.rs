/*!
# OpenGL Kit

Reusable shader & GPU-resource manager for small OpenGL programs.

This crate provides the platform-agnostic core: every device call goes through
the [`GraphicsDevice`](device::GraphicsDevice) trait, which makes the global
binding state of the graphics API an explicit value that can be inspected and
tested. Backend implementations (glow/OpenGL) live in their own crates.

## Architecture

- **SourceLoader**: Reads shader source text from a resource directory
- **ShaderCompiler**: Compiles one shader stage and captures diagnostics
- **ProgramLinker**: Links stages into a program and releases the stages
- **ShaderProgram**: Linked program with a cached uniform binder
- **GpuResourceSet**: Vertex array + vertex/index buffers + attribute layout
- **TextureLoader**: Decodes images and uploads mipmapped 2D textures
- **RenderLoop**: Per-frame clear / bind / draw / present controller
*/

// Internal modules
mod error;
mod config;
mod kit;
pub mod log;
pub mod device;
pub mod shader;
pub mod resource;
pub mod render;

// Main glkit namespace module
pub mod glkit {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{Config, WindowConfig, DiagnosticPolicy};

    // Logger registry
    pub use crate::kit::Kit;

    // Device trait
    pub use crate::device::GraphicsDevice;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Device sub-module with handles and enums
    pub mod device {
        pub use crate::device::*;
    }

    // Shader sub-module
    pub mod shader {
        pub use crate::shader::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Render loop sub-module
    pub mod render {
        pub use crate::render::*;
    }
}

// Re-export math library at crate root
pub use glam;
