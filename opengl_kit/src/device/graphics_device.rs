/// GraphicsDevice trait - the explicit device context
///
/// The graphics API keeps one "current" object per binding target (program,
/// vertex array, array buffer, texture unit...). This trait exposes that state
/// as a value: every component that binds or draws receives the device, and
/// the binding queries make the current state observable.

use std::fmt;
use bitflags::bitflags;
use crate::error::Result;

// ============================================================================
// Handles
// ============================================================================

/// Device shader object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Device program object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Device vertex array object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayHandle(pub u32);

/// Device buffer object (vertex or element data)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// Device texture object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Resolved uniform location inside a linked program
///
/// A uniform that does not exist (or was optimized away by the linker) has
/// no location: queries return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

// ============================================================================
// Enums
// ============================================================================

/// Pipeline role of a shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStageKind {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStageKind::Vertex => write!(f, "vertex"),
            ShaderStageKind::Fragment => write!(f, "fragment"),
        }
    }
}

/// Buffer binding target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Vertex attribute data
    Array,
    /// Index data (binding is recorded in the bound vertex array)
    ElementArray,
}

/// Buffer usage hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times
    StaticDraw,
    /// Re-uploaded frequently
    DynamicDraw,
}

/// Primitive topology for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    Triangles,
    TriangleStrip,
    Lines,
    Points,
}

/// Index buffer element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    /// 16-bit indices
    U16,
    /// 32-bit indices
    U32,
}

impl IndexType {
    /// Size in bytes of one index element
    pub fn size_bytes(&self) -> u32 {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Polygon rasterization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    /// Fill polygons
    Fill,
    /// Draw edges only (wireframe)
    Line,
    /// Draw vertices only
    Point,
}

/// Pixel channel layout of texture data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Rgb,
    Rgba,
}

impl ChannelLayout {
    /// Bytes per pixel for 8-bit channels
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }
}

/// Texture coordinate wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    #[default]
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

/// Texture sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    Nearest,
    #[default]
    Linear,
}

/// Sampling parameter applied to the bound 2D texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureParameter {
    WrapS(WrapMode),
    WrapT(WrapMode),
    MinFilter(FilterMode),
    MagFilter(FilterMode),
}

bitflags! {
    /// Framebuffer planes cleared by `GraphicsDevice::clear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Explicit device context
///
/// Implemented by backend devices (e.g., GlowGraphicsDevice). All calls are
/// synchronous and observed by the device in issue order. Calls that act on a
/// binding target (attribute declaration, buffer upload, texture parameters,
/// uniform upload) affect whatever object is currently bound to it; callers
/// bind first.
pub trait GraphicsDevice {
    // ===== SHADERS =====

    /// Allocate a shader object for one stage
    fn create_shader(&mut self, kind: ShaderStageKind) -> Result<ShaderHandle>;

    /// Replace the source text of a shader object
    fn shader_source(&mut self, shader: ShaderHandle, source: &str);

    /// Compile the current source of a shader object
    fn compile_shader(&mut self, shader: ShaderHandle);

    /// Whether the last compilation succeeded
    fn shader_compile_status(&self, shader: ShaderHandle) -> bool;

    /// Compiler info log of a shader object
    fn shader_info_log(&self, shader: ShaderHandle) -> String;

    /// Release a shader object
    fn delete_shader(&mut self, shader: ShaderHandle);

    // ===== PROGRAMS =====

    /// Allocate an empty program object
    fn create_program(&mut self) -> Result<ProgramHandle>;

    /// Attach a shader object to a program
    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle);

    /// Detach a shader object from a program
    fn detach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle);

    /// Link the attached stages
    fn link_program(&mut self, program: ProgramHandle);

    /// Whether the last link succeeded
    fn program_link_status(&self, program: ProgramHandle) -> bool;

    /// Linker info log of a program object
    fn program_info_log(&self, program: ProgramHandle) -> String;

    /// Make a program current (`None` unbinds)
    fn use_program(&mut self, program: Option<ProgramHandle>);

    /// Release a program object
    fn delete_program(&mut self, program: ProgramHandle);

    // ===== UNIFORMS (act on the current program) =====

    /// Resolve a uniform name (`None` when not active in the program)
    fn uniform_location(&mut self, program: ProgramHandle, name: &str) -> Option<UniformLocation>;

    fn uniform_1_i32(&mut self, location: UniformLocation, value: i32);

    fn uniform_1_f32(&mut self, location: UniformLocation, value: f32);

    fn uniform_4_f32(&mut self, location: UniformLocation, value: [f32; 4]);

    /// Upload a 4x4 matrix given in column-major order
    fn uniform_matrix_4_f32(&mut self, location: UniformLocation, transpose: bool, value: &[f32; 16]);

    // ===== VERTEX ARRAYS & BUFFERS =====

    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle>;

    /// Bind a vertex array (`None` unbinds)
    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>);

    fn delete_vertex_array(&mut self, vertex_array: VertexArrayHandle);

    fn create_buffer(&mut self) -> Result<BufferHandle>;

    /// Bind a buffer to a target (`None` unbinds)
    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>);

    /// Upload data to the buffer bound to `target`
    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage);

    fn delete_buffer(&mut self, buffer: BufferHandle);

    /// Declare a float attribute of the bound vertex array, sourced from the
    /// bound array buffer
    fn vertex_attrib_pointer_f32(
        &mut self,
        index: u32,
        component_count: i32,
        normalized: bool,
        stride_bytes: i32,
        offset_bytes: i32,
    );

    fn enable_vertex_attrib_array(&mut self, index: u32);

    // ===== TEXTURES =====

    fn create_texture(&mut self) -> Result<TextureHandle>;

    /// Select the texture unit subsequent texture binds apply to
    fn active_texture(&mut self, unit: u32);

    /// Bind a 2D texture to the active unit (`None` unbinds)
    fn bind_texture(&mut self, texture: Option<TextureHandle>);

    /// Set a sampling parameter of the bound 2D texture
    fn tex_parameter(&mut self, parameter: TextureParameter);

    /// Upload level 0 of the bound 2D texture
    fn tex_image_2d(&mut self, width: u32, height: u32, layout: ChannelLayout, pixels: &[u8]);

    /// Generate the full mipmap chain of the bound 2D texture
    fn generate_mipmap(&mut self);

    fn delete_texture(&mut self, texture: TextureHandle);

    // ===== FRAME =====

    fn clear_color(&mut self, color: [f32; 4]);

    fn clear(&mut self, mask: ClearMask);

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn polygon_mode(&mut self, mode: PolygonMode);

    /// Draw non-indexed primitives from the bound vertex array
    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32);

    /// Draw indexed primitives from the bound vertex array's element buffer
    fn draw_elements(&mut self, topology: PrimitiveTopology, count: i32, index_type: IndexType, offset: i32);

    // ===== BINDING QUERIES =====

    /// Currently used program
    fn current_program(&self) -> Option<ProgramHandle>;

    /// Currently bound vertex array
    fn bound_vertex_array(&self) -> Option<VertexArrayHandle>;

    /// Buffer bound to a target
    fn bound_buffer(&self, target: BufferTarget) -> Option<BufferHandle>;

    /// Active texture unit index
    fn active_texture_unit(&self) -> u32;

    /// 2D texture bound to a texture unit
    fn bound_texture(&self, unit: u32) -> Option<TextureHandle>;
}
