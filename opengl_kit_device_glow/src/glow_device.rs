/// GlowGraphicsDevice - GraphicsDevice implemented with glow
///
/// Every call is forwarded to the current GL context. Handles are the GL
/// object names; name 0 never reaches the driver.

use std::num::NonZeroU32;
use glow::HasContext;
use opengl_kit::glkit::{GraphicsDevice, Error, Result};
use opengl_kit::glkit::device::{
    ShaderHandle, ProgramHandle, VertexArrayHandle, BufferHandle, TextureHandle,
    UniformLocation, ShaderStageKind, BufferTarget, BufferUsage, PrimitiveTopology,
    IndexType, PolygonMode, ChannelLayout, WrapMode, FilterMode, TextureParameter, ClearMask,
};
use opengl_kit::kit_warn;

// ============================================================================
// Conversions to GL enums
// ============================================================================

pub(crate) fn shader_kind_to_gl(kind: ShaderStageKind) -> u32 {
    match kind {
        ShaderStageKind::Vertex => glow::VERTEX_SHADER,
        ShaderStageKind::Fragment => glow::FRAGMENT_SHADER,
    }
}

pub(crate) fn buffer_target_to_gl(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Array => glow::ARRAY_BUFFER,
        BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
    }
}

pub(crate) fn buffer_usage_to_gl(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::StaticDraw => glow::STATIC_DRAW,
        BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
    }
}

pub(crate) fn topology_to_gl(topology: PrimitiveTopology) -> u32 {
    match topology {
        PrimitiveTopology::Triangles => glow::TRIANGLES,
        PrimitiveTopology::TriangleStrip => glow::TRIANGLE_STRIP,
        PrimitiveTopology::Lines => glow::LINES,
        PrimitiveTopology::Points => glow::POINTS,
    }
}

pub(crate) fn index_type_to_gl(index_type: IndexType) -> u32 {
    match index_type {
        IndexType::U16 => glow::UNSIGNED_SHORT,
        IndexType::U32 => glow::UNSIGNED_INT,
    }
}

pub(crate) fn polygon_mode_to_gl(mode: PolygonMode) -> u32 {
    match mode {
        PolygonMode::Fill => glow::FILL,
        PolygonMode::Line => glow::LINE,
        PolygonMode::Point => glow::POINT,
    }
}

/// (internal format, pixel format) for 8-bit channels
pub(crate) fn channel_layout_to_gl(layout: ChannelLayout) -> (i32, u32) {
    match layout {
        ChannelLayout::Rgb => (glow::RGB8 as i32, glow::RGB),
        ChannelLayout::Rgba => (glow::RGBA8 as i32, glow::RGBA),
    }
}

pub(crate) fn wrap_mode_to_gl(mode: WrapMode) -> i32 {
    match mode {
        WrapMode::Repeat => glow::REPEAT as i32,
        WrapMode::MirroredRepeat => glow::MIRRORED_REPEAT as i32,
        WrapMode::ClampToEdge => glow::CLAMP_TO_EDGE as i32,
    }
}

pub(crate) fn filter_mode_to_gl(mode: FilterMode) -> i32 {
    match mode {
        FilterMode::Nearest => glow::NEAREST as i32,
        FilterMode::Linear => glow::LINEAR as i32,
    }
}

/// (parameter name, value) for `glTexParameteri`
pub(crate) fn texture_parameter_to_gl(parameter: TextureParameter) -> (u32, i32) {
    match parameter {
        TextureParameter::WrapS(mode) => (glow::TEXTURE_WRAP_S, wrap_mode_to_gl(mode)),
        TextureParameter::WrapT(mode) => (glow::TEXTURE_WRAP_T, wrap_mode_to_gl(mode)),
        TextureParameter::MinFilter(mode) => (glow::TEXTURE_MIN_FILTER, filter_mode_to_gl(mode)),
        TextureParameter::MagFilter(mode) => (glow::TEXTURE_MAG_FILTER, filter_mode_to_gl(mode)),
    }
}

pub(crate) fn clear_mask_to_gl(mask: ClearMask) -> u32 {
    let mut bits = 0;
    if mask.contains(ClearMask::COLOR) {
        bits |= glow::COLOR_BUFFER_BIT;
    }
    if mask.contains(ClearMask::DEPTH) {
        bits |= glow::DEPTH_BUFFER_BIT;
    }
    if mask.contains(ClearMask::STENCIL) {
        bits |= glow::STENCIL_BUFFER_BIT;
    }
    bits
}

/// GL object name from a binding query (0 = none bound)
pub(crate) fn bound_name(value: i32) -> Option<u32> {
    u32::try_from(value).ok().filter(|name| *name != 0)
}

// ============================================================================
// Handle conversions
// ============================================================================

fn native_shader(handle: ShaderHandle) -> Option<glow::NativeShader> {
    NonZeroU32::new(handle.0).map(glow::NativeShader)
}

fn native_program(handle: ProgramHandle) -> Option<glow::NativeProgram> {
    NonZeroU32::new(handle.0).map(glow::NativeProgram)
}

fn native_vertex_array(handle: VertexArrayHandle) -> Option<glow::NativeVertexArray> {
    NonZeroU32::new(handle.0).map(glow::NativeVertexArray)
}

fn native_buffer(handle: BufferHandle) -> Option<glow::NativeBuffer> {
    NonZeroU32::new(handle.0).map(glow::NativeBuffer)
}

fn native_texture(handle: TextureHandle) -> Option<glow::NativeTexture> {
    NonZeroU32::new(handle.0).map(glow::NativeTexture)
}

fn native_location(location: UniformLocation) -> glow::NativeUniformLocation {
    glow::NativeUniformLocation(location.0)
}

fn backend_error(what: &str, message: String) -> Error {
    opengl_kit::kit_error!("glkit::glow", "Failed to create {}: {}", what, message);
    Error::BackendError(format!("failed to create {}: {}", what, message))
}

// ============================================================================
// GlowGraphicsDevice
// ============================================================================

/// GraphicsDevice backed by a glow context
///
/// The GL context must stay current on the calling thread for the lifetime
/// of the device.
pub struct GlowGraphicsDevice {
    gl: glow::Context,
}

impl GlowGraphicsDevice {
    /// Wrap an existing glow context
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Access the raw glow context
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// GL_VERSION string reported by the driver
    pub fn version_string(&self) -> String {
        unsafe { self.gl.get_parameter_string(glow::VERSION) }
    }

    fn binding(&self, parameter: u32) -> Option<u32> {
        bound_name(unsafe { self.gl.get_parameter_i32(parameter) })
    }
}

impl GraphicsDevice for GlowGraphicsDevice {
    // ===== SHADERS =====

    fn create_shader(&mut self, kind: ShaderStageKind) -> Result<ShaderHandle> {
        let shader = unsafe { self.gl.create_shader(shader_kind_to_gl(kind)) }
            .map_err(|e| backend_error("shader", e))?;
        Ok(ShaderHandle(shader.0.get()))
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        if let Some(shader) = native_shader(shader) {
            unsafe { self.gl.shader_source(shader, source) };
        }
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        if let Some(shader) = native_shader(shader) {
            unsafe { self.gl.compile_shader(shader) };
        }
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        native_shader(shader).map_or(false, |shader| unsafe { self.gl.get_shader_compile_status(shader) })
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        native_shader(shader)
            .map(|shader| unsafe { self.gl.get_shader_info_log(shader) })
            .unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        if let Some(shader) = native_shader(shader) {
            unsafe { self.gl.delete_shader(shader) };
        }
    }

    // ===== PROGRAMS =====

    fn create_program(&mut self) -> Result<ProgramHandle> {
        let program = unsafe { self.gl.create_program() }.map_err(|e| backend_error("program", e))?;
        Ok(ProgramHandle(program.0.get()))
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        if let (Some(program), Some(shader)) = (native_program(program), native_shader(shader)) {
            unsafe { self.gl.attach_shader(program, shader) };
        }
    }

    fn detach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        if let (Some(program), Some(shader)) = (native_program(program), native_shader(shader)) {
            unsafe { self.gl.detach_shader(program, shader) };
        }
    }

    fn link_program(&mut self, program: ProgramHandle) {
        if let Some(program) = native_program(program) {
            unsafe { self.gl.link_program(program) };
        }
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        native_program(program).map_or(false, |program| unsafe { self.gl.get_program_link_status(program) })
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        native_program(program)
            .map(|program| unsafe { self.gl.get_program_info_log(program) })
            .unwrap_or_default()
    }

    fn use_program(&mut self, program: Option<ProgramHandle>) {
        unsafe { self.gl.use_program(program.and_then(native_program)) };
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        if let Some(program) = native_program(program) {
            unsafe { self.gl.delete_program(program) };
        }
    }

    // ===== UNIFORMS =====

    fn uniform_location(&mut self, program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        let program = native_program(program)?;
        unsafe { self.gl.get_uniform_location(program, name) }.map(|location| UniformLocation(location.0))
    }

    fn uniform_1_i32(&mut self, location: UniformLocation, value: i32) {
        unsafe { self.gl.uniform_1_i32(Some(&native_location(location)), value) };
    }

    fn uniform_1_f32(&mut self, location: UniformLocation, value: f32) {
        unsafe { self.gl.uniform_1_f32(Some(&native_location(location)), value) };
    }

    fn uniform_4_f32(&mut self, location: UniformLocation, value: [f32; 4]) {
        let [x, y, z, w] = value;
        unsafe { self.gl.uniform_4_f32(Some(&native_location(location)), x, y, z, w) };
    }

    fn uniform_matrix_4_f32(&mut self, location: UniformLocation, transpose: bool, value: &[f32; 16]) {
        unsafe { self.gl.uniform_matrix_4_f32_slice(Some(&native_location(location)), transpose, value) };
    }

    // ===== VERTEX ARRAYS & BUFFERS =====

    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle> {
        let vertex_array = unsafe { self.gl.create_vertex_array() }
            .map_err(|e| backend_error("vertex array", e))?;
        Ok(VertexArrayHandle(vertex_array.0.get()))
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>) {
        unsafe { self.gl.bind_vertex_array(vertex_array.and_then(native_vertex_array)) };
    }

    fn delete_vertex_array(&mut self, vertex_array: VertexArrayHandle) {
        if let Some(vertex_array) = native_vertex_array(vertex_array) {
            unsafe { self.gl.delete_vertex_array(vertex_array) };
        }
    }

    fn create_buffer(&mut self) -> Result<BufferHandle> {
        let buffer = unsafe { self.gl.create_buffer() }.map_err(|e| backend_error("buffer", e))?;
        Ok(BufferHandle(buffer.0.get()))
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>) {
        unsafe { self.gl.bind_buffer(buffer_target_to_gl(target), buffer.and_then(native_buffer)) };
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        unsafe {
            self.gl.buffer_data_u8_slice(buffer_target_to_gl(target), data, buffer_usage_to_gl(usage))
        };
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) {
        if let Some(buffer) = native_buffer(buffer) {
            unsafe { self.gl.delete_buffer(buffer) };
        }
    }

    fn vertex_attrib_pointer_f32(
        &mut self,
        index: u32,
        component_count: i32,
        normalized: bool,
        stride_bytes: i32,
        offset_bytes: i32,
    ) {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                index,
                component_count,
                glow::FLOAT,
                normalized,
                stride_bytes,
                offset_bytes,
            )
        };
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) };
    }

    // ===== TEXTURES =====

    fn create_texture(&mut self) -> Result<TextureHandle> {
        let texture = unsafe { self.gl.create_texture() }.map_err(|e| backend_error("texture", e))?;
        Ok(TextureHandle(texture.0.get()))
    }

    fn active_texture(&mut self, unit: u32) {
        unsafe { self.gl.active_texture(glow::TEXTURE0 + unit) };
    }

    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        unsafe { self.gl.bind_texture(glow::TEXTURE_2D, texture.and_then(native_texture)) };
    }

    fn tex_parameter(&mut self, parameter: TextureParameter) {
        let (name, value) = texture_parameter_to_gl(parameter);
        unsafe { self.gl.tex_parameter_i32(glow::TEXTURE_2D, name, value) };
    }

    fn tex_image_2d(&mut self, width: u32, height: u32, layout: ChannelLayout, pixels: &[u8]) {
        let expected = (width * height * layout.bytes_per_pixel()) as usize;
        if pixels.len() < expected {
            kit_warn!(
                "glkit::glow",
                "Texture upload skipped: {} bytes for {}x{} {:?}",
                pixels.len(),
                width,
                height,
                layout
            );
            return;
        }
        let (internal_format, format) = channel_layout_to_gl(layout);
        unsafe {
            // Tightly packed RGB rows are not 4-byte aligned
            self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format,
                width as i32,
                height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                Some(pixels),
            );
        }
    }

    fn generate_mipmap(&mut self) {
        unsafe { self.gl.generate_mipmap(glow::TEXTURE_2D) };
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        if let Some(texture) = native_texture(texture) {
            unsafe { self.gl.delete_texture(texture) };
        }
    }

    // ===== FRAME =====

    fn clear_color(&mut self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe { self.gl.clear_color(r, g, b, a) };
    }

    fn clear(&mut self, mask: ClearMask) {
        unsafe { self.gl.clear(clear_mask_to_gl(mask)) };
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) };
    }

    fn polygon_mode(&mut self, mode: PolygonMode) {
        unsafe { self.gl.polygon_mode(glow::FRONT_AND_BACK, polygon_mode_to_gl(mode)) };
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(topology_to_gl(topology), first, count) };
    }

    fn draw_elements(&mut self, topology: PrimitiveTopology, count: i32, index_type: IndexType, offset: i32) {
        unsafe {
            self.gl.draw_elements(topology_to_gl(topology), count, index_type_to_gl(index_type), offset)
        };
    }

    // ===== BINDING QUERIES =====

    fn current_program(&self) -> Option<ProgramHandle> {
        self.binding(glow::CURRENT_PROGRAM).map(ProgramHandle)
    }

    fn bound_vertex_array(&self) -> Option<VertexArrayHandle> {
        self.binding(glow::VERTEX_ARRAY_BINDING).map(VertexArrayHandle)
    }

    fn bound_buffer(&self, target: BufferTarget) -> Option<BufferHandle> {
        let parameter = match target {
            BufferTarget::Array => glow::ARRAY_BUFFER_BINDING,
            BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER_BINDING,
        };
        self.binding(parameter).map(BufferHandle)
    }

    fn active_texture_unit(&self) -> u32 {
        let active = unsafe { self.gl.get_parameter_i32(glow::ACTIVE_TEXTURE) } as u32;
        active.saturating_sub(glow::TEXTURE0)
    }

    fn bound_texture(&self, unit: u32) -> Option<TextureHandle> {
        let previous = unsafe { self.gl.get_parameter_i32(glow::ACTIVE_TEXTURE) } as u32;
        unsafe { self.gl.active_texture(glow::TEXTURE0 + unit) };
        let bound = self.binding(glow::TEXTURE_BINDING_2D);
        unsafe { self.gl.active_texture(previous) };
        bound.map(TextureHandle)
    }
}

#[cfg(test)]
#[path = "glow_device_tests.rs"]
mod tests;
