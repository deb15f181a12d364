/// Mock graphics device for unit tests (no GPU required)
///
/// Records every call in issue order and emulates the parts of the GL state
/// machine the core depends on: object lifetimes, compile and link outcomes,
/// active uniforms, vertex array attribute state and binding slots.

use std::collections::{BTreeMap, HashMap};

use crate::device::{
    GraphicsDevice, ShaderHandle, ProgramHandle, VertexArrayHandle, BufferHandle,
    TextureHandle, UniformLocation, ShaderStageKind, BufferTarget, BufferUsage,
    PrimitiveTopology, IndexType, PolygonMode, ChannelLayout, TextureParameter, ClearMask,
};
use crate::error::{Error, Result};
use crate::resource::mip_level_count;

// ============================================================================
// Recorded calls
// ============================================================================

/// Value passed to a uniform upload
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedUniform {
    I32(i32),
    F32(f32),
    Vec4([f32; 4]),
    Mat4 { transpose: bool, value: [f32; 16] },
}

/// One device call, in issue order
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    CreateShader(ShaderStageKind),
    ShaderSource(ShaderHandle),
    CompileShader(ShaderHandle),
    DeleteShader(ShaderHandle),
    CreateProgram,
    AttachShader(ProgramHandle, ShaderHandle),
    DetachShader(ProgramHandle, ShaderHandle),
    LinkProgram(ProgramHandle),
    UseProgram(Option<ProgramHandle>),
    DeleteProgram(ProgramHandle),
    UniformLocation { program: ProgramHandle, name: String },
    SetUniform { location: UniformLocation, value: RecordedUniform },
    CreateVertexArray,
    BindVertexArray(Option<VertexArrayHandle>),
    DeleteVertexArray(VertexArrayHandle),
    CreateBuffer,
    BindBuffer(BufferTarget, Option<BufferHandle>),
    BufferData { target: BufferTarget, len: usize, usage: BufferUsage },
    DeleteBuffer(BufferHandle),
    VertexAttribPointer {
        index: u32,
        component_count: i32,
        normalized: bool,
        stride_bytes: i32,
        offset_bytes: i32,
    },
    EnableVertexAttribArray(u32),
    CreateTexture,
    ActiveTexture(u32),
    BindTexture(Option<TextureHandle>),
    TexParameter(TextureParameter),
    TexImage2D { width: u32, height: u32, layout: ChannelLayout },
    GenerateMipmap,
    DeleteTexture(TextureHandle),
    ClearColor([f32; 4]),
    Clear(ClearMask),
    Viewport(i32, i32, i32, i32),
    PolygonMode(PolygonMode),
    DrawArrays { topology: PrimitiveTopology, first: i32, count: i32 },
    DrawElements { topology: PrimitiveTopology, count: i32, index_type: IndexType, offset: i32 },
}

// ============================================================================
// Emulated device objects
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockShaderObject {
    pub kind: ShaderStageKind,
    pub source: String,
    pub compiled: bool,
    pub info_log: String,
}

#[derive(Debug, Clone, Default)]
pub struct MockProgramObject {
    pub attached: Vec<ShaderHandle>,
    pub linked: bool,
    pub info_log: String,
    /// Uniforms that survived "optimization" (declared and used)
    pub active_uniforms: Vec<String>,
    /// Last value uploaded per location
    pub uniform_values: HashMap<u32, RecordedUniform>,
}

/// Attribute state recorded inside a vertex array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAttribute {
    pub component_count: i32,
    pub normalized: bool,
    pub stride_bytes: i32,
    pub offset_bytes: i32,
    pub enabled: bool,
    pub buffer: Option<BufferHandle>,
}

#[derive(Debug, Clone, Default)]
pub struct MockVertexArray {
    pub attributes: BTreeMap<u32, MockAttribute>,
    pub element_buffer: Option<BufferHandle>,
}

#[derive(Debug, Clone, Default)]
pub struct MockBufferObject {
    pub data: Vec<u8>,
    pub usage: Option<BufferUsage>,
}

#[derive(Debug, Clone, Default)]
pub struct MockTextureObject {
    pub width: u32,
    pub height: u32,
    pub layout: Option<ChannelLayout>,
    pub pixels: Vec<u8>,
    pub mip_levels: u32,
    pub parameters: Vec<TextureParameter>,
}

// ============================================================================
// Emulation helpers
// ============================================================================

/// Count whole-identifier occurrences of `name` in `source`
fn count_identifier(source: &str, name: &str) -> usize {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    source
        .match_indices(name)
        .filter(|(start, _)| {
            let before = source[..*start].chars().next_back();
            let after = source[start + name.len()..].chars().next();
            !before.map_or(false, is_ident) && !after.map_or(false, is_ident)
        })
        .count()
}

/// Minimal compile check: an entry point and balanced braces
fn emulate_compile(source: &str) -> std::result::Result<(), String> {
    let mut depth: i64 = 0;
    for (line_index, line) in source.lines().enumerate() {
        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(format!("0:{}(1): error: syntax error, unexpected '}}'", line_index + 1));
                    }
                }
                _ => {}
            }
        }
    }
    if depth != 0 {
        return Err(format!(
            "0:{}(1): error: syntax error, unexpected end of file",
            source.lines().count().max(1)
        ));
    }
    if !source.contains("void main") {
        return Err("0:1(1): error: entry point `main` not found".to_string());
    }
    Ok(())
}

/// Uniforms declared as `uniform <type> <name>;` and referenced at least once
fn emulate_active_uniforms(source: &str, into: &mut Vec<String>) {
    for line in source.lines() {
        let Some(rest) = line.trim().strip_prefix("uniform ") else {
            continue;
        };
        let Some(name) = rest.trim_end_matches(';').split_whitespace().nth(1) else {
            continue;
        };
        let name = name.trim_end_matches(';');
        if count_identifier(source, name) > 1 && !into.iter().any(|n| n == name) {
            into.push(name.to_string());
        }
    }
}

/// Names declared with a storage qualifier (`in`/`out`) at global scope
fn emulate_interface(source: &str, qualifier: &str) -> Vec<String> {
    let prefix = format!("{} ", qualifier);
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix(prefix.as_str()))
        .filter_map(|rest| rest.trim_end_matches(';').split_whitespace().nth(1))
        .map(|name| name.trim_end_matches(';').to_string())
        .collect()
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that records calls and tracks emulated GL state
#[derive(Debug)]
pub struct MockGraphicsDevice {
    /// Every call, in issue order
    pub calls: Vec<DeviceCall>,
    /// Make every `create_*` call fail
    pub fail_allocations: bool,
    pub shaders: HashMap<u32, MockShaderObject>,
    pub programs: HashMap<u32, MockProgramObject>,
    pub vertex_arrays: HashMap<u32, MockVertexArray>,
    pub buffers: HashMap<u32, MockBufferObject>,
    pub textures: HashMap<u32, MockTextureObject>,
    next_id: u32,
    current_program: Option<ProgramHandle>,
    bound_vertex_array: Option<VertexArrayHandle>,
    array_buffer: Option<BufferHandle>,
    default_element_buffer: Option<BufferHandle>,
    active_unit: u32,
    texture_units: HashMap<u32, TextureHandle>,
}

impl MockGraphicsDevice {
    /// Create a new mock device with no objects and nothing bound
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail_allocations: false,
            shaders: HashMap::new(),
            programs: HashMap::new(),
            vertex_arrays: HashMap::new(),
            buffers: HashMap::new(),
            textures: HashMap::new(),
            next_id: 1,
            current_program: None,
            bound_vertex_array: None,
            array_buffer: None,
            default_element_buffer: None,
            active_unit: 0,
            texture_units: HashMap::new(),
        }
    }

    /// Number of recorded calls matching a predicate
    pub fn count_calls(&self, predicate: impl Fn(&DeviceCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    /// Number of uniform location queries issued so far
    pub fn uniform_location_queries(&self) -> usize {
        self.count_calls(|call| matches!(call, DeviceCall::UniformLocation { .. }))
    }

    /// Recorded draw calls (arrays and elements)
    pub fn draw_calls(&self) -> Vec<&DeviceCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DeviceCall::DrawArrays { .. } | DeviceCall::DrawElements { .. }))
            .collect()
    }

    /// Forget recorded calls, keep object state
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Last value uploaded to a named uniform of a program
    pub fn uniform_value(&self, program: ProgramHandle, name: &str) -> Option<&RecordedUniform> {
        let object = self.programs.get(&program.0)?;
        let index = object.active_uniforms.iter().position(|n| n == name)?;
        object.uniform_values.get(&(index as u32))
    }

    /// Attribute state recorded in a vertex array
    pub fn vertex_attribute(&self, vertex_array: VertexArrayHandle, index: u32) -> Option<MockAttribute> {
        self.vertex_arrays.get(&vertex_array.0)?.attributes.get(&index).copied()
    }

    pub fn live_shader_count(&self) -> usize {
        self.shaders.len()
    }

    pub fn live_program_count(&self) -> usize {
        self.programs.len()
    }

    pub fn live_vertex_array_count(&self) -> usize {
        self.vertex_arrays.len()
    }

    pub fn live_buffer_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn live_texture_count(&self) -> usize {
        self.textures.len()
    }

    fn allocate(&mut self, what: &str) -> Result<u32> {
        if self.fail_allocations {
            return Err(Error::BackendError(format!("mock: failed to allocate {}", what)));
        }
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
    }

    fn bound_buffer_id(&self, target: BufferTarget) -> Option<u32> {
        self.bound_buffer(target).map(|buffer| buffer.0)
    }

    fn bound_texture_object(&mut self) -> Option<&mut MockTextureObject> {
        let handle = self.texture_units.get(&self.active_unit).copied()?;
        self.textures.get_mut(&handle.0)
    }

    fn record_uniform(&mut self, location: UniformLocation, value: RecordedUniform) {
        self.calls.push(DeviceCall::SetUniform { location, value: value.clone() });
        if let Some(program) = self.current_program {
            if let Some(object) = self.programs.get_mut(&program.0) {
                object.uniform_values.insert(location.0, value);
            }
        }
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    // ===== SHADERS =====

    fn create_shader(&mut self, kind: ShaderStageKind) -> Result<ShaderHandle> {
        self.calls.push(DeviceCall::CreateShader(kind));
        let id = self.allocate("shader")?;
        self.shaders.insert(id, MockShaderObject {
            kind,
            source: String::new(),
            compiled: false,
            info_log: String::new(),
        });
        Ok(ShaderHandle(id))
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        self.calls.push(DeviceCall::ShaderSource(shader));
        if let Some(object) = self.shaders.get_mut(&shader.0) {
            object.source = source.to_string();
        }
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        self.calls.push(DeviceCall::CompileShader(shader));
        if let Some(object) = self.shaders.get_mut(&shader.0) {
            match emulate_compile(&object.source) {
                Ok(()) => {
                    object.compiled = true;
                    object.info_log.clear();
                }
                Err(log) => {
                    object.compiled = false;
                    object.info_log = log;
                }
            }
        }
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        self.shaders.get(&shader.0).map_or(false, |object| object.compiled)
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        self.shaders.get(&shader.0).map(|object| object.info_log.clone()).unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        self.calls.push(DeviceCall::DeleteShader(shader));
        self.shaders.remove(&shader.0);
    }

    // ===== PROGRAMS =====

    fn create_program(&mut self) -> Result<ProgramHandle> {
        self.calls.push(DeviceCall::CreateProgram);
        let id = self.allocate("program")?;
        self.programs.insert(id, MockProgramObject::default());
        Ok(ProgramHandle(id))
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        self.calls.push(DeviceCall::AttachShader(program, shader));
        if let Some(object) = self.programs.get_mut(&program.0) {
            object.attached.push(shader);
        }
    }

    fn detach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        self.calls.push(DeviceCall::DetachShader(program, shader));
        if let Some(object) = self.programs.get_mut(&program.0) {
            object.attached.retain(|attached| *attached != shader);
        }
    }

    fn link_program(&mut self, program: ProgramHandle) {
        self.calls.push(DeviceCall::LinkProgram(program));
        let Some(object) = self.programs.get(&program.0) else {
            return;
        };

        let mut problems = Vec::new();
        let mut active_uniforms = Vec::new();
        let mut vertex_outputs = Vec::new();
        let mut fragment_inputs = Vec::new();
        let mut has_vertex = false;
        let mut has_fragment = false;
        for handle in &object.attached {
            match self.shaders.get(&handle.0) {
                Some(shader) => {
                    match shader.kind {
                        ShaderStageKind::Vertex => {
                            has_vertex = true;
                            vertex_outputs.extend(emulate_interface(&shader.source, "out"));
                        }
                        ShaderStageKind::Fragment => {
                            has_fragment = true;
                            fragment_inputs.extend(emulate_interface(&shader.source, "in"));
                        }
                    }
                    if shader.compiled {
                        emulate_active_uniforms(&shader.source, &mut active_uniforms);
                    } else {
                        problems.push(format!("error: {} shader {} was not successfully compiled", shader.kind, handle.0));
                    }
                }
                None => problems.push(format!("error: attached shader {} does not exist", handle.0)),
            }
        }
        if !has_vertex {
            problems.push("error: program lacks a vertex stage".to_string());
        }
        if !has_fragment {
            problems.push("error: program lacks a fragment stage".to_string());
        }
        if has_vertex {
            for input in fragment_inputs.iter().filter(|input| !vertex_outputs.contains(input)) {
                problems.push(format!("error: fragment shader input `{}` has no matching vertex shader output", input));
            }
        }

        if let Some(object) = self.programs.get_mut(&program.0) {
            object.linked = problems.is_empty();
            object.info_log = problems.join("\n");
            object.active_uniforms = if object.linked { active_uniforms } else { Vec::new() };
            object.uniform_values.clear();
        }
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        self.programs.get(&program.0).map_or(false, |object| object.linked)
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        self.programs.get(&program.0).map(|object| object.info_log.clone()).unwrap_or_default()
    }

    fn use_program(&mut self, program: Option<ProgramHandle>) {
        self.calls.push(DeviceCall::UseProgram(program));
        self.current_program = program;
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        // Like GL, deleting the current program does not unbind it
        self.calls.push(DeviceCall::DeleteProgram(program));
        self.programs.remove(&program.0);
    }

    // ===== UNIFORMS =====

    fn uniform_location(&mut self, program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        self.calls.push(DeviceCall::UniformLocation { program, name: name.to_string() });
        let object = self.programs.get(&program.0)?;
        if !object.linked {
            return None;
        }
        object
            .active_uniforms
            .iter()
            .position(|active| active == name)
            .map(|index| UniformLocation(index as u32))
    }

    fn uniform_1_i32(&mut self, location: UniformLocation, value: i32) {
        self.record_uniform(location, RecordedUniform::I32(value));
    }

    fn uniform_1_f32(&mut self, location: UniformLocation, value: f32) {
        self.record_uniform(location, RecordedUniform::F32(value));
    }

    fn uniform_4_f32(&mut self, location: UniformLocation, value: [f32; 4]) {
        self.record_uniform(location, RecordedUniform::Vec4(value));
    }

    fn uniform_matrix_4_f32(&mut self, location: UniformLocation, transpose: bool, value: &[f32; 16]) {
        self.record_uniform(location, RecordedUniform::Mat4 { transpose, value: *value });
    }

    // ===== VERTEX ARRAYS & BUFFERS =====

    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle> {
        self.calls.push(DeviceCall::CreateVertexArray);
        let id = self.allocate("vertex array")?;
        self.vertex_arrays.insert(id, MockVertexArray::default());
        Ok(VertexArrayHandle(id))
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>) {
        self.calls.push(DeviceCall::BindVertexArray(vertex_array));
        self.bound_vertex_array = vertex_array;
    }

    fn delete_vertex_array(&mut self, vertex_array: VertexArrayHandle) {
        self.calls.push(DeviceCall::DeleteVertexArray(vertex_array));
        self.vertex_arrays.remove(&vertex_array.0);
        if self.bound_vertex_array == Some(vertex_array) {
            self.bound_vertex_array = None;
        }
    }

    fn create_buffer(&mut self) -> Result<BufferHandle> {
        self.calls.push(DeviceCall::CreateBuffer);
        let id = self.allocate("buffer")?;
        self.buffers.insert(id, MockBufferObject::default());
        Ok(BufferHandle(id))
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>) {
        self.calls.push(DeviceCall::BindBuffer(target, buffer));
        match target {
            BufferTarget::Array => self.array_buffer = buffer,
            BufferTarget::ElementArray => match self.bound_vertex_array {
                Some(vertex_array) => {
                    if let Some(object) = self.vertex_arrays.get_mut(&vertex_array.0) {
                        object.element_buffer = buffer;
                    }
                }
                None => self.default_element_buffer = buffer,
            },
        }
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.calls.push(DeviceCall::BufferData { target, len: data.len(), usage });
        if let Some(id) = self.bound_buffer_id(target) {
            if let Some(object) = self.buffers.get_mut(&id) {
                object.data = data.to_vec();
                object.usage = Some(usage);
            }
        }
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) {
        self.calls.push(DeviceCall::DeleteBuffer(buffer));
        self.buffers.remove(&buffer.0);
        if self.array_buffer == Some(buffer) {
            self.array_buffer = None;
        }
        if self.default_element_buffer == Some(buffer) {
            self.default_element_buffer = None;
        }
        if let Some(vertex_array) = self.bound_vertex_array {
            if let Some(object) = self.vertex_arrays.get_mut(&vertex_array.0) {
                if object.element_buffer == Some(buffer) {
                    object.element_buffer = None;
                }
            }
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
        self.calls.push(DeviceCall::VertexAttribPointer {
            index,
            component_count,
            normalized,
            stride_bytes,
            offset_bytes,
        });
        let buffer = self.array_buffer;
        let Some(vertex_array) = self.bound_vertex_array else {
            return;
        };
        if let Some(object) = self.vertex_arrays.get_mut(&vertex_array.0) {
            let enabled = object.attributes.get(&index).map_or(false, |a| a.enabled);
            object.attributes.insert(index, MockAttribute {
                component_count,
                normalized,
                stride_bytes,
                offset_bytes,
                enabled,
                buffer,
            });
        }
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        self.calls.push(DeviceCall::EnableVertexAttribArray(index));
        let Some(vertex_array) = self.bound_vertex_array else {
            return;
        };
        if let Some(attribute) = self
            .vertex_arrays
            .get_mut(&vertex_array.0)
            .and_then(|object| object.attributes.get_mut(&index))
        {
            attribute.enabled = true;
        }
    }

    // ===== TEXTURES =====

    fn create_texture(&mut self) -> Result<TextureHandle> {
        self.calls.push(DeviceCall::CreateTexture);
        let id = self.allocate("texture")?;
        self.textures.insert(id, MockTextureObject::default());
        Ok(TextureHandle(id))
    }

    fn active_texture(&mut self, unit: u32) {
        self.calls.push(DeviceCall::ActiveTexture(unit));
        self.active_unit = unit;
    }

    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        self.calls.push(DeviceCall::BindTexture(texture));
        match texture {
            Some(texture) => {
                self.texture_units.insert(self.active_unit, texture);
            }
            None => {
                self.texture_units.remove(&self.active_unit);
            }
        }
    }

    fn tex_parameter(&mut self, parameter: TextureParameter) {
        self.calls.push(DeviceCall::TexParameter(parameter));
        if let Some(object) = self.bound_texture_object() {
            object.parameters.push(parameter);
        }
    }

    fn tex_image_2d(&mut self, width: u32, height: u32, layout: ChannelLayout, pixels: &[u8]) {
        self.calls.push(DeviceCall::TexImage2D { width, height, layout });
        if let Some(object) = self.bound_texture_object() {
            object.width = width;
            object.height = height;
            object.layout = Some(layout);
            object.pixels = pixels.to_vec();
            object.mip_levels = 1;
        }
    }

    fn generate_mipmap(&mut self) {
        self.calls.push(DeviceCall::GenerateMipmap);
        if let Some(object) = self.bound_texture_object() {
            if object.width > 0 && object.height > 0 {
                object.mip_levels = mip_level_count(object.width, object.height);
            }
        }
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        self.calls.push(DeviceCall::DeleteTexture(texture));
        self.textures.remove(&texture.0);
        self.texture_units.retain(|_, bound| *bound != texture);
    }

    // ===== FRAME =====

    fn clear_color(&mut self, color: [f32; 4]) {
        self.calls.push(DeviceCall::ClearColor(color));
    }

    fn clear(&mut self, mask: ClearMask) {
        self.calls.push(DeviceCall::Clear(mask));
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DeviceCall::Viewport(x, y, width, height));
    }

    fn polygon_mode(&mut self, mode: PolygonMode) {
        self.calls.push(DeviceCall::PolygonMode(mode));
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32) {
        self.calls.push(DeviceCall::DrawArrays { topology, first, count });
    }

    fn draw_elements(&mut self, topology: PrimitiveTopology, count: i32, index_type: IndexType, offset: i32) {
        self.calls.push(DeviceCall::DrawElements { topology, count, index_type, offset });
    }

    // ===== BINDING QUERIES =====

    fn current_program(&self) -> Option<ProgramHandle> {
        self.current_program
    }

    fn bound_vertex_array(&self) -> Option<VertexArrayHandle> {
        self.bound_vertex_array
    }

    fn bound_buffer(&self, target: BufferTarget) -> Option<BufferHandle> {
        match target {
            BufferTarget::Array => self.array_buffer,
            BufferTarget::ElementArray => match self.bound_vertex_array {
                Some(vertex_array) => self
                    .vertex_arrays
                    .get(&vertex_array.0)
                    .and_then(|object| object.element_buffer),
                None => self.default_element_buffer,
            },
        }
    }

    fn active_texture_unit(&self) -> u32 {
        self.active_unit
    }

    fn bound_texture(&self, unit: u32) -> Option<TextureHandle> {
        self.texture_units.get(&unit).copied()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
