//! Minimal device for integration tests (no GPU required)
//!
//! Allocates handles, tracks the current program, and fails every compile
//! and link with a fixed info log.

#![allow(dead_code)]

use opengl_kit::glkit::device::*;
use opengl_kit::glkit::{GraphicsDevice, Result};

pub const COMPILE_LOG: &str = "0:4(5): error: `FragColor' undeclared";
pub const LINK_LOG: &str = "error: linking with uncompiled shader";

#[derive(Debug, Default)]
pub struct FailingDevice {
    next_id: u32,
    pub deleted_shaders: Vec<ShaderHandle>,
    pub deleted_programs: Vec<ProgramHandle>,
    pub draw_calls: u32,
    current_program: Option<ProgramHandle>,
}

impl FailingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

impl GraphicsDevice for FailingDevice {
    fn create_shader(&mut self, _kind: ShaderStageKind) -> Result<ShaderHandle> {
        Ok(ShaderHandle(self.allocate()))
    }
    fn shader_source(&mut self, _shader: ShaderHandle, _source: &str) {}
    fn compile_shader(&mut self, _shader: ShaderHandle) {}
    fn shader_compile_status(&self, _shader: ShaderHandle) -> bool {
        false
    }
    fn shader_info_log(&self, _shader: ShaderHandle) -> String {
        COMPILE_LOG.to_string()
    }
    fn delete_shader(&mut self, shader: ShaderHandle) {
        self.deleted_shaders.push(shader);
    }

    fn create_program(&mut self) -> Result<ProgramHandle> {
        Ok(ProgramHandle(self.allocate()))
    }
    fn attach_shader(&mut self, _program: ProgramHandle, _shader: ShaderHandle) {}
    fn detach_shader(&mut self, _program: ProgramHandle, _shader: ShaderHandle) {}
    fn link_program(&mut self, _program: ProgramHandle) {}
    fn program_link_status(&self, _program: ProgramHandle) -> bool {
        false
    }
    fn program_info_log(&self, _program: ProgramHandle) -> String {
        LINK_LOG.to_string()
    }
    fn use_program(&mut self, program: Option<ProgramHandle>) {
        self.current_program = program;
    }
    fn delete_program(&mut self, program: ProgramHandle) {
        self.deleted_programs.push(program);
    }

    fn uniform_location(&mut self, _program: ProgramHandle, _name: &str) -> Option<UniformLocation> {
        None
    }
    fn uniform_1_i32(&mut self, _location: UniformLocation, _value: i32) {}
    fn uniform_1_f32(&mut self, _location: UniformLocation, _value: f32) {}
    fn uniform_4_f32(&mut self, _location: UniformLocation, _value: [f32; 4]) {}
    fn uniform_matrix_4_f32(&mut self, _location: UniformLocation, _transpose: bool, _value: &[f32; 16]) {}

    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle> {
        Ok(VertexArrayHandle(self.allocate()))
    }
    fn bind_vertex_array(&mut self, _vertex_array: Option<VertexArrayHandle>) {}
    fn delete_vertex_array(&mut self, _vertex_array: VertexArrayHandle) {}
    fn create_buffer(&mut self) -> Result<BufferHandle> {
        Ok(BufferHandle(self.allocate()))
    }
    fn bind_buffer(&mut self, _target: BufferTarget, _buffer: Option<BufferHandle>) {}
    fn buffer_data(&mut self, _target: BufferTarget, _data: &[u8], _usage: BufferUsage) {}
    fn delete_buffer(&mut self, _buffer: BufferHandle) {}
    fn vertex_attrib_pointer_f32(&mut self, _index: u32, _count: i32, _normalized: bool, _stride: i32, _offset: i32) {}
    fn enable_vertex_attrib_array(&mut self, _index: u32) {}

    fn create_texture(&mut self) -> Result<TextureHandle> {
        Ok(TextureHandle(self.allocate()))
    }
    fn active_texture(&mut self, _unit: u32) {}
    fn bind_texture(&mut self, _texture: Option<TextureHandle>) {}
    fn tex_parameter(&mut self, _parameter: TextureParameter) {}
    fn tex_image_2d(&mut self, _width: u32, _height: u32, _layout: ChannelLayout, _pixels: &[u8]) {}
    fn generate_mipmap(&mut self) {}
    fn delete_texture(&mut self, _texture: TextureHandle) {}

    fn clear_color(&mut self, _color: [f32; 4]) {}
    fn clear(&mut self, _mask: ClearMask) {}
    fn viewport(&mut self, _x: i32, _y: i32, _width: i32, _height: i32) {}
    fn polygon_mode(&mut self, _mode: PolygonMode) {}
    fn draw_arrays(&mut self, _topology: PrimitiveTopology, _first: i32, _count: i32) {
        self.draw_calls += 1;
    }
    fn draw_elements(&mut self, _topology: PrimitiveTopology, _count: i32, _index_type: IndexType, _offset: i32) {
        self.draw_calls += 1;
    }

    fn current_program(&self) -> Option<ProgramHandle> {
        self.current_program
    }
    fn bound_vertex_array(&self) -> Option<VertexArrayHandle> {
        None
    }
    fn bound_buffer(&self, _target: BufferTarget) -> Option<BufferHandle> {
        None
    }
    fn active_texture_unit(&self) -> u32 {
        0
    }
    fn bound_texture(&self, _unit: u32) -> Option<TextureHandle> {
        None
    }
}
