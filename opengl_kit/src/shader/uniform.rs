/// Uniform binder
///
/// Locations are resolved through the program's cache: the first lookup of a
/// name queries the device, later lookups (including misses) do not. Uploads
/// act on the current program, so callers `use_program` first.

use glam::{Mat4, Vec4};
use crate::device::{GraphicsDevice, UniformLocation};
use crate::shader::ShaderProgram;

/// Host-side value for a uniform upload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Uploaded as an integer (0 or 1)
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec4([f32; 4]),
    /// Uploaded column-major, not transposed
    Mat4(Mat4),
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Bool(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(value: [f32; 4]) -> Self {
        UniformValue::Vec4(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        UniformValue::Vec4(value.to_array())
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value)
    }
}

impl ShaderProgram {
    /// Resolve a uniform location through the cache
    ///
    /// A cache miss issues exactly one device query; the result is stored
    /// even when the uniform does not exist.
    pub fn uniform_location(&mut self, device: &mut dyn GraphicsDevice, name: &str) -> Option<UniformLocation> {
        if let Some(cached) = self.uniform_cache.get(name) {
            return *cached;
        }
        let location = device.uniform_location(self.handle(), name);
        if location.is_none() {
            crate::kit_debug!(
                "glkit::ShaderProgram",
                "Uniform '{}' is not active in program {}",
                name,
                self.handle().0
            );
        }
        self.uniform_cache.insert(name.to_string(), location);
        location
    }

    /// Upload a uniform value to this (current) program
    ///
    /// Unknown or optimized-away names are a silent no-op.
    pub fn set_uniform(&mut self, device: &mut dyn GraphicsDevice, name: &str, value: impl Into<UniformValue>) {
        let Some(location) = self.uniform_location(device, name) else {
            crate::kit_trace!("glkit::ShaderProgram", "Skipping upload to missing uniform '{}'", name);
            return;
        };
        match value.into() {
            UniformValue::Bool(value) => device.uniform_1_i32(location, value as i32),
            UniformValue::Int(value) => device.uniform_1_i32(location, value),
            UniformValue::Float(value) => device.uniform_1_f32(location, value),
            UniformValue::Vec4(value) => device.uniform_4_f32(location, value),
            UniformValue::Mat4(value) => device.uniform_matrix_4_f32(location, false, &value.to_cols_array()),
        }
    }

    pub fn set_bool(&mut self, device: &mut dyn GraphicsDevice, name: &str, value: bool) {
        self.set_uniform(device, name, value);
    }

    pub fn set_int(&mut self, device: &mut dyn GraphicsDevice, name: &str, value: i32) {
        self.set_uniform(device, name, value);
    }

    pub fn set_float(&mut self, device: &mut dyn GraphicsDevice, name: &str, value: f32) {
        self.set_uniform(device, name, value);
    }

    pub fn set_vec4(&mut self, device: &mut dyn GraphicsDevice, name: &str, value: [f32; 4]) {
        self.set_uniform(device, name, value);
    }

    pub fn set_mat4(&mut self, device: &mut dyn GraphicsDevice, name: &str, value: &Mat4) {
        self.set_uniform(device, name, *value);
    }

    /// Number of names resolved so far (hits and misses)
    pub fn cached_uniform_count(&self) -> usize {
        self.uniform_cache.len()
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
