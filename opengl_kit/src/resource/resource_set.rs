/// GPU resource set: vertex array + vertex buffer + optional element buffer
///
/// Configuration records the attribute layout and the element buffer binding
/// inside the vertex array, so drawing only needs to bind the vertex array.

use crate::device::{
    GraphicsDevice, VertexArrayHandle, BufferHandle, BufferTarget, BufferUsage,
    PrimitiveTopology, IndexType,
};
use crate::error::{Error, Result};
use crate::resource::{VertexLayout, VertexLayoutAttribute};

/// What one draw call consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCount {
    /// Non-indexed draw of N vertices
    Vertices(u32),
    /// Indexed draw of N 32-bit indices
    Indices(u32),
}

/// Vertex array with its buffers and layout
#[derive(Debug)]
pub struct GpuResourceSet {
    vertex_array: VertexArrayHandle,
    vertex_buffer: BufferHandle,
    index_buffer: Option<BufferHandle>,
    layout: VertexLayout,
    topology: PrimitiveTopology,
    draw_count: DrawCount,
}

impl GpuResourceSet {
    /// Upload vertex (and index) data and record the attribute layout
    ///
    /// Leaves no vertex array and no array buffer bound. The element buffer
    /// binding stays recorded in the vertex array.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` for an invalid layout or vertex data
    /// that is not a whole number of vertices, and the device error if an
    /// object cannot be allocated (objects allocated so far are deleted).
    pub fn configure(
        device: &mut dyn GraphicsDevice,
        vertex_data: &[u8],
        layout: VertexLayout,
        indices: Option<&[u32]>,
    ) -> Result<GpuResourceSet> {
        layout.validate()?;
        let stride = layout.stride_bytes() as usize;
        if vertex_data.len() % stride != 0 {
            return Err(Error::InvalidResource(format!(
                "vertex data ({} bytes) is not a multiple of the stride ({} bytes)",
                vertex_data.len(),
                stride
            )));
        }

        let vertex_array = device.create_vertex_array()?;
        let vertex_buffer = match device.create_buffer() {
            Ok(buffer) => buffer,
            Err(err) => {
                device.delete_vertex_array(vertex_array);
                return Err(err);
            }
        };
        let index_buffer = match indices {
            Some(_) => match device.create_buffer() {
                Ok(buffer) => Some(buffer),
                Err(err) => {
                    device.delete_vertex_array(vertex_array);
                    device.delete_buffer(vertex_buffer);
                    return Err(err);
                }
            },
            None => None,
        };

        device.bind_vertex_array(Some(vertex_array));

        device.bind_buffer(BufferTarget::Array, Some(vertex_buffer));
        device.buffer_data(BufferTarget::Array, vertex_data, BufferUsage::StaticDraw);

        for attribute in layout.attributes() {
            device.vertex_attrib_pointer_f32(
                attribute.index,
                attribute.component_count as i32,
                attribute.normalized,
                attribute.stride_bytes as i32,
                attribute.offset_bytes as i32,
            );
            device.enable_vertex_attrib_array(attribute.index);
        }

        if let (Some(buffer), Some(indices)) = (index_buffer, indices) {
            device.bind_buffer(BufferTarget::ElementArray, Some(buffer));
            device.buffer_data(BufferTarget::ElementArray, bytemuck::cast_slice(indices), BufferUsage::StaticDraw);
        }

        device.bind_buffer(BufferTarget::Array, None);
        device.bind_vertex_array(None);

        let draw_count = match indices {
            Some(indices) => DrawCount::Indices(indices.len() as u32),
            None => DrawCount::Vertices((vertex_data.len() / stride) as u32),
        };

        crate::kit_debug!(
            "glkit::GpuResourceSet",
            "Configured vertex array {} ({} attributes, {:?})",
            vertex_array.0,
            layout.attributes().len(),
            draw_count
        );

        Ok(GpuResourceSet {
            vertex_array,
            vertex_buffer,
            index_buffer,
            layout,
            topology: PrimitiveTopology::Triangles,
            draw_count,
        })
    }

    /// `configure` for float vertex data
    pub fn configure_f32(
        device: &mut dyn GraphicsDevice,
        vertices: &[f32],
        layout: VertexLayout,
        indices: Option<&[u32]>,
    ) -> Result<GpuResourceSet> {
        Self::configure(device, bytemuck::cast_slice(vertices), layout, indices)
    }

    /// Change the primitive topology (triangles by default)
    pub fn with_topology(mut self, topology: PrimitiveTopology) -> Self {
        self.topology = topology;
        self
    }

    pub fn vertex_array(&self) -> VertexArrayHandle {
        self.vertex_array
    }

    pub fn vertex_buffer(&self) -> BufferHandle {
        self.vertex_buffer
    }

    pub fn index_buffer(&self) -> Option<BufferHandle> {
        self.index_buffer
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    pub fn draw_count(&self) -> DrawCount {
        self.draw_count
    }

    /// Declared attribute at a shader location
    pub fn attribute(&self, index: u32) -> Option<&VertexLayoutAttribute> {
        self.layout.attribute(index)
    }

    /// Bind the vertex array
    pub fn bind(&self, device: &mut dyn GraphicsDevice) {
        device.bind_vertex_array(Some(self.vertex_array));
    }

    /// Bind and issue exactly one draw call
    pub fn draw(&self, device: &mut dyn GraphicsDevice) {
        self.bind(device);
        match self.draw_count {
            DrawCount::Vertices(count) => device.draw_arrays(self.topology, 0, count as i32),
            DrawCount::Indices(count) => device.draw_elements(self.topology, count as i32, IndexType::U32, 0),
        }
    }

    /// Delete the vertex array and its buffers
    pub fn release(self, device: &mut dyn GraphicsDevice) {
        if device.bound_vertex_array() == Some(self.vertex_array) {
            device.bind_vertex_array(None);
        }
        device.delete_vertex_array(self.vertex_array);
        device.delete_buffer(self.vertex_buffer);
        if let Some(buffer) = self.index_buffer {
            device.delete_buffer(buffer);
        }
        crate::kit_debug!("glkit::GpuResourceSet", "Released vertex array {}", self.vertex_array.0);
    }
}

#[cfg(test)]
#[path = "resource_set_tests.rs"]
mod tests;
