/// Vertex attribute layouts
///
/// A `VertexLayout` describes how one interleaved vertex buffer is split into
/// shader attributes. All attributes share the buffer's stride.

use crate::error::{Error, Result};

/// Attribute component type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    /// 32-bit float
    Float,
}

impl ComponentType {
    /// Size in bytes of one component
    pub fn size_bytes(&self) -> u32 {
        match self {
            ComponentType::Float => 4,
        }
    }
}

/// One shader attribute inside an interleaved buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayoutAttribute {
    /// Shader attribute location
    pub index: u32,
    /// Components per vertex (1..=4)
    pub component_count: u32,
    pub component_type: ComponentType,
    /// Distance between consecutive vertices
    pub stride_bytes: u32,
    /// Offset of the first component inside a vertex
    pub offset_bytes: u32,
    pub normalized: bool,
}

impl VertexLayoutAttribute {
    /// Non-normalized float attribute
    pub fn float(index: u32, component_count: u32, stride_bytes: u32, offset_bytes: u32) -> Self {
        Self {
            index,
            component_count,
            component_type: ComponentType::Float,
            stride_bytes,
            offset_bytes,
            normalized: false,
        }
    }

    /// Size in bytes of the attribute inside one vertex
    pub fn size_bytes(&self) -> u32 {
        self.component_count * self.component_type.size_bytes()
    }
}

/// Ordered attribute list for one vertex buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexLayoutAttribute>,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interleaved float layout with locations 0, 1, 2...
    ///
    /// `interleaved_f32(&[3, 3, 2])` is position + color + texture
    /// coordinates: stride 32 bytes, offsets 0, 12 and 24.
    pub fn interleaved_f32(component_counts: &[u32]) -> Self {
        let stride_bytes = component_counts.iter().sum::<u32>() * ComponentType::Float.size_bytes();
        let mut offset_bytes = 0;
        let mut attributes = Vec::with_capacity(component_counts.len());
        for (index, count) in component_counts.iter().enumerate() {
            attributes.push(VertexLayoutAttribute::float(index as u32, *count, stride_bytes, offset_bytes));
            offset_bytes += count * ComponentType::Float.size_bytes();
        }
        Self { attributes }
    }

    /// Append an attribute
    pub fn with_attribute(mut self, attribute: VertexLayoutAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attributes(&self) -> &[VertexLayoutAttribute] {
        &self.attributes
    }

    /// Attribute declared at a shader location
    pub fn attribute(&self, index: u32) -> Option<&VertexLayoutAttribute> {
        self.attributes.iter().find(|attribute| attribute.index == index)
    }

    /// Common stride (0 for an empty layout)
    pub fn stride_bytes(&self) -> u32 {
        self.attributes.first().map_or(0, |attribute| attribute.stride_bytes)
    }

    /// Check the layout before it reaches the device
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` if the layout is empty, has duplicate
    /// indices, a component count outside 1..=4, mixed or zero strides, or an
    /// attribute extending past the stride.
    pub fn validate(&self) -> Result<()> {
        let stride = self.stride_bytes();
        if self.attributes.is_empty() {
            return Err(Error::InvalidResource("vertex layout has no attributes".to_string()));
        }
        if stride == 0 {
            return Err(Error::InvalidResource("vertex layout stride is zero".to_string()));
        }

        for (position, attribute) in self.attributes.iter().enumerate() {
            if !(1..=4).contains(&attribute.component_count) {
                return Err(Error::InvalidResource(format!(
                    "attribute {} has {} components (expected 1 to 4)",
                    attribute.index, attribute.component_count
                )));
            }
            if attribute.stride_bytes != stride {
                return Err(Error::InvalidResource(format!(
                    "attribute {} has stride {} but the layout stride is {}",
                    attribute.index, attribute.stride_bytes, stride
                )));
            }
            if attribute.offset_bytes + attribute.size_bytes() > stride {
                return Err(Error::InvalidResource(format!(
                    "attribute {} (offset {}, {} bytes) does not fit in stride {}",
                    attribute.index, attribute.offset_bytes, attribute.size_bytes(), stride
                )));
            }
            if self.attributes[..position].iter().any(|other| other.index == attribute.index) {
                return Err(Error::InvalidResource(format!(
                    "attribute index {} declared twice",
                    attribute.index
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "vertex_layout_tests.rs"]
mod tests;
