//! GPU resource management
//!
//! Vertex layouts, vertex array / buffer sets and 2D textures.

mod vertex_layout;
mod resource_set;
mod texture;

pub use vertex_layout::{VertexLayout, VertexLayoutAttribute, ComponentType};
pub use resource_set::{GpuResourceSet, DrawCount};
pub use texture::{Texture, TextureLoader, mip_level_count};
