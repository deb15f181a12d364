/*!
# OpenGL Kit - glow device backend

OpenGL implementation of the OpenGL Kit device and window traits.

This crate provides `GlowGraphicsDevice`, which implements
`opengl_kit::glkit::GraphicsDevice` on top of the `glow` bindings, and
`GlutinWindow`, which creates a winit window with a current GL context
through glutin and implements `opengl_kit::glkit::render::Window`.
*/

// glow implementation modules
mod glow_device;
mod glutin_window;

pub use glow_device::GlowGraphicsDevice;
pub use glutin_window::GlutinWindow;

/// Namespace mirroring `opengl_kit::glkit`
pub mod glkit {
    pub use crate::glow_device::GlowGraphicsDevice;
    pub use crate::glutin_window::GlutinWindow;
}
