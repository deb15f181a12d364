/// Window seam
///
/// Windowing libraries deliver input through callbacks; implementations
/// buffer them and hand them out as polled events, once per frame.

use crate::error::Result;

/// Keys the render loop can react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    Enter,
    Other,
}

/// Event delivered by `Window::poll_events`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Framebuffer resized (pixels)
    Resized { width: u32, height: u32 },
    KeyPressed(Key),
    /// Close button or window manager request
    CloseRequested,
}

/// Window with a current GL context
pub trait Window {
    /// Drain the events received since the last call
    fn poll_events(&mut self) -> Vec<WindowEvent>;

    /// Present the back buffer
    fn swap_buffers(&mut self) -> Result<()>;

    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);
}
