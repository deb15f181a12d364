//! Per-frame orchestration
//!
//! The `Window` seam (events + presentation), the `Scene` owning everything a
//! frame draws, and the `RenderLoop` controller.

mod window;
mod scene;
mod render_loop;

pub use window::{Window, WindowEvent, Key};
pub use scene::{Scene, DrawCommand, ProgramId, ResourceSetId, TextureId};
pub use render_loop::{RenderLoop, LoopState, FrameInfo};

// Scripted window for tests (no display required)
#[cfg(test)]
pub mod mock_window;
