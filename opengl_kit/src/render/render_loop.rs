/// Render loop controller
///
/// Drives the per-frame sequence: poll events, update, clear, draw, present.
/// Termination is cooperative: a close request (termination key or window
/// close) is honored at the top of the next iteration, which releases the
/// scene.

use std::time::{Duration, Instant};
use crate::config::Config;
use crate::device::{GraphicsDevice, ClearMask, PolygonMode};
use crate::error::Result;
use crate::render::{Key, Scene, Window, WindowEvent};

/// Lifecycle of the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// `start` not called yet
    Uninitialized,
    /// Presenting frames
    Running,
    /// Scene released, no more frames
    Terminating,
}

/// Timing passed to the per-frame update hook
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Index of the frame being prepared (0 for the first frame)
    pub frame_index: u64,
    /// Time since `start`
    pub elapsed: Duration,
    /// Time since the previous frame
    pub delta: Duration,
}

impl FrameInfo {
    /// Elapsed time in seconds, for animating uniforms
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// Per-frame controller
#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    clear_color: [f32; 4],
    wireframe: bool,
    termination_key: Key,
    close_requested: bool,
    frame_count: u64,
    started_at: Option<Instant>,
    last_frame_at: Option<Instant>,
}

impl RenderLoop {
    /// Create an uninitialized loop using the configured clear color and
    /// polygon mode; Escape terminates
    pub fn new(config: &Config) -> Self {
        Self {
            state: LoopState::Uninitialized,
            clear_color: config.clear_color,
            wireframe: config.wireframe,
            termination_key: Key::Escape,
            close_requested: false,
            frame_count: 0,
            started_at: None,
            last_frame_at: None,
        }
    }

    pub fn with_termination_key(mut self, key: Key) -> Self {
        self.termination_key = key;
        self
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of presented frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_close_requested(&self) -> bool {
        self.close_requested
    }

    /// Ask the loop to terminate at the next iteration
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Set the initial viewport and enter the running state
    pub fn start(&mut self, device: &mut dyn GraphicsDevice, window: &dyn Window) {
        if self.state != LoopState::Uninitialized {
            crate::kit_warn!("glkit::RenderLoop", "start called in state {:?}, ignored", self.state);
            return;
        }
        let (width, height) = window.framebuffer_size();
        device.viewport(0, 0, width as i32, height as i32);

        let now = Instant::now();
        self.started_at = Some(now);
        self.last_frame_at = Some(now);
        self.state = LoopState::Running;
        crate::kit_info!("glkit::RenderLoop", "Render loop started ({}x{})", width, height);
    }

    /// Run one iteration
    ///
    /// Returns the state after the iteration. When a close was requested,
    /// the scene is released and `LoopState::Terminating` returned without
    /// drawing.
    ///
    /// # Errors
    ///
    /// Fails if called before `start`, or if presenting fails. A failed
    /// present releases the scene and leaves the loop terminating.
    pub fn tick<F>(
        &mut self,
        device: &mut dyn GraphicsDevice,
        window: &mut dyn Window,
        scene: &mut Scene,
        update: &mut F,
    ) -> Result<LoopState>
    where
        F: FnMut(&mut dyn GraphicsDevice, &mut Scene, &FrameInfo),
    {
        match self.state {
            LoopState::Uninitialized => {
                crate::kit_bail!("glkit::RenderLoop", "tick called before start");
            }
            LoopState::Terminating => return Ok(LoopState::Terminating),
            LoopState::Running => {}
        }

        if self.close_requested {
            self.state = LoopState::Terminating;
            std::mem::take(scene).release(device);
            crate::kit_info!("glkit::RenderLoop", "Render loop terminated after {} frames", self.frame_count);
            return Ok(LoopState::Terminating);
        }

        for event in window.poll_events() {
            self.handle_event(device, event);
        }

        let now = Instant::now();
        let started_at = *self.started_at.get_or_insert(now);
        let last_frame_at = self.last_frame_at.replace(now).unwrap_or(now);
        let frame = FrameInfo {
            frame_index: self.frame_count,
            elapsed: now.duration_since(started_at),
            delta: now.duration_since(last_frame_at),
        };
        update(device, scene, &frame);

        device.clear_color(self.clear_color);
        device.clear(ClearMask::COLOR);
        if self.wireframe {
            device.polygon_mode(PolygonMode::Line);
        }

        scene.render(device);
        if let Err(err) = window.swap_buffers() {
            self.state = LoopState::Terminating;
            std::mem::take(scene).release(device);
            crate::kit_error!("glkit::RenderLoop", "Present failed, scene released: {}", err);
            return Err(err);
        }

        self.frame_count += 1;
        crate::kit_trace!("glkit::RenderLoop", "Frame {} presented", frame.frame_index);
        Ok(LoopState::Running)
    }

    /// Start if needed and tick until terminated
    ///
    /// Returns the number of presented frames.
    pub fn run<F>(
        &mut self,
        device: &mut dyn GraphicsDevice,
        window: &mut dyn Window,
        scene: &mut Scene,
        mut update: F,
    ) -> Result<u64>
    where
        F: FnMut(&mut dyn GraphicsDevice, &mut Scene, &FrameInfo),
    {
        if self.state == LoopState::Uninitialized {
            self.start(device, window);
        }
        while self.tick(device, window, scene, &mut update)? == LoopState::Running {}
        Ok(self.frame_count)
    }

    fn handle_event(&mut self, device: &mut dyn GraphicsDevice, event: WindowEvent) {
        match event {
            WindowEvent::Resized { width, height } => {
                // Minimized windows report 0x0
                if width > 0 && height > 0 {
                    device.viewport(0, 0, width as i32, height as i32);
                }
            }
            WindowEvent::KeyPressed(key) if key == self.termination_key => {
                crate::kit_debug!("glkit::RenderLoop", "Termination key {:?} pressed", key);
                self.close_requested = true;
            }
            WindowEvent::KeyPressed(_) => {}
            WindowEvent::CloseRequested => {
                self.close_requested = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "render_loop_tests.rs"]
mod tests;
