/// GlutinWindow - winit window with a current OpenGL context
///
/// The window is created through glutin-winit so that the GL config matches
/// the window's visual. Events are collected by pumping the winit event loop
/// once per `poll_events` call instead of handing control to `run_app`.

use std::ffi::CString;
use std::fmt::Display;
use std::num::NonZeroU32;
use std::time::Duration;

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent as WinitWindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key as WinitKey, NamedKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as WinitWindow, WindowId};

use opengl_kit::glkit::{Error, Result, WindowConfig};
use opengl_kit::glkit::render::{Key, Window, WindowEvent};
use opengl_kit::{kit_error, kit_info, kit_warn};
use crate::GlowGraphicsDevice;

fn init_failure(what: &str, error: impl Display) -> Error {
    kit_error!("glkit::glutin", "Failed to create {}: {}", what, error);
    Error::ContextInitFailure(format!("{}: {}", what, error))
}

/// Config with the most samples (the first one wins ties)
pub(crate) fn pick_config<C>(configs: impl Iterator<Item = C>, samples: impl Fn(&C) -> u8) -> Option<C> {
    configs.reduce(|best, config| if samples(&config) > samples(&best) { config } else { best })
}

pub(crate) fn map_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(NamedKey::Escape) => Key::Escape,
        WinitKey::Named(NamedKey::Space) => Key::Space,
        WinitKey::Named(NamedKey::Enter) => Key::Enter,
        _ => Key::Other,
    }
}

/// Collects window events during one pump of the event loop
struct EventCollector {
    window_id: WindowId,
    events: Vec<WindowEvent>,
}

impl ApplicationHandler for EventCollector {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WinitWindowEvent) {
        if window_id != self.window_id {
            return;
        }
        match event {
            WinitWindowEvent::Resized(size) => {
                self.events.push(WindowEvent::Resized { width: size.width, height: size.height });
            }
            WinitWindowEvent::CloseRequested => self.events.push(WindowEvent::CloseRequested),
            WinitWindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                self.events.push(WindowEvent::KeyPressed(map_key(&event.logical_key)));
            }
            _ => {}
        }
    }
}

/// winit window + glutin surface and context
pub struct GlutinWindow {
    // Fields drop in order: GL surface and context before the window
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: WinitWindow,
    event_loop: EventLoop<()>,
}

impl GlutinWindow {
    /// Open a window and make a GL context current on this thread
    ///
    /// Returns the window and a device bound to its context.
    ///
    /// # Errors
    ///
    /// Returns `Error::ContextInitFailure` if the event loop, window, GL
    /// config, context or surface cannot be created.
    #[allow(deprecated)]
    pub fn new(config: &WindowConfig) -> Result<(GlutinWindow, GlowGraphicsDevice)> {
        let event_loop = EventLoop::new().map_err(|e| init_failure("event loop", e))?;
        let window_attributes = WinitWindow::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));
        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                // find_configs reports an empty match as an error before the
                // picker runs, so there is always a config to return here
                pick_config(configs, |config| config.num_samples())
                    .expect("glutin offered an empty GL config list")
            })
            .map_err(|e| init_failure("GL display", e))?;
        let window = window.ok_or_else(|| init_failure("window", "display builder returned no window"))?;

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| init_failure("window handle", e))?
            .as_raw();

        let (major, minor) = config.gl_version;
        let mut context_builder = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))));
        if config.core_profile {
            context_builder = context_builder.with_profile(GlProfile::Core);
        }
        let context_attributes = context_builder.build(Some(raw_window_handle));

        let gl_display = gl_config.display();
        let not_current_context = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| init_failure(&format!("OpenGL {}.{} context", major, minor), e))?;

        let size = window.inner_size();
        let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN),
        );
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| init_failure("window surface", e))?;
        let gl_context = not_current_context
            .make_current(&gl_surface)
            .map_err(|e| init_failure("current context", e))?;

        if let Err(err) = gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN)) {
            kit_warn!("glkit::glutin", "VSync unavailable: {}", err);
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| match CString::new(symbol) {
                Ok(symbol) => gl_display.get_proc_address(&symbol) as *const _,
                Err(_) => std::ptr::null(),
            })
        };
        let device = GlowGraphicsDevice::new(gl);
        kit_info!(
            "glkit::glutin",
            "Window '{}' ready ({}x{}, {})",
            config.title,
            size.width,
            size.height,
            device.version_string()
        );

        Ok((
            GlutinWindow {
                gl_surface,
                gl_context,
                window,
                event_loop,
            },
            device,
        ))
    }

    /// Underlying winit window
    pub fn winit_window(&self) -> &WinitWindow {
        &self.window
    }
}

impl Window for GlutinWindow {
    fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut collector = EventCollector {
            window_id: self.window.id(),
            events: Vec::new(),
        };
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut collector) {
            kit_info!("glkit::glutin", "Event loop exited with code {}", code);
            collector.events.push(WindowEvent::CloseRequested);
        }

        for event in &collector.events {
            if let WindowEvent::Resized { width, height } = *event {
                if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
                    self.gl_surface.resize(&self.gl_context, width, height);
                }
            }
        }

        collector.events
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .map_err(|e| Error::BackendError(format!("swap buffers failed: {}", e)))
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }
}

#[cfg(test)]
#[path = "glutin_window_tests.rs"]
mod tests;
